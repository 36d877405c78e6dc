mod types;

pub use types::{AssetInfo, AttributeMetadata, CollectionMetadata, SaleInfo, UserWithAssets};

use std::fmt;

use cosmwasm_std::{Addr, Binary};
use serde::de::DeserializeOwned;

use crate::error::{FetchError, TransportError};

/// Blocking GET against the storefront backend. Implementations return the raw response
/// body for 2xx responses and map everything else to a `TransportError`.
pub trait Transport {
    fn get(&self, url: &str) -> Result<Binary, TransportError>;
}

/// The backend routes the storefront reads from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    CollectionMetadata { collection: Addr },
    /// Every sale of the collection, scheduled and active
    Sales { collection: Addr },
    /// The active sale: flagged active, inside its window, most recent start time
    ActiveSale { collection: Addr },
    UserAssets { wallet: Addr, collection: Addr },
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::CollectionMetadata { collection } => {
                format!("api/collection/{}/metadata", collection)
            }
            Endpoint::Sales { collection } => format!("api/sales?collection={}", collection),
            Endpoint::ActiveSale { collection } => format!("api/sale?collection={}", collection),
            Endpoint::UserAssets { wallet, collection } => {
                format!("api/user/{}/assets/?collection={}", wallet, collection)
            }
        }
    }

    /// Full request URL. With an empty base the path stays relative so the host
    /// can route it (e.g. through a dev-server proxy).
    pub fn url(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        if base.is_empty() {
            self.path()
        } else {
            format!("{}/{}", base, self.path())
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Decodes a JSON response body into `T`
pub fn decode_json<T: DeserializeOwned>(url: &str, body: &Binary) -> Result<T, FetchError> {
    serde_json::from_slice(body.as_slice()).map_err(|err| FetchError::Decode {
        url: url.to_string(),
        msg: err.to_string(),
    })
}

/// Single GET with JSON decoding. No retry.
pub fn fetch_json<T: DeserializeOwned, C: Transport + ?Sized>(
    transport: &C,
    url: &str,
) -> Result<T, FetchError> {
    let body = transport.get(url)?;
    decode_json(url, &body)
}
