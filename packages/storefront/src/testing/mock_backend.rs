use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use cosmwasm_std::Binary;

use crate::api::Transport;
use crate::error::TransportError;

/// In-memory backend keyed by request URL. Unknown URLs fail like an unreachable host.
#[derive(Default)]
pub struct MockBackend {
    routes: HashMap<String, Result<Binary, TransportError>>,
    requests: RefCell<Vec<String>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&mut self, url: impl Into<String>, body: impl Into<String>) {
        let body: String = body.into();
        self.routes
            .insert(url.into(), Ok(Binary::from(body.into_bytes())));
    }

    pub fn fail(&mut self, url: impl Into<String>, err: TransportError) {
        self.routes.insert(url.into(), Err(err));
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Transport for MockBackend {
    fn get(&self, url: &str) -> Result<Binary, TransportError> {
        self.requests.borrow_mut().push(url.to_string());
        self.routes
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(TransportError::Network(format!("no route to {}", url))))
    }
}

/// An active sale that started yesterday and ends in ten days
pub fn sale_json(mint_supply: u64, minted_count: u64, price: &str, per_wallet_limit: u64) -> String {
    let now = Utc::now();
    sale_json_at(
        now - Duration::days(1),
        now + Duration::days(10),
        mint_supply,
        minted_count,
        price,
        per_wallet_limit,
    )
}

pub fn sale_json_at(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    mint_supply: u64,
    minted_count: u64,
    price: &str,
    per_wallet_limit: u64,
) -> String {
    format!(
        r#"{{"id":"sale-1","startTime":"{}","endTime":"{}","saleType":"public","mintSupply":{},"price":{},"currencySymbol":"IMX","currencyDecimals":6,"perWalletLimit":{},"mintedCount":{},"active":true,"collectionAddress":"collection"}}"#,
        start.to_rfc3339(),
        end.to_rfc3339(),
        mint_supply,
        price,
        per_wallet_limit,
        minted_count,
    )
}

pub fn collection_json(name: &str, image: Option<&str>) -> String {
    match image {
        Some(image) => format!(
            r#"{{"name":"{}","description":"A magical collection","image":"{}"}}"#,
            name, image
        ),
        None => format!(r#"{{"name":"{}"}}"#, name),
    }
}

pub fn asset_json(token_id: &str, image: &str) -> String {
    format!(
        r#"{{"tokenId":"{}","minted":true,"ownerAddress":"buyer","collectionAddress":"collection","name":"Token {}","description":"","image":"{}","external_url":"","attributes":[]}}"#,
        token_id, token_id, image
    )
}

pub fn user_json(wallet: &str, assets: &[String]) -> String {
    format!(
        r#"{{"id":"user-1","walletAddress":"{}","assets":[{}]}}"#,
        wallet,
        assets.join(",")
    )
}
