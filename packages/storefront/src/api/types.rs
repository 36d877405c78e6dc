use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use cosmwasm_std::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// A time-bounded minting campaign, as served by the backend.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaleInfo {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub sale_type: String,
    pub mint_supply: u64,
    /// Unit price in major currency units (e.g. `0.03`), not base units
    #[serde(deserialize_with = "decimal_from_number")]
    pub price: Decimal,
    pub currency_symbol: String,
    pub currency_decimals: u32,
    pub per_wallet_limit: u64,
    /// Expected to stay <= mint_supply. The backend owns that invariant.
    pub minted_count: u64,
    pub active: bool,
    pub collection_address: String,
}

impl SaleInfo {
    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        self.start_time <= now
    }

    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.end_time < now
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CollectionMetadata {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub external_link: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AttributeMetadata {
    #[serde(default)]
    pub trait_type: Option<String>,
    pub value: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
    pub token_id: String,
    pub minted: bool,
    pub owner_address: String,
    pub collection_address: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, rename = "external_url")]
    pub external_url: String,
    #[serde(default)]
    pub attributes: Vec<AttributeMetadata>,
}

/// The connected wallet's user record together with the assets it holds in the collection.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserWithAssets {
    pub id: String,
    pub wallet_address: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub wallet_type: Option<String>,
    #[serde(default)]
    pub assets: Vec<AssetInfo>,
}

impl UserWithAssets {
    pub fn minted_count(&self) -> u64 {
        self.assets.len() as u64
    }

    pub fn first_asset(&self) -> Option<&AssetInfo> {
        self.assets.first()
    }
}

/// The backend stores prices as plain JSON numbers; accept those as well as decimal strings.
fn decimal_from_number<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    struct DecimalVisitor;

    impl<'de> Visitor<'de> for DecimalVisitor {
        type Value = Decimal;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative decimal number or string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
            Decimal::from_atomics(v, 0).map_err(E::custom)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
            let v = u64::try_from(v).map_err(|_| E::custom("price must not be negative"))?;
            self.visit_u64(v)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
            if !v.is_finite() || v < 0.0 {
                return Err(E::custom(format!("invalid price {}", v)));
            }
            // Display of f64 never uses exponent notation
            Decimal::from_str(&v.to_string()).map_err(E::custom)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
            Decimal::from_str(v).map_err(E::custom)
        }
    }

    deserializer.deserialize_any(DecimalVisitor)
}
