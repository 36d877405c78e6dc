use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::str::FromStr;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api};

use crate::error::ConfigError;

pub const CLIENT_ID_PARAM: &str = "clientId";
pub const COLLECTION_PARAM: &str = "contract";
pub const SALE_CONTRACT_PARAM: &str = "salecontract";
pub const PRIMARY_COLOR_PARAM: &str = "primaryColor";
pub const THEME_PARAM: &str = "theme";
pub const DENOM_PARAM: &str = "denom";

const DEFAULT_PRIMARY_COLOR: &str = "blue";

/// Named palette accepted as `primaryColor`. Anything else is passed through as a raw CSS value.
const PALETTE: [(&str, &str); 9] = [
    ("purple", "#7C3AED"),
    ("blue", "#3B82F6"),
    ("orange", "#F59E0B"),
    ("pink", "#EC4899"),
    ("green", "#10B981"),
    ("red", "#EF4444"),
    ("teal", "#14B8A6"),
    ("cyan", "#22D3EE"),
    ("yellow", "#FBBF24"),
];

/// Decoded URL query parameters. Later occurrences of a key win.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Parses `?a=b&c=d` as `application/x-www-form-urlencoded`. The leading `?` is
    /// optional. Malformed escapes are kept verbatim.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes()).into_owned().collect()
    }

    /// Returns the value of `key`, treating an empty value as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        QueryParams(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cw_serde]
#[derive(Copy, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
    /// Follow the host's color-scheme preference
    System,
}

impl Theme {
    /// Resolves `System` against the host preference. Never returns `System`.
    pub fn resolve(self, prefers_dark: bool) -> Theme {
        match self {
            Theme::System if prefers_dark => Theme::Dark,
            Theme::System => Theme::Light,
            theme => theme,
        }
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(ConfigError::UnknownTheme(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
            Theme::System => write!(f, "system"),
        }
    }
}

#[cw_serde]
pub enum PrimaryColor {
    Named(String),
    Custom(String),
}

impl PrimaryColor {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if PALETTE.iter().any(|(name, _)| *name == value) {
            PrimaryColor::Named(value)
        } else {
            PrimaryColor::Custom(value)
        }
    }

    /// The value to put in a `background-color` declaration
    pub fn css_value(&self) -> &str {
        match self {
            PrimaryColor::Named(name) => PALETTE
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, hex)| *hex)
                .unwrap_or(name.as_str()),
            PrimaryColor::Custom(value) => value,
        }
    }
}

/// Values baked in at build/deploy time. Query parameters override them.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigDefaults {
    pub client_id: Option<String>,
    pub api_base_url: String,
    pub collection_contract: Option<String>,
    pub sale_contract: Option<String>,
    pub primary_color: String,
    pub theme: Theme,
    pub payment_denom: Option<String>,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        ConfigDefaults {
            client_id: None,
            api_base_url: String::new(),
            collection_contract: None,
            sale_contract: None,
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            theme: Theme::Dark,
            payment_denom: None,
        }
    }
}

impl ConfigDefaults {
    pub fn from_env() -> Result<Self, ConfigError> {
        let var = |name: &str| env::var(name).ok().filter(|v| !v.is_empty());
        let defaults = ConfigDefaults::default();
        Ok(ConfigDefaults {
            client_id: var("STOREFRONT_CLIENT_ID"),
            api_base_url: var("STOREFRONT_API_BASE_URL").unwrap_or_default(),
            collection_contract: var("STOREFRONT_COLLECTION_CONTRACT"),
            sale_contract: var("STOREFRONT_SALE_CONTRACT"),
            primary_color: var("STOREFRONT_PRIMARY_COLOR").unwrap_or(defaults.primary_color),
            theme: match var("STOREFRONT_THEME") {
                Some(theme) => theme.parse()?,
                None => defaults.theme,
            },
            payment_denom: var("STOREFRONT_PAYMENT_DENOM"),
        })
    }
}

/// Immutable storefront configuration, populated once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct StorefrontConfig {
    pub client_id: String,
    pub api_base_url: String,
    /// NFT collection the sale mints into
    pub collection: Addr,
    /// sale-minter contract receiving the mint call
    pub sale_contract: Addr,
    pub primary_color: PrimaryColor,
    pub theme: Theme,
    /// Denom the mint payment is attached in. Falls back to the sale's currency symbol.
    pub payment_denom: Option<String>,
}

impl StorefrontConfig {
    pub fn load(
        api: &dyn Api,
        defaults: &ConfigDefaults,
        params: &QueryParams,
    ) -> Result<Self, ConfigError> {
        let pick = |key: &str, default: Option<&String>| {
            params
                .get(key)
                .map(str::to_string)
                .or_else(|| default.filter(|v| !v.is_empty()).cloned())
        };

        let client_id =
            pick(CLIENT_ID_PARAM, defaults.client_id.as_ref()).ok_or(ConfigError::MissingClientId {})?;
        let sale_contract = pick(SALE_CONTRACT_PARAM, defaults.sale_contract.as_ref())
            .ok_or(ConfigError::MissingSaleContract {})?;
        let collection = pick(COLLECTION_PARAM, defaults.collection_contract.as_ref())
            .ok_or(ConfigError::MissingCollection {})?;

        let theme = match params.get(THEME_PARAM) {
            Some(theme) => theme.parse()?,
            None => defaults.theme,
        };
        let primary_color = PrimaryColor::new(
            params
                .get(PRIMARY_COLOR_PARAM)
                .unwrap_or(defaults.primary_color.as_str()),
        );

        Ok(StorefrontConfig {
            client_id,
            api_base_url: defaults.api_base_url.clone(),
            collection: api.addr_validate(&collection.to_lowercase())?,
            sale_contract: api.addr_validate(&sale_contract.to_lowercase())?,
            primary_color,
            theme,
            payment_denom: pick(DENOM_PARAM, defaults.payment_denom.as_ref()),
        })
    }
}
