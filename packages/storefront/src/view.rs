use std::fmt;

use cosmwasm_schema::cw_serde;

use crate::api::{CollectionMetadata, UserWithAssets};
use crate::eligibility::Eligibility;
use crate::fetch::Loader;

/// Shown when neither an owned asset nor the collection provides an image
pub const DEFAULT_HEADING_IMAGE: &str = "logo.svg";

pub const NO_SALE_MESSAGE: &str = "There is no qualified token sale planned. Stay tuned!";
pub const STARTING_SOON_MESSAGE: &str = "Sale will be starting soon. Please check back later.";

const SUCCESS_DURATION_MS: u64 = 5000;
const FAILURE_DURATION_MS: u64 = 9000;

#[derive(Clone, Debug, PartialEq)]
pub enum ButtonLabel {
    SoldOut,
    MintFree,
    /// formatted price of the selected quantity
    Mint(String),
    Checking,
    WalletLimitReached,
    NotAvailable,
}

impl ButtonLabel {
    pub fn from_eligibility(e: &Eligibility) -> Self {
        if e.is_sold_out {
            return ButtonLabel::SoldOut;
        }
        if e.can_claim {
            return match &e.price {
                Some(price) if !price.is_free() => ButtonLabel::Mint(price.to_string()),
                _ => ButtonLabel::MintFree,
            };
        }
        if e.is_loading {
            ButtonLabel::Checking
        } else if e.avail_to_mint_by_user == 0 {
            ButtonLabel::WalletLimitReached
        } else {
            ButtonLabel::NotAvailable
        }
    }
}

impl fmt::Display for ButtonLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ButtonLabel::SoldOut => write!(f, "Sold Out"),
            ButtonLabel::MintFree => write!(f, "Mint (Free)"),
            ButtonLabel::Mint(price) => write!(f, "Mint ({})", price),
            ButtonLabel::Checking => write!(f, "Checking..."),
            ButtonLabel::WalletLimitReached => write!(f, "Wallet limit reached"),
            ButtonLabel::NotAvailable => write!(f, "Minting not available"),
        }
    }
}

/// The quantity stepper and mint button
#[derive(Clone, Debug, PartialEq)]
pub struct MintPanel {
    pub quantity: u32,
    pub can_decrement: bool,
    pub can_increment: bool,
    pub label: ButtonLabel,
    pub enabled: bool,
    /// show the spinner instead of the label
    pub loading: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stage {
    NoSale,
    StartingSoon,
    SoldOut,
    Mint(MintPanel),
}

impl Stage {
    pub fn from_eligibility(e: &Eligibility) -> Self {
        if e.sale_not_ready {
            Stage::NoSale
        } else if e.sale_starting_soon {
            Stage::StartingSoon
        } else if e.is_sold_out && !e.is_loading {
            Stage::SoldOut
        } else {
            Stage::Mint(MintPanel {
                quantity: e.quantity.get(),
                can_decrement: e.quantity.can_decrement(e.is_sold_out),
                can_increment: e
                    .quantity
                    .can_increment(e.avail_to_mint_by_user, e.is_sold_out),
                label: ButtonLabel::from_eligibility(e),
                enabled: e.can_claim && !e.is_loading,
                loading: e.is_loading,
            })
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Stage::NoSale => Some(NO_SALE_MESSAGE),
            Stage::StartingSoon => Some(STARTING_SOON_MESSAGE),
            Stage::SoldOut => Some("Sold Out"),
            Stage::Mint(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    pub name: Option<String>,
    pub description: Option<String>,
    /// render placeholders for name and description
    pub loading: bool,
    pub image: String,
}

impl Header {
    pub fn new(collection: &Loader<CollectionMetadata>, user: &Loader<UserWithAssets>) -> Self {
        let metadata = collection.data();
        let image = user
            .data()
            .and_then(UserWithAssets::first_asset)
            .map(|asset| asset.image.as_str())
            .filter(|image| !image.is_empty())
            .or_else(|| metadata.and_then(|m| m.image.as_deref()))
            .unwrap_or(DEFAULT_HEADING_IMAGE);
        Header {
            name: metadata.map(|m| m.name.clone()),
            description: metadata.and_then(|m| m.description.clone()),
            loading: collection.is_loading(),
            image: image.to_string(),
        }
    }
}

/// "<minted> / <available> minted" plus the countdown
#[derive(Clone, Debug, PartialEq)]
pub struct SaleSummary {
    pub minted: String,
    pub available: String,
    pub time_remaining: Option<String>,
    /// render a placeholder instead of the counters
    pub loading: bool,
}

impl SaleSummary {
    pub fn new(e: &Eligibility) -> Self {
        SaleSummary {
            minted: e.minted_str(),
            available: e.total_str(),
            time_remaining: e.time_remaining.clone(),
            loading: e.is_loading,
        }
    }
}

impl fmt::Display for SaleSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} / {} minted", self.minted, self.available)?;
        if let Some(time) = &self.time_remaining {
            write!(f, " {}", time)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StorefrontView {
    pub header: Header,
    pub summary: SaleSummary,
    pub stage: Stage,
}

#[cw_serde]
pub enum NotificationVariant {
    Success,
    Destructive,
}

/// Transient toast shown after a mint attempt
#[cw_serde]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub duration_ms: u64,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn minted() -> Self {
        Notification {
            title: "Successfully minted".to_string(),
            description: "The NFT has been transferred to your wallet".to_string(),
            duration_ms: SUCCESS_DURATION_MS,
            variant: NotificationVariant::Success,
        }
    }

    pub fn mint_failed(reason: impl fmt::Display) -> Self {
        Notification {
            title: "Failed to mint drop".to_string(),
            description: reason.to_string(),
            duration_ms: FAILURE_DURATION_MS,
            variant: NotificationVariant::Destructive,
        }
    }
}
