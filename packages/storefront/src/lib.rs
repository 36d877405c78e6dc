pub mod api;
pub mod config;
pub mod eligibility;
mod error;
pub mod fetch;
pub mod price;
pub mod quantity;
pub mod storefront;
pub mod view;

#[cfg(test)]
mod multitest;
#[cfg(test)]
mod testing;

pub use crate::config::{ConfigDefaults, PrimaryColor, QueryParams, StorefrontConfig, Theme};
pub use crate::eligibility::{Eligibility, EligibilityInputs};
pub use crate::error::{ConfigError, FetchError, StorefrontError, TransportError};
pub use crate::fetch::{Loader, Ticket};
pub use crate::storefront::{PendingRequest, Slot, Storefront};
pub use crate::view::{ButtonLabel, Notification, Stage, StorefrontView};
