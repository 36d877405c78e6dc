use chrono::{DateTime, Utc};

use crate::api::{SaleInfo, UserWithAssets};
use crate::error::StorefrontError;
use crate::fetch::{FetchStatus, Loader};
use crate::price::MintPrice;
use crate::quantity::Quantity;

/// Above this many days left the countdown is shown in days, otherwise in hours
const DAYS_COUNTDOWN_THRESHOLD: i64 = 3;

/// Remaining total supply of a sale
pub fn available_to_mint(mint_supply: u64, minted_count: u64) -> u64 {
    mint_supply.saturating_sub(minted_count)
}

/// Remaining per-wallet allowance, bounded by the remaining supply
pub fn available_to_mint_by_user(per_wallet_limit: u64, user_minted: u64, available: u64) -> u64 {
    per_wallet_limit.saturating_sub(user_minted).min(available)
}

/// A sale can still be minted from: flagged active, has supply and has not ended
fn is_qualified(sale: &SaleInfo, now: DateTime<Utc>) -> bool {
    sale.active && sale.mint_supply > 0 && !sale.has_ended(now)
}

/// True when the sale list came back (or failed) and nothing in it can still be minted.
/// While the list is loading we do not know yet.
pub fn sale_not_ready(sales: &FetchStatus<Vec<SaleInfo>>, now: DateTime<Utc>) -> bool {
    match sales {
        FetchStatus::Ready(sales) => !sales.iter().any(|s| is_qualified(s, now)),
        FetchStatus::Failed(_) => true,
        FetchStatus::Idle | FetchStatus::Loading => false,
    }
}

/// True when minting opens later: either no active sale resolved while a qualified
/// sale is scheduled in the future, or the active sale itself has not started.
pub fn sale_starting_soon(
    sales: Option<&[SaleInfo]>,
    active_sale: Option<&SaleInfo>,
    active_sale_failed: bool,
    now: DateTime<Utc>,
) -> bool {
    let scheduled = sales.map_or(false, |sales| {
        active_sale_failed
            && sales
                .iter()
                .any(|s| s.active && s.mint_supply > 0 && !s.has_started(now))
    });
    scheduled || active_sale.map_or(false, |s| !s.has_started(now))
}

pub fn time_remaining(end: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (end.date_naive() - now.date_naive()).num_days();
    if days > DAYS_COUNTDOWN_THRESHOLD {
        format!("Days left: {}", days)
    } else {
        let hours = (end - now).num_hours().max(0);
        format!("Hurry, {} hours left", hours)
    }
}

/// Everything the calculator reads. Borrowed from the storefront on each render.
pub struct EligibilityInputs<'a> {
    pub sales: &'a Loader<Vec<SaleInfo>>,
    pub active_sale: &'a Loader<SaleInfo>,
    pub active_user: &'a Loader<UserWithAssets>,
    pub contract_connected: bool,
    pub quantity: Quantity,
    pub now: DateTime<Utc>,
}

/// Derived mint state. Recomputed from the latest fetch results, never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Eligibility {
    pub available_to_mint: u64,
    pub user_minted_count: u64,
    pub avail_to_mint_by_user: u64,
    pub is_sold_out: bool,
    pub can_claim: bool,
    pub sale_not_ready: bool,
    pub sale_starting_soon: bool,
    pub is_loading: bool,
    /// requested quantity clamped to what the user may still mint
    pub quantity: Quantity,
    /// cost of `quantity`, when an active sale resolved
    pub price: Option<MintPrice>,
    pub time_remaining: Option<String>,
}

impl Eligibility {
    pub fn compute(inputs: &EligibilityInputs) -> Result<Self, StorefrontError> {
        let now = inputs.now;
        let sale = inputs.active_sale.data();
        let sale_succeeded = inputs.active_sale.success();

        let available_to_mint =
            sale.map_or(0, |s| available_to_mint(s.mint_supply, s.minted_count));
        let user_minted_count = inputs
            .active_user
            .data()
            .map_or(0, UserWithAssets::minted_count);
        let avail_to_mint_by_user = available_to_mint_by_user(
            sale.map_or(0, |s| s.per_wallet_limit),
            user_minted_count,
            available_to_mint,
        );

        let is_sold_out = sale_succeeded && available_to_mint == 0;
        let can_claim = sale_succeeded && !is_sold_out && avail_to_mint_by_user > 0;

        let quantity = inputs.quantity.clamp(avail_to_mint_by_user);
        let price = sale
            .map(|s| MintPrice::new(s, quantity.get()))
            .transpose()?;
        let time_remaining = match sale {
            Some(s) if !is_sold_out => Some(time_remaining(s.end_time, now)),
            _ => None,
        };

        Ok(Eligibility {
            available_to_mint,
            user_minted_count,
            avail_to_mint_by_user,
            is_sold_out,
            can_claim,
            sale_not_ready: sale_not_ready(inputs.sales.status(), now),
            sale_starting_soon: sale_starting_soon(
                inputs.sales.data().map(Vec::as_slice),
                sale,
                inputs.active_sale.error().is_some(),
                now,
            ),
            is_loading: inputs.active_sale.is_loading()
                || inputs.active_user.is_loading()
                || !inputs.contract_connected,
            quantity,
            price,
            time_remaining,
        })
    }

    /// how many the connected wallet has minted
    pub fn minted_str(&self) -> String {
        self.user_minted_count.to_string()
    }

    /// how many are left in the sale
    pub fn total_str(&self) -> String {
        self.available_to_mint.to_string()
    }
}
