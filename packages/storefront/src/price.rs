use std::fmt;

use cosmwasm_std::{coins, Coin, Decimal, Decimal256, Uint128, Uint256};

use crate::api::SaleInfo;
use crate::error::StorefrontError;

/// `price * quantity` expressed in base units of a currency with `decimals` places.
/// Anything below one base unit is rounded down.
pub fn to_base_units(
    price: Decimal,
    quantity: u32,
    decimals: u32,
) -> Result<Uint128, StorefrontError> {
    // atomics carry DECIMAL_PLACES fractional digits
    let total = price.atomics().checked_mul(Uint128::from(quantity))?;
    let places = Decimal::DECIMAL_PLACES;
    if decimals >= places {
        let scale = Uint128::new(10).checked_pow(decimals - places)?;
        Ok(total.checked_mul(scale)?)
    } else {
        let scale = Uint128::new(10).checked_pow(places - decimals)?;
        total
            .checked_div(scale)
            .map_err(|e| StorefrontError::PriceOutOfRange(e.to_string()))
    }
}

/// Renders base units as a major-unit decimal string without trailing zeros
pub fn format_units(amount: Uint128, decimals: u32) -> Result<String, StorefrontError> {
    let value = Decimal256::from_atomics(Uint256::from(amount), decimals)
        .map_err(|e| StorefrontError::PriceOutOfRange(e.to_string()))?;
    Ok(value.to_string())
}

/// Cost of minting a quantity from a sale
#[derive(Clone, Debug, PartialEq)]
pub struct MintPrice {
    pub unit_price: Decimal,
    pub quantity: u32,
    /// total in base units
    pub amount: Uint128,
    pub decimals: u32,
    pub symbol: String,
    formatted: String,
}

impl MintPrice {
    pub fn new(sale: &SaleInfo, quantity: u32) -> Result<Self, StorefrontError> {
        let amount = to_base_units(sale.price, quantity, sale.currency_decimals)?;
        Ok(MintPrice {
            unit_price: sale.price,
            quantity,
            amount,
            decimals: sale.currency_decimals,
            symbol: sale.currency_symbol.clone(),
            formatted: format_units(amount, sale.currency_decimals)?,
        })
    }

    /// Nothing to pay once rounded to base units. Agrees with `funds`.
    pub fn is_free(&self) -> bool {
        self.amount.is_zero()
    }

    /// Funds to attach to the mint call. A free mint attaches nothing.
    pub fn funds(&self, denom: &str) -> Vec<Coin> {
        if self.amount.is_zero() {
            vec![]
        } else {
            coins(self.amount.u128(), denom)
        }
    }
}

impl fmt::Display for MintPrice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.formatted, self.symbol)
    }
}
