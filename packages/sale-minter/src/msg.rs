use cosmwasm_schema::cw_serde;

#[cw_serde]
pub enum SaleMinterExecuteMsg {
    /// Mint `quantity` tokens of the active sale to the sender. The attached funds
    /// must cover the sale price for the whole quantity.
    Mint { quantity: u32 },
}
