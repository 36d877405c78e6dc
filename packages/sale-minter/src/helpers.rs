use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{
    to_json_binary, Addr, Coin, ContractInfoResponse, CosmosMsg, CustomQuery, QuerierWrapper,
    StdResult, WasmMsg,
};
use cw2::ContractVersion;

use crate::msg::SaleMinterExecuteMsg;

/// SaleMinterContract is a wrapper around Addr that provides helpers
/// for working with a sale-minter contract.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct SaleMinterContract(pub Addr);

impl SaleMinterContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call(&self, msg: SaleMinterExecuteMsg, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg: to_json_binary(&msg)?,
            funds,
        }
        .into())
    }

    /// Mint `quantity` tokens, paying with `funds`
    pub fn mint(&self, quantity: u32, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        self.call(SaleMinterExecuteMsg::Mint { quantity }, funds)
    }

    /*** queries ***/

    /// Reads the cw2 version the contract claims to be. This is only a hint that
    /// the address hosts something we can talk to, not a guarantee of its interface.
    pub fn contract_version<C: CustomQuery>(
        &self,
        querier: &QuerierWrapper<C>,
    ) -> StdResult<ContractVersion> {
        cw2::query_contract_info(querier, self.addr())
    }

    pub fn contract_info<C: CustomQuery>(
        &self,
        querier: &QuerierWrapper<C>,
    ) -> StdResult<ContractInfoResponse> {
        querier.query_wasm_contract_info(self.addr())
    }
}
