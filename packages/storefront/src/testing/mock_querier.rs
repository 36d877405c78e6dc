use cosmwasm_std::testing::MockQuerier;
use cosmwasm_std::{to_json_binary, ContractResult, SystemError, SystemResult, WasmQuery};
use cw2::ContractVersion;

/// Querier answering cw2 raw queries for `contract_addr` with the given version.
/// Every other contract is reported as missing.
pub fn mock_sale_minter_querier(contract_addr: &str, version: ContractVersion) -> MockQuerier {
    let mut querier = MockQuerier::new(&[]);
    let contract_addr = contract_addr.to_string();
    querier.update_wasm(move |query| match query {
        WasmQuery::Raw { contract_addr: addr, .. } if *addr == contract_addr => {
            SystemResult::Ok(ContractResult::from(to_json_binary(&version)))
        }
        WasmQuery::Raw { contract_addr, .. }
        | WasmQuery::Smart { contract_addr, .. }
        | WasmQuery::ContractInfo { contract_addr } => {
            SystemResult::Err(SystemError::NoSuchContract {
                addr: contract_addr.clone(),
            })
        }
        _ => SystemResult::Err(SystemError::Unknown {}),
    });
    querier
}

pub fn sale_minter_version() -> ContractVersion {
    ContractVersion {
        contract: "crates.io:sale-minter".to_string(),
        version: "0.1.0".to_string(),
    }
}
