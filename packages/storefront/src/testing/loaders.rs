use cosmwasm_std::Binary;
use serde::de::DeserializeOwned;

use crate::error::TransportError;
use crate::fetch::Loader;

/// A loader that already received `json`
pub fn ready_loader<T: DeserializeOwned>(json: &str) -> Loader<T> {
    let mut loader = Loader::new();
    if let Some(ticket) = loader.watch(Some("test".to_string())) {
        loader.resolve(&ticket, Ok(Binary::from(json.as_bytes())));
    }
    loader
}

pub fn failed_loader<T: DeserializeOwned>() -> Loader<T> {
    let mut loader = Loader::new();
    if let Some(ticket) = loader.watch(Some("test".to_string())) {
        loader.resolve(&ticket, Err(TransportError::Status { status: 404 }));
    }
    loader
}

pub fn loading_loader<T: DeserializeOwned>() -> Loader<T> {
    let mut loader = Loader::new();
    loader.watch(Some("test".to_string()));
    loader
}
