use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

/// Failure reported by a `Transport` while talking to the backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend responded with status {status}")]
    Status { status: u16 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("{0}")]
    Transport(#[from] TransportError),

    #[error("Cannot decode response from {url}: {msg}")]
    Decode { url: String, msg: String },
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Client ID is required as a query param to use this page.")]
    MissingClientId {},

    #[error("No contract address provided")]
    MissingSaleContract {},

    #[error("No collection address provided")]
    MissingCollection {},

    #[error("Unknown theme '{0}'")]
    UnknownTheme(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum StorefrontError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("Price out of range: {0}")]
    PriceOutOfRange(String),

    #[error("Wallet not connected")]
    WalletNotConnected {},

    #[error("Sale minter contract not connected")]
    ContractNotConnected {},

    #[error("No active sale")]
    NoActiveSale {},

    #[error("Cannot mint: {reason}")]
    CannotMint { reason: String },
}
