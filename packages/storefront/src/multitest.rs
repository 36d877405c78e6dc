use assert_matches::assert_matches;
use chrono::Utc;

use crate::testing::sale_json;
use crate::view::{ButtonLabel, NotificationVariant, Stage};
use crate::StorefrontError;

use self::sale_minter::{CONTRACT_NAME, CONTRACT_VERSION};
use self::suite::{Suite, SuiteBuilder};


#[test]
fn connects_to_sale_minter() {
    let mut suite = Suite::new();

    let version = suite.open_page().unwrap();
    assert_eq!(version.contract, CONTRACT_NAME);
    assert_eq!(version.version, CONTRACT_VERSION);

    let info = suite.contract_info().unwrap();
    assert_eq!(info.code_id, suite.code_id());
    assert_eq!(info.creator.to_string(), suite.owner().to_string());
    assert_eq!(info.admin, None);

    let view = suite.view(Utc::now()).unwrap();
    assert_eq!(view.header.name.as_deref(), Some("Brooms"));
    assert_matches!(view.stage, Stage::Mint(panel) if panel.enabled && !panel.loading);
}

#[test]
fn mint_pays_for_selected_quantity() {
    let mut suite = Suite::new();
    suite.open_page().unwrap();
    let now = Utc::now();

    assert_eq!(suite.increment(now).unwrap(), 2);
    let result = suite.mint(now);
    assert_eq!(suite.notify(&result).variant, NotificationVariant::Success);
    result.unwrap();

    let buyer = suite.buyer().clone();
    let minter = suite.minter().clone();
    assert_eq!(suite.balance(&buyer).unwrap(), 940_000);
    assert_eq!(suite.balance(&minter).unwrap(), 60_000);
    assert_eq!(suite.minted_by(&buyer).unwrap(), 2);
}

#[test]
fn free_mint_sends_no_funds() {
    let mut suite = SuiteBuilder::new()
        .with_unit_price(0)
        .with_sale(sale_json(100, 0, "0", 5))
        .build();
    suite.open_page().unwrap();
    let now = Utc::now();

    assert_matches!(
        suite.view(now).unwrap().stage,
        Stage::Mint(panel) if panel.label == ButtonLabel::MintFree
    );
    suite.mint(now).unwrap();

    let buyer = suite.buyer().clone();
    assert_eq!(suite.balance(&buyer).unwrap(), 1_000_000);
    assert_eq!(suite.minted_by(&buyer).unwrap(), 1);
}

#[test]
fn rejected_payment_is_reported() {
    // backend advertises 0.03 while the contract wants 0.05
    let mut suite = SuiteBuilder::new().with_unit_price(50_000).build();
    suite.open_page().unwrap();

    let result = suite.mint(Utc::now());
    let notification = suite.notify(&result);
    assert_eq!(notification.variant, NotificationVariant::Destructive);
    assert_eq!(notification.duration_ms, 9000);

    let err = result.unwrap_err();
    assert!(format!("{:#}", err).contains("Wrong payment"));

    let buyer = suite.buyer().clone();
    assert_eq!(suite.balance(&buyer).unwrap(), 1_000_000);
    assert_eq!(suite.minted_by(&buyer).unwrap(), 0);
}

#[test]
fn chain_supply_wins_over_backend() {
    let mut suite = SuiteBuilder::new().with_supply(1).build();
    suite.open_page().unwrap();
    let now = Utc::now();

    suite.increment(now).unwrap();
    let err = suite.mint(now).unwrap_err();
    assert!(format!("{:#}", err).contains("Sold out"));
}

#[test]
fn wallet_limit_blocks_before_submitting() {
    let mut suite = SuiteBuilder::new().with_owned(5).build();
    suite.open_page().unwrap();

    let err = suite.mint(Utc::now()).unwrap_err();
    assert_matches!(
        err.downcast_ref::<StorefrontError>(),
        Some(StorefrontError::CannotMint { reason }) if reason == "Wallet limit reached"
    );

    let buyer = suite.buyer().clone();
    assert_eq!(suite.minted_by(&buyer).unwrap(), 0);
}

#[test]
fn nothing_to_mint_without_wallet() {
    let mut suite = Suite::new();
    let err = suite.mint(Utc::now()).unwrap_err();
    assert_matches!(
        err.downcast_ref::<StorefrontError>(),
        Some(StorefrontError::WalletNotConnected {})
    );
}
