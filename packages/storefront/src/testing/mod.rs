mod loaders;
mod mock_backend;
mod mock_querier;

pub use loaders::{failed_loader, loading_loader, ready_loader};
pub use mock_backend::{
    asset_json, collection_json, sale_json, sale_json_at, user_json, MockBackend,
};
pub use mock_querier::{mock_sale_minter_querier, sale_minter_version};
