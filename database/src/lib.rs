pub mod config;
pub mod error;
pub mod models;
pub mod schema;
pub mod seed;
pub mod store;

pub use config::DatabaseConfig;
pub use error::StoreError;
pub use models::{
    Brand, Game, GameDetail, Player, Round, RoundDetail, RoundRole, RoundRoleDetail, RoundUpdate,
};
pub use schema::create_schema;
pub use seed::seed_brands;
pub use store::GameStore;
