//! Biztime - a small REST API over a companies table
//!
//! Exposes list, get, create, update and delete for companies, each backed
//! by a single parameterized statement against Postgres.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use store::{CompanyStore, MemoryCompanyStore, PgCompanyStore};
