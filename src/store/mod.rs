//! Store Module
//!
//! Persistence seam for the companies table. Every method maps to exactly
//! one statement; a point operation that touches no row reports `None`
//! (or `false`) instead of an error so the caller decides what that means.

mod memory;
mod pool;
mod postgres;
mod schema;


use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Company, CompanySummary, CreateCompanyRequest, UpdateCompanyRequest};

pub use memory::MemoryCompanyStore;
pub use pool::create_pool;
pub use postgres::PgCompanyStore;
pub use schema::ensure_schema;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// CRUD access to the companies table.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// All companies as `(code, name)`, ascending by name.
    async fn list(&self) -> StoreResult<Vec<CompanySummary>>;

    /// The company with exactly this code.
    async fn get(&self, code: &str) -> StoreResult<Option<Company>>;

    /// Inserts the given values verbatim and returns the stored row.
    async fn create(&self, new: CreateCompanyRequest) -> StoreResult<Company>;

    /// Overwrites name and description of the matching row.
    async fn update(
        &self,
        code: &str,
        changes: UpdateCompanyRequest,
    ) -> StoreResult<Option<Company>>;

    /// Removes the matching row, returning whether one existed.
    async fn delete(&self, code: &str) -> StoreResult<bool>;
}
