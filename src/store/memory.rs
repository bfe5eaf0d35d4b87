//! In-memory company store
//!
//! Stands in for Postgres in tests and when no `DATABASE_URL` is configured.
//! Reproduces the observable behavior of the SQL statements, including the
//! constraint failures for NULL columns and duplicate codes.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CompanyStore, StoreResult};
use crate::error::StoreError;
use crate::models::{Company, CompanySummary, CreateCompanyRequest, UpdateCompanyRequest};

// == Memory Company Store ==
/// Company rows keyed by code, guarded by a single lock.
#[derive(Debug, Default)]
pub struct MemoryCompanyStore {
    rows: RwLock<BTreeMap<String, Company>>,
}

impl MemoryCompanyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored companies.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Returns true if no company is stored.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl CompanyStore for MemoryCompanyStore {
    async fn list(&self) -> StoreResult<Vec<CompanySummary>> {
        let rows = self.rows.read().await;
        let mut companies: Vec<CompanySummary> = rows.values().map(CompanySummary::from).collect();
        // Stable sort keeps ties in code order
        companies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(companies)
    }

    async fn get(&self, code: &str) -> StoreResult<Option<Company>> {
        Ok(self.rows.read().await.get(code).cloned())
    }

    async fn create(&self, new: CreateCompanyRequest) -> StoreResult<Company> {
        let code = new.code.ok_or(StoreError::NotNullViolation("code"))?;
        let name = new.name.ok_or(StoreError::NotNullViolation("name"))?;

        let mut rows = self.rows.write().await;
        if rows.contains_key(&code) {
            return Err(StoreError::UniqueViolation);
        }

        let company = Company {
            code: code.clone(),
            name,
            description: new.description,
        };
        rows.insert(code, company.clone());
        Ok(company)
    }

    async fn update(
        &self,
        code: &str,
        changes: UpdateCompanyRequest,
    ) -> StoreResult<Option<Company>> {
        let mut rows = self.rows.write().await;
        let Some(company) = rows.get_mut(code) else {
            return Ok(None);
        };

        company.name = changes.name.ok_or(StoreError::NotNullViolation("name"))?;
        company.description = changes.description;
        Ok(Some(company.clone()))
    }

    async fn delete(&self, code: &str) -> StoreResult<bool> {
        Ok(self.rows.write().await.remove(code).is_some())
    }
}
