//! Postgres-backed company store
//!
//! One parameterized statement per call. Constraint violations (duplicate
//! code, NULL name) come back from Postgres and are passed through as-is.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{CompanyStore, StoreResult};
use crate::models::{Company, CompanySummary, CreateCompanyRequest, UpdateCompanyRequest};

/// Company store over a shared sqlx pool.
#[derive(Debug, Clone)]
pub struct PgCompanyStore {
    pool: PgPool,
}

impl PgCompanyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyStore for PgCompanyStore {
    async fn list(&self) -> StoreResult<Vec<CompanySummary>> {
        let rows = sqlx::query_as::<_, CompanySummary>(
            r#"
            SELECT code, name
            FROM companies
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get(&self, code: &str) -> StoreResult<Option<Company>> {
        let row = sqlx::query_as::<_, Company>(
            r#"
            SELECT code, name, description
            FROM companies
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn create(&self, new: CreateCompanyRequest) -> StoreResult<Company> {
        let row = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (code, name, description)
            VALUES ($1, $2, $3)
            RETURNING code, name, description
            "#,
        )
        .bind(new.code)
        .bind(new.name)
        .bind(new.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(
        &self,
        code: &str,
        changes: UpdateCompanyRequest,
    ) -> StoreResult<Option<Company>> {
        let row = sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies
            SET name = $1, description = $2
            WHERE code = $3
            RETURNING code, name, description
            "#,
        )
        .bind(changes.name)
        .bind(changes.description)
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, code: &str) -> StoreResult<bool> {
        let deleted = sqlx::query_scalar::<_, String>(
            r#"
            DELETE FROM companies
            WHERE code = $1
            RETURNING code
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deleted.is_some())
    }
}
