//! Company records as stored and returned by the API

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A full company row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Company {
    /// Primary key, chosen by the caller at creation
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// The `(code, name)` projection used by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

impl From<&Company> for CompanySummary {
    fn from(company: &Company) -> Self {
        Self {
            code: company.code.clone(),
            name: company.name.clone(),
        }
    }
}
