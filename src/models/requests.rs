//! Request DTOs for the companies API
//!
//! Every field is optional. A missing `code` or `name` is handed to the
//! store as NULL and rejected there.

use serde::Deserialize;

/// Request body for POST /companies
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCompanyRequest {
    /// Primary key for the new company
    #[serde(default)]
    pub code: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateCompanyRequest {
    /// Builds a fully populated request.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: Option<&str>,
    ) -> Self {
        Self {
            code: Some(code.into()),
            name: Some(name.into()),
            description: description.map(str::to_string),
        }
    }
}

/// Request body for PUT /companies/:code
///
/// Both fields overwrite the stored values; an omitted description clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCompanyRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl UpdateCompanyRequest {
    /// Builds a request with a name and optional description.
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: Some(name.into()),
            description: description.map(str::to_string),
        }
    }
}
