//! Response DTOs for the companies API
//!
//! Every body is a JSON object with a single top-level key.

use axum::http::StatusCode;
use serde::Serialize;

use super::{Company, CompanySummary};

/// Response body for GET /companies
#[derive(Debug, Clone, Serialize)]
pub struct CompaniesResponse {
    pub companies: Vec<CompanySummary>,
}

impl CompaniesResponse {
    pub fn new(companies: Vec<CompanySummary>) -> Self {
        Self { companies }
    }
}

/// Response body for every endpoint that returns one company
#[derive(Debug, Clone, Serialize)]
pub struct CompanyResponse {
    pub company: Company,
}

impl CompanyResponse {
    pub fn new(company: Company) -> Self {
        Self { company }
    }
}

/// Response body for DELETE /companies/:code
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    /// The body returned after a successful delete
    pub fn deleted() -> Self {
        Self {
            status: "deleted".to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Message and numeric status carried inside `ErrorResponse`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub status: u16,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
                status: status.as_u16(),
            },
        }
    }
}
