//! Request and Response models for the companies API
//!
//! This module defines the company records and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod company;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use company::{Company, CompanySummary};
pub use requests::{CreateCompanyRequest, UpdateCompanyRequest};
pub use responses::{
    CompaniesResponse, CompanyResponse, ErrorResponse, HealthResponse, StatusResponse,
};
