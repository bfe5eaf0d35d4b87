//! API Module
//!
//! HTTP handlers and routing for the companies REST API.
//!
//! # Endpoints
//! - `GET /companies` - List companies
//! - `GET /companies/:code` - Get one company
//! - `POST /companies` - Create a company
//! - `PUT /companies/:code` - Update a company
//! - `DELETE /companies/:code` - Delete a company
//! - `GET /health` - Health check endpoint

pub mod extract;
pub mod handlers;
pub mod routes;

pub use extract::JsonBody;
pub use handlers::*;
pub use routes::create_router;
