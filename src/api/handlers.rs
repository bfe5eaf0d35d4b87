//! API Handlers
//!
//! HTTP request handlers for the companies endpoints. Each handler issues a
//! single store call and decides "not found" from its result alone.

use std::sync::Arc;

use anyhow::bail;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use super::extract::JsonBody;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    CompaniesResponse, CompanyResponse, CreateCompanyRequest, HealthResponse, StatusResponse,
    UpdateCompanyRequest,
};
use crate::store::{create_pool, ensure_schema, CompanyStore, MemoryCompanyStore, PgCompanyStore};

/// Application state shared across all handlers.
///
/// Holds the injected company store behind an `Arc` so any implementation
/// can be shared by concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CompanyStore>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: impl CompanyStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates an AppState backed by an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryCompanyStore::new())
    }

    /// Creates a new AppState from configuration.
    ///
    /// Connects to Postgres and bootstraps the schema when `database_url` is
    /// set. Without it, the in-memory store is only used when `in_memory` is
    /// enabled; otherwise startup fails.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        match &config.database_url {
            Some(url) => {
                let pool = create_pool(url, config.max_connections).await?;
                ensure_schema(&pool).await?;
                info!(
                    "Connected to Postgres with up to {} connections",
                    config.max_connections
                );
                Ok(Self::new(PgCompanyStore::new(pool)))
            }
            None if config.in_memory => {
                warn!("Using in-memory company store, data is lost on shutdown");
                Ok(Self::in_memory())
            }
            None => bail!("DATABASE_URL is not set (set BIZTIME_IN_MEMORY=1 to run without Postgres)"),
        }
    }
}

/// Handler for GET /companies
///
/// Lists every company as `{code, name}`, ordered by name.
pub async fn list_companies(State(state): State<AppState>) -> Result<Json<CompaniesResponse>> {
    let companies = state.store.list().await?;

    Ok(Json(CompaniesResponse::new(companies)))
}

/// Handler for GET /companies/:code
pub async fn get_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CompanyResponse>> {
    let Some(company) = state.store.get(&code).await? else {
        return Err(ApiError::NotFound(code));
    };

    Ok(Json(CompanyResponse::new(company)))
}

/// Handler for POST /companies
///
/// Inserts the body as given; the caller chooses the code.
pub async fn create_company(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<CompanyResponse>)> {
    let company = state.store.create(req).await?;
    info!(code = %company.code, "Company created");

    Ok((StatusCode::CREATED, Json(CompanyResponse::new(company))))
}

/// Handler for PUT /companies/:code
///
/// Overwrites name and description; the code in the path is never changed.
pub async fn update_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
    JsonBody(req): JsonBody<UpdateCompanyRequest>,
) -> Result<Json<CompanyResponse>> {
    let Some(company) = state.store.update(&code, req).await? else {
        return Err(ApiError::NotFound(code));
    };
    info!(code = %company.code, "Company updated");

    Ok(Json(CompanyResponse::new(company)))
}

/// Handler for DELETE /companies/:code
pub async fn delete_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatusResponse>> {
    if !state.store.delete(&code).await? {
        return Err(ApiError::NotFound(code));
    }
    info!(code = %code, "Company deleted");

    Ok(Json(StatusResponse::deleted()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback for unknown routes.
pub async fn not_found_handler() -> ApiError {
    ApiError::Rejected {
        status: StatusCode::NOT_FOUND,
        message: "Not Found".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_body(
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> JsonBody<CreateCompanyRequest> {
        JsonBody(CreateCompanyRequest::new(code, name, description))
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let state = AppState::in_memory();

        let result = create_company(
            State(state.clone()),
            create_body("ibm", "IBM", Some("Big blue.")),
        )
        .await;
        let (status, created) = result.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.company.code, "ibm");

        let response = get_company(State(state), Path("ibm".to_string()))
            .await
            .unwrap();
        assert_eq!(response.company, created.company);
    }

    #[tokio::test]
    async fn test_get_nonexistent_company() {
        let state = AppState::in_memory();

        let result = get_company(State(state), Path("nope".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(ref code)) if code == "nope"));
    }

    #[tokio::test]
    async fn test_list_handler() {
        let state = AppState::in_memory();
        create_company(State(state.clone()), create_body("b", "Beta", None))
            .await
            .unwrap();
        create_company(State(state.clone()), create_body("a", "Alpha", None))
            .await
            .unwrap();

        let response = list_companies(State(state)).await.unwrap();
        let codes: Vec<&str> = response.companies.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_update_handler() {
        let state = AppState::in_memory();
        create_company(State(state.clone()), create_body("ibm", "IBM", None))
            .await
            .unwrap();

        let req = UpdateCompanyRequest::new("IBM Corp", Some("Big blue."));
        let response = update_company(State(state), Path("ibm".to_string()), JsonBody(req))
            .await
            .unwrap();
        assert_eq!(response.company.name, "IBM Corp");
        assert_eq!(response.company.description.as_deref(), Some("Big blue."));
    }

    #[tokio::test]
    async fn test_update_nonexistent_company() {
        let state = AppState::in_memory();

        let req = UpdateCompanyRequest::new("Ghost", None);
        let result = update_company(State(state), Path("ghost".to_string()), JsonBody(req)).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let state = AppState::in_memory();
        create_company(State(state.clone()), create_body("ibm", "IBM", None))
            .await
            .unwrap();

        let response = delete_company(State(state.clone()), Path("ibm".to_string()))
            .await
            .unwrap();
        assert_eq!(response.status, "deleted");

        // Verify it's gone
        let result = delete_company(State(state), Path("ibm".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_duplicate_create_is_unclassified() {
        let state = AppState::in_memory();
        create_company(State(state.clone()), create_body("ibm", "IBM", None))
            .await
            .unwrap();

        let result = create_company(State(state), create_body("ibm", "IBM", None)).await;
        assert!(matches!(result, Err(ApiError::Unclassified(_))));
    }

    #[tokio::test]
    async fn test_update_without_fields_on_missing_company() {
        let state = AppState::in_memory();

        let result = update_company(
            State(state),
            Path("ghost".to_string()),
            JsonBody(UpdateCompanyRequest::default()),
        )
        .await;
        assert!(matches!(result, Err(ApiError::NotFound(ref code)) if code == "ghost"));
    }

    #[tokio::test]
    async fn test_from_config_requires_database_or_opt_in() {
        assert!(AppState::from_config(&Config::default()).await.is_err());

        let config = Config {
            in_memory: true,
            ..Config::default()
        };
        let state = AppState::from_config(&config).await.unwrap();
        assert!(list_companies(State(state)).await.unwrap().companies.is_empty());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
