//! HTTP API for the criteria calculator
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /solve` - Run the criterion named by `problem_type`
//! - `POST /calculate/:criterion` - Run the criterion named in the path
//! - `POST /generate_data` - Synthetic samples for a criterion

mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::generate::generate;
use crate::hypothesis::{Criterion, TestResult};

pub use types::{
    ErrorResponse, GenerateRequest, GenerateResponse, HealthResponse, SolveRequest,
};

/// Crate version reported by `/health`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application state shared across handlers
#[derive(Debug, Clone, Default)]
pub struct AppState {
    config: Arc<Config>,
}

impl AppState {
    /// Create application state from configuration
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The configuration the server was started with
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit;
    Router::new()
        .route("/health", get(health_handler))
        .route("/solve", post(solve_handler))
        .route("/calculate/:criterion", post(calculate_handler))
        .route("/generate_data", post(generate_data_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = if self.is_input() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::UNPROCESSABLE_ENTITY
        };
        warn!(status = status.as_u16(), error = %self, "request failed");
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::input(rejection.body_text())
    }
}

/// JSON body, with malformed bodies reported as [`Error::Input`].
type JsonBody<T> = std::result::Result<Json<T>, JsonRejection>;

/// Health check handler
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: VERSION.to_string(),
    })
}

fn evaluate(request: &SolveRequest, name: Option<&str>) -> Result<TestResult> {
    let criterion = request.criterion(name)?;
    let samples = request.samples(criterion)?;
    let result = criterion.run(&samples)?;
    info!(
        criterion = criterion.as_str(),
        samples = samples.len(),
        verdict = ?result.verdict,
        "criterion solved"
    );
    Ok(result)
}

/// Solve handler - criterion from the body
async fn solve_handler(body: JsonBody<SolveRequest>) -> Result<Json<TestResult>> {
    let Json(request) = body?;
    evaluate(&request, None).map(Json)
}

/// Calculate handler - criterion from the path
async fn calculate_handler(
    Path(criterion): Path<String>,
    body: JsonBody<SolveRequest>,
) -> Result<Json<TestResult>> {
    let Json(request) = body?;
    evaluate(&request, Some(&criterion)).map(Json)
}

/// Generate data handler
async fn generate_data_handler(
    State(state): State<AppState>,
    body: JsonBody<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    let Json(request) = body?;
    let criterion: Criterion = request.criterion.parse()?;
    let defaults = &state.config.generator;
    let sizes = defaults.sizes(request.n, request.n1, request.n2, request.k);
    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generated = generate(criterion, sizes, defaults.decimals, &mut rng)?;
    info!(criterion = %criterion, fields = generated.fields.len(), "data generated");
    Ok(Json(GenerateResponse {
        message: format!("Generated data for {}", criterion.title()),
        data: generated.fields,
    }))
}
