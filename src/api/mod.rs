use crate::api::resource::resource_router;
use crate::controller::{Api, Application, Operation, ResourceFamily, Tenant};
use crate::dto::Envelope;
use crate::fixtures::Fixtures;
use crate::latency::{DEFAULT_DELAY_MS, LatencySimulator};
use anyhow::{Context, Result};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use config::Config;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fmt::Formatter;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub(crate) mod resource;

const SIMULATED_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Clone)]
pub struct AppServerConfig {
    pub listen: String,
    pub config_path: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Operations, per family name, that answer with the simulated server error.
    #[serde(default)]
    pub simulated_errors: HashMap<String, HashSet<Operation>>,
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

impl Default for AppConfig {
    fn default() -> AppConfig {
        AppConfig {
            delay_ms: DEFAULT_DELAY_MS,
            simulated_errors: HashMap::new(),
        }
    }
}

impl AppConfig {
    /// Reads the optional TOML file at `config_path`, then `MOCK_API_*` overrides.
    pub fn load(config_path: &Path) -> Result<AppConfig> {
        Ok(Config::builder()
            .add_source(config::File::from(config_path.to_path_buf()).required(false))
            .add_source(config::Environment::with_prefix("MOCK_API"))
            .build()
            .context("Failed to load config")?
            .try_deserialize()
            .context("Failed to parse config")?)
    }

    pub fn simulates_error(&self, family: &str, operation: Operation) -> bool {
        self.simulated_errors
            .get(family)
            .is_some_and(|operations| operations.contains(&operation))
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub fixtures: Arc<Fixtures>,
    pub latency: LatencySimulator,
}

impl AppState {
    pub fn new(config: AppConfig) -> AppState {
        AppState {
            latency: LatencySimulator::from_millis(config.delay_ms),
            config: Arc::new(config),
            fixtures: Arc::new(Fixtures::new()),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    SimulatedServerError,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::SimulatedServerError => write!(f, "Simulated server error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match self {
            AppError::SimulatedServerError => StatusCode::BAD_REQUEST,
        };
        tracing::error!("{}", self);
        (
            status_code,
            Json(Envelope::empty(SIMULATED_ERROR_MESSAGE)),
        )
            .into_response()
    }
}

pub fn app(config: AppConfig) -> Router {
    let state = AppState::new(config);
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest(&prefix::<Api>(), resource_router::<Api>())
        .nest(&prefix::<Application>(), resource_router::<Application>())
        .nest(&prefix::<Tenant>(), resource_router::<Tenant>())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

fn prefix<R: ResourceFamily>() -> String {
    format!("/{}", R::NAME)
}
