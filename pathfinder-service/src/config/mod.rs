use crate::services::grid::{DEFAULT_GRID_SIZE, Grid, MAX_GRID_SIZE};
use axum::http::HeaderValue;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::time::Duration;

const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Deserialize)]
pub struct PathfinderConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GridConfig {
    /// Side length N of the square grid.
    #[serde(default = "default_grid_size")]
    pub size: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: default_grid_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_grid_size() -> usize {
    DEFAULT_GRID_SIZE
}

fn default_allowed_origins() -> Vec<String> {
    vec![DEFAULT_ALLOWED_ORIGIN.to_string()]
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            grid: GridConfig::default(),
            cors: CorsConfig::default(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl PathfinderConfig {
    pub fn load() -> Result<Self, AppError> {
        let config: Self = core_config::load_with_lists(&["cors.allowed_origins"])?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.grid.size == 0 || self.grid.size > MAX_GRID_SIZE {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "grid.size must be between 1 and {}, got {}",
                MAX_GRID_SIZE,
                self.grid.size
            )));
        }
        if self.request_timeout_ms == 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "request_timeout_ms must be greater than zero"
            )));
        }
        self.allowed_origins()?;
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid.size)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Allowed CORS origins as header values.
    pub fn allowed_origins(&self) -> Result<Vec<HeaderValue>, AppError> {
        self.cors
            .allowed_origins
            .iter()
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!(
                        "invalid CORS origin '{}': {}",
                        origin,
                        e
                    ))
                })
            })
            .collect()
    }
}
