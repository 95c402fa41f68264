//! service-core: Shared HTTP infrastructure for the pathfinder workspace.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;

pub use axum;
pub use tracing;
