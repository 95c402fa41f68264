pub mod grid;
pub mod metrics;
pub mod pathfinder;

pub use grid::Grid;
pub use self::metrics::{get_metrics, init_metrics, record_search};
pub use pathfinder::PathFinder;
