// Release Metrics Library
// Aggregates release/PR/issue snapshot records into the summary metrics,
// leaderboards, time-bucketed series, and axis scales a dashboard renders

pub mod analytics;
pub mod error;
pub mod models;
pub mod service;
pub mod snapshot;

pub use error::AppError;
pub use service::DashboardService;
pub use snapshot::MetricsSnapshot;
