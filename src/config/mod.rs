pub mod app;

pub use app::{AppConfig, DashboardConfig, MAX_LOOKBACK_DAYS};
