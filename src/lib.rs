pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used items
pub use config::Config;
pub use error::{ErrorKind, StatsError};
pub use models::stats::ProtocolStatistics;
pub use services::stats_service::{StatsService, StatsState};
pub use utils::format::{format_change, format_tvl, FormattedChange};
