pub mod telemetry;
pub mod utils;

pub use telemetry::TelemetryConfig;
pub use utils::{char_count, utc_timestamp};
