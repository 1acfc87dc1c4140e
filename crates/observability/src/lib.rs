//! Studio Observability - logging setup shared by the studio binaries.
//!
//! ```no_run
//! use studio_observability::{ObservabilityConfig, init};
//!
//! init(ObservabilityConfig::new("studio").with_log_level("debug"))?;
//! tracing::info!("ready");
//! # Ok::<(), studio_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `STUDIO_SERVICE_NAME` - Service name
//! - `STUDIO_LOG_LEVEL` or `RUST_LOG` - Log filter directive

pub mod config;
pub mod error;
pub mod log_sink;
pub mod telemetry;
pub mod tracing;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env};
pub use self::tracing::{record_duration, record_error};
