//! Logging and observability
//!
//! Structured logging built on `tracing`:
//! - Human-readable console output
//! - Optional JSON log files with rotation
//! - Configurable log levels, overridable through `RUST_LOG`
//!
//! # Example
//!
//! ```no_run
//! use supplier_feed::logging::init_logging;
//! use supplier_feed::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Feed started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the outcome of one composed page
///
/// # Example
///
/// ```no_run
/// use supplier_feed::log_page_composed;
/// use std::time::Duration;
///
/// log_page_composed!(1, 100, 37, 1250, Duration::from_millis(84));
/// ```
#[macro_export]
macro_rules! log_page_composed {
    ($page_number:expr, $page_size:expr, $suppliers:expr, $total_records:expr, $duration:expr) => {
        tracing::info!(
            page_number = $page_number,
            page_size = $page_size,
            suppliers = $suppliers,
            total_records = $total_records,
            duration_ms = $duration.as_millis() as u64,
            "Supplier page composed"
        )
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use supplier_feed::log_error_with_context;
/// use supplier_feed::domain::FeedError;
///
/// let error = FeedError::FetchFailure("connection reset".to_string());
/// log_error_with_context!(&error, "Failed to fetch supplier tables");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        )
    };
}
