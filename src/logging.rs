//! Logging utilities for polargrid.
//!
//! Structured `tracing` events for grid construction and queries. The crate
//! never installs a subscriber on its own; callers opt in with
//! [`init_tracing`].

use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::{PolarGridError, Result};

/// Initialize the tracing subscriber with the given log level.
///
/// `RUST_LOG` takes precedence over `log_level` when set. Fails with
/// `PolarGridError::Config` if a global subscriber is already installed,
/// e.g. when called a second time or after the host application set its own.
pub fn init_tracing(log_level: &str) -> Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| PolarGridError::Config {
            message: format!(
                "Failed to initialize tracing, a global subscriber is already installed: {}",
                e
            ),
        })
}

/// Log a start message for a significant operation
pub fn log_operation_start(operation: &str, details: Option<&str>) {
    if let Some(details) = details {
        debug!(
            operation = operation,
            details = details,
            "Starting operation"
        );
    } else {
        debug!(operation = operation, "Starting operation");
    }
}

/// Log the completion of a significant operation
pub fn log_operation_end(operation: &str, start_time: Instant, success: bool) {
    let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    if success {
        debug!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation completed successfully"
        );
    } else {
        warn!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation completed with warnings"
        );
    }
}

/// Run `f`, logging its duration under a fresh operation id
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let operation_id = Uuid::new_v4();

    debug!(
        operation = operation,
        operation_id = %operation_id,
        "Starting operation"
    );

    let result = f();

    info!(
        operation = operation,
        operation_id = %operation_id,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log the shape of a freshly built mesh
pub fn log_grid_build_stats(
    n_samples_x: usize,
    n_samples_y: usize,
    cell_width: f64,
    cell_height: f64,
    element_count: usize,
) {
    info!(
        operation = "grid_build",
        n_samples_x = n_samples_x,
        n_samples_y = n_samples_y,
        cell_width = cell_width,
        cell_height = cell_height,
        element_count = element_count,
        "Interpolation grid built"
    );
}

/// Log an error with context
pub fn log_error(error: &PolarGridError, context: &str) {
    error!(
        error = %error,
        context = context,
        "Error occurred"
    );
}
