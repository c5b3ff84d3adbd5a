use std::time::Duration;

use roster_domain::RosterError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"rm"`).
/// * `elapsed` - Duration the command execution took.
/// * `error` - Stable error label when the command failed.
///
/// Callers must avoid forwarding user field values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&str>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(error_type) => {
            warn!(command, duration_ms, error_type, "command_execution_failure");
        }
    }
}

/// Convert a `RosterError` into a stable label suitable for logging.
#[inline]
pub const fn error_label(error: &RosterError) -> &'static str {
    match error {
        RosterError::Storage(_) => "storage",
        RosterError::StorageWrite(_) => "storage_write",
        RosterError::Config(_) => "config",
        RosterError::NotFound(_) => "not_found",
        RosterError::InvalidInput(_) => "invalid_input",
        RosterError::Validation(_) => "validation",
        RosterError::Internal(_) => "internal",
    }
}
