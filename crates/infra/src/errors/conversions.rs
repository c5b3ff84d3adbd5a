//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use roster_domain::RosterError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub RosterError);

impl From<InfraError> for RosterError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<RosterError> for InfraError {
    fn from(value: RosterError) -> Self {
        Self(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoRosterError {
    fn into_roster(self) -> RosterError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → RosterError */
/* -------------------------------------------------------------------------- */

impl IntoRosterError for IoError {
    fn into_roster(self) -> RosterError {
        match self.kind() {
            ErrorKind::NotFound => RosterError::NotFound(format!("storage file missing: {self}")),
            ErrorKind::PermissionDenied => {
                RosterError::Storage(format!("storage access denied: {self}"))
            }
            ErrorKind::WriteZero => RosterError::StorageWrite(format!("short write: {self}")),
            _ => RosterError::Storage(format!("storage i/o failure: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        Self(value.into_roster())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json / toml → RosterError */
/* -------------------------------------------------------------------------- */

impl IntoRosterError for JsonError {
    fn into_roster(self) -> RosterError {
        if self.is_io() {
            RosterError::Storage(format!("failed to read JSON: {self}"))
        } else {
            RosterError::Config(format!("Invalid JSON format: {self}"))
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        Self(value.into_roster())
    }
}

impl IntoRosterError for TomlError {
    fn into_roster(self) -> RosterError {
        RosterError::Config(format!("Invalid TOML format: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        Self(value.into_roster())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
