use thiserror::Error;

/// Errors raised synchronously by the registration and configuration API.
///
/// Runtime lookup misses (unknown probe, unknown device group, missing page
/// data) never produce a `MapError`; they resolve to `None` or empty values.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MapError {
    // Registration Errors
    #[error("Invalid probe name {name:?}")]
    InvalidProbeName { name: String },
    #[error("Expected a number for device group {group} ranking")]
    MissingRanking { group: String },
    #[error("Device group {group} ranking is not a number")]
    InvalidRanking { group: String },
    #[error("Expected a function for device group {group} testFunction")]
    MissingTestFunction { group: String },

    // Input Errors
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
    #[error("Invalid document: {message}")]
    InvalidDocument { message: String },
}

impl MapError {
    pub fn invalid_probe_name(name: impl Into<String>) -> Self {
        MapError::InvalidProbeName { name: name.into() }
    }

    pub fn missing_ranking(group: impl Into<String>) -> Self {
        MapError::MissingRanking {
            group: group.into(),
        }
    }

    pub fn invalid_ranking(group: impl Into<String>) -> Self {
        MapError::InvalidRanking {
            group: group.into(),
        }
    }

    pub fn missing_test_function(group: impl Into<String>) -> Self {
        MapError::MissingTestFunction {
            group: group.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        MapError::InvalidConfig {
            message: message.into(),
        }
    }

    pub fn invalid_document(message: impl Into<String>) -> Self {
        MapError::InvalidDocument {
            message: message.into(),
        }
    }

    /// True for errors raised by `add_probe` / `add_device_group`.
    pub fn is_registration_error(&self) -> bool {
        matches!(
            self,
            MapError::InvalidProbeName { .. }
                | MapError::MissingRanking { .. }
                | MapError::InvalidRanking { .. }
                | MapError::MissingTestFunction { .. }
        )
    }
}
