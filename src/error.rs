//! Error types for the shift engine.
//!
//! Configuration and record-store failures are reported through [`EngineError`].
//! Pure computations never fail; field validation has its own
//! [`ValidationError`](crate::validation::ValidationError) type.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the shift engine.
///
/// # Example
///
/// ```
/// use shift_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No workplace with the given id exists in the store.
    #[error("Workplace not found: {id}")]
    WorkplaceNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// No shift with the given id exists in the store.
    #[error("Shift not found: {id}")]
    ShiftNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// A record with the same id is already stored.
    #[error("Duplicate record id: {id}")]
    DuplicateId {
        /// The conflicting id.
        id: Uuid,
    },

    /// A shift failed validation before reaching the store.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: Uuid,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A workplace failed validation before reaching the store.
    #[error("Invalid workplace '{workplace_id}': {message}")]
    InvalidWorkplace {
        /// The ID of the invalid workplace.
        workplace_id: Uuid,
        /// A description of what made the workplace invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_not_found_errors_display_id() {
        let id = Uuid::from_u128(7);
        assert_eq!(
            EngineError::WorkplaceNotFound { id }.to_string(),
            format!("Workplace not found: {}", id)
        );
        assert_eq!(
            EngineError::ShiftNotFound { id }.to_string(),
            format!("Shift not found: {}", id)
        );
    }

    #[test]
    fn test_invalid_shift_displays_id_and_message() {
        let id = Uuid::from_u128(1);
        let error = EngineError::InvalidShift {
            shift_id: id,
            message: "end time before start time".to_string(),
        };
        assert_eq!(
            error.to_string(),
            format!("Invalid shift '{}': end time before start time", id)
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::ShiftNotFound {
                id: Uuid::from_u128(3),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
