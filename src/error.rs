//! Error types for recetar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for recetar operations.
///
/// Covers catalog construction failures, unknown query conditions, and
/// invalid hyperparameters.
///
/// # Examples
///
/// ```
/// use recetar::error::RecetarError;
///
/// let err = RecetarError::UnknownCondition {
///     name: "Migraine".to_string(),
/// };
/// assert!(err.to_string().contains("unknown condition"));
/// ```
#[derive(Debug)]
pub enum RecetarError {
    /// The medication catalog contains no medications.
    EmptyCatalog,

    /// A medication was registered with an empty condition list.
    EmptyConditionList {
        /// Medication name
        medication: String,
    },

    /// The same medication name was registered twice.
    DuplicateMedication {
        /// Medication name
        medication: String,
    },

    /// A queried condition does not appear in the vocabulary.
    UnknownCondition {
        /// Condition name as queried
        name: String,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for RecetarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecetarError::EmptyCatalog => {
                write!(
                    f,
                    "medication catalog is empty: at least one medication is required"
                )
            }
            RecetarError::EmptyConditionList { medication } => {
                write!(f, "medication {medication:?} lists no conditions")
            }
            RecetarError::DuplicateMedication { medication } => {
                write!(f, "medication {medication:?} registered more than once")
            }
            RecetarError::UnknownCondition { name } => {
                write!(f, "unknown condition: {name:?} is not in the vocabulary")
            }
            RecetarError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            RecetarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RecetarError {}

impl From<&str> for RecetarError {
    fn from(msg: &str) -> Self {
        RecetarError::Other(msg.to_string())
    }
}

impl From<String> for RecetarError {
    fn from(msg: String) -> Self {
        RecetarError::Other(msg)
    }
}

impl RecetarError {
    /// Create an invalid hyperparameter error with descriptive context.
    #[must_use]
    pub fn invalid_hyperparameter(param: &str, value: impl fmt::Display, constraint: &str) -> Self {
        Self::InvalidHyperparameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RecetarError>;
