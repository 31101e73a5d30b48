//! Error types for draft validation, the registry and configuration.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Result type for validation.
pub type ValidationResult<T = ()> = Result<T, ValidationError>;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Delimiter between field-level messages of one structural error.
pub(crate) const VIOLATION_DELIMITER: &str = "; ";

/// A draft failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A caller-supplied validator rejected the draft. Carries the
    /// validator's message verbatim; `prefix` comes from the engine config.
    #[error("{}", render_custom(.prefix.as_deref(), .message))]
    Custom {
        /// Registration index of the failing validator.
        index: usize,
        message: String,
        prefix: Option<String>,
    },

    /// The draft's own structural validator found one or more violations.
    #[error(transparent)]
    Structural(#[from] StructuralError),
}

fn render_custom(prefix: Option<&str>, message: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}: {message}"),
        _ => message.to_string(),
    }
}

impl ValidationError {
    /// Returns true if a custom validator produced this error.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }

    /// Returns true if the structural validator produced this error.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Structural(_))
    }

    /// Top-level violations (empty for custom errors).
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Custom { .. } => &[],
            Self::Structural(err) => &err.violations,
        }
    }

    /// Returns true if any violation, at any nesting depth, names `field`.
    #[must_use]
    pub fn mentions(&self, field: &str) -> bool {
        self.violations().iter().any(|v| {
            v.field == field
                || match &v.kind {
                    ViolationKind::Nested(child) => child.mentions(field),
                    _ => false,
                }
        })
    }

    /// Flattens the error into one message per leaf violation. Nested
    /// messages are prefixed with the path of fields leading to them.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Custom { .. } => vec![self.to_string()],
            Self::Structural(err) => err
                .violations
                .iter()
                .flat_map(|v| match &v.kind {
                    ViolationKind::Nested(child) => child
                        .messages()
                        .into_iter()
                        .map(|m| format!("{}.{m}", v.field))
                        .collect::<Vec<_>>(),
                    _ => vec![v.to_string()],
                })
                .collect(),
        }
    }
}

/// Aggregated structural failure of one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralError {
    pub entity: String,
    pub violations: Vec<Violation>,
}

impl StructuralError {
    pub fn new(entity: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            entity: entity.into(),
            violations,
        }
    }
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.entity)?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str(VIOLATION_DELIMITER)?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl StdError for StructuralError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.violations.iter().find_map(|v| match &v.kind {
            ViolationKind::Nested(child) => Some(child.as_ref() as &(dyn StdError + 'static)),
            _ => None,
        })
    }
}

/// One field-level failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub field: String,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

/// What went wrong with a field.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationKind {
    /// Required field is absent or blank.
    Missing,
    OutOfRange { value: f64, min: f64, max: f64 },
    NotAllowed { value: String, allowed: Vec<String> },
    /// Not a `YYYY-MM-DD` calendar date.
    InvalidDate { value: String },
    PatternMismatch { value: String, pattern: String },
    /// This field's value precedes the value of `earlier_field`.
    OutOfOrder {
        earlier_field: String,
        earlier: String,
        later: String,
    },
    /// A sub-entity failed its own structural validation.
    Nested(Box<ValidationError>),
    Other(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = &self.field;
        match &self.kind {
            ViolationKind::Missing => write!(f, "{field} is required"),
            ViolationKind::OutOfRange { value, min, max } => {
                write!(f, "{field} {value} is out of range [{min}, {max}]")
            }
            ViolationKind::NotAllowed { value, allowed } => {
                write!(f, "{field} '{value}' is not one of [{}]", allowed.join(", "))
            }
            ViolationKind::InvalidDate { value } => {
                write!(f, "{field} '{value}' is not a valid YYYY-MM-DD date")
            }
            ViolationKind::PatternMismatch { value, pattern } => {
                write!(f, "{field} '{value}' does not match {pattern}")
            }
            ViolationKind::OutOfOrder {
                earlier_field,
                earlier,
                later,
            } => write!(
                f,
                "{field} ({later}) must not be before {earlier_field} ({earlier})"
            ),
            ViolationKind::Nested(child) => write!(f, "{field} is invalid ({child})"),
            ViolationKind::Other(message) => write!(f, "{field}: {message}"),
        }
    }
}

/// Registry lookups and type-erased extraction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no builder registered for type '{name}'")]
    NotFound { name: String },

    #[error("builder registered as '{name}' is not a builder of {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration text could not be parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Signal raised by strict extraction when the draft is invalid.
///
/// Kept distinct from [`ValidationError`] so an abort can never be mistaken
/// for a recoverable validation failure.
#[derive(Debug, Error)]
#[error("{message}: {entity} failed validation: {source}")]
pub struct Abort {
    pub entity: String,
    pub message: String,
    #[source]
    pub source: ValidationError,
}

impl Abort {
    /// Stops the current operation. Never returns.
    pub fn raise(self) -> ! {
        tracing::error!(entity = %self.entity, error = %self.source, "aborting on invalid draft");
        panic!("{self}")
    }
}
