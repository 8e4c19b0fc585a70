//! Error types for prop decoding and config construction.

use thiserror::Error;

/// Result alias for style resolution and prop decoding.
pub type Result<T> = std::result::Result<T, StyleError>;

/// Errors raised while building a component configuration.
#[derive(Debug, Error)]
pub enum StyleError {
    /// A prop carried a value outside its declared domain.
    #[error("invalid value for {field}")]
    InvalidValue {
        /// Prop that failed validation.
        field: &'static str,
        /// Offending value supplied by the caller.
        value: String,
    },
    /// A required prop was not supplied.
    #[error("missing required field {field}")]
    MissingField {
        /// Name of the absent prop.
        field: &'static str,
    },
    /// A prop name is not recognised by the component.
    #[error("unknown field {field}")]
    UnknownField {
        /// Name of the unexpected prop.
        field: String,
    },
    /// The prop bag could not be decoded.
    #[error("failed to decode props")]
    Decode {
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

impl StyleError {
    /// Build an [`StyleError::InvalidValue`] and record the rejection.
    pub(crate) fn invalid(field: &'static str, value: &str) -> Self {
        tracing::warn!(field, value, "rejected prop value");
        Self::InvalidValue {
            field,
            value: value.to_string(),
        }
    }
}

impl From<serde_json::Error> for StyleError {
    fn from(source: serde_json::Error) -> Self {
        tracing::warn!(error = %source, "rejected prop bag");
        Self::Decode { source }
    }
}
