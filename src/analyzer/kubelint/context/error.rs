//! Load failures recorded against invalid objects.

use thiserror::Error;

/// Why a manifest could not be loaded into a usable object.
///
/// The lint context never raises these; it stores them next to the
/// offending source so diagnostics can be emitted later.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The document is not valid YAML.
    #[error("YAML syntax error: {0}")]
    Syntax(String),

    /// The document parsed, but its top level is not a mapping.
    #[error("document is not a mapping")]
    NotAMapping,

    /// A field every Kubernetes object needs is absent or not a string.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A field that must be a string holds some other YAML type.
    #[error("field `{0}` must be a string")]
    NotAString(&'static str),

    /// The document holds nothing but whitespace and comments.
    #[error("empty document")]
    EmptyDocument,

    /// The raw bytes are not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    Encoding(String),

    /// Any other loader failure, shown verbatim.
    #[error("{0}")]
    Other(String),
}

impl LoadError {
    /// Build an error whose message is kept exactly as given.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Syntax(err.to_string())
    }
}

impl From<std::str::Utf8Error> for LoadError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_verbatim() {
        assert_eq!(LoadError::other("malformed YAML").to_string(), "malformed YAML");
    }

    #[test]
    fn test_missing_field_message() {
        assert_eq!(
            LoadError::MissingField("kind").to_string(),
            "missing required field `kind`"
        );
    }

    #[test]
    fn test_not_a_string_message() {
        assert_eq!(
            LoadError::NotAString("apiVersion").to_string(),
            "field `apiVersion` must be a string"
        );
    }

    #[test]
    fn test_from_yaml_error() {
        let err = serde_yaml::from_str::<serde_yaml::Value>("key: [unclosed").unwrap_err();
        assert!(matches!(LoadError::from(err), LoadError::Syntax(_)));
    }
}
