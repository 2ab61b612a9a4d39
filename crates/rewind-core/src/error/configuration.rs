use super::{Error, ErrorKind};

/// Error raised while building mapping metadata.
///
/// This occurs when:
/// - An identifier mapper is bound a second time
/// - An identifier mapper is bound to an empty property name
/// - Entity metadata names the same entity twice
/// - A reference points at an entity that was never configured
///
/// These errors abort the metadata build. They are never transient.
#[derive(Debug)]
pub(super) struct ConfigurationError {
    message: Box<str>,
}

impl std::error::Error for ConfigurationError {}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "configuration error: {}", self.message)
    }
}

impl Error {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Error {
        Error::from(ErrorKind::Configuration(ConfigurationError {
            message: message.into().into(),
        }))
    }

    /// Creates the error returned when an identifier mapper that is already
    /// bound to `bound` is asked to bind `requested`.
    pub fn already_bound(bound: &str, requested: &str) -> Error {
        Error::configuration(format!(
            "identifier mapper is already bound to property `{bound}`; cannot bind `{requested}`"
        ))
    }

    /// Creates the error returned when an identifier mapper is asked to bind
    /// an empty property name.
    pub fn empty_property() -> Error {
        Error::configuration("identifier mapper cannot bind an empty property name")
    }

    /// Returns `true` if this error, or any error it wraps, is a configuration
    /// error.
    pub fn is_configuration(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::Configuration(_)))
    }
}
