use super::{Error, ErrorKind};

/// Why a property accessor could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionFailure {
    /// The record type has no property with the requested name.
    NotFound,

    /// The property exists but exposes no getter.
    NotReadable,

    /// The property exists but exposes no setter.
    NotWritable,

    /// The accessor was resolved for a different record type.
    TypeMismatch,
}

impl core::fmt::Display for ResolutionFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(match self {
            ResolutionFailure::NotFound => "no such property",
            ResolutionFailure::NotReadable => "property is write-only",
            ResolutionFailure::NotWritable => "property is read-only",
            ResolutionFailure::TypeMismatch => "accessor belongs to a different record type",
        })
    }
}

/// Error when a named property cannot be read or written on a record type.
///
/// Indicates a mismatch between the configured mapping metadata and the actual
/// shape of the record.
#[derive(Debug)]
pub(super) struct PropertyResolutionError {
    target: Option<Target>,
}

#[derive(Debug)]
struct Target {
    type_name: Box<str>,
    property: Box<str>,
    failure: ResolutionFailure,
}

impl std::error::Error for PropertyResolutionError {}

impl core::fmt::Display for PropertyResolutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.target {
            Some(target) => write!(
                f,
                "cannot resolve property `{}` on `{}`: {}",
                target.property, target.type_name, target.failure
            ),
            None => f.write_str(
                "cannot resolve identifier property: mapper is not bound to a property",
            ),
        }
    }
}

impl Error {
    /// Creates a property resolution error for `property` on `type_name`.
    pub fn property_resolution(
        type_name: impl Into<String>,
        property: impl Into<String>,
        failure: ResolutionFailure,
    ) -> Error {
        Error::from(ErrorKind::PropertyResolution(PropertyResolutionError {
            target: Some(Target {
                type_name: type_name.into().into(),
                property: property.into().into(),
                failure,
            }),
        }))
    }

    /// Creates the resolution error reported when a mapper that was never
    /// bound to a property is used.
    pub fn unbound_mapper() -> Error {
        Error::from(ErrorKind::PropertyResolution(PropertyResolutionError {
            target: None,
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a property
    /// resolution error.
    pub fn is_property_resolution(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::PropertyResolution(_)))
    }
}
