use uuid::Uuid;

/// An untyped identifier (or property) value.
///
/// `Null` is the absent marker. It is distinct from a key missing from a
/// [`ValueMap`](super::ValueMap).
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 64-bit integer
    U64(u64),

    /// String value
    String(String),

    /// UUID value
    Uuid(Uuid),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::U64(_) => "U64",
            Self::String(_) => "String",
            Self::Uuid(_) => "Uuid",
            Self::Null => "Null",
        }
    }
}

macro_rules! impl_from {
    ( $( $variant:ident($ty:ty) ),* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(value.clone())
                }
            }
        )*
    };
}

impl_from! {
    Bool(bool),
    I32(i32),
    I64(i64),
    U64(u64),
    String(String),
    Uuid(Uuid)
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(v) => v.fmt(f),
            Self::I32(v) => v.fmt(f),
            Self::I64(v) => v.fmt(f),
            Self::U64(v) => v.fmt(f),
            Self::String(v) => write!(f, "{v:?}"),
            Self::Uuid(v) => v.fmt(f),
            Self::Null => f.write_str("null"),
        }
    }
}
