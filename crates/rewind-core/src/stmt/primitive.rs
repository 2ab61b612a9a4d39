use super::Value;
use crate::{Error, Result};

use uuid::Uuid;

/// A Rust type that can be stored in and loaded from a [`Value`].
///
/// Loading never coerces between variants: an `I32` does not load into an
/// `i64` field.
pub trait Primitive: Sized {
    /// Name of the Rust type, used in diagnostics.
    const TYPE_NAME: &'static str;

    fn load(value: Value) -> Result<Self>;

    fn into_value(self) -> Value;
}

macro_rules! impl_primitive {
    ( $( $variant:ident($ty:ty) ),* ) => {
        $(
            impl Primitive for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn load(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        _ => Err(Error::type_conversion(value, Self::TYPE_NAME)),
                    }
                }

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }
        )*
    };
}

impl_primitive! {
    Bool(bool),
    I32(i32),
    I64(i64),
    U64(u64),
    String(String),
    Uuid(Uuid)
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE_NAME: &'static str = "Option";

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn into_value(self) -> Value {
        match self {
            Some(value) => value.into_value(),
            None => Value::Null,
        }
    }
}
