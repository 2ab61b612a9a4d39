mod error;
pub use error::{Error, IntoError, ResolutionFailure};

pub mod mapper;
pub use mapper::{
    IdMapper, IdMapperBuilder, ModificationStore, SingleIdMapper, SingleIdMapperBuilder,
};

pub mod query;
pub use query::{Parameters, QueryParameterData};

pub mod record;
pub use record::{Record, RecordType, Registry};

pub mod stmt;
pub use stmt::{Value, ValueMap};

/// A Result type alias that uses Rewind's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
