pub mod id;
pub use id::{IdMapper, IdMapperBuilder, ModificationStore, SingleIdMapper, SingleIdMapperBuilder};
