mod primitive;
pub use primitive::Primitive;

mod value;
pub use value::Value;

mod value_map;
pub use value_map::ValueMap;
