mod condition;
pub use condition::{BinaryOp, Condition, Operand};

mod parameter_data;
pub use parameter_data::QueryParameterData;

mod parameters;
pub use parameters::{Connective, Parameters};
