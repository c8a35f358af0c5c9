mod account;
mod audit;
mod catalog;
mod instance;
mod object;
mod offering;
mod operator;
mod version;

pub mod patch;

pub use account::*;
pub use audit::*;
pub use catalog::*;
pub use instance::*;
pub use object::*;
pub use offering::*;
pub use operator::*;
pub use patch::{JsonPatchOperation, JsonPatchOperationOp};
pub use version::*;
