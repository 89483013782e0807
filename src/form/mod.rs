//! Form model module

mod field;
mod label;
mod model;

pub use field::*;
pub use label::*;
pub use model::*;
