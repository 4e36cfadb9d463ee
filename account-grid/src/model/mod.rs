//! Typed models

mod column;
mod field;
mod record;
mod row;
pub mod types;
mod value;

pub use column::*;
pub use field::*;
pub use record::*;
pub use row::*;
pub use value::*;
