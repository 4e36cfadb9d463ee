//! Error types

mod field;
mod logging;
mod remote;
mod table;

pub use field::*;
pub use logging::*;
pub use remote::*;
pub use table::*;
