//! Account data types

mod money;
mod owner;

pub use money::*;
pub use owner::*;
