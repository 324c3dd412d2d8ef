//! Place assignment module

mod assigner;
mod validate;


pub use assigner::*;
pub use validate::*;
