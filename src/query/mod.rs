//! The ordered set of named queries and the row limit applied to them.
mod catalog;
mod extract;
mod limit;

pub use catalog::*;
pub use extract::*;
pub use limit::*;
