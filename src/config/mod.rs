//! Run configuration: command-line arguments, the `.env` file, and the
//! database credentials read from the environment.
mod args;
mod credentials;
mod env;
mod error;
mod settings;

pub use args::*;
pub use credentials::*;
pub use env::*;
pub use error::*;
pub use settings::*;
