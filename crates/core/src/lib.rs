pub mod config;
pub mod error;
pub mod object;

pub use config::Config;
pub use error::*;
pub use object::*;
