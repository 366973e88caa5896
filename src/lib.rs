pub mod constants;
pub mod details;
pub mod errors;
pub mod hardship;
pub mod utils;

pub use details::*;
pub use hardship::*;
pub use errors::{Error, Result};
