pub mod decimal_serde;
pub mod time_utils;

pub use time_utils::{Clock, SystemClock};
