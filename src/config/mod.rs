//! Configuration: environment-driven settings plus shared constants
//! (roles, validation bounds, database constraint names).

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
