pub mod config;
pub use config::*;

mod state;
pub use state::*;

pub mod commands;
pub use commands::*;
