#[macro_use]
extern crate lazy_static;

pub mod error;
pub use error::Error;

#[allow(dead_code)]
mod util;

pub mod app;

pub mod forms;

pub mod models;

pub mod session;

pub mod store;

pub mod views;
