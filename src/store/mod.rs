mod article;
mod comment;
mod thread;
pub use self::thread::*;

pub mod seed;

mod service;
pub use service::*;
