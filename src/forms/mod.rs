pub mod article;
pub mod comment;
pub mod user;

pub use self::{
  article::*,
  comment::*,
  user::*,
};
