mod feed;
mod profile;

pub use self::{
  feed::*,
  profile::*,
};
