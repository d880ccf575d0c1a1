// User domain module
// Contains the user entity and its value objects

#![allow(clippy::module_inception)]

pub mod user;
pub mod value_objects;

pub use user::User;
pub use value_objects::{Email, ModerationFlags, Role};
