// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod appointment;
pub mod barber;
pub mod errors;
pub mod events;
pub mod preferences;
pub mod repositories;
pub mod user;

pub use errors::{StoreError, StoreResult};
pub use preferences::Theme;
