// Repository interfaces (ports)
// Implementations live in the infrastructure layer

pub mod slot_repository;

pub use slot_repository::{SlotRepository, SESSION_SLOT, THEME_SLOT};
