// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod file_slot_repository;
pub mod in_memory_slot_repository;

pub use file_slot_repository::FileSlotRepository;
pub use in_memory_slot_repository::InMemorySlotRepository;
