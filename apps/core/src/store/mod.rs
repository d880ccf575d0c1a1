//! Domain store
//!
//! The only component allowed to mutate users, barber profiles and
//! appointments. Everyone else works from owned snapshots.

pub mod domain_store;
pub mod snapshot;

pub use domain_store::DomainStore;
pub use snapshot::StoreSnapshot;
