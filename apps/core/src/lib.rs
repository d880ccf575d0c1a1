//! BarberBook Core Library
//!
//! Booking core for a barbershop marketplace: the domain store that owns
//! users, barber profiles and appointments, the ranking engine behind barber
//! discovery, and the read-only access views built on top of them.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ranking;
pub mod store;
