// Barber domain module
// Contains the barber profile and the services and portfolio it carries

pub mod profile;
pub mod value_objects;

pub use profile::{BarberProfile, DEFAULT_SHOP_LOCATION};
pub use value_objects::{Coordinates, MediaKind, PortfolioItem, Service, Shop};
