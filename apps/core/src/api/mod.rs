// Access layer (adapters for screens)
// Read-only views over store snapshots; nothing here mutates state

pub mod discovery;
pub mod guard;

pub use discovery::{discover_barbers, visible_on_map, MapPin, MAP_SCALE};
pub use guard::{authorize, home_for, Access, Route};
