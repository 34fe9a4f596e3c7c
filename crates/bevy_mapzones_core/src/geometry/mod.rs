//! Collision grid geometry: sections and the zones built from them.

pub mod section;
pub mod zone;

pub use section::ZoneSection;
pub use zone::{Zone, encloses};
