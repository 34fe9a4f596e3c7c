//! Systems and observers driving zone entities.

pub mod icons;
pub mod layout;
pub mod lifecycle;
pub mod update;

pub use icons::sync_interaction_icons;
pub use layout::{BuiltZone, RespawnZoneLayout, build_map_zone, process_loaded_layouts};
pub use lifecycle::on_enemy_defeated;
pub use update::{update_camera_zones, update_enemy_zones};
