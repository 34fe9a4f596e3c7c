//! Building zone entities from loaded layout assets.

use core::time::Duration;

use bevy::prelude::*;
use bevy_mapzones_assets::prelude::{
    EnemyZoneDefinition, ZoneBehaviorDefinition, ZoneDefinition, ZoneLayoutAsset,
};

use crate::camera::CameraPresence;
use crate::components::{MapZone, ZoneBehavior, ZoneLayout, ZoneOf, ZonesInLayout};
use crate::config::MapZonesConfig;
use crate::error::ZoneError;
use crate::events::ZoneLayoutSpawned;
use crate::geometry::Zone;
use crate::spawn::SpawnController;

/// Marker component to trigger layout respawning.
///
/// Add this component to despawn the layout's zones and build them again from
/// the current asset.
#[derive(Component)]
pub struct RespawnZoneLayout;

/// A [`MapZone`] built from a definition, with the number of sections that
/// were dropped along the way.
#[derive(Debug, Clone)]
pub struct BuiltZone {
    pub map_zone: MapZone,
    pub rejected_sections: usize,
}

/// Build the [`MapZone`] described by `definition`.
///
/// Malformed sections and spawn sections outside the zone are dropped and
/// counted. The interaction icon is left unset since loading it needs an
/// `AssetServer`.
///
/// # Errors
///
/// [`ZoneError::EmptyZone`] when no section of the zone is valid.
pub fn build_map_zone(
    definition: &ZoneDefinition,
    config: &MapZonesConfig,
) -> Result<BuiltZone, ZoneError> {
    let mut zone = Zone::default();
    let mut rejected_sections = 0;

    for section in &definition.sections {
        if zone
            .add_section(section.left, section.right, section.top, section.bottom)
            .is_err()
        {
            rejected_sections += 1;
        }
    }

    if zone.is_empty() {
        warn!("Zone '{}' has no valid section, skipping it", definition.name);
        return Err(ZoneError::EmptyZone(definition.name.clone()));
    }

    let behavior = match &definition.behavior {
        ZoneBehaviorDefinition::Plain => ZoneBehavior::Plain,
        ZoneBehaviorDefinition::Camera => ZoneBehavior::Camera(CameraPresence::default()),
        ZoneBehaviorDefinition::Enemy(enemy) => {
            let (spawner, rejected) = build_spawner(enemy, &zone, config);
            rejected_sections += rejected;
            ZoneBehavior::Enemy(spawner)
        }
    };

    Ok(BuiltZone {
        map_zone: MapZone { zone, behavior },
        rejected_sections,
    })
}

fn build_spawner(
    definition: &EnemyZoneDefinition,
    roam: &Zone,
    config: &MapZonesConfig,
) -> (SpawnController, usize) {
    let spawn_time = definition
        .spawn_time_ms
        .map_or_else(|| config.default_spawn_time(), Duration::from_millis);
    let dead_time = definition
        .dead_time_ms
        .map_or_else(|| config.default_dead_time(), Duration::from_millis);

    let mut spawner = SpawnController::new(spawn_time, dead_time);
    spawner.set_enabled(definition.enabled);
    spawner.set_roaming_restrained(definition.roaming_restrained);
    spawner.set_spawns_left(definition.spawns_left);
    spawner.set_max_spawn_attempts(config.max_spawn_attempts);

    let rejected = definition
        .spawn_sections
        .iter()
        .filter(|section| {
            spawner
                .add_spawn_section(roam, section.left, section.right, section.top, section.bottom)
                .is_err()
        })
        .count();

    for enemy in &definition.enemies {
        spawner.add_enemy(enemy.template.as_str(), enemy.count);
    }

    (spawner, rejected)
}

/// Reactive system that spawns zone entities once a `ZoneLayoutAsset` is
/// loaded.
///
/// Runs in `PreUpdate` before the zone update systems.
///
/// # Triggers
///
/// - `Without<ZonesInLayout>` - layout not spawned yet
/// - `With<RespawnZoneLayout>` - manual respawn requested
///
/// On respawn the previous zones are despawned together with the enemies they
/// spawned.
pub fn process_loaded_layouts(
    asset_server: Option<Res<AssetServer>>,
    layout_assets: Option<Res<Assets<ZoneLayoutAsset>>>,
    config: Res<MapZonesConfig>,
    mut commands: Commands,
    zones: Query<&MapZone>,
    layout_query: Query<
        (Entity, &ZoneLayout, Option<&ZonesInLayout>),
        Or<(Without<ZonesInLayout>, With<RespawnZoneLayout>)>,
    >,
) {
    let Some(layout_assets) = layout_assets else {
        return;
    };

    for (layout_entity, layout, previous) in &layout_query {
        let Some(layout_asset) = layout_assets.get(&layout.handle) else {
            if let Some(server) = &asset_server
                && server.load_state(&layout.handle).is_failed()
            {
                error!("Zone layout for entity {:?} failed to load", layout_entity);
                commands.entity(layout_entity).insert(ZonesInLayout::default());
            }
            continue;
        };

        let layout_name = asset_server
            .as_ref()
            .and_then(|server| server.get_path(&layout.handle))
            .and_then(|path| {
                path.path()
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "Zones".to_string());

        if let Some(previous) = previous {
            for &zone_entity in &previous.0 {
                // Enemies go with their zone, the new spawner starts from an empty roster.
                if let Some(spawner) = zones.get(zone_entity).ok().and_then(MapZone::spawner) {
                    for (_, enemy) in spawner.live_enemies() {
                        if enemy != Entity::PLACEHOLDER {
                            commands.entity(enemy).try_despawn();
                        }
                    }
                    debug!(
                        "Despawned {} enemies of zone {:?}",
                        spawner.active_count(),
                        zone_entity
                    );
                }
                commands.entity(zone_entity).try_despawn();
            }
        }

        let mut zone_entities = Vec::with_capacity(layout_asset.zones.len());
        let mut rejected_sections = 0;
        let mut skipped_zones = 0;

        for definition in &layout_asset.zones {
            let Ok(built) = build_map_zone(definition, &config) else {
                skipped_zones += 1;
                continue;
            };
            rejected_sections += built.rejected_sections;

            let mut map_zone = built.map_zone;
            if let (Some(server), Some(icon)) = (&asset_server, &definition.interaction_icon) {
                map_zone
                    .zone
                    .set_interaction_icon(Some(server.load(icon.clone())));
            }

            let zone_entity = commands
                .spawn((
                    Name::new(definition.name.clone()),
                    map_zone,
                    ZoneOf(layout_entity),
                ))
                .id();
            zone_entities.push(zone_entity);
        }

        info!(
            "Spawned {} zones from layout '{}' ({} sections rejected, {} zones skipped)",
            zone_entities.len(),
            layout_name,
            rejected_sections,
            skipped_zones
        );

        commands
            .entity(layout_entity)
            .insert((
                Name::new(format!("Zones: {}", layout_name)),
                ZonesInLayout(zone_entities),
            ))
            .remove::<RespawnZoneLayout>()
            .trigger(|entity| ZoneLayoutSpawned { entity });
    }
}
