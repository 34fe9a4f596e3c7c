//! Camera zones and an enemy zone driven by a moving player.
//!
//! This example shows:
//! - Spawning `MapZone` entities directly, without a layout file
//! - Reacting to `CameraEnteredZone` / `CameraExitedZone`
//! - Dressing spawned enemies from an `EnemySpawned` observer
//! - Reporting deaths with `EnemyDefeated`
//!
//! Move with the arrow keys. Walking onto an enemy defeats it.

use core::time::Duration;

use bevy::prelude::*;
use bevy_mapzones_core::prelude::*;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins,
            MapZonesCorePlugin::new(MapZonesConfig {
                debug_draw: true,
                ..default()
            }),
        ))
        .add_systems(Startup, setup)
        .add_systems(Update, (move_player, defeat_touched_enemies))
        .add_observer(announce_enter)
        .add_observer(announce_exit)
        .add_observer(dress_enemy)
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn((Camera2d, Transform::from_xyz(240.0, -160.0, 0.0)));

    commands.spawn((
        Name::new("Player"),
        ZoneTracker,
        Sprite::from_color(Color::srgb(0.2, 0.6, 1.0), Vec2::splat(12.0)),
        Transform::from_xyz(40.0, -40.0, 1.0),
    ));

    commands.spawn((Name::new("Bridge"), MapZone::camera(Zone::new(12, 16, 2, 6))));

    let mut meadow = Zone::new(2, 10, 10, 18);
    meadow
        .add_section(10, 26, 14, 18)
        .expect("meadow sections are well formed");

    let mut spawner = SpawnController::new(Duration::from_secs(2), Duration::from_secs(4));
    spawner.add_enemy("slime", 3);
    spawner.add_enemy("bat", 1);
    spawner
        .add_spawn_section(&meadow, 18, 24, 15, 17)
        .expect("spawn section lies inside the meadow");

    commands.spawn((Name::new("Meadow"), MapZone::enemy(meadow, spawner)));
}

fn move_player(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut player: Query<&mut Transform, With<ZoneTracker>>,
) {
    let Ok(mut transform) = player.single_mut() else {
        return;
    };

    let mut direction = Vec2::ZERO;
    if keys.pressed(KeyCode::ArrowLeft) {
        direction.x -= 1.0;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        direction.x += 1.0;
    }
    if keys.pressed(KeyCode::ArrowUp) {
        direction.y += 1.0;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        direction.y -= 1.0;
    }

    transform.translation += (direction.normalize_or_zero() * 120.0 * time.delta_secs()).extend(0.0);
}

fn defeat_touched_enemies(
    grid: Res<ZoneGrid>,
    player: Query<&Transform, With<ZoneTracker>>,
    enemies: Query<(Entity, &Transform), With<SpawnedEnemy>>,
    mut commands: Commands,
) {
    let Ok(player) = player.single() else {
        return;
    };
    let player_cell = grid.world_to_grid(player.translation.truncate()).floor();

    for (enemy, transform) in &enemies {
        if grid.world_to_grid(transform.translation.truncate()).floor() == player_cell {
            commands.trigger(EnemyDefeated { entity: enemy });
            commands.entity(enemy).despawn();
        }
    }
}

fn announce_enter(trigger: On<CameraEnteredZone>, names: Query<&Name>) {
    if let Ok(name) = names.get(trigger.event().zone) {
        info!("Entered {}", name);
    }
}

fn announce_exit(trigger: On<CameraExitedZone>, names: Query<&Name>) {
    if let Ok(name) = names.get(trigger.event().zone) {
        info!("Left {}", name);
    }
}

fn dress_enemy(trigger: On<EnemySpawned>, mut commands: Commands) {
    let event = trigger.event();
    let color = match event.template.name() {
        "bat" => Color::srgb(0.6, 0.2, 0.8),
        _ => Color::srgb(0.3, 0.9, 0.3),
    };
    commands
        .entity(event.entity)
        .insert(Sprite::from_color(color, Vec2::splat(10.0)));
}
