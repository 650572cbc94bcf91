//! Level-scaled health, speed and gravity

use crate::config::LevelConfig;
use plague_core::{ClassInfo, ClientIndex, Engine, PlayerRegistry};

/// Attribute values written for one player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedAttributes {
    pub health: i32,
    pub speed: f32,
    pub gravity: f32,
}

impl DerivedAttributes {
    /// Class base plus `ratio * level` for each attribute. Health bonuses
    /// round to the nearest point and saturate at the `i32` bounds.
    pub fn compute(config: &LevelConfig, level: i32, health: i32, speed: f32, gravity: f32) -> Self {
        let level = level as f32;
        Self {
            health: health.saturating_add((config.health_ratio * level).round() as i32),
            speed: speed + config.speed_ratio * level,
            gravity: gravity + config.gravity_ratio * level,
        }
    }
}

/// Write level-scaled attributes for one player
pub fn recompute_derived_attributes<E: Engine + ClassInfo>(
    host: &mut E,
    players: &PlayerRegistry,
    config: &LevelConfig,
    client: ClientIndex,
) -> Option<DerivedAttributes> {
    let player = players.get(client)?;
    if !host.is_in_game(client) {
        return None;
    }

    let attributes = DerivedAttributes::compute(
        config,
        player.level,
        host.base_health(client, player.role),
        host.base_speed(client, player.role),
        host.base_gravity(client, player.role),
    );
    host.set_health(client, attributes.health);
    host.set_speed(client, attributes.speed);
    host.set_gravity(client, attributes.gravity);
    Some(attributes)
}

/// Recompute every connected player. Returns how many were updated.
pub fn recompute_all<E: Engine + ClassInfo>(
    host: &mut E,
    players: &PlayerRegistry,
    config: &LevelConfig,
) -> usize {
    if !config.enabled {
        return 0;
    }

    let updated = players
        .clients()
        .into_iter()
        .filter(|&client| recompute_derived_attributes(host, players, config, client).is_some())
        .count();
    log::debug!("Recomputed level attributes for {} players", updated);
    updated
}
