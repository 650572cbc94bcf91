//! Level and experience mutation

use crate::config::LevelConfig;
use crate::thresholds::ThresholdTable;
use plague_core::{
    ClientIndex, Effects, Engine, PlayerRegistry, ProgressObserver, Role, Settings, Storage,
};

/// What a settings change means for the level system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigChange {
    /// Not a level key
    Ignored,
    /// Table rebuilt; HUD timers need re-arming or cancelling
    Reinitialized,
    /// A per-level ratio changed; derived attributes need recomputing
    Ratios,
}

/// Level system state: configuration plus the parsed threshold table
#[derive(Debug, Clone)]
pub struct LevelSystem {
    config: LevelConfig,
    table: ThresholdTable,
}

impl LevelSystem {
    pub fn new(config: LevelConfig) -> Self {
        let table = if config.enabled {
            ThresholdTable::parse(&config.statistics)
        } else {
            ThresholdTable::default()
        };
        log::info!(
            "Level system {} with {} levels",
            if config.enabled { "enabled" } else { "disabled" },
            table.max_level()
        );
        Self { config, table }
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn table(&self) -> &ThresholdTable {
        &self.table
    }

    /// Re-read settings after `key` changed
    pub fn on_config_changed(&mut self, settings: &Settings, key: &str) -> ConfigChange {
        if LevelConfig::is_init_key(key) {
            *self = Self::new(LevelConfig::from_settings(settings));
            ConfigChange::Reinitialized
        } else if LevelConfig::is_ratio_key(key) {
            self.config = LevelConfig::from_settings(settings);
            ConfigChange::Ratios
        } else {
            ConfigChange::Ignored
        }
    }

    /// Leveling is on and has at least one level
    pub fn is_active(&self) -> bool {
        self.config.enabled && !self.table.is_empty()
    }

    /// Gravity offset granted at `level`. Boss roles keep their own
    /// gravity, so elite infected and survivors get 0, as does everyone
    /// while leveling is off.
    pub fn gravity_bonus(&self, level: i32, role: Role) -> f32 {
        if !self.config.enabled || role.is_elite() || role.is_survivor() {
            return 0.0;
        }
        self.config.gravity_ratio * level as f32
    }

    /// Current level of a player
    pub fn level(&self, players: &PlayerRegistry, client: ClientIndex) -> Option<i32> {
        players.get(client).map(|p| p.level)
    }

    /// Current experience of a player
    pub fn experience(&self, players: &PlayerRegistry, client: ClientIndex) -> Option<i32> {
        players.get(client).map(|p| p.experience)
    }

    /// Set a player's level.
    ///
    /// Values below 1 become 1. The observer hears the level before it is
    /// capped to the table. A level-up effect plays unless the value had to
    /// be capped. Returns the stored level, or `None` if leveling is off or
    /// the player is unknown.
    pub fn set_level<H>(
        &self,
        host: &mut H,
        players: &mut PlayerRegistry,
        client: ClientIndex,
        level: i32,
    ) -> Option<i32>
    where
        H: Engine + Storage + Effects + ProgressObserver,
    {
        if !self.is_active() {
            return None;
        }
        let player = players.get_mut(client)?;

        let level = level.max(1);
        host.on_level_changed(client, level);

        let max_level = self.table.max_level();
        let capped = level > max_level;
        player.level = level.min(max_level);
        host.save_level(client, player.level);

        if !capped && host.is_in_game(client) && host.is_alive(client) {
            host.level_up(client);
        }
        log::debug!("{} is now level {}", client, player.level);
        Some(player.level)
    }

    /// Set a player's experience, levelling up as thresholds are crossed.
    ///
    /// Negative values become 0. At max level experience is capped at the
    /// top threshold; below it, one lump can climb several levels. Storage
    /// is written once, with the value left after the cap and cascade. Returns
    /// the stored experience, or `None` if leveling is off or the player is
    /// unknown.
    pub fn set_experience<H>(
        &self,
        host: &mut H,
        players: &mut PlayerRegistry,
        client: ClientIndex,
        experience: i32,
    ) -> Option<i32>
    where
        H: Engine + Storage + Effects + ProgressObserver,
    {
        if !self.is_active() {
            return None;
        }
        let player = players.get_mut(client)?;

        let experience = experience.max(0);
        host.on_experience_changed(client, experience);
        player.experience = experience;

        let max_level = self.table.max_level();
        if player.level >= max_level {
            if let Some(top) = self.table.top() {
                player.experience = player.experience.min(top);
            }
        } else {
            loop {
                let Some(player) = players.get(client) else {
                    break;
                };
                if player.level >= max_level {
                    break;
                }
                match self.table.threshold(player.level) {
                    Some(next) if player.experience >= next => {
                        let next_level = player.level + 1;
                        self.set_level(host, players, client, next_level);
                    }
                    _ => break,
                }
            }
        }

        let stored = players.get(client)?.experience;
        host.save_experience(client, stored);
        Some(stored)
    }
}

impl Default for LevelSystem {
    fn default() -> Self {
        Self::new(LevelConfig::default())
    }
}
