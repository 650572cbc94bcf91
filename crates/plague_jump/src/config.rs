//! Jump and leap configuration

use plague_core::{Role, Settings};
use serde::{Deserialize, Serialize};

pub const KEY_ENABLE: &str = "zp_jumpboost_enable";
pub const KEY_MULTIPLIER: &str = "zp_jumpboost_multiplier";
pub const KEY_HEIGHT_MULTIPLIER: &str = "zp_jumpboost_height_multiplier";
pub const KEY_MAX: &str = "zp_jumpboost_max";
pub const KEY_LEAP_ZOMBIE: &str = "zp_leap_zombies";
pub const KEY_LEAP_ZOMBIE_FORCE: &str = "zp_leap_zombies_force";
pub const KEY_LEAP_ZOMBIE_COOLDOWN: &str = "zp_leap_zombies_cooldown";
pub const KEY_LEAP_NEMESIS: &str = "zp_leap_nemesis";
pub const KEY_LEAP_NEMESIS_FORCE: &str = "zp_leap_nemesis_force";
pub const KEY_LEAP_NEMESIS_COOLDOWN: &str = "zp_leap_nemesis_cooldown";
pub const KEY_LEAP_SURVIVOR: &str = "zp_leap_survivor";
pub const KEY_LEAP_SURVIVOR_FORCE: &str = "zp_leap_survivor_force";
pub const KEY_LEAP_SURVIVOR_COOLDOWN: &str = "zp_leap_survivor_cooldown";

/// Leap availability for regular zombies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeapMode {
    /// No leap
    Disabled,
    /// Always available
    Enabled,
    /// Only while a single zombie is alive
    SingleOnly,
}

impl LeapMode {
    /// Map the numeric setting: 0 off, 2 single-only, anything else on
    pub fn from_setting(value: i64) -> Self {
        match value {
            0 => Self::Disabled,
            2 => Self::SingleOnly,
            _ => Self::Enabled,
        }
    }
}

impl Default for LeapMode {
    fn default() -> Self {
        Self::Disabled
    }
}

/// Per-role leap tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeapTuning {
    /// Whether this role may leap at all
    pub enabled: bool,
    /// Launch speed
    pub force: f32,
    /// Seconds between leaps
    pub cooldown: f32,
}

impl LeapTuning {
    pub fn new(enabled: bool, force: f32, cooldown: f32) -> Self {
        Self {
            enabled,
            force,
            cooldown,
        }
    }
}

/// Jump boost and leap configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JumpConfig {
    /// Whether jump events are rescaled
    pub enabled: bool,
    /// Multiplier for x/y
    pub horizontal_multiplier: f32,
    /// Multiplier for z
    pub vertical_multiplier: f32,
    /// Horizontal speed at or above which x/y are left alone (bunny hops)
    pub max_boost_speed: f32,
    /// Regular zombie leap mode
    pub infected_leap: LeapMode,
    /// Regular zombie force/cooldown (`enabled` is unused, see `infected_leap`)
    pub infected: LeapTuning,
    /// Nemesis leap
    pub elite: LeapTuning,
    /// Survivor leap
    pub survivor: LeapTuning,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            horizontal_multiplier: 1.1,
            vertical_multiplier: 1.1,
            max_boost_speed: 300.0,
            infected_leap: LeapMode::Disabled,
            infected: LeapTuning::new(true, 500.0, 5.0),
            elite: LeapTuning::new(true, 500.0, 5.0),
            survivor: LeapTuning::new(false, 500.0, 5.0),
        }
    }
}

impl JumpConfig {
    /// Read from settings, keeping defaults for missing keys
    pub fn from_settings(settings: &Settings) -> Self {
        let d = Self::default();
        let horizontal = settings.float_or(KEY_MULTIPLIER, d.horizontal_multiplier);

        Self {
            enabled: settings.bool_or(KEY_ENABLE, d.enabled),
            horizontal_multiplier: horizontal,
            vertical_multiplier: settings.float_or(KEY_HEIGHT_MULTIPLIER, horizontal),
            max_boost_speed: settings.float_or(KEY_MAX, d.max_boost_speed),
            infected_leap: LeapMode::from_setting(settings.int_or(KEY_LEAP_ZOMBIE, 0)),
            infected: LeapTuning::new(
                true,
                settings.float_or(KEY_LEAP_ZOMBIE_FORCE, d.infected.force),
                settings.float_or(KEY_LEAP_ZOMBIE_COOLDOWN, d.infected.cooldown),
            ),
            elite: LeapTuning::new(
                settings.bool_or(KEY_LEAP_NEMESIS, d.elite.enabled),
                settings.float_or(KEY_LEAP_NEMESIS_FORCE, d.elite.force),
                settings.float_or(KEY_LEAP_NEMESIS_COOLDOWN, d.elite.cooldown),
            ),
            survivor: LeapTuning::new(
                settings.bool_or(KEY_LEAP_SURVIVOR, d.survivor.enabled),
                settings.float_or(KEY_LEAP_SURVIVOR_FORCE, d.survivor.force),
                settings.float_or(KEY_LEAP_SURVIVOR_COOLDOWN, d.survivor.cooldown),
            ),
        }
    }

    /// Leap force for a role. Humans have none.
    pub fn leap_force(&self, role: Role) -> f32 {
        match role {
            Role::Survivor => self.survivor.force,
            Role::EliteInfected => self.elite.force,
            Role::Infected => self.infected.force,
            Role::Human => 0.0,
        }
    }

    /// Whether a key is one this module reads
    pub fn is_jump_key(key: &str) -> bool {
        key.starts_with("zp_jumpboost_") || key.starts_with("zp_leap_")
    }
}
