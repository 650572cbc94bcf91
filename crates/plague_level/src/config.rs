//! Level system configuration

use plague_core::Settings;
use serde::{Deserialize, Serialize};

pub const KEY_SYSTEM: &str = "zp_level_system";
pub const KEY_STATISTICS: &str = "zp_level_statistics";
pub const KEY_HEALTH_RATIO: &str = "zp_level_health_ratio";
pub const KEY_SPEED_RATIO: &str = "zp_level_speed_ratio";
pub const KEY_GRAVITY_RATIO: &str = "zp_level_gravity_ratio";
pub const KEY_HUD: &str = "zp_level_hud";

/// Level system settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Master switch for leveling
    pub enabled: bool,
    /// Comma-separated cumulative experience list
    pub statistics: String,
    /// Health per level
    pub health_ratio: f32,
    /// Speed per level
    pub speed_ratio: f32,
    /// Gravity per level
    pub gravity_ratio: f32,
    /// Whether the status overlay runs
    pub hud_enabled: bool,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            statistics: "0,100,200,300,400,500,600,700,800,900,1000".to_string(),
            health_ratio: 10.0,
            speed_ratio: 0.01,
            gravity_ratio: 0.0,
            hud_enabled: true,
        }
    }
}

impl LevelConfig {
    /// Read from settings, keeping defaults for missing keys
    pub fn from_settings(settings: &Settings) -> Self {
        let d = Self::default();
        Self {
            enabled: settings.bool_or(KEY_SYSTEM, d.enabled),
            statistics: settings.str_or(KEY_STATISTICS, &d.statistics).to_string(),
            health_ratio: settings.float_or(KEY_HEALTH_RATIO, d.health_ratio),
            speed_ratio: settings.float_or(KEY_SPEED_RATIO, d.speed_ratio),
            gravity_ratio: settings.float_or(KEY_GRAVITY_RATIO, d.gravity_ratio),
            hud_enabled: settings.bool_or(KEY_HUD, d.hud_enabled),
        }
    }

    /// Keys whose change rebuilds the table and HUD timers
    pub fn is_init_key(key: &str) -> bool {
        matches!(key, KEY_SYSTEM | KEY_STATISTICS | KEY_HUD)
    }

    /// Keys whose change recomputes derived attributes
    pub fn is_ratio_key(key: &str) -> bool {
        matches!(key, KEY_HEALTH_RATIO | KEY_SPEED_RATIO | KEY_GRAVITY_RATIO)
    }
}
