//! Overlay colours and placement

use plague_core::Settings;
use serde::{Deserialize, Serialize};

pub const KEY_X: &str = "zp_level_hud_X";
pub const KEY_Y: &str = "zp_level_hud_Y";

/// Seconds each message stays on screen
pub const HOLD_TIME: f32 = 1.1;

/// Seconds between refreshes
pub const REFRESH_INTERVAL: f32 = 1.0;

/// Which colour set a message uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Palette {
    /// Alive infected viewer
    Zombie,
    /// Alive human viewer, survivors included
    Human,
    /// Dead viewer watching someone
    Spectator,
}

impl Palette {
    /// Settings prefix for this palette's channels
    pub fn key_prefix(&self) -> &'static str {
        match self {
            Self::Zombie => "zp_level_hud_zombie",
            Self::Human => "zp_level_hud_human",
            Self::Spectator => "zp_level_hud_spectator",
        }
    }

    /// Settings key of one channel (`'R'`, `'G'`, `'B'` or `'A'`)
    pub fn channel_key(&self, channel: char) -> String {
        format!("{}_{}", self.key_prefix(), channel)
    }
}

/// HUD settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudConfig {
    /// Zombie colour (RGBA)
    pub zombie_color: [u8; 4],
    /// Human colour (RGBA)
    pub human_color: [u8; 4],
    /// Spectator colour (RGBA)
    pub spectator_color: [u8; 4],
    /// Horizontal position
    pub x: f32,
    /// Vertical position
    pub y: f32,
    pub hold_time: f32,
    pub interval: f32,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            zombie_color: [255, 0, 0, 255],   // Red
            human_color: [0, 255, 0, 255],    // Green
            spectator_color: [255, 255, 255, 255],
            x: 0.02,
            y: 0.885,
            hold_time: HOLD_TIME,
            interval: REFRESH_INTERVAL,
        }
    }
}

impl HudConfig {
    /// Read from settings, keeping defaults for missing keys
    pub fn from_settings(settings: &Settings) -> Self {
        let d = Self::default();
        Self {
            zombie_color: read_color(settings, Palette::Zombie, d.zombie_color),
            human_color: read_color(settings, Palette::Human, d.human_color),
            spectator_color: read_color(settings, Palette::Spectator, d.spectator_color),
            x: settings.float_or(KEY_X, d.x),
            y: settings.float_or(KEY_Y, d.y),
            ..d
        }
    }

    pub fn color(&self, palette: Palette) -> [u8; 4] {
        match palette {
            Palette::Zombie => self.zombie_color,
            Palette::Human => self.human_color,
            Palette::Spectator => self.spectator_color,
        }
    }

    /// Colour and position keys
    pub fn is_hud_key(key: &str) -> bool {
        if key == KEY_X || key == KEY_Y {
            return true;
        }
        [Palette::Zombie, Palette::Human, Palette::Spectator]
            .iter()
            .any(|p| {
                key.strip_prefix(p.key_prefix())
                    .is_some_and(|rest| matches!(rest, "_R" | "_G" | "_B" | "_A"))
            })
    }
}

fn read_color(settings: &Settings, palette: Palette, default: [u8; 4]) -> [u8; 4] {
    let mut color = default;
    for (slot, channel) in color.iter_mut().zip(['R', 'G', 'B', 'A']) {
        let value = settings.int_or(&palette.channel_key(channel), *slot as i64);
        *slot = value.clamp(0, 255) as u8;
    }
    color
}
