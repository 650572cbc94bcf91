//! Plague HUD - Level Status Overlay
//!
//! A small text block refreshed once a second for every real player.
//!
//! # Features
//!
//! - Zombie, human and spectator colour palettes
//! - Spectators see the player they follow
//! - Level line only while leveling is active
//! - Per-player recurring timers keyed by stable user id
//!
//! # Example
//!
//! ```ignore
//! use plague_hud::prelude::*;
//!
//! let hud = HudDriver::new(HudConfig::from_settings(&settings));
//! hud.arm(&mut scheduler, &mut players, client, now);
//!
//! // From the timer pump
//! if hud.refresh(&mut host, &mut players, &levels, task) == TimerAction::Stop {
//!     scheduler.cancel(handle);
//! }
//! ```

pub mod config;
pub mod driver;
pub mod overlay;

pub mod prelude {
    pub use crate::config::{HudConfig, Palette, HOLD_TIME, REFRESH_INTERVAL};
    pub use crate::driver::{HudDriver, HudTask};
    pub use crate::overlay::{compose, display_target, status_info, ProgressLine, StatusInfo};
}

pub use prelude::*;
