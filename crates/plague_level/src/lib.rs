//! Plague Level - Level Progression
//!
//! Per-player level and experience on top of a cumulative threshold table.
//!
//! # Features
//!
//! - Threshold table parsed from a comma-separated statistics list
//! - Experience grants that climb several levels at once
//! - Level-scaled health, speed and gravity
//! - Admin grant commands with audit logging
//!
//! # Example
//!
//! ```ignore
//! use plague_level::prelude::*;
//!
//! let levels = LevelSystem::new(LevelConfig::from_settings(&settings));
//!
//! // Award experience; crossing thresholds levels the player up
//! let current = levels.experience(&players, client).unwrap_or(0);
//! levels.set_experience(&mut host, &mut players, client, current + 50);
//!
//! // Apply level bonuses to everyone after a ratio change
//! recompute_all(&mut host, &players, levels.config());
//! ```

pub mod attributes;
pub mod command;
pub mod config;
pub mod progression;
pub mod thresholds;

pub mod prelude {
    pub use crate::attributes::{recompute_all, recompute_derived_attributes, DerivedAttributes};
    pub use crate::command::{grant_experience, grant_level, CommandError, Grant, GrantReceipt};
    pub use crate::config::LevelConfig;
    pub use crate::progression::{ConfigChange, LevelSystem};
    pub use crate::thresholds::ThresholdTable;
}

pub use prelude::*;
