//! Plague Jump - Jump Boost and Leap
//!
//! Movement modifiers layered on top of the host's movement simulation.
//!
//! # Features
//!
//! - Jump boost: rescales a jump one step after it starts
//! - Bunny-hop guard: fast horizontal jumps keep their x/y speed
//! - Leap: role-gated, cooldown-limited launch along the view yaw
//! - Landing gravity reset with level bonus
//!
//! # Example
//!
//! ```ignore
//! use plague_jump::prelude::*;
//!
//! let mut jump = JumpModifier::new(JumpConfig::from_settings(&settings));
//!
//! // Host jump event: rescale next step
//! jump.on_jump_event(&players, &mut scheduler, client);
//!
//! // Ability key
//! let outcome = jump.on_leap_request(&mut host, &mut players, client);
//! ```

pub mod boost;
pub mod config;
pub mod gravity;
pub mod leap;

use plague_core::{
    ClassInfo, ClientIndex, Effects, Engine, PlayerRegistry, Scheduler, Settings,
};
use plague_math::Vec3;

pub mod prelude {
    pub use crate::boost::{scale_jump_velocity, JumpTask};
    pub use crate::config::{JumpConfig, LeapMode, LeapTuning};
    pub use crate::leap::{LeapOutcome, LEAP_PITCH};
    pub use crate::JumpModifier;
}

pub use prelude::*;

/// Jump boost and leap state for the whole server
#[derive(Debug, Clone)]
pub struct JumpModifier {
    config: JumpConfig,
}

impl JumpModifier {
    pub fn new(config: JumpConfig) -> Self {
        if config.enabled {
            log::info!("Jump boost hooked");
        }
        Self { config }
    }

    pub fn config(&self) -> &JumpConfig {
        &self.config
    }

    /// Whether jump events are currently hooked
    pub fn is_hooked(&self) -> bool {
        self.config.enabled
    }

    /// Re-read settings after `key` changed. Returns whether it was ours.
    pub fn on_config_changed(&mut self, settings: &Settings, key: &str) -> bool {
        if !JumpConfig::is_jump_key(key) {
            return false;
        }

        let was_hooked = self.config.enabled;
        self.config = JumpConfig::from_settings(settings);
        match (was_hooked, self.config.enabled) {
            (false, true) => log::info!("Jump boost hooked"),
            (true, false) => log::info!("Jump boost unhooked"),
            _ => {}
        }
        true
    }

    /// Host jump event. Ignored while unhooked.
    pub fn on_jump_event<T>(
        &self,
        players: &PlayerRegistry,
        scheduler: &mut Scheduler<T>,
        client: ClientIndex,
    ) -> bool
    where
        T: From<JumpTask> + Clone,
    {
        if !self.config.enabled {
            return false;
        }
        boost::on_jump_event(players, scheduler, client)
    }

    /// Deferred half of the jump boost
    pub fn apply_jump_scale<E: Engine>(
        &self,
        host: &mut E,
        players: &PlayerRegistry,
        task: JumpTask,
    ) -> Option<Vec3> {
        boost::apply_jump_scale(host, players, &self.config, task)
    }

    /// Ability input
    pub fn on_leap_request<E: Engine + Effects>(
        &self,
        host: &mut E,
        players: &mut PlayerRegistry,
        client: ClientIndex,
    ) -> LeapOutcome {
        leap::on_leap_request(host, players, &self.config, client)
    }

    /// Ground contact changed
    pub fn on_ground_changed<E: Engine + ClassInfo>(
        &self,
        host: &mut E,
        players: &PlayerRegistry,
        client: ClientIndex,
        level_gravity: f32,
    ) -> Option<f32> {
        gravity::on_ground_changed(host, players, client, level_gravity)
    }
}

impl Default for JumpModifier {
    fn default() -> Self {
        Self::new(JumpConfig::default())
    }
}
