//! # plague - Zombie-Survival Gameplay Modifiers
//!
//! Facade over the gameplay crates:
//! - [`plague_jump`]: jump boost, leap ability, landing gravity
//! - [`plague_level`]: level/experience progression and admin grants
//! - [`plague_hud`]: per-player status overlay
//!
//! The host engine implements the traits in [`plague_core::host`] and
//! forwards its events to a single [`Gameplay`]:
//!
//! ```ignore
//! use plague::prelude::*;
//!
//! let mut gameplay = Gameplay::new(settings);
//! gameplay.on_player_join(client, PlayerState::new(user_id).with_progress(level, exp));
//! gameplay.on_player_spawn(&mut host, client);
//!
//! // Every simulation step
//! gameplay.run_frame(&mut host);
//! // From the host's timer pump
//! gameplay.tick(&mut host, host.time());
//! ```

pub mod gameplay;

pub use gameplay::Gameplay;

pub use plague_core;
pub use plague_hud;
pub use plague_jump;
pub use plague_level;
pub use plague_math;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::gameplay::Gameplay;
    pub use plague_core::prelude::*;
    pub use plague_hud::prelude::*;
    pub use plague_jump::prelude::*;
    pub use plague_level::prelude::*;
    pub use plague_math::prelude::*;
}
