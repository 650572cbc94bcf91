//! # plague_core - Shared Gameplay Primitives
//!
//! The pieces every gameplay module leans on:
//! - **Identity**: slot indices and stable session ids
//! - **Sessions**: per-player state and the registry that owns it
//! - **Host boundary**: traits the game engine implements
//! - **Settings**: console-variable style configuration
//! - **Scheduling**: next-frame deferrals and cancellable recurring timers
//!
//! The engine calls in; modules call back out through [`host`]. Nothing
//! here blocks or spawns threads.

pub mod error;
pub mod handle;
pub mod host;
pub mod id;
pub mod player;
pub mod schedule;
pub mod settings;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::*;
pub use handle::*;
pub use host::*;
pub use id::*;
pub use player::*;
pub use schedule::*;
pub use settings::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::host::{
        ClassInfo, Effects, Engine, Host, HudMessage, HudSink, ProgressObserver, Storage,
    };
    pub use crate::id::{ClientIndex, UserId};
    pub use crate::player::{MoveType, ObserverMode, PlayerRegistry, PlayerState, Role};
    pub use crate::schedule::{Scheduler, TimerAction, TimerHandle};
    pub use crate::settings::Settings;
}
