//! Host collaborator traits
//!
//! The game engine owns simulation, persistence, and rendering. Gameplay
//! modules talk to it only through these traits; the host implements them
//! once and `Host` bundles them for convenience.

use crate::id::ClientIndex;
use crate::player::{MoveType, ObserverMode, Role};
use plague_math::{Angles, Vec3};

/// Simulation state of connected players
pub trait Engine {
    /// Simulated game time in seconds
    fn time(&self) -> f32;

    /// Player is connected and in game
    fn is_in_game(&self, client: ClientIndex) -> bool;

    fn is_alive(&self, client: ClientIndex) -> bool;

    /// On-ground flag from the movement simulation
    fn is_on_ground(&self, client: ClientIndex) -> bool;

    fn move_type(&self, client: ClientIndex) -> MoveType;

    fn velocity(&self, client: ClientIndex) -> Vec3;

    fn set_velocity(&mut self, client: ClientIndex, velocity: Vec3);

    fn origin(&self, client: ClientIndex) -> Vec3;

    fn eye_angles(&self, client: ClientIndex) -> Angles;

    /// Move a player and override its angles and velocity in one step
    fn teleport(&mut self, client: ClientIndex, origin: Vec3, angles: Angles, velocity: Vec3);

    fn set_health(&mut self, client: ClientIndex, health: i32);

    /// Lagged movement value (speed multiplier)
    fn set_speed(&mut self, client: ClientIndex, speed: f32);

    fn set_gravity(&mut self, client: ClientIndex, gravity: f32);

    fn armor(&self, client: ClientIndex) -> i32;

    fn observer_mode(&self, client: ClientIndex) -> ObserverMode;

    fn observer_target(&self, client: ClientIndex) -> Option<ClientIndex>;

    /// Display name; `None` is the server console
    fn name(&self, client: Option<ClientIndex>) -> String;

    /// Resolve a command target selector. The host reports failures to the
    /// issuer itself.
    fn find_target(&mut self, issuer: Option<ClientIndex>, selector: &str) -> Option<ClientIndex>;

    /// Print a reply to whoever issued a command
    fn reply(&mut self, issuer: Option<ClientIndex>, message: &str);
}

/// Base attributes from the player's assigned class
pub trait ClassInfo {
    fn base_health(&self, client: ClientIndex, role: Role) -> i32;

    fn base_speed(&self, client: ClientIndex, role: Role) -> f32;

    fn base_gravity(&self, client: ClientIndex, role: Role) -> f32;
}

/// Persistence backend
pub trait Storage {
    fn save_level(&mut self, client: ClientIndex, level: i32);

    fn save_experience(&mut self, client: ClientIndex, experience: i32);
}

/// Sound and visual effects
pub trait Effects {
    fn leap(&mut self, client: ClientIndex);

    fn level_up(&mut self, client: ClientIndex);
}

/// Listeners for progression changes from other modules
pub trait ProgressObserver {
    fn on_level_changed(&mut self, _client: ClientIndex, _level: i32) {}

    fn on_experience_changed(&mut self, _client: ClientIndex, _experience: i32) {}
}

/// Screen text for one viewer
#[derive(Debug, Clone, PartialEq)]
pub struct HudMessage {
    /// Rendered text
    pub text: String,
    /// RGBA colour
    pub color: [u8; 4],
    /// Horizontal position (0..1, negative centres)
    pub x: f32,
    /// Vertical position (0..1, negative centres)
    pub y: f32,
    /// Seconds the text stays up
    pub hold_time: f32,
}

/// HUD text channel
pub trait HudSink {
    fn show_hud(&mut self, client: ClientIndex, message: &HudMessage);
}

/// Everything a gameplay module may ask of the host
pub trait Host: Engine + ClassInfo + Storage + Effects + ProgressObserver + HudSink {}

impl<T> Host for T where T: Engine + ClassInfo + Storage + Effects + ProgressObserver + HudSink {}
