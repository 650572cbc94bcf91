//! In-memory host for tests
//!
//! Records every outbound call so tests can assert on effects, saves,
//! observer notifications and HUD output.

use crate::host::{ClassInfo, Effects, Engine, HudMessage, HudSink, ProgressObserver, Storage};
use crate::id::ClientIndex;
use crate::player::{MoveType, ObserverMode, Role};
use plague_math::{Angles, Vec3};
use std::collections::HashMap;

/// Simulated player as the mock host sees it
#[derive(Debug, Clone)]
pub struct MockPlayer {
    pub name: String,
    pub alive: bool,
    pub on_ground: bool,
    pub move_type: MoveType,
    pub velocity: Vec3,
    pub origin: Vec3,
    pub angles: Angles,
    pub health: i32,
    pub speed: f32,
    pub gravity: f32,
    pub armor: i32,
    pub observer_mode: ObserverMode,
    pub observer_target: Option<ClientIndex>,
}

impl MockPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alive: true,
            on_ground: true,
            move_type: MoveType::Walk,
            velocity: Vec3::ZERO,
            origin: Vec3::ZERO,
            angles: Angles::default(),
            health: 100,
            speed: 1.0,
            gravity: 1.0,
            armor: 0,
            observer_mode: ObserverMode::None,
            observer_target: None,
        }
    }
}

/// Effect fired through [`Effects`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectCall {
    Leap(ClientIndex),
    LevelUp(ClientIndex),
}

/// Recording host
#[derive(Debug, Default)]
pub struct MockHost {
    pub time: f32,
    pub players: HashMap<ClientIndex, MockPlayer>,
    pub base_health: i32,
    pub base_speed: f32,
    pub base_gravity: f32,
    pub teleports: Vec<(ClientIndex, Vec3, Angles, Vec3)>,
    pub saved_levels: Vec<(ClientIndex, i32)>,
    pub saved_experience: Vec<(ClientIndex, i32)>,
    pub effects: Vec<EffectCall>,
    pub level_events: Vec<(ClientIndex, i32)>,
    pub experience_events: Vec<(ClientIndex, i32)>,
    pub hud: Vec<(ClientIndex, HudMessage)>,
    pub replies: Vec<(Option<ClientIndex>, String)>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            base_health: 100,
            base_speed: 1.0,
            base_gravity: 1.0,
            ..Default::default()
        }
    }

    /// Add a live, grounded player
    pub fn with_player(mut self, client: ClientIndex, name: &str) -> Self {
        self.players.insert(client, MockPlayer::new(name));
        self
    }

    pub fn player(&self, client: ClientIndex) -> &MockPlayer {
        &self.players[&client]
    }

    pub fn player_mut(&mut self, client: ClientIndex) -> &mut MockPlayer {
        self.players
            .get_mut(&client)
            .expect("mock player not registered")
    }

    pub fn remove_player(&mut self, client: ClientIndex) {
        self.players.remove(&client);
    }
}

impl Engine for MockHost {
    fn time(&self) -> f32 {
        self.time
    }

    fn is_in_game(&self, client: ClientIndex) -> bool {
        self.players.contains_key(&client)
    }

    fn is_alive(&self, client: ClientIndex) -> bool {
        self.players.get(&client).is_some_and(|p| p.alive)
    }

    fn is_on_ground(&self, client: ClientIndex) -> bool {
        self.players.get(&client).is_some_and(|p| p.on_ground)
    }

    fn move_type(&self, client: ClientIndex) -> MoveType {
        self.players
            .get(&client)
            .map_or(MoveType::Other, |p| p.move_type)
    }

    fn velocity(&self, client: ClientIndex) -> Vec3 {
        self.players.get(&client).map_or(Vec3::ZERO, |p| p.velocity)
    }

    fn set_velocity(&mut self, client: ClientIndex, velocity: Vec3) {
        if let Some(p) = self.players.get_mut(&client) {
            p.velocity = velocity;
        }
    }

    fn origin(&self, client: ClientIndex) -> Vec3 {
        self.players.get(&client).map_or(Vec3::ZERO, |p| p.origin)
    }

    fn eye_angles(&self, client: ClientIndex) -> Angles {
        self.players.get(&client).map_or(Angles::default(), |p| p.angles)
    }

    fn teleport(&mut self, client: ClientIndex, origin: Vec3, angles: Angles, velocity: Vec3) {
        self.teleports.push((client, origin, angles, velocity));
        if let Some(p) = self.players.get_mut(&client) {
            p.origin = origin;
            p.angles = angles;
            p.velocity = velocity;
        }
    }

    fn set_health(&mut self, client: ClientIndex, health: i32) {
        if let Some(p) = self.players.get_mut(&client) {
            p.health = health;
        }
    }

    fn set_speed(&mut self, client: ClientIndex, speed: f32) {
        if let Some(p) = self.players.get_mut(&client) {
            p.speed = speed;
        }
    }

    fn set_gravity(&mut self, client: ClientIndex, gravity: f32) {
        if let Some(p) = self.players.get_mut(&client) {
            p.gravity = gravity;
        }
    }

    fn armor(&self, client: ClientIndex) -> i32 {
        self.players.get(&client).map_or(0, |p| p.armor)
    }

    fn observer_mode(&self, client: ClientIndex) -> ObserverMode {
        self.players
            .get(&client)
            .map_or(ObserverMode::None, |p| p.observer_mode)
    }

    fn observer_target(&self, client: ClientIndex) -> Option<ClientIndex> {
        self.players.get(&client).and_then(|p| p.observer_target)
    }

    fn name(&self, client: Option<ClientIndex>) -> String {
        match client.and_then(|c| self.players.get(&c)) {
            Some(p) => p.name.clone(),
            None => "Console".to_string(),
        }
    }

    fn find_target(&mut self, _issuer: Option<ClientIndex>, selector: &str) -> Option<ClientIndex> {
        self.players
            .iter()
            .find(|(_, p)| p.name == selector)
            .map(|(c, _)| *c)
    }

    fn reply(&mut self, issuer: Option<ClientIndex>, message: &str) {
        self.replies.push((issuer, message.to_string()));
    }
}

impl ClassInfo for MockHost {
    fn base_health(&self, _client: ClientIndex, _role: Role) -> i32 {
        self.base_health
    }

    fn base_speed(&self, _client: ClientIndex, _role: Role) -> f32 {
        self.base_speed
    }

    fn base_gravity(&self, _client: ClientIndex, _role: Role) -> f32 {
        self.base_gravity
    }
}

impl Storage for MockHost {
    fn save_level(&mut self, client: ClientIndex, level: i32) {
        self.saved_levels.push((client, level));
    }

    fn save_experience(&mut self, client: ClientIndex, experience: i32) {
        self.saved_experience.push((client, experience));
    }
}

impl Effects for MockHost {
    fn leap(&mut self, client: ClientIndex) {
        self.effects.push(EffectCall::Leap(client));
    }

    fn level_up(&mut self, client: ClientIndex) {
        self.effects.push(EffectCall::LevelUp(client));
    }
}

impl ProgressObserver for MockHost {
    fn on_level_changed(&mut self, client: ClientIndex, level: i32) {
        self.level_events.push((client, level));
    }

    fn on_experience_changed(&mut self, client: ClientIndex, experience: i32) {
        self.experience_events.push((client, experience));
    }
}

impl HudSink for MockHost {
    fn show_hud(&mut self, client: ClientIndex, message: &HudMessage) {
        self.hud.push((client, message.clone()));
    }
}
