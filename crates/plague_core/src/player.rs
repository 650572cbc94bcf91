//! Per-player session state

use crate::id::{ClientIndex, UserId};
use crate::schedule::TimerHandle;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Team/role assignment. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Regular human
    Human,
    /// Regular zombie
    Infected,
    /// Boss zombie (nemesis)
    EliteInfected,
    /// Boss human
    Survivor,
}

impl Default for Role {
    fn default() -> Self {
        Self::Human
    }
}

impl Role {
    /// Zombie side, elite or not
    pub fn is_infected(&self) -> bool {
        matches!(self, Self::Infected | Self::EliteInfected)
    }

    pub fn is_elite(&self) -> bool {
        matches!(self, Self::EliteInfected)
    }

    pub fn is_survivor(&self) -> bool {
        matches!(self, Self::Survivor)
    }
}

/// Spectator camera mode as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObserverMode {
    None,
    DeathCam,
    FreezeCam,
    Fixed,
    FirstPerson,
    ThirdPerson,
    Roaming,
}

impl ObserverMode {
    /// Whether the camera is attached to a specific target
    pub fn follows_target(&self) -> bool {
        matches!(self, Self::FirstPerson | Self::ThirdPerson)
    }
}

/// Movement type as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveType {
    Walk,
    Ladder,
    Noclip,
    Other,
}

/// State this system keeps for one connected player
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Stable session identifier
    pub user_id: UserId,
    /// Bot flag
    pub fake: bool,
    /// Current role
    pub role: Role,
    /// Display name of the assigned class
    pub class_name: String,
    /// Current level (1-based)
    pub level: i32,
    /// Accumulated experience
    pub experience: i32,
    /// Simulated time of the last successful leap
    pub last_leap_time: f32,
    /// Recurring HUD refresh timer, if armed
    pub hud_timer: Option<TimerHandle>,
}

impl PlayerState {
    /// Fresh state for a joining player
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            fake: false,
            role: Role::Human,
            class_name: String::new(),
            level: 1,
            experience: 0,
            last_leap_time: 0.0,
            hud_timer: None,
        }
    }

    /// Mark as a bot
    pub fn with_fake(mut self, fake: bool) -> Self {
        self.fake = fake;
        self
    }

    /// Seed stored progression
    pub fn with_progress(mut self, level: i32, experience: i32) -> Self {
        self.level = level;
        self.experience = experience;
        self
    }
}

/// Session store: one `PlayerState` per connected slot
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    players: HashMap<ClientIndex, PlayerState>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player in a slot, replacing whatever was there
    pub fn join(&mut self, client: ClientIndex, state: PlayerState) {
        self.players.insert(client, state);
    }

    /// Remove a player, returning its last state
    pub fn leave(&mut self, client: ClientIndex) -> Option<PlayerState> {
        self.players.remove(&client)
    }

    pub fn get(&self, client: ClientIndex) -> Option<&PlayerState> {
        self.players.get(&client)
    }

    pub fn get_mut(&mut self, client: ClientIndex) -> Option<&mut PlayerState> {
        self.players.get_mut(&client)
    }

    pub fn contains(&self, client: ClientIndex) -> bool {
        self.players.contains_key(&client)
    }

    /// Resolve a session identifier back to its current slot
    pub fn find_by_user(&self, user_id: UserId) -> Option<ClientIndex> {
        self.players
            .iter()
            .find(|(_, p)| p.user_id == user_id)
            .map(|(c, _)| *c)
    }

    /// Connected slots in ascending order
    pub fn clients(&self) -> Vec<ClientIndex> {
        let mut clients: Vec<_> = self.players.keys().copied().collect();
        clients.sort();
        clients
    }

    /// Number of players on the zombie side
    pub fn infected_count(&self) -> usize {
        self.players.values().filter(|p| p.role.is_infected()).count()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ClientIndex, &mut PlayerState)> {
        self.players.iter_mut().map(|(c, p)| (*c, p))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_predicates() {
        assert!(Role::Infected.is_infected());
        assert!(Role::EliteInfected.is_infected());
        assert!(Role::EliteInfected.is_elite());
        assert!(!Role::Survivor.is_infected());
        assert!(Role::Survivor.is_survivor());
        assert!(!Role::Human.is_infected());
    }

    #[test]
    fn test_find_by_user_survives_slot_reuse() {
        let mut players = PlayerRegistry::new();
        players.join(ClientIndex(1), PlayerState::new(UserId(10)));
        assert_eq!(players.find_by_user(UserId(10)), Some(ClientIndex(1)));

        players.leave(ClientIndex(1));
        players.join(ClientIndex(1), PlayerState::new(UserId(11)));

        assert_eq!(players.find_by_user(UserId(10)), None);
        assert_eq!(players.find_by_user(UserId(11)), Some(ClientIndex(1)));
    }

    #[test]
    fn test_infected_count() {
        let mut players = PlayerRegistry::new();
        for (i, role) in [Role::Infected, Role::EliteInfected, Role::Human, Role::Survivor]
            .into_iter()
            .enumerate()
        {
            let mut state = PlayerState::new(UserId(i as u32));
            state.role = role;
            players.join(ClientIndex(i as u32 + 1), state);
        }
        assert_eq!(players.infected_count(), 2);
        assert_eq!(players.clients().len(), 4);
    }
}
