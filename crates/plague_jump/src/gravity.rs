//! Landing gravity reset
//!
//! Jump pads, leaps, and other effects may leave a player with a temporary
//! gravity. Touching the ground restores the role's base gravity plus any
//! level bonus.

use plague_core::{ClassInfo, ClientIndex, Engine, MoveType, PlayerRegistry};

/// Called when a player's ground entity changes.
///
/// `level_gravity` is the level-derived offset added to the base; pass 0
/// when leveling is off. Returns the gravity written, if any.
pub fn on_ground_changed<E: Engine + ClassInfo>(
    host: &mut E,
    players: &PlayerRegistry,
    client: ClientIndex,
    level_gravity: f32,
) -> Option<f32> {
    let player = players.get(client)?;
    if !host.is_in_game(client) || !host.is_on_ground(client) {
        return None;
    }
    if host.move_type(client) == MoveType::Ladder {
        return None;
    }

    let gravity = host.base_gravity(client, player.role) + level_gravity;
    host.set_gravity(client, gravity);
    Some(gravity)
}
