//! Jump velocity scaling
//!
//! The host fires its jump event before the jump's initial velocity is
//! final, so the rescale runs one simulation step later. The deferred task
//! carries the session id; a player who left in between is skipped.

use crate::config::JumpConfig;
use plague_core::{ClientIndex, Engine, PlayerRegistry, Scheduler, UserId};
use plague_math::Vec3;

/// Deferred rescale for one player's jump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpTask {
    pub user_id: UserId,
}

/// Scale a jump velocity.
///
/// x/y are only scaled while the horizontal speed is below the cap, so
/// chained bunny hops do not compound. z is always scaled.
pub fn scale_jump_velocity(velocity: Vec3, config: &JumpConfig) -> Vec3 {
    let horizontal = if velocity.horizontal_length() < config.max_boost_speed {
        config.horizontal_multiplier
    } else {
        1.0
    };
    velocity.scale_axes(horizontal, config.vertical_multiplier)
}

/// Queue the rescale for the next step. Returns whether a task was queued.
pub fn on_jump_event<T>(
    players: &PlayerRegistry,
    scheduler: &mut Scheduler<T>,
    client: ClientIndex,
) -> bool
where
    T: From<JumpTask> + Clone,
{
    let Some(player) = players.get(client) else {
        return false;
    };
    scheduler.defer(T::from(JumpTask {
        user_id: player.user_id,
    }));
    true
}

/// Run a deferred rescale. Returns the new velocity, or `None` if the
/// player is gone.
pub fn apply_jump_scale<E: Engine>(
    host: &mut E,
    players: &PlayerRegistry,
    config: &JumpConfig,
    task: JumpTask,
) -> Option<Vec3> {
    let client = players.find_by_user(task.user_id)?;
    if !host.is_in_game(client) {
        return None;
    }

    let velocity = scale_jump_velocity(host.velocity(client), config);
    host.set_velocity(client, velocity);
    Some(velocity)
}
