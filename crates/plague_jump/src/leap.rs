//! Leap: a cooldown-gated directional launch

use crate::config::{JumpConfig, LeapMode};
use plague_core::{ClientIndex, Effects, Engine, PlayerRegistry, Role};
use plague_math::Vec3;

/// Fixed launch pitch in degrees (negative is upward)
pub const LEAP_PITCH: f32 = -30.0;

/// Result of a leap request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LeapOutcome {
    /// Player was launched with this velocity
    Launched(Vec3),
    /// No session for this slot
    NoPlayer,
    /// Not standing on the ground
    Airborne,
    /// Role may not leap under the current settings
    NotAllowed,
    /// Cooldown has this many seconds left
    CoolingDown(f32),
}

impl LeapOutcome {
    pub fn is_launched(&self) -> bool {
        matches!(self, Self::Launched(_))
    }
}

/// Cooldown for a role, or `None` if it may not leap right now
pub fn leap_cooldown(config: &JumpConfig, role: Role, infected_count: usize) -> Option<f32> {
    match role {
        Role::EliteInfected => config.elite.enabled.then_some(config.elite.cooldown),
        Role::Infected => match config.infected_leap {
            LeapMode::Disabled => None,
            LeapMode::SingleOnly if infected_count > 1 => None,
            _ => Some(config.infected.cooldown),
        },
        Role::Survivor => config.survivor.enabled.then_some(config.survivor.cooldown),
        Role::Human => None,
    }
}

/// Handle a leap request.
///
/// Checks run in order: grounded, role gate, cooldown. Any failure leaves
/// the player untouched. On success the cooldown is stamped first, then the
/// player is pushed along its view yaw at [`LEAP_PITCH`] with its real eye
/// angles preserved.
pub fn on_leap_request<E: Engine + Effects>(
    host: &mut E,
    players: &mut PlayerRegistry,
    config: &JumpConfig,
    client: ClientIndex,
) -> LeapOutcome {
    if !players.contains(client) {
        return LeapOutcome::NoPlayer;
    }
    if !host.is_on_ground(client) {
        return LeapOutcome::Airborne;
    }

    let infected_count = players.infected_count();
    let Some(player) = players.get_mut(client) else {
        return LeapOutcome::NoPlayer;
    };
    let role = player.role;
    let Some(cooldown) = leap_cooldown(config, role, infected_count) else {
        return LeapOutcome::NotAllowed;
    };

    let now = host.time();
    let elapsed = now - player.last_leap_time;
    if elapsed < cooldown {
        log::debug!("Leap for {} rejected, {:.2}s cooldown left", client, cooldown - elapsed);
        return LeapOutcome::CoolingDown(cooldown - elapsed);
    }
    player.last_leap_time = now;

    let origin = host.origin(client);
    let angles = host.eye_angles(client);
    let velocity = angles.with_pitch(LEAP_PITCH).forward() * config.leap_force(role);

    host.teleport(client, origin, angles, velocity);
    host.leap(client);
    log::debug!("{} ({:?}) leaped with {:?}", client, role, velocity);

    LeapOutcome::Launched(velocity)
}
