//! Recurring overlay timers
//!
//! One timer per real player. The timer task carries the player's stable
//! [`UserId`] so a refresh after the slot was reused does not draw onto the
//! new occupant.

use crate::config::HudConfig;
use crate::overlay;
use plague_core::{
    ClientIndex, Engine, HudSink, PlayerRegistry, Scheduler, TimerAction, TimerHandle, UserId,
};
use plague_level::LevelSystem;

/// Payload of an overlay timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudTask {
    pub user_id: UserId,
}

/// Overlay timer bookkeeping
#[derive(Debug, Clone, Default)]
pub struct HudDriver {
    config: HudConfig,
}

impl HudDriver {
    pub fn new(config: HudConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HudConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: HudConfig) {
        self.config = config;
    }

    /// (Re)start the overlay timer for `client`. Any previous timer is
    /// cancelled first. Bots never get one.
    pub fn arm<T>(
        &self,
        scheduler: &mut Scheduler<T>,
        players: &mut PlayerRegistry,
        client: ClientIndex,
        now: f32,
    ) -> Option<TimerHandle>
    where
        T: From<HudTask> + Clone,
    {
        let player = players.get_mut(client)?;
        if player.fake {
            return None;
        }

        if let Some(old) = player.hud_timer.take() {
            scheduler.cancel(old);
        }
        let task = HudTask {
            user_id: player.user_id,
        };
        let handle = scheduler.every(self.config.interval, now, T::from(task));
        player.hud_timer = Some(handle);
        log::debug!("HUD timer armed for {}", client);
        Some(handle)
    }

    /// Stop the overlay timer for `client`, if any
    pub fn disarm<T: Clone>(
        &self,
        scheduler: &mut Scheduler<T>,
        players: &mut PlayerRegistry,
        client: ClientIndex,
    ) -> bool {
        let Some(handle) = players.get_mut(client).and_then(|p| p.hud_timer.take()) else {
            return false;
        };
        log::debug!("HUD timer cancelled for {}", client);
        scheduler.cancel(handle)
    }

    /// Stop every overlay timer
    pub fn disarm_all<T: Clone>(&self, scheduler: &mut Scheduler<T>, players: &mut PlayerRegistry) {
        for (_, player) in players.iter_mut() {
            if let Some(handle) = player.hud_timer.take() {
                scheduler.cancel(handle);
            }
        }
    }

    /// One refresh tick. Draws the overlay when there is something to show
    /// and asks for the timer to stop once its player has left.
    pub fn refresh<H: Engine + HudSink>(
        &self,
        host: &mut H,
        players: &mut PlayerRegistry,
        levels: &LevelSystem,
        task: HudTask,
    ) -> TimerAction {
        let Some(viewer) = players.find_by_user(task.user_id) else {
            return TimerAction::Stop;
        };
        if !host.is_in_game(viewer) {
            if let Some(player) = players.get_mut(viewer) {
                player.hud_timer = None;
            }
            return TimerAction::Stop;
        }

        if let Some(message) = overlay::compose(host, players, levels, &self.config, viewer) {
            host.show_hud(viewer, &message);
        }
        TimerAction::Continue
    }
}
