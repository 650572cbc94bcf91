//! Host lifecycle wiring
//!
//! `Gameplay` owns the shared session registry and two schedulers, forwards
//! host events to the jump, level and HUD modules, and runs their deferred
//! and recurring work when the host pumps it. Jump rescales only ever wait
//! for the next frame; overlay refreshes only ever run on timers.

use plague_core::{
    ClientIndex, Engine, Host, PlayerRegistry, PlayerState, Role, Scheduler, Settings,
    TimerAction, TimerHandle,
};
use plague_hud::{HudConfig, HudDriver, HudTask};
use plague_jump::{JumpConfig, JumpModifier, JumpTask, LeapOutcome};
use plague_level::{
    grant_experience, grant_level, recompute_all, recompute_derived_attributes, CommandError,
    ConfigChange, GrantReceipt, LevelConfig, LevelSystem,
};

/// All gameplay modifiers for one server
pub struct Gameplay {
    settings: Settings,
    players: PlayerRegistry,
    frames: Scheduler<JumpTask>,
    timers: Scheduler<HudTask>,
    jump: JumpModifier,
    levels: LevelSystem,
    hud: HudDriver,
}

impl Gameplay {
    /// Build every module from the current settings
    pub fn new(settings: Settings) -> Self {
        let jump = JumpModifier::new(JumpConfig::from_settings(&settings));
        let levels = LevelSystem::new(LevelConfig::from_settings(&settings));
        let hud = HudDriver::new(HudConfig::from_settings(&settings));
        Self {
            settings,
            players: PlayerRegistry::new(),
            frames: Scheduler::new(),
            timers: Scheduler::new(),
            jump,
            levels,
            hud,
        }
    }

    /// Load settings from a flat JSON object
    pub fn from_json(json: &str) -> plague_core::Result<Self> {
        Ok(Self::new(Settings::from_json(json)?))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Jump rescales waiting for the next frame
    pub fn frames(&self) -> &Scheduler<JumpTask> {
        &self.frames
    }

    /// Recurring overlay refreshes
    pub fn timers(&self) -> &Scheduler<HudTask> {
        &self.timers
    }

    pub fn jump(&self) -> &JumpModifier {
        &self.jump
    }

    pub fn levels(&self) -> &LevelSystem {
        &self.levels
    }

    pub fn hud(&self) -> &HudDriver {
        &self.hud
    }

    /// A console variable changed. Returns whether the stored value differed.
    pub fn on_config_changed<H: Host>(&mut self, host: &mut H, key: &str, value: &str) -> bool {
        if !self.settings.set(key, value) {
            return false;
        }
        log::debug!("{} = \"{}\"", key, value);

        self.jump.on_config_changed(&self.settings, key);

        match self.levels.on_config_changed(&self.settings, key) {
            ConfigChange::Reinitialized => self.reset_hud_timers(host.time()),
            ConfigChange::Ratios => {
                recompute_all(host, &self.players, self.levels.config());
            }
            ConfigChange::Ignored => {}
        }

        if HudConfig::is_hud_key(key) {
            self.hud.set_config(HudConfig::from_settings(&self.settings));
        }
        true
    }

    /// Arm or cancel every overlay timer to match the HUD switch
    fn reset_hud_timers(&mut self, now: f32) {
        if !self.levels.config().hud_enabled {
            self.hud.disarm_all(&mut self.timers, &mut self.players);
            return;
        }
        for client in self.players.clients() {
            self.hud.arm(&mut self.timers, &mut self.players, client, now);
        }
    }

    /// Register a connecting player with their stored progression
    pub fn on_player_join(&mut self, client: ClientIndex, state: PlayerState) {
        if let Some(old) = self.players.get(client).and_then(|p| p.hud_timer) {
            self.timers.cancel(old);
        }
        log::debug!("{} joined as {}", client, state.user_id);
        self.players.join(client, state);
    }

    pub fn on_player_disconnect(&mut self, client: ClientIndex) -> Option<PlayerState> {
        self.hud.disarm(&mut self.timers, &mut self.players, client);
        self.players.leave(client)
    }

    pub fn on_player_spawn<H: Host>(&mut self, host: &mut H, client: ClientIndex) {
        self.refresh_player(host, client);
    }

    pub fn on_player_death<H: Host>(&mut self, host: &mut H, client: ClientIndex) {
        self.arm_hud(host, client);
    }

    /// Role or class assignment changed (infection, team switch, boss pick)
    pub fn on_role_changed<H: Host>(
        &mut self,
        host: &mut H,
        client: ClientIndex,
        role: Role,
        class_name: &str,
    ) {
        let Some(player) = self.players.get_mut(client) else {
            return;
        };
        player.role = role;
        player.class_name = class_name.to_string();
        self.refresh_player(host, client);
    }

    fn refresh_player<H: Host>(&mut self, host: &mut H, client: ClientIndex) {
        if self.levels.is_active() {
            recompute_derived_attributes(host, &self.players, self.levels.config(), client);
        }
        self.arm_hud(host, client);
    }

    fn arm_hud<H: Engine>(&mut self, host: &H, client: ClientIndex) -> Option<TimerHandle> {
        if !self.levels.config().hud_enabled {
            return None;
        }
        self.hud
            .arm(&mut self.timers, &mut self.players, client, host.time())
    }

    /// Host jump event
    pub fn on_jump_event(&mut self, client: ClientIndex) -> bool {
        self.jump
            .on_jump_event(&self.players, &mut self.frames, client)
    }

    /// Ability key pressed
    pub fn on_leap_request<H: Host>(&mut self, host: &mut H, client: ClientIndex) -> LeapOutcome {
        self.jump.on_leap_request(host, &mut self.players, client)
    }

    /// Ground contact changed
    pub fn on_ground_changed<H: Host>(&mut self, host: &mut H, client: ClientIndex) -> Option<f32> {
        let player = self.players.get(client)?;
        let bonus = self.levels.gravity_bonus(player.level, player.role);
        self.jump
            .on_ground_changed(host, &self.players, client, bonus)
    }

    /// Run work deferred to this simulation step
    pub fn run_frame<H: Host>(&mut self, host: &mut H) {
        for task in self.frames.take_frame_tasks() {
            self.jump.apply_jump_scale(host, &self.players, task);
        }
    }

    /// Fire recurring timers due at `now`
    pub fn tick<H: Host>(&mut self, host: &mut H, now: f32) {
        for (handle, task) in self.timers.due(now) {
            let action = self
                .hud
                .refresh(host, &mut self.players, &self.levels, task);
            if action == TimerAction::Stop {
                log::debug!("Timer {:?} stopped", handle);
                self.timers.cancel(handle);
            }
        }
    }

    /// Timers do not outlive the map
    pub fn on_map_end(&mut self) {
        self.frames.clear();
        self.timers.clear();
        for (_, player) in self.players.iter_mut() {
            player.hud_timer = None;
        }
        log::debug!("Cleared scheduled tasks for map end");
    }

    /// `zp_level_give <target> <amount>`. Errors are also replied to the
    /// issuer.
    pub fn command_grant_level<H: Host>(
        &mut self,
        host: &mut H,
        admin: Option<ClientIndex>,
        args: &[&str],
    ) -> Result<GrantReceipt, CommandError> {
        let result = grant_level(host, &mut self.players, &self.levels, admin, args);
        reply_on_error(host, admin, &result);
        result
    }

    /// `zp_exp_give <target> <amount>`
    pub fn command_grant_experience<H: Host>(
        &mut self,
        host: &mut H,
        admin: Option<ClientIndex>,
        args: &[&str],
    ) -> Result<GrantReceipt, CommandError> {
        let result = grant_experience(host, &mut self.players, &self.levels, admin, args);
        reply_on_error(host, admin, &result);
        result
    }

    pub fn level(&self, client: ClientIndex) -> Option<i32> {
        self.levels.level(&self.players, client)
    }

    pub fn experience(&self, client: ClientIndex) -> Option<i32> {
        self.levels.experience(&self.players, client)
    }

    pub fn set_level<H: Host>(&mut self, host: &mut H, client: ClientIndex, level: i32) -> Option<i32> {
        self.levels.set_level(host, &mut self.players, client, level)
    }

    pub fn set_experience<H: Host>(
        &mut self,
        host: &mut H,
        client: ClientIndex,
        experience: i32,
    ) -> Option<i32> {
        self.levels
            .set_experience(host, &mut self.players, client, experience)
    }
}

impl Default for Gameplay {
    fn default() -> Self {
        Self::new(Settings::new())
    }
}

fn reply_on_error<H: Engine>(
    host: &mut H,
    admin: Option<ClientIndex>,
    result: &Result<GrantReceipt, CommandError>,
) {
    if let Err(err) = result {
        host.reply(admin, &err.to_string());
    }
}
