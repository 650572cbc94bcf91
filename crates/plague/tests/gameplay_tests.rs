//! Integration tests for the plague facade
//!
//! Drives `Gameplay` the way a host would: lifecycle events, frame and
//! timer pumps, console variable changes, and admin commands.

use approx::assert_abs_diff_eq;
use plague::prelude::*;
use plague_core::testing::{EffectCall, MockHost};

const ALICE: ClientIndex = ClientIndex(1);
const BOB: ClientIndex = ClientIndex(2);
const BOT: ClientIndex = ClientIndex(3);

fn host() -> MockHost {
    MockHost::new()
        .with_player(ALICE, "alice")
        .with_player(BOB, "bob")
        .with_player(BOT, "bot")
}

fn settings() -> Settings {
    Settings::new()
        .with("zp_level_statistics", "0,100,250,500")
        .with("zp_leap_zombies", 1)
        .with("zp_leap_zombies_force", 400)
        .with("zp_leap_zombies_cooldown", 5)
}

fn gameplay() -> Gameplay {
    let mut gameplay = Gameplay::new(settings());
    gameplay.on_player_join(ALICE, PlayerState::new(UserId(101)));
    gameplay.on_player_join(BOB, PlayerState::new(UserId(102)).with_progress(1, 90));
    gameplay.on_player_join(BOT, PlayerState::new(UserId(103)).with_fake(true));
    gameplay
}

#[test]
fn test_jump_is_rescaled_next_frame() {
    let mut host = host();
    let mut gameplay = gameplay();
    host.player_mut(ALICE).velocity = Vec3::new(100.0, 0.0, 200.0);

    assert!(gameplay.on_jump_event(ALICE));
    // Nothing changes until the next step
    assert_eq!(host.player(ALICE).velocity, Vec3::new(100.0, 0.0, 200.0));

    gameplay.run_frame(&mut host);
    let velocity = host.player(ALICE).velocity;
    assert_abs_diff_eq!(velocity.x, 110.0, epsilon = 1e-3);
    assert_abs_diff_eq!(velocity.z, 220.0, epsilon = 1e-3);
    assert_eq!(gameplay.frames().pending_frame_tasks(), 0);
}

#[test]
fn test_fast_jump_keeps_horizontal_speed() {
    let mut host = host();
    let mut gameplay = gameplay();
    host.player_mut(ALICE).velocity = Vec3::new(300.0, 100.0, 200.0);

    gameplay.on_jump_event(ALICE);
    gameplay.run_frame(&mut host);

    let velocity = host.player(ALICE).velocity;
    assert_abs_diff_eq!(velocity.x, 300.0, epsilon = 1e-3);
    assert_abs_diff_eq!(velocity.y, 100.0, epsilon = 1e-3);
    assert_abs_diff_eq!(velocity.z, 220.0, epsilon = 1e-3);
}

#[test]
fn test_jump_skipped_when_player_leaves_before_frame() {
    let mut host = host();
    let mut gameplay = gameplay();
    host.player_mut(ALICE).velocity = Vec3::new(100.0, 0.0, 200.0);

    gameplay.on_jump_event(ALICE);
    gameplay.on_player_disconnect(ALICE);
    // Slot reused by someone else before the step runs
    gameplay.on_player_join(ALICE, PlayerState::new(UserId(200)));
    gameplay.run_frame(&mut host);

    assert_eq!(host.player(ALICE).velocity, Vec3::new(100.0, 0.0, 200.0));
}

#[test]
fn test_disabling_boost_unhooks_jumps() {
    let mut host = host();
    let mut gameplay = gameplay();

    gameplay.on_config_changed(&mut host, "zp_jumpboost_enable", "0");
    assert!(!gameplay.on_jump_event(ALICE));
    assert_eq!(gameplay.frames().pending_frame_tasks(), 0);
}

#[test]
fn test_infected_leap_and_cooldown() {
    let mut host = host();
    let mut gameplay = gameplay();
    gameplay.on_role_changed(&mut host, ALICE, Role::Infected, "Classic");
    host.time = 10.0;

    let outcome = gameplay.on_leap_request(&mut host, ALICE);
    assert!(outcome.is_launched());
    assert_eq!(host.effects, vec![EffectCall::Leap(ALICE)]);

    host.time = 12.0;
    match gameplay.on_leap_request(&mut host, ALICE) {
        LeapOutcome::CoolingDown(left) => assert_abs_diff_eq!(left, 3.0, epsilon = 1e-4),
        other => panic!("expected cooldown, got {:?}", other),
    }

    host.time = 15.0;
    assert!(gameplay.on_leap_request(&mut host, ALICE).is_launched());
}

#[test]
fn test_humans_cannot_leap() {
    let mut host = host();
    let mut gameplay = gameplay();
    host.time = 10.0;

    assert_eq!(gameplay.on_leap_request(&mut host, ALICE), LeapOutcome::NotAllowed);
    assert!(host.teleports.is_empty());
}

#[test]
fn test_experience_command_levels_up() {
    let mut host = host();
    let mut gameplay = gameplay();

    let receipt = gameplay
        .command_grant_experience(&mut host, Some(ALICE), &["bob", "50"])
        .unwrap();
    assert_eq!(receipt.stored, Some(140));
    assert_eq!(gameplay.level(BOB), Some(2));
    assert_eq!(gameplay.experience(BOB), Some(140));
    assert_eq!(host.saved_experience.last(), Some(&(BOB, 140)));
    assert!(host.effects.contains(&EffectCall::LevelUp(BOB)));
    assert!(host.replies.is_empty());
}

#[test]
fn test_command_errors_are_replied() {
    let mut host = host();
    let mut gameplay = gameplay();

    let err = gameplay
        .command_grant_level(&mut host, None, &["bob", "-2"])
        .unwrap_err();
    assert_eq!(err, CommandError::InvalidAmount(-2));

    gameplay
        .command_grant_level(&mut host, None, &["bob"])
        .unwrap_err();

    assert_eq!(
        host.replies,
        vec![
            (None, "Invalid amount: -2".to_string()),
            (None, "Usage: zp_level_give <name> <amount>".to_string()),
        ]
    );
    assert_eq!(gameplay.level(BOB), Some(1));
}

#[test]
fn test_hud_refreshes_every_second() {
    let mut host = host();
    let mut gameplay = gameplay();
    gameplay.on_role_changed(&mut host, ALICE, Role::Human, "Soldier");

    gameplay.tick(&mut host, 0.5);
    assert!(host.hud.is_empty());

    gameplay.tick(&mut host, 1.0);
    assert_eq!(host.hud.len(), 1);
    let (viewer, message) = &host.hud[0];
    assert_eq!(*viewer, ALICE);
    assert_eq!(message.text, "Armor: 0\nClass: Soldier\nLevel: 1\nExperience: 0/100");
    assert_eq!(message.color, gameplay.hud().config().human_color);

    gameplay.tick(&mut host, 2.0);
    assert_eq!(host.hud.len(), 2);
}

#[test]
fn test_bots_never_get_hud() {
    let mut host = host();
    let mut gameplay = gameplay();

    gameplay.on_player_spawn(&mut host, BOT);
    gameplay.on_player_death(&mut host, BOT);
    assert!(gameplay.players().get(BOT).unwrap().hud_timer.is_none());
    assert_eq!(gameplay.timers().timer_count(), 0);
}

#[test]
fn test_one_timer_per_player() {
    let mut host = host();
    let mut gameplay = gameplay();

    gameplay.on_player_spawn(&mut host, ALICE);
    gameplay.on_player_death(&mut host, ALICE);
    gameplay.on_role_changed(&mut host, ALICE, Role::Infected, "Classic");
    assert_eq!(gameplay.timers().timer_count(), 1);
}

#[test]
fn test_disconnect_cancels_timer() {
    let mut host = host();
    let mut gameplay = gameplay();
    gameplay.on_player_spawn(&mut host, ALICE);

    gameplay.on_player_disconnect(ALICE);
    host.remove_player(ALICE);
    assert_eq!(gameplay.timers().timer_count(), 0);

    gameplay.tick(&mut host, 5.0);
    assert!(host.hud.is_empty());
}

#[test]
fn test_timer_stops_when_viewer_vanishes() {
    let mut host = host();
    let mut gameplay = gameplay();
    gameplay.on_player_spawn(&mut host, ALICE);

    // Host dropped the player without a disconnect event
    host.remove_player(ALICE);
    gameplay.tick(&mut host, 1.0);

    assert_eq!(gameplay.timers().timer_count(), 0);
    assert!(gameplay.players().get(ALICE).unwrap().hud_timer.is_none());
}

#[test]
fn test_spectator_sees_followed_player() {
    let mut host = host();
    let mut gameplay = gameplay();
    gameplay.on_role_changed(&mut host, BOB, Role::Infected, "Fast");
    gameplay.on_player_death(&mut host, ALICE);

    let spectator = host.player_mut(ALICE);
    spectator.alive = false;
    spectator.observer_mode = ObserverMode::FirstPerson;
    spectator.observer_target = Some(BOB);

    gameplay.tick(&mut host, 1.0);
    let (viewer, message) = host
        .hud
        .iter()
        .find(|(viewer, _)| *viewer == ALICE)
        .cloned()
        .unwrap();
    assert_eq!(viewer, ALICE);
    assert_eq!(message.color, gameplay.hud().config().spectator_color);
    assert!(message.text.contains("Class: Fast"));
    assert!(message.text.contains("Experience: 90/100"));
}

#[test]
fn test_disabling_hud_cancels_all_timers() {
    let mut host = host();
    let mut gameplay = gameplay();
    gameplay.on_player_spawn(&mut host, ALICE);
    gameplay.on_player_spawn(&mut host, BOB);
    assert_eq!(gameplay.timers().timer_count(), 2);

    gameplay.on_config_changed(&mut host, "zp_level_hud", "0");
    assert_eq!(gameplay.timers().timer_count(), 0);

    gameplay.on_player_spawn(&mut host, ALICE);
    assert_eq!(gameplay.timers().timer_count(), 0);

    gameplay.on_config_changed(&mut host, "zp_level_hud", "1");
    // Real players only
    assert_eq!(gameplay.timers().timer_count(), 2);
}

#[test]
fn test_map_end_clears_timers() {
    let mut host = host();
    let mut gameplay = gameplay();
    gameplay.on_player_spawn(&mut host, ALICE);
    gameplay.on_jump_event(ALICE);

    gameplay.on_map_end();
    assert_eq!(gameplay.timers().timer_count(), 0);
    assert_eq!(gameplay.frames().pending_frame_tasks(), 0);
    assert!(gameplay.players().get(ALICE).unwrap().hud_timer.is_none());
}

#[test]
fn test_hud_colour_change_applies_to_next_refresh() {
    let mut host = host();
    let mut gameplay = gameplay();
    gameplay.on_player_spawn(&mut host, ALICE);

    gameplay.on_config_changed(&mut host, "zp_level_hud_human_R", "12");
    gameplay.tick(&mut host, 1.0);

    assert_eq!(host.hud[0].1.color[0], 12);
}

#[test]
fn test_ratio_change_recomputes_attributes() {
    let mut host = host();
    let mut gameplay = gameplay();
    gameplay.set_level(&mut host, BOB, 3);

    gameplay.on_config_changed(&mut host, "zp_level_health_ratio", "20");
    assert_eq!(host.player(BOB).health, 160);
    assert_eq!(host.player(ALICE).health, 120);

    // Same value again is not a change
    host.player_mut(BOB).health = 1;
    assert!(!gameplay.on_config_changed(&mut host, "zp_level_health_ratio", "20"));
    assert_eq!(host.player(BOB).health, 1);
}

#[test]
fn test_landing_applies_level_gravity() {
    let mut host = host();
    let mut gameplay = gameplay();
    gameplay.on_config_changed(&mut host, "zp_level_gravity_ratio", "-0.125");
    gameplay.set_level(&mut host, BOB, 2);
    host.player_mut(BOB).gravity = 0.3;

    assert_eq!(gameplay.on_ground_changed(&mut host, BOB), Some(0.75));
    assert_eq!(host.player(BOB).gravity, 0.75);
}

#[test]
fn test_landing_skips_level_gravity_for_boss_roles() {
    let mut host = host();
    let mut gameplay = gameplay();
    host.base_gravity = 0.5;
    gameplay.on_config_changed(&mut host, "zp_level_gravity_ratio", "0.1");
    gameplay.set_level(&mut host, BOB, 3);

    gameplay.on_role_changed(&mut host, BOB, Role::EliteInfected, "nemesis");
    assert_eq!(gameplay.on_ground_changed(&mut host, BOB), Some(0.5));
    assert_eq!(host.player(BOB).gravity, 0.5);

    gameplay.on_role_changed(&mut host, BOB, Role::Survivor, "survivor");
    assert_eq!(gameplay.on_ground_changed(&mut host, BOB), Some(0.5));

    gameplay.on_role_changed(&mut host, BOB, Role::Infected, "classic");
    let gravity = gameplay.on_ground_changed(&mut host, BOB).unwrap();
    assert_abs_diff_eq!(gravity, 0.8, epsilon = 1e-5);
}

#[test]
fn test_huge_health_ratio_saturates() {
    let mut host = host();
    let mut gameplay = gameplay();
    gameplay.set_level(&mut host, BOB, 3);

    assert!(gameplay.on_config_changed(&mut host, "zp_level_health_ratio", "1e12"));
    assert_eq!(host.player(BOB).health, i32::MAX);
}

#[test]
fn test_disabled_leveling_ignores_grants() {
    let mut host = host();
    let mut gameplay = gameplay();
    gameplay.on_config_changed(&mut host, "zp_level_system", "0");

    let receipt = gameplay
        .command_grant_experience(&mut host, None, &["bob", "500"])
        .unwrap();
    assert_eq!(receipt.stored, None);
    assert_eq!(gameplay.experience(BOB), Some(90));
    assert!(host.saved_experience.is_empty());
}

#[test]
fn test_settings_from_json() {
    let gameplay = Gameplay::from_json(
        r#"{"zp_jumpboost_multiplier": 1.5, "zp_level_statistics": "0,10,20", "zp_level_hud": false}"#,
    )
    .unwrap();

    assert_eq!(gameplay.jump().config().horizontal_multiplier, 1.5);
    assert_eq!(gameplay.levels().table().max_level(), 2);
    assert!(!gameplay.levels().config().hud_enabled);
    assert!(Gameplay::from_json("[1, 2]").is_err());
}
