//! Status overlay text and display target

use crate::config::{HudConfig, Palette};
use plague_core::{ClientIndex, Engine, HudMessage, PlayerRegistry};
use plague_level::LevelSystem;

/// Level line shown under the class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressLine {
    pub level: i32,
    pub experience: i32,
    /// Experience needed to leave the current level
    pub next: i32,
}

/// What the overlay shows about one player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub armor: i32,
    pub class_name: String,
    /// Present only while leveling is active
    pub progress: Option<ProgressLine>,
}

impl StatusInfo {
    pub fn format(&self) -> String {
        let mut text = format!("Armor: {}\nClass: {}", self.armor, self.class_name);
        if let Some(progress) = &self.progress {
            text.push_str(&format!(
                "\nLevel: {}\nExperience: {}/{}",
                progress.level, progress.experience, progress.next
            ));
        }
        text
    }
}

/// Whose info a viewer sees and in which colours.
///
/// Alive viewers see themselves. Dead viewers see the player they are
/// spectating in first or third person, as long as that player is alive.
/// `None` means nothing to show this round.
pub fn display_target<E: Engine>(
    host: &E,
    players: &PlayerRegistry,
    viewer: ClientIndex,
) -> Option<(ClientIndex, Palette)> {
    let state = players.get(viewer)?;

    if host.is_alive(viewer) {
        let palette = if state.role.is_infected() {
            Palette::Zombie
        } else {
            Palette::Human
        };
        return Some((viewer, palette));
    }

    if !host.observer_mode(viewer).follows_target() {
        return None;
    }
    let target = host.observer_target(viewer)?;
    if !players.contains(target) || !host.is_in_game(target) || !host.is_alive(target) {
        return None;
    }
    Some((target, Palette::Spectator))
}

/// Collect the overlay info for `target`
pub fn status_info<E: Engine>(
    host: &E,
    players: &PlayerRegistry,
    levels: &LevelSystem,
    target: ClientIndex,
) -> Option<StatusInfo> {
    let state = players.get(target)?;

    let progress = if levels.is_active() {
        levels.table().threshold(state.level).map(|next| ProgressLine {
            level: state.level,
            experience: state.experience,
            next,
        })
    } else {
        None
    };

    Some(StatusInfo {
        armor: host.armor(target),
        class_name: state.class_name.clone(),
        progress,
    })
}

/// Build the message `viewer` should see right now
pub fn compose<E: Engine>(
    host: &E,
    players: &PlayerRegistry,
    levels: &LevelSystem,
    config: &HudConfig,
    viewer: ClientIndex,
) -> Option<HudMessage> {
    let (target, palette) = display_target(host, players, viewer)?;
    let info = status_info(host, players, levels, target)?;

    Some(HudMessage {
        text: info.format(),
        color: config.color(palette),
        x: config.x,
        y: config.y,
        hold_time: config.hold_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use plague_core::testing::MockHost;
    use plague_core::{ObserverMode, PlayerState, Role, UserId};
    use plague_level::LevelConfig;

    const VIEWER: ClientIndex = ClientIndex(1);
    const TARGET: ClientIndex = ClientIndex(2);

    fn setup() -> (MockHost, PlayerRegistry) {
        let mut host = MockHost::new()
            .with_player(VIEWER, "alice")
            .with_player(TARGET, "bob");
        host.player_mut(TARGET).armor = 50;

        let mut players = PlayerRegistry::new();
        let mut viewer = PlayerState::new(UserId(1));
        viewer.class_name = "Soldier".to_string();
        players.join(VIEWER, viewer);

        let mut target = PlayerState::new(UserId(2)).with_progress(2, 140);
        target.class_name = "Sniper".to_string();
        target.role = Role::Infected;
        players.join(TARGET, target);
        (host, players)
    }

    fn levels(statistics: &str) -> LevelSystem {
        LevelSystem::new(LevelConfig {
            statistics: statistics.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_alive_viewer_sees_self() {
        let (host, mut players) = setup();
        assert_eq!(
            display_target(&host, &players, VIEWER),
            Some((VIEWER, Palette::Human))
        );

        players.get_mut(VIEWER).unwrap().role = Role::EliteInfected;
        assert_eq!(
            display_target(&host, &players, VIEWER),
            Some((VIEWER, Palette::Zombie))
        );

        players.get_mut(VIEWER).unwrap().role = Role::Survivor;
        assert_eq!(
            display_target(&host, &players, VIEWER),
            Some((VIEWER, Palette::Human))
        );
    }

    #[test]
    fn test_spectator_sees_target() {
        let (mut host, players) = setup();
        let viewer = host.player_mut(VIEWER);
        viewer.alive = false;
        viewer.observer_mode = ObserverMode::ThirdPerson;
        viewer.observer_target = Some(TARGET);

        assert_eq!(
            display_target(&host, &players, VIEWER),
            Some((TARGET, Palette::Spectator))
        );
    }

    #[test]
    fn test_spectator_without_valid_target() {
        let (mut host, players) = setup();
        let viewer = host.player_mut(VIEWER);
        viewer.alive = false;
        viewer.observer_mode = ObserverMode::Roaming;
        viewer.observer_target = Some(TARGET);
        assert_eq!(display_target(&host, &players, VIEWER), None);

        host.player_mut(VIEWER).observer_mode = ObserverMode::FirstPerson;
        host.player_mut(TARGET).alive = false;
        assert_eq!(display_target(&host, &players, VIEWER), None);

        host.player_mut(VIEWER).observer_target = None;
        assert_eq!(display_target(&host, &players, VIEWER), None);
    }

    #[test]
    fn test_level_info_text() {
        let (host, players) = setup();
        let info = status_info(&host, &players, &levels("0,100,250,500"), TARGET).unwrap();

        assert_eq!(
            info.progress,
            Some(ProgressLine {
                level: 2,
                experience: 140,
                next: 250,
            })
        );
        assert_eq!(info.format(), "Armor: 50\nClass: Sniper\nLevel: 2\nExperience: 140/250");
    }

    #[test]
    fn test_short_info_without_leveling() {
        let (host, players) = setup();
        let info = status_info(&host, &players, &levels(""), TARGET).unwrap();

        assert_eq!(info.progress, None);
        assert_eq!(info.format(), "Armor: 50\nClass: Sniper");
    }

    #[test]
    fn test_compose_uses_palette_and_position() {
        let (host, players) = setup();
        let config = HudConfig {
            x: 0.5,
            y: 0.25,
            ..Default::default()
        };
        let message = compose(&host, &players, &levels("0,100"), &config, VIEWER).unwrap();

        assert_eq!(message.color, config.human_color);
        assert_eq!(message.x, 0.5);
        assert_eq!(message.y, 0.25);
        assert_eq!(message.hold_time, 1.1);
        assert!(message.text.starts_with("Armor: 0\nClass: Soldier"));
    }
}
