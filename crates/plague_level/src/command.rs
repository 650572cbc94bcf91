//! Admin grant commands
//!
//! `zp_level_give <target> <amount>` and `zp_exp_give <target> <amount>`
//! add to a player's current level or experience.

use crate::progression::LevelSystem;
use plague_core::{ClientIndex, Effects, Engine, PlayerRegistry, ProgressObserver, Storage};
use thiserror::Error;

pub const LEVEL_COMMAND: &str = "zp_level_give";
pub const EXPERIENCE_COMMAND: &str = "zp_exp_give";

/// Why a grant command was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Usage: {0} <name> <amount>")]
    InvalidArgs(&'static str),

    #[error("No target matching \"{0}\"")]
    TargetNotFound(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(i64),
}

/// Which counter a grant adds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    Level,
    Experience,
}

impl Grant {
    pub fn command(&self) -> &'static str {
        match self {
            Self::Level => LEVEL_COMMAND,
            Self::Experience => EXPERIENCE_COMMAND,
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            Self::Level => "levels",
            Self::Experience => "experience",
        }
    }
}

/// A grant that went through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantReceipt {
    pub target: ClientIndex,
    pub amount: i32,
    /// Stored value afterwards, if leveling was active
    pub stored: Option<i32>,
}

/// Run a grant command issued by `admin` (`None` for the server console)
pub fn grant<H>(
    host: &mut H,
    players: &mut PlayerRegistry,
    levels: &LevelSystem,
    grant: Grant,
    admin: Option<ClientIndex>,
    args: &[&str],
) -> Result<GrantReceipt, CommandError>
where
    H: Engine + Storage + Effects + ProgressObserver,
{
    let [selector, amount, ..] = args else {
        return Err(CommandError::InvalidArgs(grant.command()));
    };

    let target = host
        .find_target(admin, selector)
        .filter(|client| players.contains(*client))
        .ok_or_else(|| CommandError::TargetNotFound(selector.to_string()))?;

    let amount = plague_core::parse_int(amount);
    if amount <= 0 || amount > i32::MAX as i64 {
        return Err(CommandError::InvalidAmount(amount));
    }
    let amount = amount as i32;

    let stored = match grant {
        Grant::Level => {
            let current = levels.level(players, target).unwrap_or(1);
            levels.set_level(host, players, target, current.saturating_add(amount))
        }
        Grant::Experience => {
            let current = levels.experience(players, target).unwrap_or(0);
            levels.set_experience(host, players, target, current.saturating_add(amount))
        }
    };

    log::info!(
        "\"{}\" gave {} {} to \"{}\"",
        host.name(admin),
        amount,
        grant.noun(),
        host.name(Some(target))
    );
    Ok(GrantReceipt {
        target,
        amount,
        stored,
    })
}

/// `zp_level_give <target> <amount>`
pub fn grant_level<H>(
    host: &mut H,
    players: &mut PlayerRegistry,
    levels: &LevelSystem,
    admin: Option<ClientIndex>,
    args: &[&str],
) -> Result<GrantReceipt, CommandError>
where
    H: Engine + Storage + Effects + ProgressObserver,
{
    grant(host, players, levels, Grant::Level, admin, args)
}

/// `zp_exp_give <target> <amount>`
pub fn grant_experience<H>(
    host: &mut H,
    players: &mut PlayerRegistry,
    levels: &LevelSystem,
    admin: Option<ClientIndex>,
    args: &[&str],
) -> Result<GrantReceipt, CommandError>
where
    H: Engine + Storage + Effects + ProgressObserver,
{
    grant(host, players, levels, Grant::Experience, admin, args)
}
