//! Player identity

use core::fmt;
use serde::{Deserialize, Serialize};

/// Slot index of a player as the host numbers them.
///
/// Slots are recycled when a player leaves, so an index is only meaningful
/// for the duration of one callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClientIndex(pub u32);

impl fmt::Display for ClientIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Session identifier, never reused within one server run.
///
/// Anything that outlives the current callback (deferred tasks, timers)
/// carries a `UserId` and resolves it back to a slot when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ClientIndex(3).to_string(), "#3");
        assert_eq!(UserId(42).to_string(), "user:42");
    }
}
