//! Run session state

use serde::Serialize;

/// Mutable state of the current run.
///
/// Rebuilt from scratch at every run start; nothing survives between two
/// runs except the cached tick count, which the game re-announces anyway on
/// its next timer update.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RunSession {
    /// A run is in progress and being timed
    pub active: bool,
    /// The timer is paused on a connectivity gap
    pub paused: bool,
    /// Quest-completion counter captured at run start
    pub quests_complete: i32,
    /// Last elapsed-tick count reported by the game
    pub game_ticks: i32,
}

impl RunSession {
    /// Arm a new run with the given completion baseline.
    pub fn arm(&mut self, quests_complete: i32) {
        self.active = true;
        self.paused = false;
        self.quests_complete = quests_complete;
    }

    /// Clear the session back to idle. The tick cache survives so a final
    /// split can still stamp a game time.
    pub fn clear(&mut self) {
        self.active = false;
        self.paused = false;
        self.quests_complete = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_and_clear() {
        let mut session = RunSession::default();
        assert!(!session.active);

        session.arm(40);
        assert!(session.active);
        assert!(!session.paused);
        assert_eq!(session.quests_complete, 40);

        session.game_ticks = 120;
        session.paused = true;
        session.clear();
        assert!(!session.active);
        assert!(!session.paused);
        assert_eq!(session.quests_complete, 0);
        // tick cache survives for the final game-time stamp
        assert_eq!(session.game_ticks, 120);
    }
}
