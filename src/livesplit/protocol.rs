//! Wire protocol of the timer server
//!
//! Requests are single text lines; a few commands yield exactly one reply
//! line. Line termination is handled by the transport.

use super::transport::REPLY_ERROR;

/// Phase reported by the timer in reply to `getcurrenttimerphase`.
///
/// Read fresh on each query, never cached. `Unknown` covers both an
/// unrecognized reply and an unreachable peer; the protocol offers no way to
/// tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    NotRunning,
    Running,
    Paused,
    Ended,
    Unknown,
}

impl TimerPhase {
    /// Map a raw reply line onto a phase.
    pub fn from_reply(reply: &str) -> Self {
        match reply {
            "NotRunning" => TimerPhase::NotRunning,
            "Running" => TimerPhase::Running,
            "Paused" => TimerPhase::Paused,
            "Ended" => TimerPhase::Ended,
            _ => {
                if reply != REPLY_ERROR {
                    log::debug!("unrecognized timer phase reply: {:?}", reply);
                }
                TimerPhase::Unknown
            }
        }
    }
}
