//! Typed command client for the timer server

use super::protocol::TimerPhase;
use super::transport::TimerLink;

/// Client side of the timer-server line protocol.
///
/// One method per wire command. Commands that expect a reply read it
/// immediately; nothing is ever pipelined.
pub struct TimerClient<L: TimerLink> {
    link: L,
}

impl<L: TimerLink> TimerClient<L> {
    pub fn new(link: L) -> Self {
        Self { link }
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// Reset the timer to a fresh, not-running state.
    pub fn reset(&mut self) {
        self.link.send_line("reset");
    }

    /// Switch the timer to game-time comparison.
    pub fn init_game_time(&mut self) {
        self.link.send_line("initgametime");
    }

    pub fn start_timer(&mut self) {
        self.link.send_line("starttimer");
    }

    pub fn pause(&mut self) {
        self.link.send_line("pause");
    }

    pub fn resume(&mut self) {
        self.link.send_line("resume");
    }

    /// Record the current split and advance the split index.
    pub fn split(&mut self) {
        self.link.send_line("split");
    }

    /// Roll the split index back by one.
    pub fn unsplit(&mut self) {
        self.link.send_line("unsplit");
    }

    /// Advance past the current split without recording a time.
    pub fn skip_split(&mut self) {
        self.link.send_line("skipsplit");
    }

    /// Set the game-time clock, in seconds.
    pub fn set_game_time(&mut self, seconds: f64) {
        self.link.send_line(&format!("setgametime {}", seconds));
    }

    /// Query the current timer phase.
    pub fn phase(&mut self) -> TimerPhase {
        self.link.send_line("getcurrenttimerphase");
        TimerPhase::from_reply(&self.link.receive_line())
    }

    /// Query the current split index. Returned raw: the protocol only ever
    /// compares indices as text, and the reply sentinel must flow through
    /// untouched.
    pub fn split_index(&mut self) -> String {
        self.link.send_line("getsplitindex");
        self.link.receive_line()
    }

    /// Drop the connection to the timer server.
    pub fn disconnect(&mut self) {
        self.link.close();
    }
}
