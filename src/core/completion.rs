//! Run-completion sequencer
//!
//! At quest completion the external timer may sit mid-sequence, already
//! ended, paused on a connectivity gap, or not running at all. Its split
//! list is not observable directly: the only way to find out whether a
//! split remains is to probe with `skipsplit` and compare the split index
//! before and after. An unchanged index means nothing was left to skip, and
//! the completion itself must be recorded as the final split instead.

use crate::game::TICK_SECONDS;
use crate::livesplit::{TimerClient, TimerLink, TimerPhase};

/// How the sequencer left the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The final split was recorded at the completion tick
    FinalSplit,
    /// The timer was not running; nothing to settle
    TimerIdle,
    /// The peer became unreachable mid-sequence; timer state is unknown
    Disconnected,
}

/// Drive the timer into a consistent end-of-run state.
///
/// `final_ticks` is the last tick count the game reported; the recorded
/// split lands one tick after it.
pub fn settle_run_end<L: TimerLink>(
    client: &mut TimerClient<L>,
    final_ticks: i32,
) -> CompletionOutcome {
    loop {
        match client.phase() {
            TimerPhase::Unknown => return CompletionOutcome::Disconnected,
            TimerPhase::NotRunning => return CompletionOutcome::TimerIdle,
            TimerPhase::Paused => client.resume(),
            TimerPhase::Ended => client.unsplit(),
            TimerPhase::Running => {
                let before = client.split_index();
                client.skip_split();
                let after = client.split_index();
                // Unchanged index: no split was left to skip, so this
                // completion is the final split.
                if before == after {
                    client.set_game_time(f64::from(final_ticks + 1) * TICK_SECONDS);
                    client.split();
                    return CompletionOutcome::FinalSplit;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedLink;

    fn sent_counts(client: &TimerClient<ScriptedLink>, command: &str) -> usize {
        client
            .link()
            .sent
            .iter()
            .filter(|line| line.starts_with(command))
            .count()
    }

    #[test]
    fn test_last_split_is_recorded_once() {
        let mut client = TimerClient::new(ScriptedLink::with_replies(&["Running", "3", "3"]));
        let outcome = settle_run_end(&mut client, 9);

        assert_eq!(outcome, CompletionOutcome::FinalSplit);
        assert_eq!(
            client.link().sent,
            vec![
                "getcurrenttimerphase",
                "getsplitindex",
                "skipsplit",
                "getsplitindex",
                format!("setgametime {}", f64::from(10) * TICK_SECONDS).as_str(),
                "split",
            ]
        );
        assert_eq!(sent_counts(&client, "setgametime"), 1);
        assert_eq!(sent_counts(&client, "split"), 1);
    }

    #[test]
    fn test_mid_sequence_splits_are_skipped_through() {
        // First probe consumes a pending split (index moves 3 -> 4), the
        // second finds nothing left and records the completion.
        let mut client = TimerClient::new(ScriptedLink::with_replies(&[
            "Running", "3", "4", "Running", "4", "4",
        ]));
        let outcome = settle_run_end(&mut client, 9);

        assert_eq!(outcome, CompletionOutcome::FinalSplit);
        assert_eq!(sent_counts(&client, "skipsplit"), 2);
        assert_eq!(sent_counts(&client, "split"), 1);
    }

    #[test]
    fn test_paused_then_ended_then_idle() {
        let mut client =
            TimerClient::new(ScriptedLink::with_replies(&["Paused", "Ended", "NotRunning"]));
        let outcome = settle_run_end(&mut client, 9);

        assert_eq!(outcome, CompletionOutcome::TimerIdle);
        assert_eq!(
            client.link().sent,
            vec![
                "getcurrenttimerphase",
                "resume",
                "getcurrenttimerphase",
                "unsplit",
                "getcurrenttimerphase",
            ]
        );
    }

    #[test]
    fn test_disconnect_halts_the_sequence() {
        let mut client = TimerClient::new(ScriptedLink::new());
        let outcome = settle_run_end(&mut client, 9);

        assert_eq!(outcome, CompletionOutcome::Disconnected);
        assert_eq!(client.link().sent, vec!["getcurrenttimerphase"]);
    }
}
