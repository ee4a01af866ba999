//! Core split-decision engine
//!
//! - `RunSession` - state of the current run
//! - `SplitEngine` - the event-driven state machine
//! - `SplitterEvent` - user-visible notifications for the host to render
//! - `settle_run_end` - the sequencer that settles the timer at run end

mod completion;
mod engine;
mod events;
mod session;

pub use completion::{settle_run_end, CompletionOutcome};
pub use engine::{SplitEngine, SplitterStatus};
pub use events::{EventCallback, EventHandler, SplitterEvent};
pub use session::RunSession;
