//! Quest Autosplitter
//!
//! An event-driven bridge between a running game client and an external
//! speedrun timer speaking the LiveSplit Server line protocol. The host
//! forwards game notifications (ticks, connectivity changes, variable and
//! inventory updates, engine-script firings) and the engine decides when a
//! run starts, when checkpoints split, when the timer pauses on connectivity
//! gaps, and how to settle the timer at quest completion.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use quest_autosplitter::{
//!     CheckpointCatalog, QuestSplits, SignalBindings, SplitEngine, TcpLink,
//! };
//!
//! fn main() -> quest_autosplitter::Result<()> {
//!     let link = TcpLink::connect("localhost", 16834, Duration::from_millis(1000))?;
//!
//!     let mut catalog = CheckpointCatalog::new();
//!     catalog.register(QuestSplits {
//!         id: 3,
//!         name: "Sunken Temple".to_string(),
//!         splits: "Rusty key,0,100\nInner gate,1,301,2".to_string(),
//!     });
//!
//!     let signals = SignalBindings {
//!         speedrun_state_var: 4101,
//!         speedrun_active_value: 5,
//!         quest_var: 4102,
//!         quests_complete_var: 4103,
//!         timer_script: 2200,
//!         inventory_container: 40,
//!     };
//!
//!     let mut engine = SplitEngine::new(link, signals, catalog);
//!     engine.subscribe(Box::new(|event| println!("{:?}", event)));
//!
//!     // Feed host notifications through `engine.handle(&view, event)`
//!     // from the client's event loop.
//!     Ok(())
//! }
//! ```

pub mod checkpoints;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod livesplit;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use checkpoints::{
    parse_splits, CheckpointCatalog, CheckpointWatch, QuestSplits, WatchKind, WatchLists,
};
pub use config::{ServerConfig, SplitterConfig};
pub use core::{
    settle_run_end, CompletionOutcome, RunSession, SplitEngine, SplitterEvent, SplitterStatus,
};
pub use error::{Result, SplitterError};
pub use game::{ClientState, GameEvent, GameView, SignalBindings, VarScope, TICK_SECONDS};
pub use livesplit::{TcpLink, TimerClient, TimerLink, TimerPhase, REPLY_ERROR};
