//! Events emitted by the split engine

use super::completion::CompletionOutcome;

/// A user-visible notification from the engine. The host decides how to
/// render these (chat line, log entry, panel row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitterEvent {
    /// A run started and its splits were resolved from the catalog
    RunStarted { quest_id: i32, name: String },
    /// A run started for a quest with no catalog entry; no checkpoints
    /// will fire this run
    RunNotConfigured { quest_id: i32 },
    /// A checkpoint fired and a split was recorded
    CheckpointSplit { label: String },
    /// The quest finished and the timer was settled
    RunCompleted { outcome: CompletionOutcome },
    /// Speedrun mode ended without completing the quest
    RunAbandoned,
}

/// Callback type for engine events
pub type EventCallback = Box<dyn Fn(&SplitterEvent)>;

/// Event handler fanning one event out to every listener
pub struct EventHandler {
    callbacks: Vec<EventCallback>,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// Add a listener for engine events
    pub fn subscribe(&mut self, callback: EventCallback) {
        self.callbacks.push(callback);
    }

    /// Deliver an event to every listener
    pub fn emit(&self, event: &SplitterEvent) {
        for callback in &self.callbacks {
            callback(event);
        }
    }

    pub fn has_listeners(&self) -> bool {
        !self.callbacks.is_empty()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
