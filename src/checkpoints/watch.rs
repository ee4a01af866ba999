//! Checkpoint watch types

/// Kind of condition a checkpoint watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchKind {
    /// Inventory quantity reaches a threshold ("at least")
    Item,
    /// A game var equals a target value
    GameVar,
    /// A player var equals a target value
    PlayerVar,
}

impl WatchKind {
    /// Decode the numeric kind field of a splits record.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(WatchKind::Item),
            1 => Some(WatchKind::GameVar),
            2 => Some(WatchKind::PlayerVar),
            _ => None,
        }
    }
}

/// A single pending checkpoint: a key in its kind's namespace and the value
/// that satisfies it. Each watch fires at most once per run; firing removes
/// it from its list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointWatch {
    /// Display label for the split message
    pub label: String,
    /// Item id or variable id, depending on the kind
    pub key: u32,
    /// Required quantity (items) or target value (vars)
    pub threshold: i32,
}

/// The pending watches of one run, one ordered list per kind.
///
/// Rebuilt from scratch at every run start.
#[derive(Debug, Clone, Default)]
pub struct WatchLists {
    pub items: Vec<CheckpointWatch>,
    pub game_vars: Vec<CheckpointWatch>,
    pub player_vars: Vec<CheckpointWatch>,
}

impl WatchLists {
    pub fn len(&self) -> usize {
        self.items.len() + self.game_vars.len() + self.player_vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.game_vars.clear();
        self.player_vars.clear();
    }
}
