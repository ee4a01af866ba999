//! Inbound surface of the game client
//!
//! The game integration is host-controlled: the host forwards typed
//! notifications to the engine as [`GameEvent`]s and answers live queries
//! through [`GameView`]. The engine only reads from this surface; it never
//! mutates game state. Delivery is serialized by the host, so no handler is
//! re-entered before the previous one returns.

use serde::{Deserialize, Serialize};

/// Seconds of real time per game tick.
pub const TICK_SECONDS: f64 = 0.6;

/// The two independent numeric variable namespaces exposed by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VarScope {
    /// Engine-managed game variables (quest progress, mode flags)
    Game,
    /// Per-player variables
    Player,
}

/// Connectivity-class state of the game client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    Starting,
    LoginScreen,
    LoggingIn,
    LoggedIn,
    /// Zone or region load in progress
    Loading,
    /// Connection dropped but the session may still recover
    ConnectionLost,
    /// Switching worlds
    Hopping,
}

impl ClientState {
    /// Whether the run keeps making progress in this state. Zone loads and
    /// brief connection drops still count as live play; everything else is a
    /// real interruption that must not advance the external timer.
    pub fn is_live(&self) -> bool {
        matches!(
            self,
            ClientState::LoggedIn | ClientState::Loading | ClientState::ConnectionLost
        )
    }
}

/// One notification delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// One game tick elapsed
    Tick,
    /// The client moved to a new connectivity state
    StateChanged(ClientState),
    /// A variable changed somewhere in the given namespace
    VarChanged { scope: VarScope, id: u32, value: i32 },
    /// The contents of an item container changed
    ContainerChanged { container_id: u32 },
    /// An engine script fired. `source` is `Some` when another observer
    /// (not the game engine itself) triggered the script.
    ScriptFired {
        script_id: i32,
        args: Vec<i32>,
        source: Option<u32>,
    },
    /// The client is shutting down
    Shutdown,
}

/// Live read access to game state, implemented by the host.
pub trait GameView {
    /// Current value of a variable in the given namespace.
    fn var(&self, scope: VarScope, id: u32) -> i32;

    /// Quantity of an item currently held in the primary inventory.
    fn item_quantity(&self, item_id: u32) -> i32;

    /// Whether the quest-completion banner is on screen.
    fn completion_banner_visible(&self) -> bool;
}

/// Bindings for the game-side signal variables the engine watches.
///
/// The numeric IDs are opaque host data; the engine only compares them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalBindings {
    /// Game var holding the speedrun-mode state
    pub speedrun_state_var: u32,
    /// Value of `speedrun_state_var` while a run is active
    pub speedrun_active_value: i32,
    /// Game var identifying the quest being run
    pub quest_var: u32,
    /// Game var counting completed quests
    pub quests_complete_var: u32,
    /// Script id carrying the elapsed-tick update in its first argument
    pub timer_script: i32,
    /// Container id of the primary inventory
    pub inventory_container: u32,
}
