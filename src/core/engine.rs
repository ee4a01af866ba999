//! The split-decision engine
//!
//! Single-threaded and event-driven: every transition happens synchronously
//! inside the handler for one host notification, and the host guarantees
//! serialized delivery. Transport reads block the invoking handler for at
//! most the link's read timeout; a dead peer surfaces as the reply sentinel,
//! never as an error.

use serde::Serialize;

use crate::checkpoints::{parse_splits, CheckpointCatalog, CheckpointWatch, WatchLists};
use crate::game::{ClientState, GameEvent, GameView, SignalBindings, VarScope, TICK_SECONDS};
use crate::livesplit::{TimerClient, TimerLink, TimerPhase};

use super::completion::settle_run_end;
use super::events::{EventCallback, EventHandler, SplitterEvent};
use super::session::RunSession;

/// Snapshot of the engine for host surfaces, serializable to JSON.
#[derive(Debug, Clone, Serialize)]
pub struct SplitterStatus {
    pub active: bool,
    pub paused: bool,
    pub game_ticks: i32,
    pub pending_items: usize,
    pub pending_game_vars: usize,
    pub pending_player_vars: usize,
}

/// Event-driven state machine bridging game notifications to timer commands.
///
/// The engine owns the timer client, the session of the current run, and the
/// pending checkpoint watches, all rebuilt at every run start.
pub struct SplitEngine<L: TimerLink> {
    client: TimerClient<L>,
    signals: SignalBindings,
    catalog: CheckpointCatalog,
    session: RunSession,
    watches: WatchLists,
    events: EventHandler,
}

impl<L: TimerLink> SplitEngine<L> {
    pub fn new(link: L, signals: SignalBindings, catalog: CheckpointCatalog) -> Self {
        Self {
            client: TimerClient::new(link),
            signals,
            catalog,
            session: RunSession::default(),
            watches: WatchLists::default(),
            events: EventHandler::new(),
        }
    }

    /// Register a listener for user-visible engine events.
    pub fn subscribe(&mut self, callback: EventCallback) {
        self.events.subscribe(callback);
    }

    pub fn session(&self) -> &RunSession {
        &self.session
    }

    pub fn watches(&self) -> &WatchLists {
        &self.watches
    }

    pub fn client(&self) -> &TimerClient<L> {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut TimerClient<L> {
        &mut self.client
    }

    pub fn status(&self) -> SplitterStatus {
        SplitterStatus {
            active: self.session.active,
            paused: self.session.paused,
            game_ticks: self.session.game_ticks,
            pending_items: self.watches.items.len(),
            pending_game_vars: self.watches.game_vars.len(),
            pending_player_vars: self.watches.player_vars.len(),
        }
    }

    /// Status snapshot as JSON, for host surfaces that want a plain string.
    pub fn status_json(&self) -> String {
        serde_json::to_string(&self.status()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Feed one host notification through the state machine.
    pub fn handle(&mut self, view: &dyn GameView, event: GameEvent) {
        match event {
            GameEvent::Tick => self.on_tick(view),
            GameEvent::StateChanged(state) => self.on_state_changed(state),
            // The payload is advisory; decisions are made against live state
            GameEvent::VarChanged { .. } => self.on_var_changed(view),
            GameEvent::ContainerChanged { container_id } => {
                self.on_container_changed(view, container_id)
            }
            GameEvent::ScriptFired {
                script_id,
                args,
                source,
            } => self.on_script_fired(script_id, &args, source),
            GameEvent::Shutdown => self.on_shutdown(),
        }
    }

    /// Pause the timer and drop the connection. Called at plugin teardown.
    pub fn shutdown(&mut self) {
        self.client.pause();
        self.client.disconnect();
    }

    fn speedrun_active(&self, view: &dyn GameView) -> bool {
        view.var(VarScope::Game, self.signals.speedrun_state_var)
            == self.signals.speedrun_active_value
    }

    fn on_tick(&mut self, view: &dyn GameView) {
        if !self.session.active {
            if self.speedrun_active(view) {
                self.start_run(view);
            }
        } else if view.completion_banner_visible() {
            self.complete_run();
        } else if !self.speedrun_active(view) {
            self.abandon_run();
        }
    }

    fn start_run(&mut self, view: &dyn GameView) {
        self.client.reset();
        self.client.init_game_time();
        self.client.start_timer();

        let baseline = view.var(VarScope::Game, self.signals.quests_complete_var);
        self.session.arm(baseline);

        let quest_id = view.var(VarScope::Game, self.signals.quest_var);
        match self.catalog.resolve(quest_id) {
            Some(entry) => {
                self.watches = parse_splits(&entry.splits);
                log::info!(
                    "run started: {} ({} checkpoints)",
                    entry.name,
                    self.watches.len()
                );
                self.events.emit(&SplitterEvent::RunStarted {
                    quest_id,
                    name: entry.name.clone(),
                });
            }
            None => {
                self.watches.clear();
                log::warn!("no splits configured for quest {}", quest_id);
                self.events
                    .emit(&SplitterEvent::RunNotConfigured { quest_id });
            }
        }
    }

    fn complete_run(&mut self) {
        let final_ticks = self.session.game_ticks;
        self.session.clear();
        let outcome = settle_run_end(&mut self.client, final_ticks);
        log::info!("run complete ({:?})", outcome);
        self.events.emit(&SplitterEvent::RunCompleted { outcome });
    }

    fn abandon_run(&mut self) {
        self.session.clear();
        // A run left rather than completed: only a live timer needs pausing.
        if self.client.phase() == TimerPhase::Running {
            self.client.pause();
        }
        log::info!("left speedrun mode, run abandoned");
        self.events.emit(&SplitterEvent::RunAbandoned);
    }

    fn on_state_changed(&mut self, state: ClientState) {
        log::debug!("client state changed to {:?}", state);
        if !self.session.active {
            return;
        }
        if state.is_live() {
            if self.session.paused {
                self.client.resume();
                self.session.paused = false;
                log::debug!("resumed on {:?}", state);
            }
        } else if !self.session.paused {
            self.client.pause();
            self.session.paused = true;
            log::debug!("paused on {:?}", state);
        }
    }

    fn on_script_fired(&mut self, script_id: i32, args: &[i32], source: Option<u32>) {
        // Scripts relayed by another observer are not engine state changes.
        if source.is_some() {
            return;
        }
        if script_id != self.signals.timer_script {
            return;
        }
        let Some(&ticks) = args.first() else { return };
        self.session.game_ticks = ticks;
        self.client.set_game_time(f64::from(ticks) * TICK_SECONDS);
    }

    fn on_var_changed(&mut self, view: &dyn GameView) {
        if !self.session.active {
            return;
        }
        let complete_now = view.var(VarScope::Game, self.signals.quests_complete_var);
        if complete_now > self.session.quests_complete {
            self.complete_run();
            return;
        }
        self.check_var_watches(view);
    }

    fn check_var_watches(&mut self, view: &dyn GameView) {
        let mut fired = Vec::new();
        self.watches.game_vars.retain(|watch| {
            if view.var(VarScope::Game, watch.key) == watch.threshold {
                fired.push(watch.clone());
                false
            } else {
                true
            }
        });
        self.watches.player_vars.retain(|watch| {
            if view.var(VarScope::Player, watch.key) == watch.threshold {
                fired.push(watch.clone());
                false
            } else {
                true
            }
        });
        for watch in fired {
            self.fire_checkpoint(watch);
        }
    }

    fn on_container_changed(&mut self, view: &dyn GameView, container_id: u32) {
        if !self.session.active || container_id != self.signals.inventory_container {
            return;
        }
        let mut fired = Vec::new();
        self.watches.items.retain(|watch| {
            if view.item_quantity(watch.key) >= watch.threshold {
                fired.push(watch.clone());
                false
            } else {
                true
            }
        });
        for watch in fired {
            self.fire_checkpoint(watch);
        }
    }

    fn fire_checkpoint(&mut self, watch: CheckpointWatch) {
        self.client
            .set_game_time(f64::from(self.session.game_ticks + 1) * TICK_SECONDS);
        self.client.split();
        log::info!("checkpoint split: {}", watch.label);
        self.events
            .emit(&SplitterEvent::CheckpointSplit { label: watch.label });
    }

    fn on_shutdown(&mut self) {
        // Leave the external timer in a safe state no matter where we are.
        self.client.pause();
    }
}
