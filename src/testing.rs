//! Shared test doubles

use std::collections::{HashMap, VecDeque};

use crate::game::{GameView, SignalBindings, VarScope};
use crate::livesplit::{TimerLink, REPLY_ERROR};

/// A [`TimerLink`] that records every sent line and replays scripted
/// replies. An exhausted reply queue yields the sentinel, like a dead peer.
pub(crate) struct ScriptedLink {
    pub sent: Vec<String>,
    pub replies: VecDeque<String>,
    pub closed: bool,
}

impl ScriptedLink {
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            replies: VecDeque::new(),
            closed: false,
        }
    }

    pub fn with_replies(replies: &[&str]) -> Self {
        let mut link = Self::new();
        for reply in replies {
            link.push_reply(reply);
        }
        link
    }

    pub fn push_reply(&mut self, reply: &str) {
        self.replies.push_back(reply.to_string());
    }
}

impl TimerLink for ScriptedLink {
    fn send_line(&mut self, line: &str) {
        self.sent.push(line.to_string());
    }

    fn receive_line(&mut self) -> String {
        self.replies
            .pop_front()
            .unwrap_or_else(|| REPLY_ERROR.to_string())
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// In-memory [`GameView`] with settable variables and item quantities.
pub(crate) struct FakeGame {
    vars: HashMap<(VarScope, u32), i32>,
    items: HashMap<u32, i32>,
    pub banner: bool,
}

impl FakeGame {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
            items: HashMap::new(),
            banner: false,
        }
    }

    pub fn set_var(&mut self, scope: VarScope, id: u32, value: i32) {
        self.vars.insert((scope, id), value);
    }

    pub fn set_item(&mut self, item_id: u32, quantity: i32) {
        self.items.insert(item_id, quantity);
    }
}

impl GameView for FakeGame {
    fn var(&self, scope: VarScope, id: u32) -> i32 {
        self.vars.get(&(scope, id)).copied().unwrap_or(0)
    }

    fn item_quantity(&self, item_id: u32) -> i32 {
        self.items.get(&item_id).copied().unwrap_or(0)
    }

    fn completion_banner_visible(&self) -> bool {
        self.banner
    }
}

/// Signal bindings shared by the unit tests. The ids are arbitrary.
pub(crate) fn bindings() -> SignalBindings {
    SignalBindings {
        speedrun_state_var: 4101,
        speedrun_active_value: 5,
        quest_var: 4102,
        quests_complete_var: 4103,
        timer_script: 2200,
        inventory_container: 40,
    }
}
