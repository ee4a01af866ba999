//! Bridge configuration
//!
//! Loaded from a TOML file the host manages: the timer-server endpoint, the
//! game signal bindings, and the quest catalog.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::checkpoints::{CheckpointCatalog, QuestSplits};
use crate::error::Result;
use crate::game::SignalBindings;
use crate::livesplit::TcpLink;

/// Timer-server endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound on one blocking reply read, in milliseconds. A dead peer
    /// stalls the invoking event handler for at most this long.
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    16834
}

fn default_read_timeout_ms() -> u64 {
    1000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            read_timeout_ms: default_read_timeout_ms(),
        }
    }
}

impl ServerConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    /// Open a timer-server link to this endpoint.
    pub fn connect(&self) -> Result<TcpLink> {
        TcpLink::connect(&self.host, self.port, self.read_timeout())
    }
}

/// Full bridge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitterConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub signals: SignalBindings,
    /// Quest catalog entries, one `[[quest]]` table each
    #[serde(default)]
    pub quest: Vec<QuestSplits>,
}

impl SplitterConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Build the quest catalog from the configured entries.
    pub fn catalog(&self) -> CheckpointCatalog {
        let mut catalog = CheckpointCatalog::new();
        for entry in &self.quest {
            catalog.register(entry.clone());
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNALS: &str = r#"
        [signals]
        speedrun_state_var = 4101
        speedrun_active_value = 5
        quest_var = 4102
        quests_complete_var = 4103
        timer_script = 2200
        inventory_container = 40
    "#;

    #[test]
    fn test_server_defaults() {
        let config = SplitterConfig::from_toml_str(SIGNALS).unwrap();

        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.server.port, 16834);
        assert_eq!(config.server.read_timeout(), Duration::from_millis(1000));
        assert!(config.quest.is_empty());
    }

    #[test]
    fn test_full_config() {
        let text = format!(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000
            read_timeout_ms = 250

            {SIGNALS}

            [[quest]]
            id = 3
            name = "Sunken Temple"
            splits = "Rusty key,0,100"
        "#
        );
        let config = SplitterConfig::from_toml_str(&text).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.read_timeout_ms, 250);
        assert_eq!(config.signals.quest_var, 4102);

        let catalog = config.catalog();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.resolve(3).unwrap().name, "Sunken Temple");
    }

    #[test]
    fn test_signals_are_required() {
        assert!(SplitterConfig::from_toml_str("[server]\nport = 1").is_err());
    }
}
