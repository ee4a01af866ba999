//! Splits-definition parser
//!
//! One record per line, comma-separated: `label,kind,key[,threshold]`.
//! Kind `0` watches an inventory quantity and its threshold defaults to 1;
//! kinds `1` and `2` watch a game var / player var for equality and require
//! the target value. A malformed record is logged and skipped; the remaining
//! lines still parse. Partial success is the expected outcome, not an error.

use super::watch::{CheckpointWatch, WatchKind, WatchLists};

/// Parse a splits definition into fresh watch lists.
pub fn parse_splits(text: &str) -> WatchLists {
    let mut lists = WatchLists::default();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_record(line) {
            Ok((kind, watch)) => {
                let list = match kind {
                    WatchKind::Item => &mut lists.items,
                    WatchKind::GameVar => &mut lists.game_vars,
                    WatchKind::PlayerVar => &mut lists.player_vars,
                };
                list.push(watch);
            }
            Err(reason) => {
                log::warn!("skipping splits record {} ({:?}): {}", index + 1, line, reason);
            }
        }
    }
    log::debug!(
        "parsed splits: {} item, {} game-var, {} player-var watches",
        lists.items.len(),
        lists.game_vars.len(),
        lists.player_vars.len()
    );
    lists
}

fn parse_record(line: &str) -> Result<(WatchKind, CheckpointWatch), String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 3 {
        return Err("expected label,kind,key".to_string());
    }

    let kind_code: u32 = fields[1]
        .parse()
        .map_err(|_| format!("kind {:?} is not a number", fields[1]))?;
    let kind = WatchKind::from_code(kind_code).ok_or_else(|| format!("unknown kind {}", kind_code))?;
    let key: u32 = fields[2]
        .parse()
        .map_err(|_| format!("key {:?} is not a number", fields[2]))?;

    // Extra fields beyond the threshold are ignored.
    let threshold = match (kind, fields.get(3)) {
        (_, Some(raw)) => raw
            .parse()
            .map_err(|_| format!("threshold {:?} is not a number", raw))?,
        (WatchKind::Item, None) => 1,
        (_, None) => return Err("missing target value".to_string()),
    };

    Ok((
        kind,
        CheckpointWatch {
            label: fields[0].to_string(),
            key,
            threshold,
        },
    ))
}
