//! Ordered record of accepted actions.
//!
//! Entries are kept in memory for the lifetime of a game and can be exported
//! as JSON lines, one entry per line, for replay tooling or bug reports.

use std::io::Write;

use serde::{Deserialize, Serialize};

use game_core::{Action, ActionResult, PlayerColor};

use super::error::{RepositoryError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLogEntry {
    /// Nonce of the state the action produced.
    pub nonce: u64,

    /// Side that performed the action.
    pub player: PlayerColor,

    pub action: Action,
    pub result: ActionResult,
}

#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    entries: Vec<ActionLogEntry>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: ActionLogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ActionLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Writes every entry as one JSON object per line.
    pub fn write_json_lines<W: Write>(&self, mut writer: W) -> Result<()> {
        for entry in &self.entries {
            serde_json::to_writer(&mut writer, entry)
                .map_err(|e| RepositoryError::Json(e.to_string()))?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Parses entries previously written by [`ActionLog::write_json_lines`].
    pub fn read_json_lines(input: &str) -> Result<Self> {
        let entries = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line).map_err(|e| RepositoryError::Json(e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }
}
