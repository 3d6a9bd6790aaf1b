//! Append-only JSONL action log for debugging and replay.
//!
//! Default location is `<data_local_dir>/partials/actions.jsonl`. Each
//! dispatched action is written as one line, so the file can be followed
//! with `tail -f` while the explorer runs.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use partials_types::{ChangeEvent, SessionDefaults};

use crate::action::{Action, DispatchResult};
use crate::dispatch::dispatch_action;
use crate::state::AppState;

pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("partials")
        .join("actions.jsonl")
}

/// Append-only JSONL writer.
pub struct InteractionLog {
    writer: BufWriter<File>,
    session_start: Instant,
}

#[derive(Serialize)]
struct SessionHeader {
    event: &'static str,
    epoch_ms: u128,
    pid: u32,
}

#[derive(Serialize)]
struct LogEntry<'a> {
    t_ms: u128,
    action: &'a Action,
    events: &'a [ChangeEvent],
    #[serde(skip_serializing_if = "Option::is_none")]
    rejected: Option<&'a str>,
}

#[derive(Deserialize)]
struct ReplayEntry {
    // session headers carry `event` and no `action`
    action: Option<Action>,
}

impl InteractionLog {
    pub fn open(path: &Path) -> Option<Self> {
        if let Some(dir) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                log::warn!(target: "interaction_log", "cannot create {}: {}", dir.display(), e);
                return None;
            }
        }
        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => file,
            Err(e) => {
                log::warn!(target: "interaction_log", "cannot open {}: {}", path.display(), e);
                return None;
            }
        };
        let mut writer = BufWriter::new(file);

        let header = SessionHeader {
            event: "session_start",
            epoch_ms: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
            pid: std::process::id(),
        };
        if let Ok(json) = serde_json::to_string(&header) {
            let _ = writeln!(writer, "{}", json);
            let _ = writer.flush();
        }

        Some(Self {
            writer,
            session_start: Instant::now(),
        })
    }

    pub fn open_default() -> Option<Self> {
        Self::open(&default_log_path())
    }

    /// Log an action and its dispatch result. Rejected actions are kept too.
    pub fn log_action(&mut self, action: &Action, result: &DispatchResult) {
        let entry = LogEntry {
            t_ms: self.session_start.elapsed().as_millis(),
            action,
            events: &result.events,
            rejected: result.rejected.as_deref(),
        };
        if let Ok(json) = serde_json::to_string(&entry) {
            let _ = writeln!(self.writer, "{}", json);
            let _ = self.writer.flush();
        }
    }
}

/// Error type for log replay.
#[derive(Debug)]
pub enum ReplayError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl From<std::io::Error> for ReplayError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ReplayError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for ReplayError {}

/// Replay a log file onto a fresh state built from `defaults`.
///
/// Session headers, blank lines and unparseable lines are skipped. Playback
/// effects produced along the way are discarded.
pub fn replay_log(path: &Path, defaults: SessionDefaults) -> Result<AppState, ReplayError> {
    let mut state = AppState::new_with_defaults(defaults);
    let mut effects = Vec::new();
    let file = File::open(path)?;
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let entry: ReplayEntry = match serde_json::from_str(&line) {
            Ok(e) => e,
            Err(_) => continue,
        };
        if let Some(action) = entry.action {
            dispatch_action(&action, &mut state, &mut effects);
            effects.clear();
        }
    }
    Ok(state)
}
