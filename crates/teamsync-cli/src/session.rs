//! On-disk session state for the CLI.
//!
//! Commands operate on one current board at a time. Between invocations it
//! lives as JSON in `board.json` under the data directory; `--session PATH`
//! points commands at a different file.

use std::io::ErrorKind;
use std::path::PathBuf;

use teamsync_core::{config, Board};

pub struct SessionStore {
    override_path: Option<PathBuf>,
}

impl SessionStore {
    pub fn new(override_path: Option<PathBuf>) -> Self {
        Self { override_path }
    }

    fn path(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        match &self.override_path {
            Some(path) => Ok(path.clone()),
            None => Ok(config::data_dir()?.join("board.json")),
        }
    }

    /// Load the current board, if a session exists.
    pub fn load(&self) -> Result<Option<Board>, Box<dyn std::error::Error>> {
        match std::fs::read_to_string(self.path()?) {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Load the current board, failing when no session exists.
    pub fn require(&self) -> Result<Board, Box<dyn std::error::Error>> {
        self.load()?
            .ok_or_else(|| "no board loaded; run `board load` first".into())
    }

    /// Persist the board as the current session.
    pub fn save(&self, board: &Board) -> Result<(), Box<dyn std::error::Error>> {
        let path = self.path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(board)?)?;
        Ok(())
    }

    /// Drop the session. Returns whether one existed.
    pub fn clear(&self) -> Result<bool, Box<dyn std::error::Error>> {
        match std::fs::remove_file(self.path()?) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
