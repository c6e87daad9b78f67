//! Player progress - completion tracking and local persistence
//!
//! A `Progress` record is a plain serde value; stores put one JSON document
//! per profile name. This is a local-profile convenience, not an
//! authentication boundary.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::MAX_LEVEL;

/// Per-profile progress record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Completed levels, kept sorted and unique.
    pub completed_levels: Vec<u32>,
    /// The level the player should see next.
    pub current_level: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            completed_levels: Vec::new(),
            current_level: 1,
        }
    }
}

impl Progress {
    /// Record a completed level and advance `current_level` past it.
    /// Re-completing a level is a no-op for the list.
    pub fn record_completion(&mut self, level: u32) {
        if let Err(index) = self.completed_levels.binary_search(&level) {
            self.completed_levels.insert(index, level);
        }
        self.current_level = self.current_level.max((level + 1).min(MAX_LEVEL));
    }

    pub fn is_completed(&self, level: u32) -> bool {
        self.completed_levels.binary_search(&level).is_ok()
    }
}

/// Where progress records live. Load of an unknown profile yields the
/// default record rather than an error.
pub trait ProgressStore {
    fn load(&self, user: &str) -> Result<Progress>;
    fn save(&mut self, user: &str, progress: &Progress) -> Result<()>;
}

/// In-memory store, for tests and embedding frontends.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, Progress>,
}

impl ProgressStore for MemoryStore {
    fn load(&self, user: &str) -> Result<Progress> {
        Ok(self.records.get(user).cloned().unwrap_or_default())
    }

    fn save(&mut self, user: &str, progress: &Progress) -> Result<()> {
        self.records.insert(user.to_string(), progress.clone());
        Ok(())
    }
}

/// One JSON file per profile under a directory.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, user: &str) -> PathBuf {
        // Profile names become file names, so strip anything that could
        // escape the directory.
        let sanitized: String = user
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{sanitized}.json"))
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self, user: &str) -> Result<Progress> {
        let path = self.path_for(user);
        if !path.exists() {
            return Ok(Progress::default());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading progress file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing progress file {}", path.display()))
    }

    fn save(&mut self, user: &str, progress: &Progress) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating progress dir {}", self.dir.display()))?;
        let path = self.path_for(user);
        let raw = serde_json::to_string_pretty(progress)?;
        fs::write(&path, raw)
            .with_context(|| format!("writing progress file {}", path.display()))
    }
}
