use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::game::MatchConfig;
use crate::search::alphabeta::{SearchParams, DEFAULT_DEPTH, DEFAULT_MOVETIME};

/// Hard limit the turn loop puts on a single move request.
pub const DEFAULT_MOVE_TIMEOUT_MS: u64 = 3000;
/// Headroom the engine keeps below a hard per-move limit.
pub const HARD_LIMIT_MARGIN_MS: u64 = 150;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub depth: u32,
    /// `None` searches to `depth` with no deadline.
    pub time_budget_ms: Option<u64>,
    pub max_nodes: Option<u64>,
    pub use_pruning: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            time_budget_ms: Some(DEFAULT_MOVETIME.as_millis() as u64),
            max_nodes: None,
            use_pruning: true,
        }
    }
}

impl EngineConfig {
    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            depth: self.depth,
            movetime: self.time_budget_ms.map(Duration::from_millis),
            max_nodes: self.max_nodes,
            use_pruning: self.use_pruning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// `None` waits for every agent indefinitely.
    pub move_timeout_ms: Option<u64>,
    pub opening_plies: usize,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { move_timeout_ms: Some(DEFAULT_MOVE_TIMEOUT_MS), opening_plies: 0, seed: 42 }
    }
}

impl GameConfig {
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            move_timeout: self.move_timeout_ms.map(Duration::from_millis),
            opening_plies: self.opening_plies,
            seed: self.seed,
        }
    }
}

impl Config {
    /// Engine params with the soft budget pulled under the game's hard
    /// per-move limit, so a configured 4.9 s budget still answers inside 3 s.
    pub fn engine_params(&self) -> SearchParams {
        let mut params = self.engine.search_params();
        if let Some(limit) = self.game.move_timeout_ms {
            let cap = Duration::from_millis(limit.saturating_sub(HARD_LIMIT_MARGIN_MS));
            params.movetime = Some(params.movetime.map_or(cap, |m| m.min(cap)));
        }
        params
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).with_context(|| format!("read config file: {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parse config file: {}", path.display()))
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
