//! Queue and scheduler configuration structures.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::AppResult;

/// Upper bound accepted for any `initial_capacity` preallocation.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

/// Environment variable selecting the priority backend.
pub const ENV_SELECTION_STRATEGY: &str = "TURNSTILE_SELECTION_STRATEGY";
/// Environment variable for the priority queue preallocation.
pub const ENV_PRIORITY_CAPACITY: &str = "TURNSTILE_PRIORITY_CAPACITY";
/// Environment variable for the turn queue preallocation.
pub const ENV_TURN_CAPACITY: &str = "TURNSTILE_TURN_CAPACITY";
/// Environment variable enabling a bounded turn audit trail.
pub const ENV_AUDIT_CAPACITY: &str = "TURNSTILE_AUDIT_CAPACITY";

/// Priority selection backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Vector with an O(n) strict-greater scan per selection.
    #[default]
    LinearScan,
    /// Binary heap keyed on priority then insertion sequence.
    Heap,
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LinearScan => write!(f, "linear_scan"),
            Self::Heap => write!(f, "heap"),
        }
    }
}

impl FromStr for SelectionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear_scan" | "scan" => Ok(Self::LinearScan),
            "heap" => Ok(Self::Heap),
            other => Err(format!("unknown selection strategy `{other}`")),
        }
    }
}

/// Priority selection queue configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityQueueConfig {
    /// Backend used for selection.
    pub strategy: SelectionStrategy,
    /// Entries to preallocate room for.
    pub initial_capacity: usize,
}

impl Default for PriorityQueueConfig {
    fn default() -> Self {
        Self {
            strategy: SelectionStrategy::default(),
            initial_capacity: 16,
        }
    }
}

/// Round-robin turn queue configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnQueueConfig {
    /// Entities to preallocate room for.
    pub initial_capacity: usize,
    /// Keep the most recent N audit events. `None` disables auditing.
    pub audit_capacity: Option<usize>,
}

impl Default for TurnQueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            audit_capacity: None,
        }
    }
}

/// Root scheduler configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Priority selection queue settings.
    pub priority: PriorityQueueConfig,
    /// Round-robin turn queue settings.
    pub turns: TurnQueueConfig,
}

fn validate_capacity(initial_capacity: usize) -> Result<(), String> {
    if initial_capacity > MAX_INITIAL_CAPACITY {
        return Err(format!(
            "initial_capacity must be at most {MAX_INITIAL_CAPACITY}"
        ));
    }
    Ok(())
}

impl PriorityQueueConfig {
    /// Validate priority queue configuration values.
    pub fn validate(&self) -> Result<(), String> {
        validate_capacity(self.initial_capacity)
    }
}

impl TurnQueueConfig {
    /// Validate turn queue configuration values.
    pub fn validate(&self) -> Result<(), String> {
        validate_capacity(self.initial_capacity)?;
        if self.audit_capacity == Some(0) {
            return Err("audit_capacity must be greater than 0".into());
        }
        Ok(())
    }
}

impl SchedulerConfig {
    /// Validate both queue sections.
    pub fn validate(&self) -> Result<(), String> {
        self.priority
            .validate()
            .map_err(|e| format!("priority queue invalid: {e}"))?;
        self.turns
            .validate()
            .map_err(|e| format!("turn queue invalid: {e}"))?;
        Ok(())
    }

    /// Parse scheduler configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build configuration from the process environment, loading `.env` first
    /// when one exists. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Fails if a `.env` file exists but cannot be read or parsed, or if a
    /// variable holds an invalid value.
    pub fn from_env() -> AppResult<Self> {
        load_env_file(dotenvy::dotenv(), ".env")?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), loading variables from `path` instead of `.env`.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed, or if a
    /// variable holds an invalid value.
    pub fn from_env_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        load_env_file(dotenvy::from_path(path), &path.display().to_string())?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(ENV_SELECTION_STRATEGY) {
            cfg.priority.strategy = raw
                .parse::<SelectionStrategy>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("reading {ENV_SELECTION_STRATEGY}"))?;
        }
        if let Some(raw) = lookup(ENV_PRIORITY_CAPACITY) {
            cfg.priority.initial_capacity = parse_usize(ENV_PRIORITY_CAPACITY, &raw)?;
        }
        if let Some(raw) = lookup(ENV_TURN_CAPACITY) {
            cfg.turns.initial_capacity = parse_usize(ENV_TURN_CAPACITY, &raw)?;
        }
        if let Some(raw) = lookup(ENV_AUDIT_CAPACITY) {
            cfg.turns.audit_capacity = Some(parse_usize(ENV_AUDIT_CAPACITY, &raw)?);
        }

        cfg.validate().map_err(anyhow::Error::msg)?;
        tracing::debug!(strategy = %cfg.priority.strategy, "loaded scheduler config");
        Ok(cfg)
    }
}

// Only a missing file is tolerated; a present file must parse.
fn load_env_file<T>(result: Result<T, dotenvy::Error>, name: &str) -> AppResult<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).with_context(|| format!("loading {name}")),
    }
}

fn parse_usize(key: &str, raw: &str) -> AppResult<usize> {
    raw.trim()
        .parse::<usize>()
        .with_context(|| format!("{key} must be a non-negative integer, got `{raw}`"))
}
