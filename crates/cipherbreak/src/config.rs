//! Configuration for the breakers
//!
//! Handles loading search defaults: which scorer each breaker
//! minimizes, how many key lengths to try, and how many candidates to show.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::breaker::DEFAULT_MAX_KEY_LENGTH;
use crate::Scorer;

const CONFIG_FILES: [&str; 2] = [".cipherbreak.json", "cipherbreak.json"];

/// Search defaults, overridable from the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakConfig {
  /// Longest repeating key to try
  #[serde(default = "default_max_key_length")]
  pub max_key_length: usize,
  /// Scorer for shift-cipher breaking
  #[serde(default = "default_shift_scorer")]
  pub shift_scorer: Scorer,
  /// Scorer for repeating-key breaking
  #[serde(default = "default_key_scorer")]
  pub key_scorer: Scorer,
  /// Number of ranked shift candidates to print
  #[serde(default = "default_top")]
  pub top: usize,
}

fn default_max_key_length() -> usize {
  DEFAULT_MAX_KEY_LENGTH
}
fn default_shift_scorer() -> Scorer {
  Scorer::RankDeviation
}
fn default_key_scorer() -> Scorer {
  Scorer::ChiSquared
}
fn default_top() -> usize {
  1
}

impl Default for BreakConfig {
  fn default() -> Self {
    Self {
      max_key_length: default_max_key_length(),
      shift_scorer: default_shift_scorer(),
      key_scorer: default_key_scorer(),
      top: default_top(),
    }
  }
}

impl BreakConfig {
  /// Load configuration from a file
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = serde_json::from_str(&content)
      .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
  }

  /// Load from an explicit path, the working directory, the user config
  /// directory, or fall back to defaults, in that order.
  pub fn load(explicit: Option<&Path>) -> Result<Self> {
    if let Some(path) = explicit {
      return Self::load_from_file(path);
    }

    for path in Self::search_paths() {
      if path.exists() {
        return Self::load_from_file(path);
      }
    }

    Ok(Self::default())
  }

  fn search_paths() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = CONFIG_FILES.iter().map(PathBuf::from).collect();
    if let Some(dir) = dirs::config_dir() {
      paths.push(dir.join("cipherbreak").join("config.json"));
    }
    paths
  }
}
