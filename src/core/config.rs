//! Game configuration: board geometry, entity sizes, physics and timing.
//!
//! Every entity is built from a `GameConfig` rather than from global
//! constants, so tests can shrink the board or change intervals freely.
//! Configs are plain JSON; any field left out falls back to the default.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: i32,
    pub board_height: i32,
    pub bird_width: i32,
    pub bird_height: i32,
    pub pipe_width: i32,
    pub pipe_height: i32,
    pub pipe_base_y: i32,
    /// Velocity added every frame (positive = downward).
    pub gravity: i32,
    /// Velocity set by a flap (negative = upward).
    pub flap_velocity: i32,
    /// Horizontal pipe velocity per frame (negative = leftward).
    pub scroll_velocity: i32,
    pub score_per_pipe: f64,
    pub tick_interval_ms: u64,
    pub spawn_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            pipe_base_y: PIPE_BASE_Y,
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            scroll_velocity: SCROLL_VELOCITY,
            score_per_pipe: SCORE_PER_PIPE,
            tick_interval_ms: TICK_INTERVAL_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Fixed horizontal position of the bird.
    pub fn bird_start_x(&self) -> i32 {
        self.board_width / 8
    }

    /// Vertical position the bird starts every turn from.
    pub fn bird_start_y(&self) -> i32 {
        self.board_height / 2
    }

    /// Vertical opening between a top and a bottom pipe.
    pub fn gap_size(&self) -> i32 {
        self.board_height / 4
    }

    pub fn validate(&self) -> Result<(), String> {
        let dimensions = [
            ("board_width", self.board_width),
            ("board_height", self.board_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
        ];
        for (name, value) in dimensions {
            if value <= 0 {
                return Err(format!("{} must be positive, got {}", name, value));
            }
        }

        if self.flap_velocity >= 0 {
            return Err("flap_velocity must be negative (upward)".to_string());
        }
        if self.scroll_velocity >= 0 {
            return Err("scroll_velocity must be negative (leftward)".to_string());
        }
        if !self.score_per_pipe.is_finite() || self.score_per_pipe < 0.0 {
            return Err("score_per_pipe must be a non-negative number".to_string());
        }
        if self.tick_interval_ms == 0 || self.spawn_interval_ms == 0 {
            return Err("tick and spawn intervals must be at least 1 ms".to_string());
        }

        Ok(())
    }

    /// Read and validate a config from a JSON file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> io::Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config
            .validate()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Load `path` when given, otherwise the platform config file if it
    /// exists, otherwise the defaults.
    pub fn resolve(path: Option<&Path>) -> io::Result<Self> {
        if let Some(path) = path {
            let config = Self::load(path)?;
            tracing::info!(path = %path.display(), "loaded game config");
            return Ok(config);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                let config = Self::load(&path)?;
                tracing::info!(path = %path.display(), "loaded game config");
                Ok(config)
            }
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// `config.json` inside the platform config directory, if one can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "flappy-rounds")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
