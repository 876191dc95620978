// src/config.rs
use std::fs;
use std::path::Path;
use std::time::Duration;

use dungeon::constants::{MAP_HEIGHT, MAP_WIDTH, TILE_SIZE};
use error::{GameError, GameResult};
use serde::{Deserialize, Serialize};

use crate::constants::{DIFFICULTY_STEP, FPS, LEVEL_HEAL, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Runtime settings. Every field has a default, so a config file only needs
/// the keys it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Viewport size in world pixels.
    pub screen_width: f32,
    pub screen_height: f32,
    pub fps: u32,
    /// Fixed RNG seed; a clock-derived seed is used when absent.
    pub seed: Option<u64>,
    /// Added to the difficulty multiplier on every level transition.
    pub difficulty_step: f32,
    /// Health restored on every level transition.
    pub level_heal: f32,
    /// World pixels covered by one terminal cell.
    pub cell_width: f32,
    pub cell_height: f32,
    /// How long a key counts as held after its last press or repeat.
    pub hold_window_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fps: FPS,
            seed: None,
            difficulty_step: DIFFICULTY_STEP,
            level_heal: LEVEL_HEAL,
            cell_width: 12.0,
            cell_height: 24.0,
            hold_window_ms: 150,
        }
    }
}

impl GameConfig {
    /// Reads and validates a JSON config file.
    pub fn load(path: &Path) -> GameResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| GameError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> GameResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> GameResult<()> {
        let map_width = MAP_WIDTH as f32 * TILE_SIZE;
        let map_height = MAP_HEIGHT as f32 * TILE_SIZE;
        if !(self.screen_width > 0.0 && self.screen_width <= map_width) {
            return Err(invalid(format!(
                "screen_width must be in (0, {map_width}], got {}",
                self.screen_width
            )));
        }
        if !(self.screen_height > 0.0 && self.screen_height <= map_height) {
            return Err(invalid(format!(
                "screen_height must be in (0, {map_height}], got {}",
                self.screen_height
            )));
        }
        if self.fps == 0 {
            return Err(invalid("fps must be positive".to_string()));
        }
        if !(self.difficulty_step >= 0.0) {
            return Err(invalid(format!(
                "difficulty_step must not be negative, got {}",
                self.difficulty_step
            )));
        }
        if !(self.level_heal >= 0.0) {
            return Err(invalid(format!(
                "level_heal must not be negative, got {}",
                self.level_heal
            )));
        }
        if !(self.cell_width > 0.0 && self.cell_height > 0.0) {
            return Err(invalid("cell size must be positive".to_string()));
        }
        Ok(())
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }

    /// Hold window expressed in frames, at least one.
    pub fn hold_window_frames(&self) -> u64 {
        (self.hold_window_ms * u64::from(self.fps) / 1000).max(1)
    }
}

fn invalid(message: String) -> GameError {
    GameError::InvalidConfig(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.screen_width, 1024.0);
        assert_eq!(config.fps, 60);
        assert_eq!(config.hold_window_frames(), 9);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "seed": 42, "fps": 30 }"#).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.fps, 30);
        assert_eq!(config.level_heal, 20.0);
    }

    #[test]
    fn zero_fps_is_rejected() {
        let config = GameConfig {
            fps: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn screen_larger_than_map_is_rejected() {
        let config = GameConfig {
            screen_width: 5000.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
