use std::time::Duration;

use common::{
    config::{ConfigError, MazeConfig, env_var, load_dotenv},
    constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH},
};

use crate::palette::Palette;

pub const WINDOW_WIDTH_KEY: &str = "MAZE_WINDOW_WIDTH";
pub const WINDOW_HEIGHT_KEY: &str = "MAZE_WINDOW_HEIGHT";
pub const FRAME_DELAY_KEY: &str = "MAZE_FRAME_DELAY_MS";
pub const STEPS_PER_FRAME_KEY: &str = "MAZE_STEPS_PER_FRAME";
pub const BACKGROUND_KEY: &str = "MAZE_BACKGROUND";
pub const WALL_COLOR_KEY: &str = "MAZE_WALL_COLOR";
pub const CURSOR_COLOR_KEY: &str = "MAZE_CURSOR_COLOR";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub frame_delay: Duration, // Minimum time between animation ticks.
    pub steps_per_frame: usize,
    pub background: Palette,
    pub wall: Palette,
    pub cursor: Palette,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            frame_delay: Duration::ZERO,
            steps_per_frame: 1,
            background: Palette::Black,
            wall: Palette::White,
            cursor: Palette::White,
        }
    }
}

impl ViewConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();

        let defaults = Self::default();
        let frame_delay_ms: u64 = env_var(FRAME_DELAY_KEY, 0)?;

        Self {
            window_width: env_var(WINDOW_WIDTH_KEY, defaults.window_width)?,
            window_height: env_var(WINDOW_HEIGHT_KEY, defaults.window_height)?,
            frame_delay: Duration::from_millis(frame_delay_ms),
            steps_per_frame: env_var(STEPS_PER_FRAME_KEY, defaults.steps_per_frame)?,
            background: env_var(BACKGROUND_KEY, defaults.background)?,
            wall: env_var(WALL_COLOR_KEY, defaults.wall)?,
            cursor: env_var(CURSOR_COLOR_KEY, defaults.cursor)?,
        }
        .validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.steps_per_frame == 0 {
            return Err(ConfigError::OutOfRange {
                key: STEPS_PER_FRAME_KEY,
                reason: "must be at least 1",
            });
        }
        if self.window_width == 0 {
            return Err(ConfigError::OutOfRange {
                key: WINDOW_WIDTH_KEY,
                reason: "must be at least 1",
            });
        }
        if self.window_height == 0 {
            return Err(ConfigError::OutOfRange {
                key: WINDOW_HEIGHT_KEY,
                reason: "must be at least 1",
            });
        }

        Ok(self)
    }

    /// Width and height of one cell in pixels, rounded down so that wall
    /// lines land on whole pixels.
    pub fn cell_size(&self, cols: usize, rows: usize) -> (f32, f32) {
        let w = (self.window_width as f32 / cols.max(1) as f32).floor().max(1.0);
        let h = (self.window_height as f32 / rows.max(1) as f32).floor().max(1.0);
        (w, h)
    }
}

/// Everything the binaries read from the environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub maze: MazeConfig,
    pub view: ViewConfig,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            maze: MazeConfig::from_env()?,
            view: ViewConfig::from_env()?,
        })
    }
}
