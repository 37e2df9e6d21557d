use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default world width, in world units
pub const DEFAULT_WIDTH: u32 = 640;
/// Default world height, in world units
pub const DEFAULT_HEIGHT: u32 = 480;
/// Side of one grid cell, in world units
pub const DEFAULT_BLOCK_SIZE: u32 = 20;
/// Game ticks per second
pub const DEFAULT_TICKS_PER_SECOND: u32 = 10;
/// Most cells allowed along either axis; keeps every coordinate and the
/// total cell count well inside `i32`
pub const MAX_GRID_SIDE: usize = 1 << 15;

/// A configuration that cannot produce a playable grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("block size must be non-zero")]
    ZeroBlockSize,
    #[error("{axis} must be non-zero")]
    ZeroDimension { axis: &'static str },
    #[error("{axis} {value} is not a multiple of block size {block_size}")]
    NotBlockAligned {
        axis: &'static str,
        value: u32,
        block_size: u32,
    },
    #[error("ticks per second must be non-zero")]
    ZeroTickRate,
    #[error("initial snake length must be at least 1")]
    ZeroSnakeLength,
    #[error("grid is {grid_width} cells wide but the snake starts {snake_length} cells long")]
    GridTooNarrow {
        grid_width: usize,
        snake_length: usize,
    },
    #[error("grid is {cells} cells along {axis}, the limit is {max}")]
    GridTooLarge {
        axis: &'static str,
        cells: usize,
        max: usize,
    },
}

/// A config file that could not be turned into a `GameConfig`
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the playfield in world units
    pub width: u32,
    /// Height of the playfield in world units
    pub height: u32,
    /// Side of one cell in world units; width and height must be multiples of it
    pub block_size: u32,
    /// Game ticks per second
    pub ticks_per_second: u32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            block_size: DEFAULT_BLOCK_SIZE,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            initial_snake_length: 3,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom playfield size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Create a configuration measured directly in cells (block size 1)
    pub fn cells(grid_width: u32, grid_height: u32) -> Self {
        Self {
            width: grid_width,
            height: grid_height,
            block_size: 1,
            ..Default::default()
        }
    }

    /// Load a JSON config file. Missing fields fall back to the defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigFileError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigFileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Number of cell columns
    pub fn grid_width(&self) -> usize {
        (self.width / self.block_size.max(1)) as usize
    }

    /// Number of cell rows
    pub fn grid_height(&self) -> usize {
        (self.height / self.block_size.max(1)) as usize
    }

    /// Time between two game ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }

    /// Reject any configuration that cannot be laid out as a whole grid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }

        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(ConfigError::ZeroDimension { axis });
            }
            if value % self.block_size != 0 {
                return Err(ConfigError::NotBlockAligned {
                    axis,
                    value,
                    block_size: self.block_size,
                });
            }
        }

        for (axis, cells) in [("width", self.grid_width()), ("height", self.grid_height())] {
            if cells > MAX_GRID_SIDE {
                return Err(ConfigError::GridTooLarge {
                    axis,
                    cells,
                    max: MAX_GRID_SIDE,
                });
            }
        }

        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.initial_snake_length == 0 {
            return Err(ConfigError::ZeroSnakeLength);
        }

        // The body is laid out leftwards from the centre column.
        if self.grid_width() / 2 + 1 < self.initial_snake_length {
            return Err(ConfigError::GridTooNarrow {
                grid_width: self.grid_width(),
                snake_length: self.initial_snake_length,
            });
        }

        Ok(())
    }
}
