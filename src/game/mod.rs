//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The grid wraps at every edge, so the only way to lose is to run into the
//! snake's own body.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{ConfigError, ConfigFileError, GameConfig};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use food::place_food;
pub use state::{GameState, Position, Snake};
