//! Wrap Snake - terminal Snake on a grid that wraps at every edge
//!
//! This library provides:
//! - Core game logic (game module)
//! - TUI rendering and sprite orientation (render module)
//! - Keyboard input mapping (input module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
