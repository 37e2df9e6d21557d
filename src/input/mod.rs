pub mod handler;

pub use handler::{DirectionLatch, InputHandler, KeyAction};
