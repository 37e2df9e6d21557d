pub mod renderer;
pub mod sprite;
pub mod terminal;

pub use renderer::Renderer;
pub use sprite::{Axis, Corner, SegmentSprite};
pub use terminal::{TerminalSession, TuiTerminal};
