//! Input handling: event types and the input processor that converts raw
//! page events into engine commands.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into engine commands.
pub mod processor;

pub use event::{HitTarget, InputEvent, KeyFocus, PointerKind};
pub use processor::{InputProcessor, Routing};
