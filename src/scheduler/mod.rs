//! Timed event scheduling
pub mod event;
pub mod queue;

pub use event::{EventKind, Generation, MoleToken, TimedEvent};
pub use queue::{EventQueue, QueueFull};
