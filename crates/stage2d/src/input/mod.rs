//! Input state tracking
//!
//! The embedding application pumps its host window events into
//! [`Keyboard::handle_key`] and the [`Mouse`] handlers; this module keeps
//! the derived state (pressed sets, positions, press durations) and emits
//! typed transition events. Single-threaded: drive it from the event loop.

pub mod keyboard;
pub mod mouse;

pub use keyboard::{KeyCode, KeyEvent, Keyboard, Modifiers};
pub use mouse::{Mouse, MouseButton, MouseEvent};
