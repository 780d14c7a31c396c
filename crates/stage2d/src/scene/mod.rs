//! Scene nodes: sprites, containers, text
//!
//! Lightweight display objects an embedding renderer consumes. Nodes own
//! their observable position and tint color, and surface typed events for
//! state transitions.

pub mod container;
pub mod fps_counter;
pub mod observable;
pub mod sprite;
pub mod text;

pub use container::{Container, ContainerEvent};
pub use fps_counter::{FpsCounter, FpsCounterConfig, FpsEvent};
pub use observable::ObservableVec2;
pub use sprite::{collides, Sprite, SpriteEvent};
pub use text::{Text, TextEvent, TextStyle};
