//! # stage2d
//!
//! A 2D sprite and scene convenience layer for applications embedding a
//! rendering backend.
//!
//! ## Features
//!
//! - **Geometry & Collision**: AABB overlap, minimum-translation-vector
//!   penetration, and slab-method segment sweeps
//! - **Scene Nodes**: sprites, containers, and text with observable
//!   positions and typed events
//! - **Texture Cache**: name-addressed RGBA8 textures with stable handles
//!   and manifest loading
//! - **Observable Colors**: normalized RGBA with per-channel change
//!   notifications and hex packing
//! - **Input Tracking**: keyboard and mouse state fed from the host event
//!   loop
//! - **Utilities**: frame timing, FPS readout, random helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stage2d::prelude::*;
//!
//! fn main() -> Result<(), TextureError> {
//!     stage2d::foundation::logging::init();
//!
//!     let mut textures = TextureManager::new();
//!     textures.load("player", "assets/player.png")?;
//!     textures.load("enemy", "assets/enemy.png")?;
//!
//!     let mut player = Sprite::from_name(&textures, "player")?;
//!     let enemy = Sprite::from_name(&textures, "enemy")?;
//!     player.position.set_xy(120.0, 80.0);
//!
//!     if let Some(hit) = collides(&player, &enemy) {
//!         // Push the player back out along the minimum translation vector
//!         player.position.translate(-hit.delta);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod color;
pub mod events;
pub mod foundation;
pub mod geometry;
pub mod input;
pub mod scene;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        assets::{Texture, TextureError, TextureHandle, TextureManager, TextureManifest},
        color::{Color, ColorEvent, Rgba},
        events::{EventEmitter, Subscription},
        foundation::{
            math::{clamp, lerp, map, Vec2, Vec2Ext},
            random::{random_element, random_int, random_range, random_unit},
            time::Timer,
        },
        geometry::{intersect_boxes, Hit, Rect},
        input::{KeyCode, KeyEvent, Keyboard, Modifiers, Mouse, MouseButton, MouseEvent},
        scene::{
            collides, Container, ContainerEvent, FpsCounter, FpsCounterConfig, FpsEvent,
            ObservableVec2, Sprite, SpriteEvent, Text, TextEvent, TextStyle,
        },
    };
}
