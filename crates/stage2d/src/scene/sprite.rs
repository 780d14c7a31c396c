//! Sprite node

use crate::assets::{TextureError, TextureHandle, TextureManager};
use crate::color::{Color, Rgba};
use crate::events::{EventEmitter, Subscription};
use crate::foundation::math::Vec2;
use crate::geometry::{intersect_boxes, Hit, Rect};
use crate::scene::observable::ObservableVec2;

/// Events emitted by [`Sprite`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpriteEvent {
    /// Visibility toggled
    VisibilityChanged(bool),
    /// The sprite now draws a different texture
    TextureChanged(TextureHandle),
}

/// A textured display object
///
/// The sprite owns its position and tint color outright; there is no
/// shared ownership graph between nodes. `anchor` is normalized over the
/// sprite bounds: (0, 0) anchors the position at the top-left corner,
/// (0.5, 0.5) at the center.
#[derive(Debug)]
pub struct Sprite {
    texture: TextureHandle,
    /// Position of the anchor point
    pub position: ObservableVec2,
    /// Normalized anchor inside the sprite bounds
    pub anchor: Vec2,
    /// Drawn size in world units
    pub size: Vec2,
    /// Tint and opacity
    pub color: Color,
    visible: bool,
    events: EventEmitter<SpriteEvent>,
}

impl Sprite {
    /// Create a sprite from a texture handle and an explicit size
    ///
    /// The tint starts white, which leaves the texture unmodified.
    pub fn new(texture: TextureHandle, size: Vec2) -> Self {
        Self {
            texture,
            position: ObservableVec2::default(),
            anchor: Vec2::zeros(),
            size,
            color: Color::from_rgba(Rgba::WHITE),
            visible: true,
            events: EventEmitter::new(),
        }
    }

    /// Create a sprite from a registered texture name, sized to the texture
    ///
    /// Fails with [`TextureError::NotFound`] for unregistered names.
    pub fn from_name(textures: &TextureManager, name: &str) -> Result<Self, TextureError> {
        let handle = textures.handle_or_err(name)?;
        let size = textures.get_or_err(name)?.size();
        Ok(Self::new(handle, size))
    }

    /// The texture this sprite draws
    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    /// Swap the texture, emitting [`SpriteEvent::TextureChanged`]
    pub fn set_texture(&mut self, texture: TextureHandle) {
        if self.texture != texture {
            self.texture = texture;
            self.events.emit(&SpriteEvent::TextureChanged(texture));
        }
    }

    /// Whether the sprite is drawn
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set visibility, emitting [`SpriteEvent::VisibilityChanged`] on change
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.events.emit(&SpriteEvent::VisibilityChanged(visible));
        }
    }

    /// Make the sprite visible
    pub fn show(&mut self) {
        self.set_visible(true);
    }

    /// Hide the sprite
    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    /// The sprite's bounds, anchor-aware
    pub fn hit_box(&self) -> Rect {
        let top_left = self.position.get() - self.anchor.component_mul(&self.size);
        Rect::from_min_size(top_left, self.size)
    }

    /// Register a listener for sprite events
    pub fn on<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&SpriteEvent) + 'static,
    {
        self.events.on(callback)
    }

    /// Register a one-shot listener for sprite events
    pub fn once<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&SpriteEvent) + 'static,
    {
        self.events.once(callback)
    }

    /// Remove a listener
    pub fn off(&mut self, subscription: Subscription) -> bool {
        self.events.off(subscription)
    }
}

/// Penetration test between two sprites' hit boxes
///
/// See [`intersect_boxes`] for the shape of the result.
pub fn collides(a: &Sprite, b: &Sprite) -> Option<Hit> {
    intersect_boxes(&a.hit_box(), &b.hit_box())
}
