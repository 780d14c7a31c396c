//! Text node

use crate::color::Rgba;
use crate::events::{EventEmitter, Subscription};
use crate::foundation::math::Vec2;
use crate::scene::observable::ObservableVec2;
use crate::scene::sprite::Sprite;

/// Visual style of a [`Text`] node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in world units
    pub font_size: f32,
    /// Fill color
    pub fill: Rgba,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            fill: Rgba::BLACK,
        }
    }
}

/// Events emitted by [`Text`]
#[derive(Debug, Clone, PartialEq)]
pub enum TextEvent {
    /// The content string was replaced
    Changed(String),
    /// Visibility toggled
    VisibilityChanged(bool),
}

/// A positioned text display object
///
/// Glyph rasterization belongs to the host renderer; this node carries the
/// content, style, and an optional background sprite.
#[derive(Debug)]
pub struct Text {
    content: String,
    /// Render style
    pub style: TextStyle,
    /// Position of the top-left corner
    pub position: ObservableVec2,
    /// Sprite drawn behind the text
    pub background: Option<Sprite>,
    visible: bool,
    events: EventEmitter<TextEvent>,
}

impl Default for Text {
    fn default() -> Self {
        Self::new("")
    }
}

impl Text {
    /// Create a text node
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle::default(),
            position: ObservableVec2::default(),
            background: None,
            visible: true,
            events: EventEmitter::new(),
        }
    }

    /// Create a text node with an explicit style
    pub fn with_style(content: impl Into<String>, style: TextStyle) -> Self {
        let mut text = Self::new(content);
        text.style = style;
        text
    }

    /// Current content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the content, emitting [`TextEvent::Changed`]
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.events.emit(&TextEvent::Changed(self.content.clone()));
    }

    /// Approximate extent of the rendered text
    ///
    /// A monospace estimate (0.6em advance, 1.2em line height); exact
    /// metrics require the host renderer's font machinery.
    pub fn metrics(&self) -> Vec2 {
        let longest_line = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let line_count = self.content.lines().count().max(1);

        Vec2::new(
            longest_line as f32 * self.style.font_size * 0.6,
            line_count as f32 * self.style.font_size * 1.2,
        )
    }

    /// Whether the text is drawn
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set visibility, emitting [`TextEvent::VisibilityChanged`] on change
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.events.emit(&TextEvent::VisibilityChanged(visible));
        }
    }

    /// Make the text visible
    pub fn show(&mut self) {
        self.set_visible(true);
    }

    /// Hide the text
    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    /// Register a listener for text events
    pub fn on<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&TextEvent) + 'static,
    {
        self.events.on(callback)
    }

    /// Register a one-shot listener for text events
    pub fn once<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&TextEvent) + 'static,
    {
        self.events.once(callback)
    }

    /// Remove a listener
    pub fn off(&mut self, subscription: Subscription) -> bool {
        self.events.off(subscription)
    }
}
