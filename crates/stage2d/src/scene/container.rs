//! Container node

use crate::events::{EventEmitter, Subscription};
use crate::scene::observable::ObservableVec2;
use crate::scene::sprite::Sprite;

/// Events emitted by [`Container`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContainerEvent {
    /// A child was appended at the given index
    ChildAdded {
        /// Index the child landed at
        index: usize,
    },
    /// Visibility toggled
    VisibilityChanged(bool),
}

/// A group of sprites sharing a position
///
/// Children are positioned relative to the container; an optional
/// background sprite renders behind them.
#[derive(Debug)]
pub struct Container {
    /// Position of the container origin
    pub position: ObservableVec2,
    /// Sprite drawn behind all children
    pub background: Option<Sprite>,
    children: Vec<Sprite>,
    visible: bool,
    events: EventEmitter<ContainerEvent>,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    /// Create an empty container
    pub fn new() -> Self {
        Self {
            position: ObservableVec2::default(),
            background: None,
            children: Vec::new(),
            visible: true,
            events: EventEmitter::new(),
        }
    }

    /// Create a container with a background sprite
    pub fn with_background(background: Sprite) -> Self {
        let mut container = Self::new();
        container.background = Some(background);
        container
    }

    /// Append a child, emitting [`ContainerEvent::ChildAdded`]
    ///
    /// Returns the index the child landed at.
    pub fn add_child(&mut self, child: Sprite) -> usize {
        self.children.push(child);
        let index = self.children.len() - 1;
        self.events.emit(&ContainerEvent::ChildAdded { index });
        index
    }

    /// Remove and return the child at an index
    ///
    /// Later children shift down, matching `Vec::remove`. Returns `None`
    /// for an out-of-range index.
    pub fn remove_child(&mut self, index: usize) -> Option<Sprite> {
        if index < self.children.len() {
            Some(self.children.remove(index))
        } else {
            None
        }
    }

    /// The children, in draw order
    pub fn children(&self) -> &[Sprite] {
        &self.children
    }

    /// Mutable access to a child
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Sprite> {
        self.children.get_mut(index)
    }

    /// Number of children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the container has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether the container is drawn
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set visibility, emitting [`ContainerEvent::VisibilityChanged`] on change
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.events.emit(&ContainerEvent::VisibilityChanged(visible));
        }
    }

    /// Make the container visible
    pub fn show(&mut self) {
        self.set_visible(true);
    }

    /// Hide the container
    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    /// Register a listener for container events
    pub fn on<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&ContainerEvent) + 'static,
    {
        self.events.on(callback)
    }

    /// Register a one-shot listener for container events
    pub fn once<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&ContainerEvent) + 'static,
    {
        self.events.once(callback)
    }

    /// Remove a listener
    pub fn off(&mut self, subscription: Subscription) -> bool {
        self.events.off(subscription)
    }
}
