//! Observable 2D position

use crate::events::{EventEmitter, Subscription};
use crate::foundation::math::Vec2;

/// A position that notifies listeners when it actually changes
///
/// Setting a component to its current value is a no-op and fires nothing,
/// so wiring a listener back into the same node cannot ping-pong.
#[derive(Debug)]
pub struct ObservableVec2 {
    value: Vec2,
    events: EventEmitter<Vec2>,
}

impl Default for ObservableVec2 {
    fn default() -> Self {
        Self::new(Vec2::zeros())
    }
}

impl ObservableVec2 {
    /// Create from an initial value
    pub fn new(value: Vec2) -> Self {
        Self {
            value,
            events: EventEmitter::new(),
        }
    }

    /// Current value
    pub fn get(&self) -> Vec2 {
        self.value
    }

    /// X component
    pub fn x(&self) -> f32 {
        self.value.x
    }

    /// Y component
    pub fn y(&self) -> f32 {
        self.value.y
    }

    /// Set both components, notifying listeners when the value changed
    pub fn set(&mut self, value: Vec2) {
        if self.value != value {
            self.value = value;
            self.events.emit(&value);
        }
    }

    /// Set both components from scalars
    pub fn set_xy(&mut self, x: f32, y: f32) {
        self.set(Vec2::new(x, y));
    }

    /// Set the X component
    pub fn set_x(&mut self, x: f32) {
        self.set(Vec2::new(x, self.value.y));
    }

    /// Set the Y component
    pub fn set_y(&mut self, y: f32) {
        self.set(Vec2::new(self.value.x, y));
    }

    /// Move by a delta
    pub fn translate(&mut self, delta: Vec2) {
        self.set(self.value + delta);
    }

    /// Register a listener for position changes
    pub fn on_change<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&Vec2) + 'static,
    {
        self.events.on(callback)
    }

    /// Register a one-shot listener for the next position change
    pub fn once_change<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&Vec2) + 'static,
    {
        self.events.once(callback)
    }

    /// Remove a listener
    pub fn off(&mut self, subscription: Subscription) -> bool {
        self.events.off(subscription)
    }
}

impl From<Vec2> for ObservableVec2 {
    fn from(value: Vec2) -> Self {
        Self::new(value)
    }
}
