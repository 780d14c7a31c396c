//! Keyboard state tracking

use std::collections::HashSet;

use crate::events::{EventEmitter, Subscription};

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Tab key
    Tab,
    /// Backspace key
    Backspace,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Left shift
    LeftShift,
    /// Right shift
    RightShift,
    /// Left control
    LeftControl,
    /// Right control
    RightControl,
    /// Left alt
    LeftAlt,
    /// Right alt
    RightAlt,
}

bitflags::bitflags! {
    /// Modifier keys currently held
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        /// Either shift key
        const SHIFT = 1 << 0;
        /// Either control key
        const CONTROL = 1 << 1;
        /// Either alt key
        const ALT = 1 << 2;
    }
}

/// Key transition events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Key went down (fresh press, OS auto-repeat filtered out)
    Down(KeyCode),
    /// Key was released
    Up(KeyCode),
}

/// Keyboard state
///
/// Feed host key transitions through [`Keyboard::handle_key`]. Repeated
/// `pressed` reports for a held key (OS auto-repeat) emit nothing, and a
/// release for a key never seen down emits nothing.
#[derive(Debug, Default)]
pub struct Keyboard {
    pressed: HashSet<KeyCode>,
    events: EventEmitter<KeyEvent>,
}

impl Keyboard {
    /// Create a keyboard with no keys held
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
            events: EventEmitter::new(),
        }
    }

    /// Process a host key transition
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            if self.pressed.insert(key) {
                self.events.emit(&KeyEvent::Down(key));
            }
        } else if self.pressed.remove(&key) {
            self.events.emit(&KeyEvent::Up(key));
        }
    }

    /// Whether a key is currently held
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Keys currently held
    pub fn pressed(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.pressed.iter().copied()
    }

    /// Modifier keys currently held
    pub fn modifiers(&self) -> Modifiers {
        let mut modifiers = Modifiers::empty();
        if self.is_pressed(KeyCode::LeftShift) || self.is_pressed(KeyCode::RightShift) {
            modifiers |= Modifiers::SHIFT;
        }
        if self.is_pressed(KeyCode::LeftControl) || self.is_pressed(KeyCode::RightControl) {
            modifiers |= Modifiers::CONTROL;
        }
        if self.is_pressed(KeyCode::LeftAlt) || self.is_pressed(KeyCode::RightAlt) {
            modifiers |= Modifiers::ALT;
        }
        modifiers
    }

    /// Register a listener for key events
    pub fn on<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&KeyEvent) + 'static,
    {
        self.events.on(callback)
    }

    /// Register a one-shot listener for key events
    pub fn once<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&KeyEvent) + 'static,
    {
        self.events.once(callback)
    }

    /// Remove a listener
    pub fn off(&mut self, subscription: Subscription) -> bool {
        self.events.off(subscription)
    }
}
