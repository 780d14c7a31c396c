//! Mouse state tracking

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::events::{EventEmitter, Subscription};
use crate::foundation::math::Vec2;

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
    /// Fourth button, typically "back"
    Back,
    /// Fifth button, typically "forward"
    Forward,
}

/// Mouse transition events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseEvent {
    /// The cursor moved
    Moved(Vec2),
    /// A button went down
    Down {
        /// Button that was pressed
        button: MouseButton,
        /// Cursor position at press time
        position: Vec2,
    },
    /// A button was released
    Up {
        /// Button that was released
        button: MouseButton,
        /// Cursor position at release time
        position: Vec2,
        /// How long the button was held
        held: Duration,
    },
    /// Two presses of the same button within the double-click window
    DoubleClick {
        /// Button that was double-clicked
        button: MouseButton,
        /// Cursor position at the second press
        position: Vec2,
    },
}

#[derive(Debug, Default)]
struct ButtonState {
    pressed_at: Option<Instant>,
    last_press: Option<Instant>,
}

/// Mouse state
///
/// Feed host cursor moves and button transitions through the `handle_*`
/// methods. Double clicks are detected from press timing since there is no
/// host DOM to report them.
#[derive(Debug)]
pub struct Mouse {
    position: Vec2,
    buttons: HashMap<MouseButton, ButtonState>,
    double_click_window: Duration,
    events: EventEmitter<MouseEvent>,
}

impl Default for Mouse {
    fn default() -> Self {
        Self::new()
    }
}

impl Mouse {
    /// Double-click window used by [`Mouse::new`]
    pub const DEFAULT_DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

    /// Create a mouse with no buttons held, cursor at the origin
    pub fn new() -> Self {
        Self {
            position: Vec2::zeros(),
            buttons: HashMap::new(),
            double_click_window: Self::DEFAULT_DOUBLE_CLICK_WINDOW,
            events: EventEmitter::new(),
        }
    }

    /// Override the double-click window
    pub fn with_double_click_window(mut self, window: Duration) -> Self {
        self.double_click_window = window;
        self
    }

    /// Current cursor position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Process a host cursor move
    pub fn handle_move(&mut self, position: Vec2) {
        if self.position != position {
            self.position = position;
            self.events.emit(&MouseEvent::Moved(position));
        }
    }

    /// Process a host button transition
    pub fn handle_button(&mut self, button: MouseButton, pressed: bool) {
        let now = Instant::now();
        let position = self.position;
        let state = self.buttons.entry(button).or_default();

        if pressed {
            if state.pressed_at.is_some() {
                // Host repeated a down we already saw
                return;
            }

            let is_double = state
                .last_press
                .is_some_and(|previous| now.duration_since(previous) <= self.double_click_window);
            state.pressed_at = Some(now);
            state.last_press = Some(now);

            self.events.emit(&MouseEvent::Down { button, position });
            if is_double {
                self.events.emit(&MouseEvent::DoubleClick { button, position });
            }
        } else if let Some(pressed_at) = state.pressed_at.take() {
            let held = now.duration_since(pressed_at);
            self.events.emit(&MouseEvent::Up {
                button,
                position,
                held,
            });
        }
    }

    /// Whether a button is currently held
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        self.buttons
            .get(&button)
            .is_some_and(|state| state.pressed_at.is_some())
    }

    /// How long a button has been held; zero when it is up
    pub fn held_duration(&self, button: MouseButton) -> Duration {
        self.buttons
            .get(&button)
            .and_then(|state| state.pressed_at)
            .map_or(Duration::ZERO, |pressed_at| pressed_at.elapsed())
    }

    /// Register a listener for mouse events
    pub fn on<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&MouseEvent) + 'static,
    {
        self.events.on(callback)
    }

    /// Register a one-shot listener for mouse events
    pub fn once<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&MouseEvent) + 'static,
    {
        self.events.once(callback)
    }

    /// Remove a listener
    pub fn off(&mut self, subscription: Subscription) -> bool {
        self.events.off(subscription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_mouse() -> (Mouse, Rc<RefCell<Vec<MouseEvent>>>) {
        let mut mouse = Mouse::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        mouse.on(move |event| sink.borrow_mut().push(*event));
        (mouse, log)
    }

    #[test]
    fn test_move_tracks_position() {
        let (mut mouse, log) = recording_mouse();

        mouse.handle_move(Vec2::new(3.0, 4.0));
        mouse.handle_move(Vec2::new(3.0, 4.0)); // unchanged: silent

        assert_eq!(mouse.position(), Vec2::new(3.0, 4.0));
        assert_eq!(&*log.borrow(), &[MouseEvent::Moved(Vec2::new(3.0, 4.0))]);
    }

    #[test]
    fn test_press_release_cycle() {
        let (mut mouse, log) = recording_mouse();
        mouse.handle_move(Vec2::new(1.0, 1.0));

        mouse.handle_button(MouseButton::Left, true);
        assert!(mouse.is_pressed(MouseButton::Left));
        assert!(!mouse.is_pressed(MouseButton::Right));

        mouse.handle_button(MouseButton::Left, false);
        assert!(!mouse.is_pressed(MouseButton::Left));
        assert_eq!(mouse.held_duration(MouseButton::Left), Duration::ZERO);

        let events = log.borrow();
        assert!(matches!(
            events[1],
            MouseEvent::Down {
                button: MouseButton::Left,
                ..
            }
        ));
        assert!(matches!(
            events[2],
            MouseEvent::Up {
                button: MouseButton::Left,
                ..
            }
        ));
    }

    #[test]
    fn test_release_without_press_is_silent() {
        let (mut mouse, log) = recording_mouse();
        mouse.handle_button(MouseButton::Middle, false);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_double_click_within_window() {
        let (mut mouse, log) = recording_mouse();

        mouse.handle_button(MouseButton::Left, true);
        mouse.handle_button(MouseButton::Left, false);
        mouse.handle_button(MouseButton::Left, true);

        let double_clicks = log
            .borrow()
            .iter()
            .filter(|event| matches!(event, MouseEvent::DoubleClick { .. }))
            .count();
        assert_eq!(double_clicks, 1);
    }

    #[test]
    fn test_slow_second_click_is_not_double() {
        // A zero-length window means no second press can ever qualify
        let mut mouse = Mouse::new().with_double_click_window(Duration::ZERO);
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        mouse.on(move |event| sink.borrow_mut().push(*event));

        mouse.handle_button(MouseButton::Left, true);
        mouse.handle_button(MouseButton::Left, false);
        std::thread::sleep(Duration::from_millis(2));
        mouse.handle_button(MouseButton::Left, true);

        assert!(!log
            .borrow()
            .iter()
            .any(|event| matches!(event, MouseEvent::DoubleClick { .. })));
    }

    #[test]
    fn test_held_duration_grows_while_pressed() {
        let (mut mouse, _log) = recording_mouse();
        mouse.handle_button(MouseButton::Right, true);
        std::thread::sleep(Duration::from_millis(2));
        assert!(mouse.held_duration(MouseButton::Right) >= Duration::from_millis(2));
    }
}
