//! FPS counter widget
//!
//! Samples frame times and rewrites an owned [`Text`] node with the mean
//! over a sliding window, a few times per second.

use crate::events::{EventEmitter, Subscription};
use crate::foundation::time::Timer;
use crate::scene::text::Text;

/// Events emitted by [`FpsCounter`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FpsEvent {
    /// First readout computed; fired once per counter
    Ready,
    /// A readout was computed
    Updated(f32),
}

/// Configuration for [`FpsCounter`]
#[derive(Debug, Clone)]
pub struct FpsCounterConfig {
    /// Text template; `{fps}` is replaced by the readout
    pub presentation: String,
    /// How often the readout refreshes, assuming a ~60 fps tick cadence
    ///
    /// Higher values refresh faster over fewer samples, so readings get
    /// noisier.
    pub updates_per_second: f32,
}

impl Default for FpsCounterConfig {
    fn default() -> Self {
        Self {
            presentation: "FPS: {fps}".to_string(),
            updates_per_second: 2.0,
        }
    }
}

/// Frames-per-second readout bound to a [`Text`] node
pub struct FpsCounter {
    text: Text,
    config: FpsCounterConfig,
    timer: Timer,
    samples: Vec<f32>,
    last_value: f32,
    ready: bool,
    events: EventEmitter<FpsEvent>,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(FpsCounterConfig::default())
    }
}

impl FpsCounter {
    /// Create a counter with the given configuration
    pub fn new(config: FpsCounterConfig) -> Self {
        Self {
            text: Text::new(""),
            config,
            timer: Timer::new(),
            samples: Vec::new(),
            last_value: 0.0,
            ready: false,
            events: EventEmitter::new(),
        }
    }

    /// Advance the counter; call once per frame
    pub fn tick(&mut self) {
        self.timer.update();
        let delta = self.timer.delta_time();
        if delta > 0.0 {
            self.samples.push(1.0 / delta);
        }

        let window = (60.0 / self.config.updates_per_second).max(1.0) as usize;
        if self.samples.len() >= window {
            let total: f32 = self.samples.iter().sum();
            let mean = total / self.samples.len() as f32;
            self.samples.clear();
            self.last_value = mean;

            let readout = self
                .config
                .presentation
                .replace("{fps}", &format!("{mean:.2}"));
            self.text.set_content(readout);

            self.events.emit(&FpsEvent::Updated(mean));
            if !self.ready {
                self.ready = true;
                self.events.emit(&FpsEvent::Ready);
            }
        }
    }

    /// The mean FPS from the last completed window
    pub fn value(&self) -> f32 {
        self.last_value
    }

    /// Instantaneous FPS based on the last frame alone
    pub fn approximate(&self) -> f32 {
        self.timer.current_fps()
    }

    /// Whether at least one readout has been computed
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// The text node carrying the readout
    pub fn text(&self) -> &Text {
        &self.text
    }

    /// Mutable access to the text node (for styling and positioning)
    pub fn text_mut(&mut self) -> &mut Text {
        &mut self.text
    }

    /// Register a listener for counter events
    pub fn on<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&FpsEvent) + 'static,
    {
        self.events.on(callback)
    }

    /// Register a one-shot listener for counter events
    pub fn once<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&FpsEvent) + 'static,
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
    use std::thread::sleep;
    use std::time::Duration;

    fn fast_counter() -> FpsCounter {
        // One-frame window so a single tick produces a readout
        FpsCounter::new(FpsCounterConfig {
            presentation: "FPS: {fps}".to_string(),
            updates_per_second: 60.0,
        })
    }

    #[test]
    fn test_ready_fires_once() {
        let mut counter = fast_counter();
        let ready_count = Rc::new(RefCell::new(0));
        let updates = Rc::new(RefCell::new(0));

        let ready_sink = Rc::clone(&ready_count);
        let update_sink = Rc::clone(&updates);
        counter.on(move |event| match event {
            FpsEvent::Ready => *ready_sink.borrow_mut() += 1,
            FpsEvent::Updated(_) => *update_sink.borrow_mut() += 1,
        });

        for _ in 0..5 {
            sleep(Duration::from_millis(2));
            counter.tick();
        }

        assert!(counter.is_ready());
        assert_eq!(*ready_count.borrow(), 1);
        assert!(*updates.borrow() >= 1);
    }

    #[test]
    fn test_readout_replaces_placeholder() {
        let mut counter = fast_counter();
        for _ in 0..5 {
            sleep(Duration::from_millis(2));
            counter.tick();
            if counter.is_ready() {
                break;
            }
        }

        assert!(counter.is_ready());
        assert!(counter.text().content().starts_with("FPS: "));
        assert!(counter.value() > 0.0);
    }

    #[test]
    fn test_not_ready_before_first_window() {
        let counter = FpsCounter::default();
        assert!(!counter.is_ready());
        assert_eq!(counter.value(), 0.0);
        assert_eq!(counter.text().content(), "");
    }
}
