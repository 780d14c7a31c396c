//! RGBA color model with change notifications
//!
//! [`Rgba`] is the plain value type: channels normalized to 0..1, hex
//! packing, inversion. [`Color`] wraps a value with an [`EventEmitter`]
//! that fires per-channel and aggregate events when channels change
//! through its setters.

use serde::{Deserialize, Serialize};

use crate::events::{EventEmitter, Subscription};
use crate::foundation::random::random_unit;

/// Plain RGBA value, each channel normalized to 0..1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel, 0..1
    pub red: f32,
    /// Green channel, 0..1
    pub green: f32,
    /// Blue channel, 0..1
    pub blue: f32,
    /// Alpha channel, 0..1; 1 is fully opaque
    pub alpha: f32,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Rgba {
    /// Opaque black
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque red
    pub const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque green
    pub const GREEN: Rgba = Rgba::new(0.0, 1.0, 0.0, 1.0);
    /// Opaque blue
    pub const BLUE: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);

    /// Create a color from its four channels
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create an opaque color from its three color channels
    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Pack the color channels into a 24-bit `0xRRGGBB` integer
    ///
    /// Alpha does not participate. Channels quantize to 8 bits, so the
    /// round-trip through [`Rgba::from_hex`] is exact only to 1/255.
    pub fn to_hex(&self) -> u32 {
        let r = (self.red * 255.0) as u32;
        let g = (self.green * 255.0) as u32;
        let b = (self.blue * 255.0) as u32;
        (r << 16) | (g << 8) | b
    }

    /// Unpack a 24-bit `0xRRGGBB` integer into a color
    pub fn from_hex(hex: u32, alpha: f32) -> Self {
        let red = ((hex >> 16) & 0xff) as f32 / 255.0;
        let green = ((hex >> 8) & 0xff) as f32 / 255.0;
        let blue = (hex & 0xff) as f32 / 255.0;
        Self::new(red, green, blue, alpha)
    }

    /// Format as a `#rrggbb` string
    pub fn to_hex_string(&self) -> String {
        format!("#{:06x}", self.to_hex())
    }

    /// Parse a `#rrggbb` (or bare `rrggbb`) string
    ///
    /// Returns `None` for malformed input.
    pub fn from_hex_string(hex: &str, alpha: f32) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return None;
        }
        let packed = u32::from_str_radix(digits, 16).ok()?;
        Some(Self::from_hex(packed, alpha))
    }

    /// The negative of this color; alpha is preserved
    pub fn invert(&self) -> Self {
        Self::new(
            1.0 - self.red,
            1.0 - self.green,
            1.0 - self.blue,
            self.alpha,
        )
    }

    /// A uniformly random color
    ///
    /// Alpha is randomized only when `with_alpha` is set, otherwise opaque.
    pub fn random(with_alpha: bool) -> Self {
        Self::new(
            random_unit(),
            random_unit(),
            random_unit(),
            if with_alpha { random_unit() } else { 1.0 },
        )
    }

    /// Pack into RGBA8 bytes
    pub fn to_bytes(&self) -> [u8; 4] {
        [
            (self.red * 255.0) as u8,
            (self.green * 255.0) as u8,
            (self.blue * 255.0) as u8,
            (self.alpha * 255.0) as u8,
        ]
    }
}

/// Events emitted by [`Color`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorEvent {
    /// Red channel changed
    Red(f32),
    /// Green channel changed
    Green(f32),
    /// Blue channel changed
    Blue(f32),
    /// Alpha channel changed
    Alpha(f32),
    /// Aggregate change, fired after every per-channel event
    Change(Rgba),
}

/// An observable color
///
/// Channel setters first emit the per-channel event, then the aggregate
/// [`ColorEvent::Change`]; listeners run synchronously before the setter
/// returns.
#[derive(Debug, Default)]
pub struct Color {
    value: Rgba,
    events: EventEmitter<ColorEvent>,
}

impl Color {
    /// Create a color from its four channels
    pub fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self::from_rgba(Rgba::new(red, green, blue, alpha))
    }

    /// Create a color from a plain value
    pub fn from_rgba(value: Rgba) -> Self {
        Self {
            value,
            events: EventEmitter::new(),
        }
    }

    /// Current value
    pub fn rgba(&self) -> Rgba {
        self.value
    }

    /// Red channel
    pub fn red(&self) -> f32 {
        self.value.red
    }

    /// Green channel
    pub fn green(&self) -> f32 {
        self.value.green
    }

    /// Blue channel
    pub fn blue(&self) -> f32 {
        self.value.blue
    }

    /// Alpha channel
    pub fn alpha(&self) -> f32 {
        self.value.alpha
    }

    /// Set the red channel, emitting `Red` then `Change`
    pub fn set_red(&mut self, value: f32) {
        self.value.red = value;
        self.events.emit(&ColorEvent::Red(value));
        self.events.emit(&ColorEvent::Change(self.value));
    }

    /// Set the green channel, emitting `Green` then `Change`
    pub fn set_green(&mut self, value: f32) {
        self.value.green = value;
        self.events.emit(&ColorEvent::Green(value));
        self.events.emit(&ColorEvent::Change(self.value));
    }

    /// Set the blue channel, emitting `Blue` then `Change`
    pub fn set_blue(&mut self, value: f32) {
        self.value.blue = value;
        self.events.emit(&ColorEvent::Blue(value));
        self.events.emit(&ColorEvent::Change(self.value));
    }

    /// Set the alpha channel, emitting `Alpha` then `Change`
    pub fn set_alpha(&mut self, value: f32) {
        self.value.alpha = value;
        self.events.emit(&ColorEvent::Alpha(value));
        self.events.emit(&ColorEvent::Change(self.value));
    }

    /// Set all four channels through the individual setters
    pub fn set_rgba(&mut self, value: Rgba) {
        self.set_red(value.red);
        self.set_green(value.green);
        self.set_blue(value.blue);
        self.set_alpha(value.alpha);
    }

    /// Set the three color channels, leaving alpha untouched
    pub fn set_rgb(&mut self, red: f32, green: f32, blue: f32) {
        self.set_red(red);
        self.set_green(green);
        self.set_blue(blue);
    }

    /// Register a listener for color events
    pub fn on<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&ColorEvent) + 'static,
    {
        self.events.on(callback)
    }

    /// Register a one-shot listener for color events
    pub fn once<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&ColorEvent) + 'static,
    {
        self.events.once(callback)
    }

    /// Remove a listener
    pub fn off(&mut self, subscription: Subscription) -> bool {
        self.events.off(subscription)
    }

    /// Pack into a 24-bit `0xRRGGBB` integer
    pub fn to_hex(&self) -> u32 {
        self.value.to_hex()
    }

    /// Format as a `#rrggbb` string
    pub fn to_hex_string(&self) -> String {
        self.value.to_hex_string()
    }

    /// The negative of this color's current value
    pub fn invert(&self) -> Rgba {
        self.value.invert()
    }
}

impl From<Rgba> for Color {
    fn from(value: Rgba) -> Self {
        Self::from_rgba(value)
    }
}

impl Clone for Color {
    /// Clones the value only; listeners stay with the original
    fn clone(&self) -> Self {
        Self::from_rgba(self.value)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_hex_round_trip_within_quantization() {
        let colors = [
            Rgba::new(0.2, 0.4, 0.6, 1.0),
            Rgba::RED,
            Rgba::new(0.999, 0.001, 0.5, 1.0),
        ];

        for color in colors {
            let back = Rgba::from_hex(color.to_hex(), color.alpha);
            assert!((back.red - color.red).abs() <= 1.0 / 255.0);
            assert!((back.green - color.green).abs() <= 1.0 / 255.0);
            assert!((back.blue - color.blue).abs() <= 1.0 / 255.0);
            assert_eq!(back.alpha, color.alpha);
        }
    }

    #[test]
    fn test_known_hex_values() {
        assert_eq!(Rgba::RED.to_hex(), 0xff0000);
        assert_eq!(Rgba::GREEN.to_hex(), 0x00ff00);
        assert_eq!(Rgba::BLUE.to_hex(), 0x0000ff);
        assert_eq!(Rgba::BLUE.to_hex_string(), "#0000ff");
        assert_eq!(Rgba::BLACK.to_hex_string(), "#000000");
    }

    #[test]
    fn test_from_hex_string() {
        let green = Rgba::from_hex_string("#00ff00", 1.0).expect("valid hex");
        assert_eq!(green, Rgba::GREEN);

        let bare = Rgba::from_hex_string("ff0000", 0.5).expect("valid hex");
        assert_eq!(bare.red, 1.0);
        assert_eq!(bare.alpha, 0.5);

        assert!(Rgba::from_hex_string("#12345", 1.0).is_none());
        assert!(Rgba::from_hex_string("#zzzzzz", 1.0).is_none());
    }

    #[test]
    fn test_invert() {
        assert_eq!(Rgba::WHITE.invert(), Rgba::BLACK);
        assert_eq!(Rgba::BLACK.invert(), Rgba::WHITE);

        let half = Rgba::new(0.25, 0.5, 0.75, 0.4);
        let inverted = half.invert();
        assert_eq!(inverted, Rgba::new(0.75, 0.5, 0.25, 0.4));
    }

    #[test]
    fn test_setter_emits_channel_then_change() {
        let mut color = Color::from_rgba(Rgba::BLACK);
        let log = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&log);
        color.on(move |event| sink.borrow_mut().push(*event));

        color.set_red(0.5);

        let events = log.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], ColorEvent::Red(0.5));
        assert_eq!(events[1], ColorEvent::Change(Rgba::new(0.5, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_set_rgba_fans_out_through_channel_setters() {
        let mut color = Color::default();
        let changes = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&changes);
        color.on(move |event| {
            if matches!(event, ColorEvent::Change(_)) {
                *counter.borrow_mut() += 1;
            }
        });

        color.set_rgba(Rgba::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(*changes.borrow(), 4);
        assert_eq!(color.rgba(), Rgba::new(0.1, 0.2, 0.3, 0.4));
    }

    #[test]
    fn test_clone_drops_listeners() {
        let mut color = Color::from_rgba(Rgba::RED);
        color.on(|_| {});

        let clone = color.clone();
        assert_eq!(clone, color);
        assert_eq!(clone.rgba(), Rgba::RED);
    }

    #[test]
    fn test_random_alpha_control() {
        let opaque = Rgba::random(false);
        assert_eq!(opaque.alpha, 1.0);

        for channel in [opaque.red, opaque.green, opaque.blue] {
            assert!((0.0..1.0).contains(&channel));
        }
    }
}
