//! Trackpad backlight controller modules.

/// Build-time and runtime configuration.
pub mod config;
/// Caps-lock reconciliation and blink handling.
pub mod controller;
/// Task wiring the controller to the event bus.
pub mod runner;
/// Cached lighting flags.
pub mod state;
/// Deferred blink tick scheduling.
pub mod ticker;

pub use config::TrackpadConfig;
pub use controller::{TRACKPAD_LED_CHANNEL, TrackpadBacklight};
pub use runner::{SUBSCRIBED_EVENTS, trackpad_backlight_runner};
pub use state::LightingState;
pub use ticker::{BlinkTicker, Ticker};
