//! Caps-lock aware trackpad backlight controller.
//!
//! The controller caches the caps-lock and keyboard backlight states delivered
//! on the [`event`] bus and turns them into brightness commands for a single
//! [`led::LedDevice`] channel. While caps lock is active the trackpad blinks,
//! otherwise it follows the static backlight policy.
#![cfg_attr(not(test), no_std)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

/// Test doubles for the LED and ticker boundaries.
#[cfg(test)]
mod doubles;
/// Crate error types.
pub mod error;
/// Event bus carrying lock and backlight state changes.
pub mod event;
/// LED device boundary.
pub mod led;
/// Trackpad backlight controller.
#[cfg(feature = "trackpad-backlight")]
pub mod trackpad_backlight;

pub use error::Error;
