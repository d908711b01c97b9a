//! Error types shared by the controller and its collaborators.

use crate::led::DeviceError;

/// Errors raised by the trackpad backlight controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The LED device did not report ready at startup.
    #[error("trackpad backlight device not ready")]
    DeviceNotReady,
    /// The LED device rejected a brightness command.
    #[error("led device error: {0}")]
    Device(#[from] DeviceError),
    /// The event is not handled by this listener.
    #[error("event not applicable")]
    NotApplicable,
    /// The event bus has no subscriber slot left.
    #[error("event bus subscriber limit reached")]
    SubscriberLimit,
    /// The event bus has no publisher slot left.
    #[error("event bus publisher limit reached")]
    PublisherLimit,
    /// The event bus queue is full.
    #[error("event bus full")]
    BusFull,
    /// Brightness outside of `0..=100`.
    #[error("brightness {0} exceeds 100")]
    InvalidBrightness(u8),
    /// A blink interval of zero milliseconds.
    #[error("blink interval must be non-zero")]
    InvalidBlinkInterval,
}
