//! Trackpad backlight configuration.
//!
//! Both constants can be overridden when building the firmware through the
//! `TRACKPAD_CAPSLOCK_BLINK_INTERVAL_MS` and `TRACKPAD_BACKLIGHT_BRT`
//! environment variables. Invalid values fail the build.

use crate::{error::Error, led::MAX_BRIGHTNESS};
use embassy_time::Duration;

/// Delay between caps-lock blink toggles.
pub const BLINK_INTERVAL_MS: u64 = {
    let ms = parse_or(option_env!("TRACKPAD_CAPSLOCK_BLINK_INTERVAL_MS"), 500);
    assert!(ms > 0, "TRACKPAD_CAPSLOCK_BLINK_INTERVAL_MS must be non-zero");
    ms
};

/// Static trackpad brightness, in percent.
pub const BRIGHTNESS: u8 = {
    let level = parse_or(option_env!("TRACKPAD_BACKLIGHT_BRT"), 80);
    assert!(level <= MAX_BRIGHTNESS as u64, "TRACKPAD_BACKLIGHT_BRT must be within 0..=100");
    level as u8
};

/// Parse a decimal build setting, falling back to `default` when unset.
const fn parse_or(value: Option<&str>, default: u64) -> u64 {
    let Some(value) = value else {
        return default;
    };
    let bytes = value.as_bytes();
    assert!(!bytes.is_empty(), "empty numeric build setting");

    let mut acc: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        assert!(digit.is_ascii_digit(), "numeric build setting contains a non-digit");
        acc = match acc.checked_mul(10) {
            Some(v) => v + (digit - b'0') as u64,
            None => panic!("numeric build setting overflows"),
        };
        i += 1;
    }
    acc
}

/// Runtime settings of the trackpad backlight controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrackpadConfig {
    /// Delay between blink toggles while caps lock is active.
    pub blink_interval: Duration,
    /// Brightness of the static and blink "on" states, in percent.
    pub brightness: u8,
}

impl TrackpadConfig {
    /// Settings built from [`BLINK_INTERVAL_MS`] and [`BRIGHTNESS`].
    pub const DEFAULT: Self = Self { blink_interval: Duration::from_millis(BLINK_INTERVAL_MS), brightness: BRIGHTNESS };

    /// Create validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBlinkInterval`] for a zero interval and
    /// [`Error::InvalidBrightness`] for a brightness above 100.
    pub const fn new(blink_interval_ms: u64, brightness: u8) -> Result<Self, Error> {
        if blink_interval_ms == 0 {
            return Err(Error::InvalidBlinkInterval);
        }
        if brightness > MAX_BRIGHTNESS {
            return Err(Error::InvalidBrightness(brightness));
        }
        Ok(Self { blink_interval: Duration::from_millis(blink_interval_ms), brightness })
    }
}

impl Default for TrackpadConfig {
    fn default() -> Self { Self::DEFAULT }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_settings() {
        assert_eq!(parse_or(None, 500), 500);
        assert_eq!(parse_or(Some("250"), 500), 250);
        assert_eq!(parse_or(Some("0"), 500), 0);
    }

    #[test]
    fn validates_runtime_settings() {
        let config = TrackpadConfig::new(300, 100).unwrap();
        assert_eq!(config.blink_interval, Duration::from_millis(300));
        assert_eq!(config.brightness, 100);

        assert_eq!(TrackpadConfig::new(0, 80), Err(Error::InvalidBlinkInterval));
        assert_eq!(TrackpadConfig::new(300, 101), Err(Error::InvalidBrightness(101)));
    }

    #[test]
    fn default_matches_build_settings() {
        let config = TrackpadConfig::default();
        assert_eq!(config.blink_interval, Duration::from_millis(BLINK_INTERVAL_MS));
        assert_eq!(config.brightness, BRIGHTNESS);
    }
}
