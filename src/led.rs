//! LED device boundary.
//!
//! The controller only ever talks to a [`LedDevice`]. Boards with a plain PWM
//! backlight can wrap their channel in a [`PwmBacklight`].

use embedded_hal::pwm::SetDutyCycle;

/// Highest brightness accepted by [`LedDevice::set_brightness`].
pub const MAX_BRIGHTNESS: u8 = 100;

/// Errors reported by an LED device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError {
    /// The transfer to the LED driver failed.
    #[error("bus transfer failed")]
    Bus,
    /// The device has no LED at this channel index.
    #[error("invalid channel {0}")]
    InvalidChannel(u8),
    /// Brightness outside of `0..=100`.
    #[error("invalid brightness {0}")]
    InvalidLevel(u8),
}

/// An addressable, dimmable LED output.
pub trait LedDevice {
    /// Whether the device finished its own initialization.
    fn is_ready(&self) -> bool;

    /// Set the brightness of `channel` to `level` percent.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] if the device rejects the command.
    fn set_brightness(&mut self, channel: u8, level: u8) -> Result<(), DeviceError>;
}

impl<D: LedDevice + ?Sized> LedDevice for &mut D {
    #[inline]
    fn is_ready(&self) -> bool { (**self).is_ready() }

    #[inline]
    fn set_brightness(&mut self, channel: u8, level: u8) -> Result<(), DeviceError> {
        (**self).set_brightness(channel, level)
    }
}

/// Single channel backlight driven by a PWM output.
pub struct PwmBacklight<P> {
    pwm: P,
}

impl<P: SetDutyCycle> PwmBacklight<P> {
    /// Wrap a PWM channel.
    pub const fn new(pwm: P) -> Self { Self { pwm } }

    /// Release the PWM channel.
    pub fn free(self) -> P { self.pwm }
}

impl<P: SetDutyCycle> LedDevice for PwmBacklight<P> {
    fn is_ready(&self) -> bool { self.pwm.max_duty_cycle() > 0 }

    fn set_brightness(&mut self, channel: u8, level: u8) -> Result<(), DeviceError> {
        if channel != 0 {
            return Err(DeviceError::InvalidChannel(channel));
        }
        if level > MAX_BRIGHTNESS {
            return Err(DeviceError::InvalidLevel(level));
        }
        self.pwm.set_duty_cycle_percent(level).map_err(|_| DeviceError::Bus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::pwm::ErrorType;

    struct FakePwm {
        max: u16,
        duty: u16,
    }

    impl ErrorType for FakePwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for FakePwm {
        fn max_duty_cycle(&self) -> u16 { self.max }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn percent_maps_onto_duty_cycle() {
        let mut led = PwmBacklight::new(FakePwm { max: 1000, duty: 0 });
        assert!(led.is_ready());

        led.set_brightness(0, 80).unwrap();
        assert_eq!(led.free().duty, 800);
    }

    #[test]
    fn rejects_foreign_channel_and_overrange_level() {
        let mut led = PwmBacklight::new(FakePwm { max: 255, duty: 7 });

        assert_eq!(led.set_brightness(1, 50), Err(DeviceError::InvalidChannel(1)));
        assert_eq!(led.set_brightness(0, 101), Err(DeviceError::InvalidLevel(101)));
        assert_eq!(led.free().duty, 7);
    }

    #[test]
    fn zero_resolution_pwm_is_not_ready() {
        let led = PwmBacklight::new(FakePwm { max: 0, duty: 0 });
        assert!(!led.is_ready());
    }
}
