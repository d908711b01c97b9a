//! Caps-lock reconciliation and blink handling.

use crate::{
    error::Error,
    event::Event,
    led::LedDevice,
    trackpad_backlight::{
        config::TrackpadConfig,
        state::LightingState,
        ticker::{BlinkTicker, Ticker},
    },
};
use embassy_time::Duration;

/// LED channel of the trackpad backlight.
pub const TRACKPAD_LED_CHANNEL: u8 = 0;

/// Controller that blinks the trackpad while caps lock is active and
/// otherwise mirrors the keyboard backlight.
///
/// All handlers take `&mut self`; the owning task serializes notifications
/// and blink ticks.
pub struct TrackpadBacklight<D, T = BlinkTicker> {
    device: D,
    ticker: T,
    config: TrackpadConfig,
    state: LightingState,
}

impl<D: LedDevice, T: Ticker> TrackpadBacklight<D, T> {
    /// Take ownership of the trackpad LED and light it at the configured
    /// brightness.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotReady`] if the device is not ready. The
    /// controller is not created in that case.
    pub fn init(device: D, ticker: T, config: TrackpadConfig) -> Result<Self, Error> {
        if !device.is_ready() {
            error!("trackpad backlight device not ready");
            return Err(Error::DeviceNotReady);
        }

        let mut backlight = Self { device, ticker, config, state: LightingState::new() };
        backlight.apply(backlight.state.static_level(config.brightness));

        info!("trackpad backlight initialized");
        Ok(backlight)
    }

    /// Cached flags.
    pub const fn state(&self) -> LightingState { self.state }

    /// Active configuration.
    pub const fn config(&self) -> TrackpadConfig { self.config }

    /// Whether a blink tick is pending.
    pub fn is_blinking(&self) -> bool { self.ticker.is_scheduled() }

    /// Mutable access to the blink ticker, for the task driving it.
    pub fn ticker_mut(&mut self) -> &mut T { &mut self.ticker }

    /// Dispatch a bus event to its handler.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotApplicable`] for events this build does not
    /// handle. Nothing changes in that case.
    pub fn on_event(&mut self, event: &Event) -> Result<(), Error> {
        match *event {
            Event::CapslockStateChanged(active) => {
                self.on_capslock_changed(active);
                Ok(())
            }
            #[cfg(feature = "backlight-sync")]
            Event::BacklightStateChanged(enabled) => {
                self.on_backlight_changed(enabled);
                Ok(())
            }
            #[cfg(not(feature = "backlight-sync"))]
            Event::BacklightStateChanged(_) => Err(Error::NotApplicable),
        }
    }

    /// Handle a caps-lock state change.
    pub fn on_capslock_changed(&mut self, active: bool) {
        debug!("trackpad backlight: caps lock {}", active);
        self.state.set_capslock_active(active);
        self.reconcile();
    }

    #[cfg(feature = "backlight-sync")]
    /// Handle a keyboard backlight on/off change.
    pub fn on_backlight_changed(&mut self, enabled: bool) {
        debug!("trackpad backlight: keyboard backlight {}", enabled);
        self.state.set_backlight_enabled(enabled);
        self.reconcile();
    }

    /// Handle an expired blink tick.
    ///
    /// A tick that expires after caps lock was released restores the static
    /// brightness and does not re-arm.
    pub fn on_blink_tick(&mut self) {
        let brightness = self.config.brightness;
        if self.state.capslock_active() {
            self.state.toggle_blink_phase();
            let level = self.state.blink_level(brightness);
            trace!("trackpad blink tick, level {}", level);
            self.apply(level);
            self.ticker.schedule(self.config.blink_interval);
        } else {
            trace!("stale trackpad blink tick");
            self.apply(self.state.static_level(brightness));
        }
    }

    /// Bring the ticker and LED in line with the cached flags.
    fn reconcile(&mut self) {
        if self.state.capslock_active() {
            if self.ticker.schedule(Duration::from_millis(0)) {
                debug!("trackpad blink started");
            }
        } else {
            if self.ticker.cancel() {
                debug!("trackpad blink stopped");
            }
            self.apply(self.state.static_level(self.config.brightness));
        }
    }

    fn write_level(&mut self, level: u8) -> Result<(), Error> {
        self.device.set_brightness(TRACKPAD_LED_CHANNEL, level)?;
        Ok(())
    }

    /// Best-effort write; the next reconciliation retries with fresh state.
    fn apply(&mut self, level: u8) {
        if let Err(err) = self.write_level(level) {
            warn!("trackpad backlight write of {} failed: {}", level, err);
        }
    }
}
