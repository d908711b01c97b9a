//! Cached lighting flags.

/// Last known caps-lock and backlight states plus the current blink phase.
///
/// The brightness written to the trackpad is always derived from these flags
/// through [`LightingState::static_level`] or [`LightingState::blink_level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightingState {
    /// Whether the keyboard backlight is switched on.
    #[cfg(feature = "backlight-sync")]
    backlight_enabled: bool,
    /// Whether the host reports caps lock as active.
    capslock_active: bool,
    /// Whether the trackpad is lit in the current blink period.
    blink_phase: bool,
}

impl LightingState {
    /// Boot state: backlight on, caps lock off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            #[cfg(feature = "backlight-sync")]
            backlight_enabled: true,
            capslock_active: false,
            blink_phase: false,
        }
    }

    #[cfg(feature = "backlight-sync")]
    #[must_use]
    /// Whether the keyboard backlight is switched on.
    pub const fn backlight_enabled(&self) -> bool { self.backlight_enabled }

    #[cfg(not(feature = "backlight-sync"))]
    #[must_use]
    /// Always on without backlight sync.
    pub const fn backlight_enabled(&self) -> bool { true }

    #[must_use]
    /// Whether caps lock is active.
    pub const fn capslock_active(&self) -> bool { self.capslock_active }

    #[must_use]
    /// Current blink phase.
    pub const fn blink_phase(&self) -> bool { self.blink_phase }

    /// Record the caps-lock state. A rising edge restarts the blink phase so
    /// every blink sequence begins with the lit half.
    pub(crate) fn set_capslock_active(&mut self, active: bool) {
        if active && !self.capslock_active {
            self.blink_phase = false;
        }
        self.capslock_active = active;
    }

    #[cfg(feature = "backlight-sync")]
    pub(crate) fn set_backlight_enabled(&mut self, enabled: bool) { self.backlight_enabled = enabled; }

    /// Advance to the next blink phase and return it.
    pub(crate) fn toggle_blink_phase(&mut self) -> bool {
        self.blink_phase = !self.blink_phase;
        self.blink_phase
    }

    #[must_use]
    /// Brightness for the non-blinking state.
    pub const fn static_level(&self, brightness: u8) -> u8 { if self.backlight_enabled() { brightness } else { 0 } }

    #[must_use]
    /// Brightness for the current blink phase.
    pub const fn blink_level(&self, brightness: u8) -> u8 { if self.blink_phase { brightness } else { 0 } }
}

impl Default for LightingState {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boots_with_backlight_on_and_capslock_off() {
        let state = LightingState::new();
        assert!(state.backlight_enabled());
        assert!(!state.capslock_active());
        assert!(!state.blink_phase());
        assert_eq!(state.static_level(80), 80);
    }

    #[test]
    fn capslock_rising_edge_restarts_blink_phase() {
        let mut state = LightingState::new();
        state.set_capslock_active(true);
        assert!(state.toggle_blink_phase());

        // Repeated activation keeps the running phase.
        state.set_capslock_active(true);
        assert!(state.blink_phase());

        state.set_capslock_active(false);
        state.set_capslock_active(true);
        assert!(!state.blink_phase());
    }

    #[cfg(feature = "backlight-sync")]
    #[test]
    fn static_level_follows_backlight() {
        let mut state = LightingState::new();
        state.set_backlight_enabled(false);
        assert_eq!(state.static_level(80), 0);
        state.set_backlight_enabled(true);
        assert_eq!(state.static_level(80), 80);
    }
}
