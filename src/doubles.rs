use crate::led::{DeviceError, LedDevice};
#[cfg(feature = "trackpad-backlight")]
use embassy_time::Duration;
use std::{cell::RefCell, rc::Rc, vec::Vec};

#[derive(Debug, Default)]
struct MockLedState {
    not_ready: bool,
    failing: bool,
    attempts: usize,
    writes: Vec<(u8, u8)>,
}

/// Recording LED; clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct MockLed {
    inner: Rc<RefCell<MockLedState>>,
}

impl MockLed {
    pub fn new() -> Self { Self::default() }

    pub fn not_ready() -> Self {
        let led = Self::new();
        led.inner.borrow_mut().not_ready = true;
        led
    }

    pub fn set_failing(&self, failing: bool) { self.inner.borrow_mut().failing = failing; }

    pub fn attempts(&self) -> usize { self.inner.borrow().attempts }

    /// Accepted brightness levels, oldest first.
    pub fn levels(&self) -> Vec<u8> { self.inner.borrow().writes.iter().map(|&(_, level)| level).collect() }

    pub fn channels(&self) -> Vec<u8> { self.inner.borrow().writes.iter().map(|&(channel, _)| channel).collect() }

    pub fn last(&self) -> Option<u8> { self.levels().last().copied() }
}

impl LedDevice for MockLed {
    fn is_ready(&self) -> bool { !self.inner.borrow().not_ready }

    fn set_brightness(&mut self, channel: u8, level: u8) -> Result<(), DeviceError> {
        let mut inner = self.inner.borrow_mut();
        inner.attempts += 1;
        if inner.failing {
            return Err(DeviceError::Bus);
        }
        inner.writes.push((channel, level));
        Ok(())
    }
}

/// Ticker that only records requests; tests fire it by hand.
#[cfg(feature = "trackpad-backlight")]
#[derive(Debug, Default)]
pub struct MockTicker {
    pub pending: Option<Duration>,
    pub scheduled: Vec<Duration>,
    pub cancels: usize,
}

#[cfg(feature = "trackpad-backlight")]
impl MockTicker {
    /// Consume the pending tick, returning its delay.
    pub fn fire(&mut self) -> Option<Duration> { self.pending.take() }
}

#[cfg(feature = "trackpad-backlight")]
impl crate::trackpad_backlight::Ticker for MockTicker {
    fn schedule(&mut self, delay: Duration) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(delay);
        self.scheduled.push(delay);
        true
    }

    fn cancel(&mut self) -> bool {
        self.cancels += 1;
        self.pending.take().is_some()
    }

    fn is_scheduled(&self) -> bool { self.pending.is_some() }
}
