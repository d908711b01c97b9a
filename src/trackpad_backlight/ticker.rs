//! Deferred blink tick scheduling.

use core::future::pending;
use embassy_time::{Duration, Instant, Timer};

/// A single cancellable, re-armable deferred tick.
pub trait Ticker {
    /// Arm the tick to fire after `delay`.
    ///
    /// Returns `false` without touching the pending deadline if the tick is
    /// already armed.
    fn schedule(&mut self, delay: Duration) -> bool;

    /// Disarm the tick. Returns `false` if it was not armed.
    fn cancel(&mut self) -> bool;

    /// Whether a tick is pending.
    fn is_scheduled(&self) -> bool;
}

/// [`Ticker`] backed by an `embassy-time` deadline.
///
/// The deadline only fires through [`BlinkTicker::expired`], which the owning
/// task awaits alongside its other inputs.
#[derive(Debug, Default)]
pub struct BlinkTicker {
    deadline: Option<Instant>,
}

impl BlinkTicker {
    /// Create a disarmed ticker.
    #[must_use]
    pub const fn new() -> Self { Self { deadline: None } }

    /// Pending deadline, if armed.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> { self.deadline }

    /// Wait until the armed deadline passes, then disarm.
    ///
    /// Never completes while disarmed. Dropping the future before it
    /// completes leaves the deadline armed.
    pub async fn expired(&mut self) {
        match self.deadline {
            Some(deadline) => {
                Timer::at(deadline).await;
                self.deadline = None;
            }
            None => pending().await,
        }
    }
}

impl Ticker for BlinkTicker {
    fn schedule(&mut self, delay: Duration) -> bool {
        if self.deadline.is_some() {
            return false;
        }
        self.deadline = Some(Instant::now() + delay);
        true
    }

    fn cancel(&mut self) -> bool { self.deadline.take().is_some() }

    fn is_scheduled(&self) -> bool { self.deadline.is_some() }
}
