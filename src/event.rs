//! Event bus carrying lock and backlight state changes.
//!
//! Producers elsewhere in the firmware [`publish`] state changes. Consumers
//! register with [`subscribe`] for the kinds they care about; the returned
//! [`Subscription`] unregisters itself when dropped.

use crate::error::Error;
use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    pubsub::{PubSubChannel, Subscriber, WaitResult},
};

/// Number of events buffered before publishers have to wait.
pub const EVENT_QUEUE_SIZE: usize = 8;
/// Maximum number of concurrent subscriptions.
pub const MAX_SUBSCRIBERS: usize = 4;
/// Maximum number of awaiting publishers.
pub const MAX_PUBLISHERS: usize = 2;

/// Bus type shared by producers and consumers.
pub type EventBus = PubSubChannel<CriticalSectionRawMutex, Event, EVENT_QUEUE_SIZE, MAX_SUBSCRIBERS, MAX_PUBLISHERS>;

/// Firmware-wide event bus.
pub static EVENT_BUS: EventBus = PubSubChannel::new();

/// State change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Host caps-lock indicator changed.
    CapslockStateChanged(bool),
    /// Keyboard backlight was switched on or off.
    BacklightStateChanged(bool),
}

/// Payload-free discriminant of [`Event`], used for subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    /// See [`Event::CapslockStateChanged`].
    CapslockStateChanged,
    /// See [`Event::BacklightStateChanged`].
    BacklightStateChanged,
}

impl Event {
    /// Kind of this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::CapslockStateChanged(_) => EventKind::CapslockStateChanged,
            Self::BacklightStateChanged(_) => EventKind::BacklightStateChanged,
        }
    }
}

/// Publish `event`, waiting for queue space if a subscriber is behind.
///
/// Events are never evicted, so every subscriber sees every state change in
/// order.
///
/// # Errors
///
/// Returns [`Error::PublisherLimit`] when every publisher slot is taken.
pub async fn publish(bus: &EventBus, event: Event) -> Result<(), Error> {
    let publisher = bus.publisher().map_err(|_| Error::PublisherLimit)?;
    publisher.publish(event).await;
    Ok(())
}

/// Publish `event` without waiting.
///
/// # Errors
///
/// Returns [`Error::BusFull`] and drops nothing already queued when a
/// subscriber has not caught up yet.
pub fn try_publish(bus: &EventBus, event: Event) -> Result<(), Error> {
    bus.immediate_publisher().try_publish(event).map_err(|_| Error::BusFull)
}

/// Register interest in `kinds` on `bus`.
///
/// # Errors
///
/// Returns [`Error::SubscriberLimit`] when every subscriber slot is taken.
pub fn subscribe<'bus>(bus: &'bus EventBus, kinds: &'static [EventKind]) -> Result<Subscription<'bus>, Error> {
    let subscriber = bus.subscriber().map_err(|_| Error::SubscriberLimit)?;
    Ok(Subscription { subscriber, kinds })
}

/// Registered interest in a set of event kinds.
pub struct Subscription<'bus> {
    subscriber: Subscriber<'bus, CriticalSectionRawMutex, Event, EVENT_QUEUE_SIZE, MAX_SUBSCRIBERS, MAX_PUBLISHERS>,
    kinds: &'static [EventKind],
}

impl Subscription<'_> {
    /// Kinds this subscription receives.
    #[must_use]
    pub const fn kinds(&self) -> &'static [EventKind] { self.kinds }

    /// Wait for the next event of a subscribed kind.
    pub async fn next_event(&mut self) -> Event {
        loop {
            match self.subscriber.next_message().await {
                WaitResult::Lagged(missed) => warn!("event subscriber lagged, {} events dropped", missed),
                WaitResult::Message(event) if self.kinds.contains(&event.kind()) => return event,
                WaitResult::Message(event) => trace!("skipping unsubscribed event {:?}", event),
            }
        }
    }

    /// Take the next queued event of a subscribed kind without waiting.
    pub fn try_next_event(&mut self) -> Option<Event> {
        while let Some(result) = self.subscriber.try_next_message() {
            match result {
                WaitResult::Lagged(missed) => warn!("event subscriber lagged, {} events dropped", missed),
                WaitResult::Message(event) if self.kinds.contains(&event.kind()) => return Some(event),
                WaitResult::Message(_) => {}
            }
        }
        None
    }
}
