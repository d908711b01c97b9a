//! Trackpad backlight task.

use crate::{
    error::Error,
    event::{EventBus, EventKind, subscribe},
    led::LedDevice,
    trackpad_backlight::{config::TrackpadConfig, controller::TrackpadBacklight, ticker::BlinkTicker},
};
use core::convert::Infallible;
use embassy_futures::select::{Either, select};

/// Event kinds the trackpad backlight reacts to in this build.
#[cfg(feature = "backlight-sync")]
pub const SUBSCRIBED_EVENTS: &[EventKind] = &[EventKind::CapslockStateChanged, EventKind::BacklightStateChanged];
/// Event kinds the trackpad backlight reacts to in this build.
#[cfg(not(feature = "backlight-sync"))]
pub const SUBSCRIBED_EVENTS: &[EventKind] = &[EventKind::CapslockStateChanged];

/// Run the trackpad backlight controller.
///
/// Lights the trackpad, subscribes to [`SUBSCRIBED_EVENTS`] on `bus` and then
/// handles events and blink ticks one at a time, forever.
///
/// # Errors
///
/// Returns early with [`Error::DeviceNotReady`] or [`Error::SubscriberLimit`].
/// The trackpad backlight stays inert afterwards.
pub async fn trackpad_backlight_runner<D: LedDevice>(
    device: D,
    bus: &EventBus,
    config: TrackpadConfig,
) -> Result<Infallible, Error> {
    let mut backlight = TrackpadBacklight::init(device, BlinkTicker::new(), config)?;
    let mut subscription = subscribe(bus, SUBSCRIBED_EVENTS).inspect_err(|_| {
        error!("trackpad backlight could not subscribe to the event bus");
    })?;

    loop {
        match select(subscription.next_event(), backlight.ticker_mut().expired()).await {
            Either::First(event) => {
                if backlight.on_event(&event).is_err() {
                    trace!("trackpad backlight ignored {:?}", event);
                }
            }
            Either::Second(()) => backlight.on_blink_tick(),
        }
    }
}
