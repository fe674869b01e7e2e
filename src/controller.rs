//! The strip control surface: `initialize` and `show`.

use embassy_time::Duration;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::RGB8;

use crate::encoder::Pulse;
use crate::session::{CapacityExceeded, StripSession};
use crate::timing::TimingProfile;
use crate::transmit::{ChannelConfig, PulseChannel};

/// Upper bound on how long `show` blocks waiting for the wire.
pub const SHOW_TIMEOUT: Duration = Duration::from_millis(100);

/// Errors reported by the strip controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripError<E> {
    /// The requested strip does not fit the session buffers.
    CapacityExceeded,
    /// `show` was called before any session was initialized.
    NotInitialized,
    /// The transmit peripheral reported a failure.
    Channel(E),
}

impl<E> From<CapacityExceeded> for StripError<E> {
    fn from(_: CapacityExceeded) -> Self {
        Self::CapacityExceeded
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for StripError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StripError::CapacityExceeded => {
                write!(f, "led count exceeds session buffer capacity")
            }
            StripError::NotInitialized => {
                write!(f, "strip has not been initialized")
            }
            StripError::Channel(e) => {
                write!(f, "transmit channel error: {e:?}")
            }
        }
    }
}

impl<E: core::fmt::Debug> core::error::Error for StripError<E> {}

/// Drives one LED strip through a [`PulseChannel`].
///
/// The controller owns the channel and at most one live
/// [`StripSession`]. Both operations take `&mut self`, so a single
/// controller cannot race against itself; wrap it in
/// [`SharedStrip`](crate::shared::SharedStrip) when several execution
/// contexts need the same strip.
pub struct StripController<C: PulseChannel, const PIXEL_CAP: usize, const PULSE_CAP: usize> {
    channel: C,
    timing: TimingProfile,
    session: Option<StripSession<PIXEL_CAP, PULSE_CAP>>,
}

impl<C: PulseChannel, const PIXEL_CAP: usize, const PULSE_CAP: usize>
    StripController<C, PIXEL_CAP, PULSE_CAP>
{
    /// Create a controller with WS2812B timing and no session.
    pub const fn new(channel: C) -> Self {
        Self::with_timing(channel, TimingProfile::ws2812b())
    }

    /// Create a controller with a custom timing profile and no session.
    pub const fn with_timing(channel: C, timing: TimingProfile) -> Self {
        Self {
            channel,
            timing,
            session: None,
        }
    }

    /// Set up a session for `led_count` LEDs on `pin`.
    ///
    /// Any previous session is discarded unconditionally: its buffers
    /// are released before the replacement's exist, so at most one
    /// session is ever live. On failure the controller is left with no
    /// session, never a half-built one. A `led_count` of zero is
    /// accepted and yields empty buffers.
    pub fn initialize(&mut self, pin: u8, led_count: usize) -> Result<(), StripError<C::Error>> {
        // Release the previous session before building its replacement.
        self.session = None;

        #[cfg(feature = "esp32-log")]
        println!("strip: initializing {} LEDs on pin {}", led_count, pin);

        let session = StripSession::new(pin, led_count, self.timing)?;
        self.channel
            .configure(&ChannelConfig::for_pin(pin))
            .map_err(StripError::Channel)?;
        self.session = Some(session);
        Ok(())
    }

    /// Encode and transmit one frame, blocking until it is on the wire
    /// or [`SHOW_TIMEOUT`] elapses.
    ///
    /// `data` holds R, G, B bytes per LED. Frames longer than the strip
    /// are truncated; shorter frames re-show the previous values on the
    /// trailing LEDs (see [`StripSession::load`]).
    pub fn show(&mut self, data: &[u8]) -> Result<(), StripError<C::Error>> {
        let session = self.session.as_mut().ok_or(StripError::NotInitialized)?;
        let pulses = session.load(data);
        put_on_wire(&mut self.channel, pulses)
    }

    /// Like [`show`](Self::show), from `RGB8` values instead of raw
    /// channel bytes.
    pub fn show_colors(&mut self, colors: &[RGB8]) -> Result<(), StripError<C::Error>> {
        let session = self.session.as_mut().ok_or(StripError::NotInitialized)?;
        let pulses = session.load_colors(colors);
        put_on_wire(&mut self.channel, pulses)
    }

    /// Whether a session is live.
    pub const fn is_initialized(&self) -> bool {
        self.session.is_some()
    }

    /// The live session, if any.
    pub const fn session(&self) -> Option<&StripSession<PIXEL_CAP, PULSE_CAP>> {
        self.session.as_ref()
    }

    /// Get a reference to the transmit channel.
    pub const fn channel(&self) -> &C {
        &self.channel
    }

    /// Get a mutable reference to the transmit channel.
    pub const fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }
}

/// Submit an encoded frame and block until the peripheral is idle.
///
/// An empty frame never touches the channel.
fn put_on_wire<C: PulseChannel>(
    channel: &mut C,
    pulses: &[Pulse],
) -> Result<(), StripError<C::Error>> {
    if pulses.is_empty() {
        return Ok(());
    }
    channel.transmit(pulses).map_err(StripError::Channel)?;
    channel.wait_idle(SHOW_TIMEOUT).map_err(StripError::Channel)
}
