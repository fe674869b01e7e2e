//! Process-wide single-strip slot.
//!
//! Firmware often wants exactly one strip reachable from anywhere — an
//! interrupt handler, a command dispatcher, a render task. [`SharedStrip`]
//! holds a [`StripController`] behind `critical-section`, and each
//! operation runs the whole encode + transmit + wait sequence inside one
//! critical section. A reinitialization therefore can never release
//! buffers a concurrent `show` is still transmitting from.

use core::cell::RefCell;

use critical_section::Mutex;
use smart_leds::RGB8;

use crate::controller::{StripController, StripError};
use crate::transmit::PulseChannel;

/// A [`StripController`] behind a process-wide lock.
///
/// Suitable for a `static`. The slot starts empty; [`install`](Self::install)
/// a controller once the peripheral is available.
///
/// Note that `show` holds the critical section for the full physical
/// transmission (up to [`SHOW_TIMEOUT`](crate::controller::SHOW_TIMEOUT)).
pub struct SharedStrip<C: PulseChannel, const PIXEL_CAP: usize, const PULSE_CAP: usize> {
    inner: Mutex<RefCell<Option<StripController<C, PIXEL_CAP, PULSE_CAP>>>>,
}

impl<C: PulseChannel, const PIXEL_CAP: usize, const PULSE_CAP: usize>
    SharedStrip<C, PIXEL_CAP, PULSE_CAP>
{
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Put a controller in the slot, returning the one it replaced.
    pub fn install(
        &self,
        controller: StripController<C, PIXEL_CAP, PULSE_CAP>,
    ) -> Option<StripController<C, PIXEL_CAP, PULSE_CAP>> {
        critical_section::with(|cs| self.inner.borrow(cs).replace(Some(controller)))
    }

    /// Initialize the strip in the slot.
    ///
    /// Fails with `NotInitialized` when no controller was installed.
    pub fn initialize(&self, pin: u8, led_count: usize) -> Result<(), StripError<C::Error>> {
        self.with_controller(|controller| controller.initialize(pin, led_count))
    }

    /// Encode and transmit one frame of raw channel bytes.
    pub fn show(&self, data: &[u8]) -> Result<(), StripError<C::Error>> {
        self.with_controller(|controller| controller.show(data))
    }

    /// Encode and transmit one frame of RGB colors.
    pub fn show_colors(&self, colors: &[RGB8]) -> Result<(), StripError<C::Error>> {
        self.with_controller(|controller| controller.show_colors(colors))
    }

    /// Run `f` with exclusive access to the slot.
    pub fn with<R>(
        &self,
        f: impl FnOnce(&mut Option<StripController<C, PIXEL_CAP, PULSE_CAP>>) -> R,
    ) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }

    fn with_controller<R>(
        &self,
        f: impl FnOnce(&mut StripController<C, PIXEL_CAP, PULSE_CAP>) -> Result<R, StripError<C::Error>>,
    ) -> Result<R, StripError<C::Error>> {
        self.with(|slot| {
            let controller = slot.as_mut().ok_or(StripError::NotInitialized)?;
            f(controller)
        })
    }
}

impl<C: PulseChannel, const PIXEL_CAP: usize, const PULSE_CAP: usize> Default
    for SharedStrip<C, PIXEL_CAP, PULSE_CAP>
{
    fn default() -> Self {
        Self::new()
    }
}
