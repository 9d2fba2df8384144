//! [`LineIO`] over `embedded-hal` GPIO pins.
//!
//! The clock and data pins must be configured as open-drain outputs with
//! input buffers enabled and external (or internal) pull-ups, so that
//! `set_high` releases the line and `is_high` reads the wired level.

use core::marker::PhantomData;

use embedded_hal::digital::{Error, ErrorType, InputPin, OutputPin, PinState};

use super::io::LineIO;
use super::raw::Lines;

#[derive(Debug)]
pub struct PinLines<C, D, R> {
    clock: C,
    data: D,
    reset: R,
}

impl<C, D, E> PinLines<C, D, NoReset<E>>
where
    C: InputPin<Error = E> + OutputPin<Error = E>,
    D: InputPin<Error = E> + OutputPin<Error = E>,
    E: Error,
{
    pub fn new(clock: C, data: D) -> Self {
        PinLines { clock, data, reset: NoReset(PhantomData) }
    }
}

impl<C, D, R, E> PinLines<C, D, R>
where
    C: InputPin<Error = E> + OutputPin<Error = E>,
    D: InputPin<Error = E> + OutputPin<Error = E>,
    R: OutputPin<Error = E>,
    E: Error,
{
    /// `reset` is driven high while the device is held in reset.
    pub fn with_reset(clock: C, data: D, reset: R) -> Self {
        PinLines { clock, data, reset }
    }

    pub fn release(self) -> (C, D, R) {
        (self.clock, self.data, self.reset)
    }
}

impl<C, D, R, E> LineIO for PinLines<C, D, R>
where
    C: InputPin<Error = E> + OutputPin<Error = E>,
    D: InputPin<Error = E> + OutputPin<Error = E>,
    R: OutputPin<Error = E>,
    E: Error,
{
    type Error = E;

    fn read(&mut self) -> Result<Lines, E> {
        let clock = self.clock.is_high()?;
        let data = self.data.is_high()?;
        Ok(Lines::from_levels(clock, data))
    }

    fn write(&mut self, driven: Lines) -> Result<(), E> {
        self.clock.set_state(PinState::from(driven.clock()))?;
        self.data.set_state(PinState::from(driven.data()))
    }

    fn set_reset(&mut self, asserted: bool) -> Result<(), E> {
        self.reset.set_state(PinState::from(asserted))
    }
}

/// Placeholder for buses without a reset line.
#[derive(Debug)]
pub struct NoReset<E>(PhantomData<E>);

impl<E: Error> ErrorType for NoReset<E> {
    type Error = E;
}

impl<E: Error> OutputPin for NoReset<E> {
    fn set_low(&mut self) -> Result<(), E> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), E> {
        Ok(())
    }
}
