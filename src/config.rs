//! Controller configuration.

use core::fmt;

use crate::controller::raw::REQUEST_HOLD_MICROS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    request_cycles: u32,
}

impl Config {
    /// `request_cycles` is the number of clock cycles the clock line is held
    /// low before request-to-send. It should cover at least 60 microseconds.
    pub fn new(request_cycles: u32) -> Result<Self, ConfigError> {
        if request_cycles == 0 {
            return Err(ConfigError::ZeroRequestCycles);
        }

        Ok(Self { request_cycles })
    }

    /// Configuration for a controller ticked at `hz`. The hold time is
    /// rounded up to whole cycles.
    pub fn from_clock_frequency(hz: u32) -> Result<Self, ConfigError> {
        let cycles = (hz as u64 * REQUEST_HOLD_MICROS as u64 + 999_999) / 1_000_000;
        if cycles == 0 {
            return Err(ConfigError::ClockTooSlow { hz });
        }

        Self::new(cycles as u32)
    }

    pub fn request_cycles(&self) -> u32 {
        self.request_cycles
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroRequestCycles,
    ClockTooSlow { hz: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::ZeroRequestCycles => write!(f, "request hold must be at least one cycle"),
            ConfigError::ClockTooSlow { hz } => write!(f, "clock frequency {} Hz is too slow", hz),
        }
    }
}
