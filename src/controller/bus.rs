//! Line synchronizer and clock edge detector.

use super::raw::Lines;

const HISTORY_MASK: u8 = 0b0000_1111;
/// Synchronized clock history, oldest sample in the highest bit.
const FALLING_EDGE: u8 = 0b0000_1100;
const RISING_EDGE: u8 = 0b0000_0011;

/// Synchronized view of the bus.
///
/// Raw levels pass through two registers before they are visible as
/// [`clock`](Bus::clock) and [`data`](Bus::data). Edge pulses are derived
/// from the synchronized clock and require two samples on both sides of
/// the edge, so a single cycle glitch never produces a pulse.
#[derive(Debug, Clone)]
pub struct Bus {
    clock_meta: bool,
    clock: bool,
    data_meta: bool,
    data: bool,
    history: u8,
    sample: bool,
    setup: bool,
}

impl Bus {
    /// Both lines idle (high), no pending edges.
    pub fn new() -> Self {
        Self {
            clock_meta: true,
            clock: true,
            data_meta: true,
            data: true,
            history: HISTORY_MASK,
            sample: false,
            setup: false,
        }
    }

    /// Advance one clock cycle with new raw line levels.
    pub fn latch(&mut self, raw: Lines) {
        self.history = ((self.history << 1) | self.clock as u8) & HISTORY_MASK;
        self.sample = self.history == FALLING_EDGE;
        self.setup = self.history == RISING_EDGE;

        self.clock = self.clock_meta;
        self.clock_meta = raw.clock();
        self.data = self.data_meta;
        self.data_meta = raw.data();
    }

    pub fn clock(&self) -> bool {
        self.clock
    }

    pub fn data(&self) -> bool {
        self.data
    }

    /// Falling clock edge confirmed, input data should be latched.
    pub fn sample(&self) -> bool {
        self.sample
    }

    /// Rising clock edge confirmed, output data should be driven.
    pub fn setup(&self) -> bool {
        self.setup
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}
