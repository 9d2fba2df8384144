//! 11-bit PS/2 frame: start bit, 8 data bits (LSB first), odd parity bit, stop bit.

use super::raw::FRAME_BITS;

const START_BIT: u16 = 0;
const DATA_SHIFT: u16 = 1;
const PARITY_BIT: u16 = 9;
const STOP_BIT: u16 = 10;
const FRAME_MASK: u16 = (1 << FRAME_BITS) - 1;

/// Parity bit value which makes the number of set bits in `data`
/// plus the parity bit odd.
pub fn odd_parity(data: u8) -> bool {
    data.count_ones() % 2 == 0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    Start,
    Parity,
    Stop,
}

/// Frame bits in transmission order, the first bit on the wire is bit 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame(u16);

impl Frame {
    /// Frame carrying `data` with correct start, parity and stop bits.
    pub fn prepare(data: u8) -> Self {
        let mut raw = (data as u16) << DATA_SHIFT;
        if odd_parity(data) {
            raw |= 1 << PARITY_BIT;
        }
        raw |= 1 << STOP_BIT;
        Frame(raw)
    }

    pub fn from_raw(raw: u16) -> Self {
        Frame(raw & FRAME_MASK)
    }

    pub fn raw(&self) -> u16 {
        self.0
    }

    pub fn start(&self) -> bool {
        self.bit(START_BIT)
    }

    pub fn data(&self) -> u8 {
        (self.0 >> DATA_SHIFT) as u8
    }

    pub fn parity(&self) -> bool {
        self.bit(PARITY_BIT)
    }

    pub fn stop(&self) -> bool {
        self.bit(STOP_BIT)
    }

    /// `true` if start, parity and stop bits are all valid.
    pub fn check(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<u8, FrameError> {
        if self.start() {
            Err(FrameError::Start)
        } else if self.parity() != odd_parity(self.data()) {
            Err(FrameError::Parity)
        } else if !self.stop() {
            Err(FrameError::Stop)
        } else {
            Ok(self.data())
        }
    }

    /// Append a received bit. The newest bit enters at the top, so after
    /// 11 bits the first received bit is bit 0.
    pub fn shift_in(&mut self, bit: bool) {
        self.0 = (self.0 >> 1) | ((bit as u16) << STOP_BIT);
    }

    /// Remove and return the next bit to transmit.
    pub fn shift_out(&mut self) -> bool {
        let bit = self.bit(START_BIT);
        self.0 >>= 1;
        bit
    }

    fn bit(&self, index: u16) -> bool {
        self.0 & (1 << index) != 0
    }
}
