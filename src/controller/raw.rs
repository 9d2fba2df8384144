
use bitflags::bitflags;

bitflags! {
    /// Levels of the two bus lines.
    ///
    /// A set bit means the line is high. For lines driven by the host a set
    /// bit means the line is released and pulled up externally; the host
    /// never drives a line high.
    pub struct Lines: u8 {
        const CLOCK = 0b0000_0001;
        const DATA = 0b0000_0010;
    }
}

impl Lines {
    /// Both lines released.
    pub fn released() -> Lines {
        Lines::all()
    }

    pub fn clock(&self) -> bool {
        self.contains(Lines::CLOCK)
    }

    pub fn data(&self) -> bool {
        self.contains(Lines::DATA)
    }

    pub fn from_levels(clock: bool, data: bool) -> Lines {
        let mut lines = Lines::empty();
        lines.set(Lines::CLOCK, clock);
        lines.set(Lines::DATA, data);
        lines
    }
}

/// Start bit, 8 data bits, parity bit and stop bit.
pub const FRAME_BITS: u8 = 11;

/// Index of the last bit of a frame.
pub const LAST_BIT: u8 = FRAME_BITS - 1;

/// Minimum time the host holds the clock line low before
/// requesting to send.
pub const REQUEST_HOLD_MICROS: u32 = 60;
