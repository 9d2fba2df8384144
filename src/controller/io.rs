
use super::raw::Lines;

/// Access to the physical clock and data lines.
pub trait LineIO {
    type Error;

    // Reading is `&mut self`, because pin reads may need exclusive access.
    fn read(&mut self) -> Result<Lines, Self::Error>;

    /// Drive the lines. Cleared bits pull the line low, set bits release it.
    fn write(&mut self, driven: Lines) -> Result<(), Self::Error>;

    /// Assert or deassert the device reset line. The reset line is not a
    /// part of PS/2, so buses without one ignore this.
    fn set_reset(&mut self, asserted: bool) -> Result<(), Self::Error> {
        let _ = asserted;
        Ok(())
    }
}

/// Queue of received bytes. The controller is the only producer.
pub trait InboundQueue {
    fn has_space(&self) -> bool;

    /// Only called after `has_space` returned `true`.
    fn push(&mut self, byte: u8);
}

/// Queue of bytes waiting for transmission. The controller is the only consumer.
pub trait OutboundQueue {
    fn has_data(&self) -> bool;

    /// The byte the next transmission will carry.
    fn front(&self) -> Option<u8>;

    /// Remove the byte at the front once its transmission has finished.
    fn pop(&mut self) -> Option<u8>;
}
