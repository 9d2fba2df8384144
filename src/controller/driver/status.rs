//! Link-layer events and counters.

use core::fmt;

use crate::controller::frame::FrameError;

/// Something that happened on the link during a clock cycle.
///
/// None of these are errors from the controller's point of view, the
/// protocol gives the host no way to report them to the peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Valid frame received and pushed to the inbound queue.
    Received(u8),
    /// Received frame discarded.
    FramingError(FrameError),
    /// Valid frame received but the inbound queue was full.
    Overrun(u8),
    /// Peripheral acknowledged a transmitted byte.
    Acknowledged(u8),
    /// Peripheral did not acknowledge a transmitted byte. The byte is not
    /// retransmitted.
    NotAcknowledged(u8),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub received: u32,
    pub framing_errors: u32,
    pub overruns: u32,
    pub acknowledged: u32,
    pub not_acknowledged: u32,
}

impl Statistics {
    pub(crate) fn record(&mut self, event: &Event) {
        let counter = match event {
            Event::Received(_) => &mut self.received,
            Event::FramingError(_) => &mut self.framing_errors,
            Event::Overrun(_) => &mut self.overruns,
            Event::Acknowledged(_) => &mut self.acknowledged,
            Event::NotAcknowledged(_) => &mut self.not_acknowledged,
        };
        *counter = counter.wrapping_add(1);
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "rx={} framing_err={} overruns={} ack={} nack={}",
            self.received,
            self.framing_errors,
            self.overruns,
            self.acknowledged,
            self.not_acknowledged
        )
    }
}
