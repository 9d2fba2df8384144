//! Transmit state machine, host to peripheral.

use log::{debug, trace, warn};

use crate::controller::{
    bus::Bus,
    frame::Frame,
    io::OutboundQueue,
    raw::{Lines, LAST_BIT},
};

use super::receive::ReceiveState;
use super::status::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransmitState {
    Idle,
    /// Clock line held low, `timer` cycles left before request-to-send.
    Request { timer: u32 },
    Bit { bitno: u8, frame: Frame, byte: u8 },
    Ack { byte: u8 },
    IdleWait,
}

impl TransmitState {
    pub fn is_idle(&self) -> bool {
        *self == TransmitState::Idle
    }
}

impl Default for TransmitState {
    fn default() -> Self {
        TransmitState::Idle
    }
}

#[derive(Debug, Clone)]
pub struct Transmitter {
    state: TransmitState,
    request_cycles: u32,
    clock_out: bool,
    data_out: bool,
}

impl Transmitter {
    /// `request_cycles` must not be zero.
    pub fn new(request_cycles: u32) -> Self {
        Self {
            state: TransmitState::Idle,
            request_cycles,
            clock_out: true,
            data_out: true,
        }
    }

    pub fn state(&self) -> TransmitState {
        self.state
    }

    /// Levels this machine drives onto the bus.
    pub fn outputs(&self) -> Lines {
        Lines::from_levels(self.clock_out, self.data_out)
    }

    pub fn reset(&mut self) {
        self.state = TransmitState::Idle;
        self.clock_out = true;
        self.data_out = true;
    }

    /// Evaluate one clock cycle. `peer` is the receive state at the start
    /// of the cycle.
    pub fn step<Q: OutboundQueue>(&mut self, bus: &Bus, peer: &ReceiveState, outbound: &mut Q) -> Option<Event> {
        let mut event = None;

        self.state = match self.state {
            TransmitState::Idle => {
                if peer.is_idle() && bus.clock() && outbound.has_data() {
                    // Inhibit the peripheral.
                    self.clock_out = false;
                    TransmitState::Request { timer: self.request_cycles.saturating_sub(1) }
                } else {
                    TransmitState::Idle
                }
            }
            TransmitState::Request { timer: 0 } => {
                self.clock_out = true;
                match outbound.front() {
                    Some(byte) => {
                        trace!("request to send {:#04x}", byte);
                        self.data_out = false;
                        TransmitState::Bit { bitno: 0, frame: Frame::prepare(byte), byte }
                    }
                    None => {
                        warn!("outbound queue drained during request");
                        TransmitState::Idle
                    }
                }
            }
            TransmitState::Request { timer } => TransmitState::Request { timer: timer - 1 },
            TransmitState::Bit { bitno, mut frame, byte } if bus.setup() => {
                self.data_out = frame.shift_out();
                if bitno == LAST_BIT {
                    TransmitState::Ack { byte }
                } else {
                    TransmitState::Bit { bitno: bitno + 1, frame, byte }
                }
            }
            state @ TransmitState::Bit { .. } => state,
            TransmitState::Ack { byte } if bus.sample() => {
                // The byte leaves the queue either way, rejected bytes are not retried.
                outbound.pop();
                if bus.data() {
                    warn!("{:#04x} not acknowledged", byte);
                    event = Some(Event::NotAcknowledged(byte));
                } else {
                    debug!("{:#04x} acknowledged", byte);
                    event = Some(Event::Acknowledged(byte));
                }
                TransmitState::IdleWait
            }
            state @ TransmitState::Ack { .. } => state,
            TransmitState::IdleWait => {
                if bus.clock() {
                    TransmitState::Idle
                } else {
                    TransmitState::IdleWait
                }
            }
        };

        event
    }
}
