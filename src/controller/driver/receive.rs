//! Receive state machine, peripheral to host.

use log::{debug, warn};

use crate::controller::{
    bus::Bus,
    frame::Frame,
    io::InboundQueue,
    raw::LAST_BIT,
};

use super::status::Event;
use super::transmit::TransmitState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiveState {
    Idle,
    Bit { bitno: u8, frame: Frame },
    Frame(Frame),
    IdleWait,
}

impl ReceiveState {
    pub fn is_idle(&self) -> bool {
        *self == ReceiveState::Idle
    }
}

impl Default for ReceiveState {
    fn default() -> Self {
        ReceiveState::Idle
    }
}

#[derive(Debug, Clone, Default)]
pub struct Receiver {
    state: ReceiveState,
}

impl Receiver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ReceiveState {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = ReceiveState::Idle;
    }

    /// Evaluate one clock cycle. `peer` is the transmit state at the start
    /// of the cycle.
    pub fn step<Q: InboundQueue>(&mut self, bus: &Bus, peer: &TransmitState, inbound: &mut Q) -> Option<Event> {
        let mut event = None;

        self.state = match self.state {
            ReceiveState::Idle => {
                // Peripheral pulled the clock low to start a frame.
                if peer.is_idle() && !bus.clock() {
                    ReceiveState::Bit { bitno: 0, frame: Frame::default() }
                } else {
                    ReceiveState::Idle
                }
            }
            ReceiveState::Bit { bitno, mut frame } if bus.sample() => {
                frame.shift_in(bus.data());
                if bitno == LAST_BIT {
                    ReceiveState::Frame(frame)
                } else {
                    ReceiveState::Bit { bitno: bitno + 1, frame }
                }
            }
            state @ ReceiveState::Bit { .. } => state,
            ReceiveState::Frame(frame) => {
                event = Some(Self::deliver(frame, inbound));
                ReceiveState::IdleWait
            }
            ReceiveState::IdleWait => {
                if bus.clock() {
                    ReceiveState::Idle
                } else {
                    ReceiveState::IdleWait
                }
            }
        };

        event
    }

    fn deliver<Q: InboundQueue>(frame: Frame, inbound: &mut Q) -> Event {
        match frame.validate() {
            Ok(byte) if inbound.has_space() => {
                debug!("received {:#04x}", byte);
                inbound.push(byte);
                Event::Received(byte)
            }
            Ok(byte) => {
                warn!("inbound queue full, dropping {:#04x}", byte);
                Event::Overrun(byte)
            }
            Err(error) => {
                warn!("framing error {:?} in frame {:#05x}", error, frame.raw());
                Event::FramingError(error)
            }
        }
    }
}
