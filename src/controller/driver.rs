//! Host controller: synchronizer plus the receive and transmit machines.
//!
//! Both machines are evaluated once per clock cycle. Each sees the other's
//! state as it was at the start of the cycle and only leaves its idle state
//! while the other is idle, so the bus has exactly one active direction.
//! The receive machine starts on a low clock and the transmit machine on a
//! high clock, which keeps them from starting in the same cycle.

mod receive;
mod status;
mod transmit;

pub use receive::{ReceiveState, Receiver};
pub use status::{Event, Statistics};
pub use transmit::{TransmitState, Transmitter};

use log::info;

use crate::config::Config;

use super::{
    bus::Bus,
    io::{InboundQueue, LineIO, OutboundQueue},
    raw::Lines,
};

#[derive(Debug, Clone)]
pub struct Controller {
    config: Config,
    bus: Bus,
    receiver: Receiver,
    transmitter: Transmitter,
    statistics: Statistics,
}

impl Controller {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            bus: Bus::new(),
            receiver: Receiver::new(),
            transmitter: Transmitter::new(config.request_cycles()),
            statistics: Statistics::default(),
        }
    }

    /// Advance one clock cycle with the current raw line levels.
    ///
    /// Received bytes are pushed to `inbound`, transmitted bytes are taken
    /// from `outbound`. Returns what happened on the link this cycle, if
    /// anything.
    pub fn tick<I: InboundQueue, O: OutboundQueue>(&mut self, raw: Lines, inbound: &mut I, outbound: &mut O) -> Option<Event> {
        self.bus.latch(raw);

        let rx_state = self.receiver.state();
        let tx_state = self.transmitter.state();

        let received = self.receiver.step(&self.bus, &tx_state, inbound);
        let transmitted = self.transmitter.step(&self.bus, &rx_state, outbound);

        let event = received.or(transmitted);
        if let Some(event) = &event {
            self.statistics.record(event);
        }

        event
    }

    /// Read the lines, advance one cycle and drive the lines.
    pub fn poll<T: LineIO, I: InboundQueue, O: OutboundQueue>(&mut self, io: &mut T, inbound: &mut I, outbound: &mut O) -> Result<Option<Event>, T::Error> {
        let raw = io.read()?;
        let event = self.tick(raw, inbound, outbound);
        io.write(self.outputs())?;
        Ok(event)
    }

    /// Levels the controller drives onto the bus.
    pub fn outputs(&self) -> Lines {
        self.transmitter.outputs()
    }

    /// Return both machines to idle and release the lines. Partially
    /// received or transmitted frames are lost; queue contents are kept.
    pub fn reset(&mut self) {
        info!("controller reset");
        self.bus = Bus::new();
        self.receiver.reset();
        self.transmitter.reset();
    }

    /// Assert the device reset line and reset the controller.
    pub fn enter_reset<T: LineIO>(&mut self, io: &mut T) -> Result<(), T::Error> {
        io.set_reset(true)?;
        self.reset();
        io.write(self.outputs())
    }

    pub fn leave_reset<T: LineIO>(&mut self, io: &mut T) -> Result<(), T::Error> {
        io.set_reset(false)
    }

    pub fn receive_state(&self) -> ReceiveState {
        self.receiver.state()
    }

    pub fn transmit_state(&self) -> TransmitState {
        self.transmitter.state()
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn statistics(&self) -> Statistics {
        self.statistics
    }

    pub fn config(&self) -> Config {
        self.config
    }
}
