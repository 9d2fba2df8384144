//! Bit-level host controller for the IBM PS/2 peripheral protocol.
//!
//! The controller is a cycle-stepped model of the two-wire (clock, data)
//! open-drain link: call [`Controller::tick`](controller::driver::Controller::tick)
//! once per clock cycle (timer interrupt, polling loop or simulation step)
//! and it will receive frames from the peripheral and transmit queued bytes
//! to it.
//!
//! # Reference material
//! * <http://classiccomputers.info/down/IBM_PS2/documents/PS2_Hardware_Interface_Technical_Reference_May88.pdf>
//!     * Keyboard and Auxiliary Device Controller
//! * <https://www.burtonsys.com/ps2_chapweske.htm>

#![no_std]
#![forbid(missing_debug_implementations)]

pub mod config;
pub mod controller;
pub mod device;
pub mod queue;

pub use config::{Config, ConfigError};
pub use controller::driver::{Controller, Event, Statistics};
pub use controller::io::{InboundQueue, LineIO, OutboundQueue};
pub use controller::raw::Lines;
pub use queue::ByteQueue;
