//! Bus synchronization, framing and the receive/transmit state machines.

pub mod bus;
pub mod driver;
pub mod frame;
pub mod io;
pub mod pins;
pub mod raw;
