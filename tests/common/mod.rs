#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use ps2_host::controller::driver::{ReceiveState, TransmitState};
use ps2_host::controller::frame::Frame;
use ps2_host::controller::raw::LAST_BIT;
use ps2_host::{ByteQueue, Config, Controller, Event, Lines};

/// Peripheral clock half period in controller cycles.
pub const HALF_PERIOD: u32 = 20;
/// Quiet cycles the peripheral waits between frames it sends.
pub const GAP: u32 = 3 * HALF_PERIOD;
pub const REQUEST_CYCLES: u32 = 60;

/// Level seen on the bus when both sides drive open-drain outputs.
pub fn wire(host: Lines, device: Lines) -> Lines {
    host & device
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    High,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle { quiet: u32 },
    Inhibited,
    Requested { frame: Frame, count: u32 },
    Receiving { bitno: u8, frame: Frame, phase: Phase, count: u32 },
    Acking { frame: Frame, count: u32 },
    Sending { bitno: u8, frame: Frame, byte: u8, phase: Phase, count: u32 },
}

/// Cycle-stepped PS/2 device model.
///
/// Sends queued bytes when the bus is idle, accepts host commands after a
/// request-to-send, acknowledges them and queues the scripted response.
/// A host inhibit during a transmission aborts it, a command received
/// afterwards discards whatever was still queued.
#[derive(Debug)]
pub struct Peripheral {
    state: State,
    clock: bool,
    data: bool,
    responses: HashMap<u8, Vec<u8>>,
    pending: VecDeque<u8>,
    /// Commands received with valid framing.
    pub received: Vec<u8>,
    /// Reply to host frames with a negative acknowledgment.
    pub nack: bool,
    /// Flip the parity bit of the next frame sent.
    pub corrupt_parity: bool,
    /// Transmissions aborted by a host inhibit.
    pub aborted: u32,
}

impl Peripheral {
    pub fn new() -> Self {
        Self {
            state: State::Idle { quiet: GAP },
            clock: true,
            data: true,
            responses: HashMap::new(),
            pending: VecDeque::new(),
            received: Vec::new(),
            nack: false,
            corrupt_parity: false,
            aborted: 0,
        }
    }

    pub fn respond(&mut self, command: u8, bytes: &[u8]) {
        self.responses.insert(command, bytes.to_vec());
    }

    /// Queue unsolicited bytes.
    pub fn send(&mut self, bytes: &[u8]) {
        self.pending.extend(bytes.iter().copied());
    }

    pub fn outputs(&self) -> Lines {
        Lines::from_levels(self.clock, self.data)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle { .. }) && self.pending.is_empty()
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.state, State::Sending { .. })
    }

    pub fn reset(&mut self) {
        self.state = State::Idle { quiet: 0 };
        self.clock = true;
        self.data = true;
        self.pending.clear();
    }

    /// Advance one cycle. `bus` is the wired level after the host's update.
    pub fn tick(&mut self, bus: Lines) {
        self.state = match self.state {
            State::Idle { .. } if !bus.clock() => State::Inhibited,
            State::Idle { quiet } if quiet < GAP => State::Idle { quiet: quiet + 1 },
            State::Idle { quiet } => match self.pending.pop_front() {
                Some(byte) => self.start_sending(byte),
                None => State::Idle { quiet },
            },
            State::Inhibited if bus.clock() && !bus.data() => {
                // Request-to-send, the start bit is the request itself.
                let mut frame = Frame::default();
                frame.shift_in(false);
                State::Requested { frame, count: 0 }
            }
            State::Inhibited if bus.clock() => State::Idle { quiet: 0 },
            State::Inhibited => State::Inhibited,
            State::Requested { frame, count } => {
                let count = count + 1;
                if count == HALF_PERIOD {
                    self.clock = false;
                    State::Receiving { bitno: 1, frame, phase: Phase::Low, count: 0 }
                } else {
                    State::Requested { frame, count }
                }
            }
            State::Receiving { bitno, mut frame, phase, count } => {
                let count = count + 1;
                match phase {
                    Phase::Low if count == HALF_PERIOD => {
                        self.clock = true;
                        State::Receiving { bitno, frame, phase: Phase::High, count: 0 }
                    }
                    Phase::High if count == HALF_PERIOD => {
                        frame.shift_in(bus.data());
                        self.clock = false;
                        if bitno == LAST_BIT {
                            self.data = !(frame.check() && !self.nack);
                            State::Acking { frame, count: 0 }
                        } else {
                            State::Receiving { bitno: bitno + 1, frame, phase: Phase::Low, count: 0 }
                        }
                    }
                    phase => State::Receiving { bitno, frame, phase, count },
                }
            }
            State::Acking { frame, count } => {
                let count = count + 1;
                if count == HALF_PERIOD {
                    let acked = !self.data;
                    self.clock = true;
                    self.data = true;
                    if acked {
                        self.accept(frame.data());
                    }
                    State::Idle { quiet: 0 }
                } else {
                    State::Acking { frame, count }
                }
            }
            State::Sending { byte, phase: Phase::High, .. } if !bus.clock() => {
                // Host inhibit, retry the byte later unless a command follows.
                self.aborted += 1;
                self.data = true;
                self.pending.push_front(byte);
                State::Inhibited
            }
            State::Sending { bitno, mut frame, byte, phase, count } => {
                let count = count + 1;
                match phase {
                    Phase::High if count == HALF_PERIOD => {
                        self.clock = false;
                        State::Sending { bitno, frame, byte, phase: Phase::Low, count: 0 }
                    }
                    Phase::Low if count == HALF_PERIOD => {
                        self.clock = true;
                        if bitno == LAST_BIT {
                            self.data = true;
                            State::Idle { quiet: 0 }
                        } else {
                            self.data = frame.shift_out();
                            State::Sending { bitno: bitno + 1, frame, byte, phase: Phase::High, count: 0 }
                        }
                    }
                    phase => State::Sending { bitno, frame, byte, phase, count },
                }
            }
        };
    }

    fn start_sending(&mut self, byte: u8) -> State {
        let mut raw = Frame::prepare(byte).raw();
        if self.corrupt_parity {
            self.corrupt_parity = false;
            raw ^= 1 << 9;
        }
        let mut frame = Frame::from_raw(raw);
        self.data = frame.shift_out();
        State::Sending { bitno: 0, frame, byte, phase: Phase::High, count: 0 }
    }

    fn accept(&mut self, command: u8) {
        self.received.push(command);
        // A new command interrupts whatever packet was being sent.
        self.pending.clear();
        if let Some(response) = self.responses.get(&command) {
            self.pending.extend(response.iter().copied());
        }
    }
}

/// Controller and peripheral connected through a simulated bus.
#[derive(Debug)]
pub struct Link {
    pub controller: Controller,
    pub peripheral: Peripheral,
    pub inbound: ByteQueue<[u8; 16]>,
    pub outbound: ByteQueue<[u8; 16]>,
    pub events: Vec<Event>,
    /// Controller outputs after every cycle.
    pub trace: Vec<Lines>,
}

impl Link {
    pub fn new() -> Self {
        Self::with_request_cycles(REQUEST_CYCLES)
    }

    pub fn with_request_cycles(request_cycles: u32) -> Self {
        let config = Config::new(request_cycles).expect("valid request cycles");
        Self {
            controller: Controller::new(config),
            peripheral: Peripheral::new(),
            inbound: ByteQueue::new(),
            outbound: ByteQueue::new(),
            events: Vec::new(),
            trace: Vec::new(),
        }
    }

    pub fn step(&mut self) {
        let raw = wire(self.controller.outputs(), self.peripheral.outputs());
        if let Some(event) = self.controller.tick(raw, &mut self.inbound, &mut self.outbound) {
            self.events.push(event);
        }
        self.trace.push(self.controller.outputs());

        assert!(
            self.controller.receive_state().is_idle() || self.controller.transmit_state().is_idle(),
            "receive {:?} and transmit {:?} both active",
            self.controller.receive_state(),
            self.controller.transmit_state()
        );

        let raw = wire(self.controller.outputs(), self.peripheral.outputs());
        self.peripheral.tick(raw);
    }

    pub fn run(&mut self, cycles: u32) {
        for _ in 0..cycles {
            self.step();
        }
    }

    /// Step until `done` holds, panicking after `limit` cycles.
    pub fn run_until(&mut self, limit: u32, mut done: impl FnMut(&Link) -> bool) {
        for _ in 0..limit {
            if done(self) {
                return;
            }
            self.step();
        }
        assert!(done(self), "condition not reached in {} cycles", limit);
    }

    /// Nothing in flight on either side.
    pub fn settled(&self) -> bool {
        self.controller.receive_state() == ReceiveState::Idle
            && self.controller.transmit_state() == TransmitState::Idle
            && self.peripheral.is_idle()
            && self.outbound.is_empty()
            && self.controller.outputs() == Lines::released()
            && self.controller.bus().clock()
    }

    pub fn run_until_settled(&mut self) {
        // Let the peripheral leave its quiet period before checking.
        self.run(GAP + 1);
        self.run_until(100_000, |link| link.settled());
    }

    /// Send `command` and collect the response bytes.
    pub fn transact(&mut self, command: u8) -> Vec<u8> {
        self.outbound.write(command).expect("outbound queue has space");
        self.run_until_settled();
        let mut response = Vec::new();
        while let Some(byte) = self.inbound.read() {
            response.push(byte);
        }
        response
    }
}

/// Number of times the controller started pulling the clock line low.
pub fn clock_inhibits(trace: &[Lines]) -> usize {
    let mut previous = Lines::released();
    let mut count = 0;
    for lines in trace {
        if previous.clock() && !lines.clock() {
            count += 1;
        }
        previous = *lines;
    }
    count
}
