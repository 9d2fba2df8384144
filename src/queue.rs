//! Fixed capacity byte queue for either direction.

use arraydeque::{Array, ArrayDeque, CapacityError, Saturating};
use log::warn;

use crate::controller::io::{InboundQueue, OutboundQueue};

#[derive(Debug)]
pub struct ByteQueue<A: Array<Item = u8>> {
    bytes: ArrayDeque<A, Saturating>,
}

impl<A: Array<Item = u8>> ByteQueue<A> {
    pub fn new() -> Self {
        Self {
            bytes: ArrayDeque::new(),
        }
    }

    /// Producer side of the outbound direction.
    pub fn write(&mut self, byte: u8) -> Result<(), CapacityError<u8>> {
        self.bytes.push_back(byte)
    }

    /// Consumer side of the inbound direction.
    pub fn read(&mut self) -> Option<u8> {
        self.bytes.pop_front()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.bytes.len() == self.bytes.capacity()
    }

    pub fn clear(&mut self) {
        self.bytes.clear()
    }
}

impl<A: Array<Item = u8>> Default for ByteQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Array<Item = u8>> InboundQueue for ByteQueue<A> {
    fn has_space(&self) -> bool {
        !self.is_full()
    }

    fn push(&mut self, byte: u8) {
        if self.bytes.push_back(byte).is_err() {
            warn!("push to full queue, dropping {:#04x}", byte);
        }
    }
}

impl<A: Array<Item = u8>> OutboundQueue for ByteQueue<A> {
    fn has_data(&self) -> bool {
        !self.is_empty()
    }

    fn front(&self) -> Option<u8> {
        self.bytes.front().copied()
    }

    fn pop(&mut self) -> Option<u8> {
        self.bytes.pop_front()
    }
}
