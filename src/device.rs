//! Byte values shared by PS/2 keyboards and auxiliary devices.
//!
//! The controller itself never interprets these; they are here for
//! code that issues commands through the outbound queue.

#[derive(Debug)]
pub struct Command;

impl Command {
    pub const RESET: u8 = 0xFF;
    pub const RESEND: u8 = 0xFE;
    pub const SET_DEFAULTS: u8 = 0xF6;
    pub const DISABLE_REPORTING: u8 = 0xF5;
    pub const ENABLE_REPORTING: u8 = 0xF4;
    pub const SET_SAMPLE_RATE: u8 = 0xF3;
    pub const READ_ID: u8 = 0xF2;
    pub const SET_REMOTE_MODE: u8 = 0xF0;
    pub const ECHO: u8 = 0xEE;
    pub const READ_DATA: u8 = 0xEB;
    pub const SET_STREAM_MODE: u8 = 0xEA;
    pub const STATUS_REQUEST: u8 = 0xE9;
}

#[derive(Debug)]
pub struct FromDevice;

impl FromDevice {
    pub const ACK: u8 = 0xFA;
    pub const RESEND: u8 = 0xFE;
    pub const ERROR: u8 = 0xFC;
    pub const BAT_COMPLETION_CODE: u8 = 0xAA;
    pub const ECHO: u8 = 0xEE;
}
