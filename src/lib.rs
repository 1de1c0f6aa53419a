//! Driver for a memory-mapped AXI UART.
//!
//! The device exposes four 32-bit registers (control, status, transmit data and receive data,
//! see [regs]). The driver enables the receiver and transmitter and moves single bytes by
//! busy-waiting on the status flags.
//!
//! Register accesses go through [mmio::RegisterAccess]: firmware binds the driver to the device
//! with [platform::uart], tests bind it to a simulated register file.

#![cfg_attr(not(test), no_std)]

pub mod logger;
pub mod platform;
pub mod regs;
pub mod uart;

pub use uart::UartAxi;

use thiserror::Error;

// ————————————————————————————————— Errors ————————————————————————————————— //

/// Error of the bounded-wait transfer operations.
///
/// The blocking operations never fail, they wait for the device instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartError {
    // Single poll
    #[error("transmitter is busy")]
    TransmitBusy,
    #[error("no received byte available")]
    ReceiveEmpty,

    // Bounded poll
    #[error("transmitter not ready after {polls} status polls")]
    TransmitTimeout { polls: u32 },
    #[error("no byte received after {polls} status polls")]
    ReceiveTimeout { polls: u32 },
}
