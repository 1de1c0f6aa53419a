//! Polling driver for the AXI UART.

use crate::UartError;
use crate::regs::{
    CTRL, CTRL_RX_EN, CTRL_TX_EN, DATA_MASK, RXDATA, STATUS, STATUS_RX_RDY, STATUS_TX_RDY,
    TXDATA,
};
use core::fmt;
use mmio::RegisterAccess;

/// An AXI UART, driven through its register block.
///
/// Transfers busy-wait on the status flags. The blocking operations never time out: a device
/// that never becomes ready hangs the caller. The `try_*` and `*_timeout` variants bound the
/// wait instead.
pub struct UartAxi<R> {
    regs: R,
}

impl<R: RegisterAccess> UartAxi<R> {
    /// Creates a driver over the given register block.
    pub const fn new(regs: R) -> Self {
        Self { regs }
    }

    /// Returns the underlying register block.
    pub fn into_inner(self) -> R {
        self.regs
    }

    /// Enables the receiver and the transmitter.
    ///
    /// Must be called before any transfer. Calling it again writes the same bits.
    pub fn initialize(&self) {
        log::debug!("uart-axi: enabling receiver and transmitter");
        self.regs.write32(CTRL, CTRL_RX_EN | CTRL_TX_EN);
    }

    /// Returns `true` if the transmitter can accept a byte.
    pub fn is_transmit_ready(&self) -> bool {
        self.regs.read32(STATUS) & STATUS_TX_RDY != 0
    }

    /// Returns `true` if a received byte is available.
    pub fn is_receive_ready(&self) -> bool {
        self.regs.read32(STATUS) & STATUS_RX_RDY != 0
    }

    /// Writes a single byte, blocking until the transmitter is ready.
    pub fn write_byte(&self, byte: u8) {
        while !self.is_transmit_ready() {
            core::hint::spin_loop();
        }
        self.regs.write32(TXDATA, u32::from(byte));
    }

    /// Reads a single byte, blocking until one has been received.
    pub fn read_byte(&self) -> u8 {
        while !self.is_receive_ready() {
            core::hint::spin_loop();
        }
        (self.regs.read32(RXDATA) & DATA_MASK) as u8
    }

    /// Writes every byte of `bytes`, blocking on each one.
    pub fn write_bytes(&self, bytes: &[u8]) {
        for &b in bytes {
            self.write_byte(b);
        }
    }

    // —————————————————————————————— Bounded Waits ————————————————————————————— //

    /// Writes a byte if the transmitter is ready, checking the status once.
    pub fn try_write_byte(&self, byte: u8) -> Result<(), UartError> {
        if !self.is_transmit_ready() {
            return Err(UartError::TransmitBusy);
        }
        self.regs.write32(TXDATA, u32::from(byte));
        Ok(())
    }

    /// Reads a byte if one is available, checking the status once.
    pub fn try_read_byte(&self) -> Result<u8, UartError> {
        if !self.is_receive_ready() {
            return Err(UartError::ReceiveEmpty);
        }
        Ok((self.regs.read32(RXDATA) & DATA_MASK) as u8)
    }

    /// Writes a byte, polling the status at most `polls` times.
    pub fn write_byte_timeout(&self, byte: u8, polls: u32) -> Result<(), UartError> {
        if !self.poll(Self::is_transmit_ready, polls) {
            log::warn!("uart-axi: transmitter not ready after {polls} polls");
            return Err(UartError::TransmitTimeout { polls });
        }
        self.regs.write32(TXDATA, u32::from(byte));
        Ok(())
    }

    /// Reads a byte, polling the status at most `polls` times.
    pub fn read_byte_timeout(&self, polls: u32) -> Result<u8, UartError> {
        if !self.poll(Self::is_receive_ready, polls) {
            log::warn!("uart-axi: no byte received after {polls} polls");
            return Err(UartError::ReceiveTimeout { polls });
        }
        Ok((self.regs.read32(RXDATA) & DATA_MASK) as u8)
    }

    /// Polls `ready` until it holds, at most `polls` times.
    fn poll(&self, ready: fn(&Self) -> bool, polls: u32) -> bool {
        for _ in 0..polls {
            if ready(self) {
                return true;
            }
            core::hint::spin_loop();
        }
        false
    }
}

impl<R: RegisterAccess> fmt::Write for UartAxi<R> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}
