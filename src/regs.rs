//! Register map of the AXI UART.
//!
//! Four 32-bit registers, at fixed byte offsets from the base of the block.

/// Control register.
pub const CTRL: usize = 0x00;
/// Status register, read-only.
pub const STATUS: usize = 0x04;
/// Transmit data register, data in the low byte.
pub const TXDATA: usize = 0x08;
/// Receive data register, data in the low byte.
pub const RXDATA: usize = 0x0C;

/// Size of the register block, in bytes.
pub const BLOCK_SIZE: usize = 0x10;

// CTRL bits
pub const CTRL_RX_EN: u32 = 1 << 0;
pub const CTRL_TX_EN: u32 = 1 << 1;

// STATUS bits
pub const STATUS_RX_RDY: u32 = 1 << 0;
pub const STATUS_TX_RDY: u32 = 1 << 1;

/// Data bits of TXDATA/RXDATA.
pub const DATA_MASK: u32 = 0xFF;
