//! Platform-specific constants and configuration.
//!
//! All hardware-specific values should be defined in this module to make porting to a new
//! platform straightforward.

use crate::UartAxi;
use crate::regs::BLOCK_SIZE;
use mmio::MmioRegion;

/// Base address of the UART register block.
///
/// Set at build time through the `UART_AXI_BASE` environment variable (`0x`-prefixed hex or
/// decimal, `_` separators allowed). The default of zero is a placeholder that integrating
/// firmware is expected to override.
pub const UART_AXI_BASE: usize = match option_env!("UART_AXI_BASE") {
    Some(address) => parse_address(address),
    None => 0x0000_0000,
};

const _: () = assert!(UART_AXI_BASE % 4 == 0, "UART_AXI_BASE must be 4-byte aligned");

/// Size of the UART register block, in bytes.
pub const UART_AXI_SIZE: usize = BLOCK_SIZE;

/// Returns a driver for the UART at [UART_AXI_BASE].
///
/// # Safety
///
/// [UART_AXI_BASE] must be the address of the UART register block, mapped as device memory, and
/// the caller must not create another driver for the same block while this one is in use.
pub unsafe fn uart() -> UartAxi<MmioRegion> {
    // SAFETY: forwarded to the caller.
    UartAxi::new(unsafe { MmioRegion::new(UART_AXI_BASE, UART_AXI_SIZE) })
}

/// Parses an address, in hex with a `0x` prefix or in decimal.
///
/// # Panics
///
/// Panics on empty input, invalid digits or overflow. Evaluated in a const context, this fails
/// the build.
pub const fn parse_address(s: &str) -> usize {
    let bytes = s.as_bytes();
    let (radix, mut i) = if bytes.len() > 2 && bytes[0] == b'0' && (bytes[1] | 0x20) == b'x' {
        (16, 2)
    } else {
        (10, 0)
    };

    let mut value: usize = 0;
    let mut digits = 0;
    while i < bytes.len() {
        let c = bytes[i];
        i += 1;
        if c == b'_' {
            continue;
        }
        let digit = match c {
            b'0'..=b'9' => (c - b'0') as usize,
            b'a'..=b'f' if radix == 16 => (c - b'a' + 10) as usize,
            b'A'..=b'F' if radix == 16 => (c - b'A' + 10) as usize,
            _ => panic!("invalid digit in address"),
        };
        value = match value.checked_mul(radix) {
            Some(v) => match v.checked_add(digit) {
                Some(v) => v,
                None => panic!("address overflows usize"),
            },
            None => panic!("address overflows usize"),
        };
        digits += 1;
    }

    assert!(digits > 0, "empty address");
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(parse_address("0x4000_0000"), 0x4000_0000);
        assert_eq!(parse_address("0XA0001000"), 0xa000_1000);
        assert_eq!(parse_address("0xdeadBEEF"), 0xdead_beef);
        assert_eq!(parse_address("4096"), 4096);
        assert_eq!(parse_address("1_000"), 1000);
        assert_eq!(parse_address("0"), 0);
    }

    #[test]
    #[should_panic(expected = "invalid digit")]
    fn parse_rejects_hex_without_prefix() {
        parse_address("ff");
    }

    #[test]
    #[should_panic(expected = "empty address")]
    fn parse_rejects_empty() {
        parse_address("0x__");
    }

    #[test]
    fn block_size() {
        assert_eq!(UART_AXI_SIZE, 0x10);
        assert_eq!(UART_AXI_BASE % 4, 0);
    }
}
