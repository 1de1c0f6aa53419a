//! Logging backend that writes to the AXI UART.

use crate::UartAxi;
use core::fmt::{self, Write};
use log::{Level, LevelFilter, SetLoggerError};
use mmio::MmioRegion;
use spin::Mutex;

static UART: Mutex<Option<UartAxi<MmioRegion>>> = Mutex::new(None);
static LOGGER: Logger = Logger;

/// Installs the logger, printing records up to `level` on `uart`.
///
/// The UART should already be initialized. Fails if a logger is already installed, in which
/// case `uart` is dropped.
pub fn init(uart: UartAxi<MmioRegion>, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    *UART.lock() = Some(uart);
    log::set_max_level(level);
    Ok(())
}

// ————————————————————————————————— Logger ————————————————————————————————— //

pub struct Logger;

impl log::Log for Logger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata())
            && let Some(uart) = UART.lock().as_mut()
        {
            let _ = write_record(uart, record);
        }
    }

    fn flush(&self) {}
}

fn write_record<W: Write>(out: &mut W, record: &log::Record) -> fmt::Result {
    writeln!(out, "[{}] {}", level_display(record.level()), record.args())
}

fn level_display(level: Level) -> &'static str {
    // We log with colors, using ANSI escape sequences
    match level {
        Level::Error => "\x1b[31;1mError\x1b[0m",
        Level::Warn => "\x1b[33;1mWarn\x1b[0m ",
        Level::Info => "\x1b[32;1mInfo\x1b[0m ",
        Level::Debug => "\x1b[34;1mDebug\x1b[0m",
        Level::Trace => "\x1b[35;1mTrace\x1b[0m",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regs::{BLOCK_SIZE, STATUS, STATUS_TX_RDY, TXDATA};
    use mmio::{RegisterAccess, SimRegisters};

    #[test]
    fn init_once() {
        // The logger outlives the test, so its registers must too.
        static mut WORDS: [u32; 4] = [0, STATUS_TX_RDY, 0, 0];
        let base = (&raw mut WORDS) as usize;
        let regs = unsafe { MmioRegion::new(base, BLOCK_SIZE) };

        init(UartAxi::new(regs), LevelFilter::Info).unwrap();

        // Other tests may log concurrently, so only touch the registers under the lock.
        {
            let _uart = UART.lock();
            regs.write32(TXDATA, 0);
        }
        log::info!("logger ready");
        {
            let _uart = UART.lock();
            assert_eq!(regs.read32(TXDATA), u32::from(b'\n'));
            assert_eq!(regs.read32(STATUS), STATUS_TX_RDY);
        }

        assert!(init(UartAxi::new(regs), LevelFilter::Info).is_err());
    }

    #[test]
    fn record_format() {
        let mut out = String::new();
        write_record(
            &mut out,
            &log::Record::builder()
                .args(format_args!("booted in {} ms", 12))
                .level(Level::Info)
                .build(),
        )
        .unwrap();
        assert_eq!(out, "[\x1b[32;1mInfo\x1b[0m ] booted in 12 ms\n");
    }

    #[test]
    fn record_reaches_uart() {
        let regs = SimRegisters::<4>::new();
        regs.set(STATUS, STATUS_TX_RDY);
        let mut uart = UartAxi::new(&regs);

        write_record(
            &mut uart,
            &log::Record::builder()
                .args(format_args!("x"))
                .level(Level::Error)
                .build(),
        )
        .unwrap();

        let expected = "[\x1b[31;1mError\x1b[0m] x\n";
        assert_eq!(regs.writes(TXDATA), expected.len());
        assert_eq!(regs.get(TXDATA), u32::from(b'\n'));
    }
}
