//! Board wiring and bus settings.
//!
//! Pin numbers are fixed by the peripheral calls in `main`; the values here
//! document them and hold everything that is a plain number.

// Microphone on GPIO36 (ADC1 channel 0), level output on GPIO25 (DAC1).
// Panel on SPI2: SCK 18, MOSI 23, CS 15, DC 2, RST 4.

pub const PANEL_SPI_MHZ: u32 = 40; // MHz
pub const PANEL_WIDTH: u16 = 240; // pixels, native portrait
pub const PANEL_HEIGHT: u16 = 320; // pixels, native portrait
pub const PANEL_BUFFER_SIZE: usize = 512; // bytes of SPI staging buffer

pub const DAC_SHIFT: u32 = 4; // 12-bit level to 8-bit DAC
pub const REPORT_INTERVAL_MS: u64 = 1000; // cycle-rate log period
