#![no_std]
//! ESP32 bindings for the spectrum analyzer: microphone on ADC1, level
//! output on DAC1, ILI9341 panel on SPI2.

pub mod analog;
pub mod config;
pub mod display;

/// Moves a value into a `static` and returns a `&'static mut` to it.
#[macro_export]
macro_rules! mk_static {
    ($t:ty,$val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write(($val));
        x
    }};
}
