#![no_std]
//! Spectrum rendering for small colour panels.
//!
//! [`Visualizer`] draws onto any `embedded_graphics` draw target and plugs
//! into the `micro-dsp` pipeline as its display.

pub mod bar;
pub mod layout;
pub mod readout;
pub mod theme;
pub mod visualizer;

pub use bar::{bar_height, Bar};
pub use layout::Layout;
pub use readout::{format_readout, Readout};
pub use theme::Theme;
pub use visualizer::Visualizer;
