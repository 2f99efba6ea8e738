//! ILI9341 320x240 panel over blocking SPI.

use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::{
    delay::Delay,
    gpio::{AnyPin, Level, Output, OutputConfig},
    peripherals::SPI2,
    spi::{
        master::{Config, Spi},
        Mode,
    },
    time::Rate,
    Blocking,
};
use mipidsi::{
    interface::SpiInterface,
    models::ILI9341Rgb565,
    options::{ColorOrder, Orientation, Rotation},
    Builder,
};

use crate::config::{PANEL_BUFFER_SIZE, PANEL_HEIGHT, PANEL_SPI_MHZ, PANEL_WIDTH};
use crate::mk_static;

type PanelBus = ExclusiveDevice<Spi<'static, Blocking>, Output<'static>, Delay>;

/// The panel, ready to draw on with `embedded-graphics`.
pub type Panel = mipidsi::Display<
    SpiInterface<'static, PanelBus, Output<'static>>,
    ILI9341Rgb565,
    Output<'static>,
>;

pub struct PanelResources {
    pub spi: SPI2<'static>,
    pub sck: AnyPin<'static>,
    pub mosi: AnyPin<'static>,
    pub cs: AnyPin<'static>,
    pub dc: AnyPin<'static>,
    pub rst: AnyPin<'static>,
}

impl From<PanelResources> for Panel {
    fn from(res: PanelResources) -> Self {
        let mut delay = Delay::new();

        let dc = Output::new(res.dc, Level::Low, OutputConfig::default());
        let mut rst = Output::new(res.rst, Level::Low, OutputConfig::default());
        rst.set_high();

        let spi = Spi::new(
            res.spi,
            Config::default()
                .with_frequency(Rate::from_mhz(PANEL_SPI_MHZ))
                .with_mode(Mode::_0),
        )
        .expect("SPI2 config rejected")
        .with_sck(res.sck)
        .with_mosi(res.mosi);

        let cs = Output::new(res.cs, Level::High, OutputConfig::default());
        let spi_device = ExclusiveDevice::new(spi, cs, delay).expect("chip select");

        let buffer = mk_static!([u8; PANEL_BUFFER_SIZE], [0_u8; PANEL_BUFFER_SIZE]);
        let di = SpiInterface::new(spi_device, dc, buffer);

        Builder::new(ILI9341Rgb565, di)
            .reset_pin(rst)
            .display_size(PANEL_WIDTH, PANEL_HEIGHT)
            .color_order(ColorOrder::Bgr)
            .orientation(Orientation::new().rotate(Rotation::Deg90))
            .init(&mut delay)
            .expect("ILI9341 init failed")
    }
}
