#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use esp_backtrace as _;
use esp_hal::{
    analog::{
        adc::{Adc, AdcConfig, Attenuation},
        dac::Dac,
    },
    delay::Delay,
    time::Instant,
};
use micro_dsp::{BitOrder, CfftKernel, Direction, Pipeline, PipelineConfig, FFT_SIZE};
use micro_viz::{Layout, Theme, Visualizer};
use tonescope::{
    analog::{LevelOutput, Microphone},
    config::REPORT_INTERVAL_MS,
    display::{Panel, PanelResources},
    mk_static,
};

esp_bootloader_esp_idf::esp_app_desc!();

type Scope = Pipeline<
    Microphone,
    LevelOutput,
    Delay,
    CfftKernel<FFT_SIZE>,
    Visualizer<Panel>,
    FFT_SIZE,
>;

#[esp_hal::main]
fn main() -> ! {
    let peripherals = esp_hal::init(esp_hal::Config::default());
    info!("tonescope starting");

    let mut adc_config = AdcConfig::new();
    let mic_pin = adc_config.enable_pin(peripherals.GPIO36, Attenuation::_11dB);
    let microphone = Microphone::new(Adc::new(peripherals.ADC1, adc_config), mic_pin);
    let level = LevelOutput::new(Dac::new(peripherals.DAC1, peripherals.GPIO25));
    info!("ADC1 on GPIO36, DAC1 on GPIO25");

    let mut panel: Panel = PanelResources {
        spi: peripherals.SPI2,
        sck: peripherals.GPIO18.into(),
        mosi: peripherals.GPIO23.into(),
        cs: peripherals.GPIO15.into(),
        dc: peripherals.GPIO2.into(),
        rst: peripherals.GPIO4.into(),
    }
    .into();
    panel.clear(Rgb565::WHITE).expect("panel clear failed");
    info!("panel ready");

    let kernel = CfftKernel::new(Direction::Forward, BitOrder::Natural)
        .expect("FFT size must be a power of two");
    let visualizer = Visualizer::new(panel, Layout::default(), Theme::default());
    let scope = mk_static!(
        Scope,
        Pipeline::new(
            PipelineConfig::default(),
            microphone,
            level,
            Delay::new(),
            kernel,
            visualizer,
        )
        .expect("invalid pipeline configuration")
    );

    let mut cycles = 0u32;
    let mut window_start = Instant::now();
    let result = scope.run_with(|report| {
        cycles += 1;
        if window_start.elapsed().as_millis() >= REPORT_INTERVAL_MS {
            info!(
                "{} cycles/s, peak {} Hz, {} mV pk-pk",
                cycles, report.peak.frequency_hz, report.calibration.millivolts
            );
            cycles = 0;
            window_start = Instant::now();
        }
    });

    match result {
        Ok(never) => match never {},
        Err(_) => panic!("display write failed"),
    }
}
