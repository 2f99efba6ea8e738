/// Something that yields one instantaneous amplitude reading on demand.
///
/// Reads are blocking with bounded latency and never fail; a converter that
/// can fail should treat that as fatal inside its implementation.
pub trait SampleSource {
    fn read_sample(&mut self) -> u16;
}

/// Fire-and-forget analog level output (a DAC driving an LED, for example).
pub trait LevelSink {
    fn write_level(&mut self, level: u16);
}

impl<T: SampleSource + ?Sized> SampleSource for &mut T {
    fn read_sample(&mut self) -> u16 {
        (**self).read_sample()
    }
}

impl<T: LevelSink + ?Sized> LevelSink for &mut T {
    fn write_level(&mut self, level: u16) {
        (**self).write_level(level)
    }
}
