use esp_idf_hal::gpio::{AnyIOPin, Input, PinDriver, Pull};
use startgate::hal::switch::{DigitalInput, Level};

pub struct EspInput {
    input: PinDriver<'static, AnyIOPin, Input>,
}

impl EspInput {
    /// Input with the internal pull-up enabled, so an open switch reads high.
    pub fn new(pin: AnyIOPin) -> anyhow::Result<EspInput> {
        let mut input = PinDriver::input(pin)?;
        input.set_pull(Pull::Up)?;
        Ok(Self { input })
    }
}

impl DigitalInput for EspInput {
    fn level(&self) -> Level {
        if self.input.is_low() {
            Level::Low
        } else {
            Level::High
        }
    }
}
