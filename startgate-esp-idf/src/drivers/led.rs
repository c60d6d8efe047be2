use std::cell::RefCell;

use esp_idf_hal::gpio::{AnyOutputPin, Output, PinDriver};
use startgate::hal::indicator::Indicator;

pub struct EspLed {
    output: RefCell<PinDriver<'static, AnyOutputPin, Output>>,
}

impl EspLed {
    pub fn new(pin: AnyOutputPin) -> anyhow::Result<EspLed> {
        let mut output = PinDriver::output(pin)?;
        output.set_low()?;
        Ok(Self {
            output: RefCell::new(output),
        })
    }
}

impl Indicator for EspLed {
    fn set_lit(&self, lit: bool) {
        let mut output = self.output.borrow_mut();

        let result = if lit {
            output.set_high()
        } else {
            output.set_low()
        };

        if let Err(e) = result {
            log::error!("cannot drive led: {e}");
        }
    }

    fn is_lit(&self) -> bool {
        self.output.borrow().is_set_high()
    }
}
