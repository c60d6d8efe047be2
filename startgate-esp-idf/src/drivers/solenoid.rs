use std::cell::RefCell;

use esp_idf_hal::gpio::{AnyOutputPin, Output, PinDriver};
use startgate::hal::solenoid::Solenoid;

pub struct EspSolenoid {
    output: RefCell<PinDriver<'static, AnyOutputPin, Output>>,
}

impl EspSolenoid {
    pub fn new(pin: AnyOutputPin) -> anyhow::Result<EspSolenoid> {
        let mut output = PinDriver::output(pin)?;
        output.set_low()?;
        Ok(Self {
            output: RefCell::new(output),
        })
    }
}

impl Solenoid for EspSolenoid {
    fn set_energized(&self, energized: bool) {
        let mut output = self.output.borrow_mut();

        let result = if energized {
            output.set_high()
        } else {
            output.set_low()
        };

        if let Err(e) = result {
            log::error!("cannot drive solenoid: {e}");
        }
    }
}
