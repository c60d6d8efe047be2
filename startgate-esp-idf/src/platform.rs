use anyhow::anyhow;
use esp_idf_hal::gpio::{IOPin, OutputPin};
use esp_idf_hal::peripherals::Peripherals;

use crate::drivers::led::EspLed;
use crate::drivers::solenoid::EspSolenoid;
use crate::drivers::switch::EspInput;
use startgate::config::GateTiming;
use startgate::hal::indicator::Indicator;
use startgate::hal::solenoid::Solenoid;
use startgate::hal::switch::{ActiveLowSwitch, Switch};
use startgate::hal::Platform;
use startgate::svc::{MonotonicClock, StdClock};

pub enum BoardType {
    M5StampC3,
    RustDevKit,
}

pub struct Config {
    pub timing: GateTiming,
    pub board_type: BoardType,
}

pub struct PlatformImpl {
    disable_switch: ActiveLowSwitch<EspInput>,
    open_switch: ActiveLowSwitch<EspInput>,
    solenoid: EspSolenoid,
    disable_indicator: EspLed,
    heartbeat: EspLed,
    clock: StdClock,
}

impl PlatformImpl {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let peripherals = Peripherals::take().ok_or_else(|| anyhow!("Peripherals already taken"))?;
        let pins = peripherals.pins;

        // Solenoid first, so the release line is driven low as early as possible.
        let (solenoid_pin, disable_pin, open_pin, indicator_pin, heartbeat_pin) =
            match config.board_type {
                BoardType::M5StampC3 => (
                    pins.gpio6.downgrade_output(),
                    pins.gpio4.downgrade(),
                    pins.gpio5.downgrade(),
                    pins.gpio7.downgrade_output(),
                    pins.gpio10.downgrade_output(),
                ),
                BoardType::RustDevKit => (
                    pins.gpio6.downgrade_output(),
                    pins.gpio4.downgrade(),
                    pins.gpio9.downgrade(),
                    pins.gpio7.downgrade_output(),
                    pins.gpio5.downgrade_output(),
                ),
            };

        let solenoid = EspSolenoid::new(solenoid_pin)?;
        let disable_switch = ActiveLowSwitch::new(EspInput::new(disable_pin)?);
        let open_switch = ActiveLowSwitch::new(EspInput::new(open_pin)?);
        let disable_indicator = EspLed::new(indicator_pin)?;
        let heartbeat = EspLed::new(heartbeat_pin)?;

        Ok(Self {
            disable_switch,
            open_switch,
            solenoid,
            disable_indicator,
            heartbeat,
            clock: StdClock::default(),
        })
    }
}

impl Platform for PlatformImpl {
    fn disable_switch(&self) -> &(dyn Switch + '_) {
        &self.disable_switch
    }

    fn open_switch(&self) -> &(dyn Switch + '_) {
        &self.open_switch
    }

    fn solenoid(&self) -> &(dyn Solenoid + '_) {
        &self.solenoid
    }

    fn disable_indicator(&self) -> &(dyn Indicator + '_) {
        &self.disable_indicator
    }

    fn clock(&self) -> &(dyn MonotonicClock + '_) {
        &self.clock
    }

    fn heartbeat(&self) -> Option<&(dyn Indicator + '_)> {
        Some(&self.heartbeat)
    }

    fn idle(&self) {
        std::thread::yield_now();
    }
}
