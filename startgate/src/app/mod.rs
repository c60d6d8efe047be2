use crate::config::GateTiming;
use crate::hal::Platform;
use crate::svc::{Dwell, DwellReport};

pub use controller::{transition, GateController, GateState, Inputs, Outputs, Step};

pub mod controller;

const STARTUP_FLASHES: u32 = 3;
const STARTUP_FLASH_MS: u32 = 100;

pub struct App<'a> {
    platform: &'a dyn Platform,
    controller: GateController,
    last_dwell: DwellReport,
}

impl<'a> App<'a> {
    pub fn new(platform: &'a dyn Platform, timing: GateTiming) -> Self {
        platform.solenoid().de_energize();

        Self {
            platform,
            controller: GateController::new(timing),
            last_dwell: DwellReport::default(),
        }
    }

    pub fn state(&self) -> GateState {
        self.controller.state()
    }

    pub fn last_dwell(&self) -> &DwellReport {
        &self.last_dwell
    }

    /// Blinks the disable indicator to show the board is alive. Solenoid stays off.
    pub fn startup(&mut self) {
        let platform = self.platform;
        let indicator = platform.disable_indicator();

        for _ in 0..STARTUP_FLASHES {
            indicator.set_lit(true);
            self.dwell(STARTUP_FLASH_MS);
            indicator.set_lit(false);
            self.dwell(STARTUP_FLASH_MS);
        }
    }

    /// Runs one loop iteration, returning once the step's dwell is over.
    pub fn update(&mut self) -> Step {
        let start = self.platform.clock().now();

        if let Some(heartbeat) = self.platform.heartbeat() {
            heartbeat.toggle();
        }

        let inputs = if self.controller.needs_inputs() {
            self.sample_inputs()
        } else {
            Inputs::default()
        };

        let step = self.controller.step(inputs);

        self.apply(&step.outputs);
        self.dwell(step.dwell_ms);

        log::trace!(
            "app update took {}ms",
            self.platform.clock().now().millis_since(start)
        );

        step
    }

    fn sample_inputs(&self) -> Inputs {
        Inputs {
            disable_asserted: self.platform.disable_switch().is_pressed(),
            open_asserted: self.platform.open_switch().is_pressed(),
        }
    }

    fn apply(&self, outputs: &Outputs) {
        self.platform
            .solenoid()
            .set_energized(outputs.actuator_energized);

        if let Some(lit) = outputs.disable_indicator {
            self.platform.disable_indicator().set_lit(lit);
        }
    }

    fn dwell(&mut self, duration_ms: u32) {
        let platform = self.platform;
        let dwell = Dwell::new(platform.clock(), platform.solenoid());
        self.last_dwell = dwell.wait(duration_ms, &mut || platform.idle());
    }
}
