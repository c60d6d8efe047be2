//! Gate state machine.
//!
//! The solenoid may only be energized while in [`GateState::Open`]. Every other
//! transition writes it off explicitly, even where the previous state already
//! left it off, and the loop forces it off again after each dwell.

use crate::config::GateTiming;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, serde::Serialize)]
pub enum GateState {
    #[default]
    WaitForEnable,
    WaitForOpen,
    Open,
    Close,
}

impl GateState {
    /// Decodes a raw state value. Anything unknown is `WaitForEnable`.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => GateState::WaitForEnable,
            1 => GateState::WaitForOpen,
            2 => GateState::Open,
            3 => GateState::Close,
            _ => GateState::WaitForEnable,
        }
    }
}

/// Switch states for one iteration, already normalized to "asserted".
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Inputs {
    pub disable_asserted: bool,
    pub open_asserted: bool,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, serde::Serialize)]
pub struct Outputs {
    pub actuator_energized: bool,
    /// `None` leaves the indicator as it is.
    pub disable_indicator: Option<bool>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, serde::Serialize)]
pub struct Step {
    pub state: GateState,
    pub outputs: Outputs,
    pub dwell_ms: u32,
}

/// Computes the transition out of `state`.
pub fn transition(state: GateState, inputs: Inputs, timing: &GateTiming) -> Step {
    let Inputs {
        disable_asserted,
        open_asserted,
    } = inputs;

    let off = |indicator: bool| Outputs {
        actuator_energized: false,
        disable_indicator: Some(indicator),
    };

    match state {
        GateState::WaitForEnable => {
            // A held open button must be released before arming.
            let state = if !disable_asserted && !open_asserted {
                GateState::WaitForOpen
            } else {
                GateState::WaitForEnable
            };
            Step {
                state,
                outputs: off(true),
                dwell_ms: timing.debounce_ms,
            }
        }
        GateState::WaitForOpen => {
            // Disable wins when both are asserted.
            let state = if disable_asserted {
                GateState::WaitForEnable
            } else if open_asserted {
                GateState::Open
            } else {
                GateState::WaitForOpen
            };
            Step {
                state,
                outputs: off(false),
                dwell_ms: timing.debounce_ms,
            }
        }
        GateState::Open => Step {
            state: GateState::Close,
            outputs: Outputs {
                actuator_energized: true,
                disable_indicator: Some(true),
            },
            dwell_ms: timing.pulse_on_ms,
        },
        GateState::Close => Step {
            state: GateState::WaitForEnable,
            outputs: Outputs {
                actuator_energized: false,
                disable_indicator: None,
            },
            dwell_ms: timing.cooldown_ms,
        },
    }
}

pub struct GateController {
    state: GateState,
    timing: GateTiming,
}

impl GateController {
    pub fn new(timing: GateTiming) -> Self {
        Self {
            state: GateState::default(),
            timing,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn timing(&self) -> &GateTiming {
        &self.timing
    }

    /// Whether the current state reads the switches at all.
    pub fn needs_inputs(&self) -> bool {
        matches!(
            self.state,
            GateState::WaitForEnable | GateState::WaitForOpen
        )
    }

    pub fn step(&mut self, inputs: Inputs) -> Step {
        let step = transition(self.state, inputs, &self.timing);

        if step.state != self.state {
            log::info!("{:?} -> {:?}", self.state, step.state);
        }

        self.state = step.state;
        step
    }
}
