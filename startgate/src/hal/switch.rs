/// Electrical level read from an input pin.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Level {
    Low,
    High,
}

/// Raw digital input, no polarity applied.
pub trait DigitalInput {
    fn level(&self) -> Level;
}

pub trait Switch {
    fn is_pressed(&self) -> bool {
        self.state() == SwitchState::Pressed
    }
    fn state(&self) -> SwitchState;
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum SwitchState {
    #[default]
    Released,
    Pressed,
}

/// Switch wired to ground with a pull-up: idle reads high, pressed reads low.
pub struct ActiveLowSwitch<I> {
    input: I,
}

impl<I: DigitalInput> ActiveLowSwitch<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &I {
        &self.input
    }
}

impl<I: DigitalInput> Switch for ActiveLowSwitch<I> {
    fn state(&self) -> SwitchState {
        match self.input.level() {
            Level::Low => SwitchState::Pressed,
            Level::High => SwitchState::Released,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct FakeInput(Cell<Level>);

    impl DigitalInput for FakeInput {
        fn level(&self) -> Level {
            self.0.get()
        }
    }

    #[test]
    fn test_idle_high_is_released() {
        let switch = ActiveLowSwitch::new(FakeInput(Cell::new(Level::High)));
        assert_eq!(switch.state(), SwitchState::Released);
        assert!(!switch.is_pressed());
    }

    #[test]
    fn test_pulled_low_is_pressed() {
        let switch = ActiveLowSwitch::new(FakeInput(Cell::new(Level::High)));
        switch.input().0.set(Level::Low);
        assert_eq!(switch.state(), SwitchState::Pressed);
        assert!(switch.is_pressed());
    }
}
