/// Actuator enable line driving the gate release solenoid.
pub trait Solenoid {
    fn set_energized(&self, energized: bool);

    fn de_energize(&self) {
        self.set_energized(false);
    }
}
