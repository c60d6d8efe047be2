use crate::hal::indicator::Indicator;
use crate::hal::solenoid::Solenoid;
use crate::hal::switch::Switch;
use crate::svc::MonotonicClock;

pub mod indicator;
pub mod solenoid;
pub mod switch;

pub trait Platform {
    /// Administrator switch, pressed means the gate is disabled.
    fn disable_switch(&self) -> &(dyn Switch + '_);
    fn open_switch(&self) -> &(dyn Switch + '_);
    fn solenoid(&self) -> &(dyn Solenoid + '_);
    fn disable_indicator(&self) -> &(dyn Indicator + '_);
    fn clock(&self) -> &(dyn MonotonicClock + '_);

    /// Debug output toggled once per loop iteration, if the board has one.
    fn heartbeat(&self) -> Option<&(dyn Indicator + '_)> {
        None
    }

    /// Called on every poll while dwelling, lets the platform yield.
    fn idle(&self) {}
}
