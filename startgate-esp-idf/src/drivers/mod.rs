pub mod led;
pub mod solenoid;
pub mod switch;
