pub trait Indicator {
    fn set_lit(&self, lit: bool);

    fn is_lit(&self) -> bool;

    fn toggle(&self) {
        self.set_lit(!self.is_lit());
    }
}
