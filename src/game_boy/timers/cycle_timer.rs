/// Counts clock cycles towards a fixed period, carrying any overshoot into
/// the next lap.
#[derive(Clone, Debug)]
pub struct CycleTimer {
    length: u32,
    counted: u32,
}

impl CycleTimer {
    pub fn new(length: u32) -> Self {
        Self { length, counted: 0 }
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn tick(&mut self, clocks: u32) {
        self.counted += clocks;
    }

    pub fn finished(&self) -> bool {
        self.counted >= self.length
    }

    pub fn lap(&mut self) {
        self.counted = self.counted.saturating_sub(self.length);
    }
}
