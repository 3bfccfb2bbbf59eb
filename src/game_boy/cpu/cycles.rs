use std::ops::Add;

/// Machine cycles. Peripherals are stepped in clocks, four to a cycle.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct Cycles(pub u32);

impl Cycles {
    pub const CLOCKS_PER_CYCLE: u32 = 4;

    pub fn clocks(self) -> u32 {
        self.0 * Self::CLOCKS_PER_CYCLE
    }
}

impl Add for Cycles {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cycles(self.0 + other.0)
    }
}
