use crate::game_boy::interrupts::Interrupt;
use cycle_timer::CycleTimer;
use registers::Control;
pub use registers::Register;

pub mod cycle_timer;
pub mod registers;

#[derive(Clone, Debug)]
pub struct Timers {
    counter: u8,
    modulo: u8,
    control: Control,

    // DIV is the upper byte of this, so it ticks every 256 clocks
    system_timer: u16,
    timer: Option<CycleTimer>,
}

impl Timers {
    pub fn new() -> Self {
        Self {
            counter: 0,
            modulo: 0,
            control: Control::default(),

            system_timer: 0,
            timer: None,
        }
    }

    pub fn step(&mut self, clocks: u32) -> Option<Interrupt> {
        self.system_timer = self.system_timer.wrapping_add(clocks as u16);

        let mut interrupt = None;
        if let Some(timer) = &mut self.timer {
            timer.tick(clocks);
            while timer.finished() {
                timer.lap();

                if self.counter == 0xff {
                    self.counter = self.modulo;
                    interrupt = Some(Interrupt::Timer);
                } else {
                    self.counter += 1;
                }
            }
        }

        interrupt
    }

    pub fn read_register(&self, register: Register) -> u8 {
        match register {
            Register::Divider => self.divider(),
            Register::Counter => self.counter,
            Register::Modulo => self.modulo,
            Register::Control => self.control.bits() | 0xf8,
        }
    }

    pub fn write_register(&mut self, register: Register, value: u8) {
        match register {
            // Any write resets the divider, whatever the value
            Register::Divider => self.system_timer = 0,
            Register::Counter => self.counter = value,
            Register::Modulo => self.modulo = value,
            Register::Control => {
                self.control = Control::from_bits(value);
                if !self.control.enabled() {
                    self.timer = None;
                } else if self
                    .timer
                    .as_ref()
                    .is_none_or(|timer| timer.length() != self.control.interval())
                {
                    self.timer = Some(CycleTimer::new(self.control.interval()));
                }
            }
        }
    }

    pub fn divider(&self) -> u8 {
        (self.system_timer >> 8) as u8
    }
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}
