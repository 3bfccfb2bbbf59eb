use crate::error::InputError;

#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum Button {
    Start,
    Select,
    A,
    B,
    DirectionalPad(DirectionalPad),
}

#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum DirectionalPad {
    Up,
    Down,
    Left,
    Right,
}

impl Button {
    /// Host key indices: 0-3 are right, left, up, down; 4-7 are a, b,
    /// select, start.
    pub fn from_key_index(index: u8) -> Result<Self, InputError> {
        Ok(match index {
            0 => Button::DirectionalPad(DirectionalPad::Right),
            1 => Button::DirectionalPad(DirectionalPad::Left),
            2 => Button::DirectionalPad(DirectionalPad::Up),
            3 => Button::DirectionalPad(DirectionalPad::Down),
            4 => Button::A,
            5 => Button::B,
            6 => Button::Select,
            7 => Button::Start,
            _ => return Err(InputError::InvalidKey(index)),
        })
    }

    fn line(&self) -> u8 {
        match self {
            Button::A | Button::DirectionalPad(DirectionalPad::Right) => Joypad::A_RIGHT,
            Button::B | Button::DirectionalPad(DirectionalPad::Left) => Joypad::B_LEFT,
            Button::Select | Button::DirectionalPad(DirectionalPad::Up) => Joypad::SELECT_UP,
            Button::Start | Button::DirectionalPad(DirectionalPad::Down) => Joypad::START_DOWN,
        }
    }

    fn is_directional(&self) -> bool {
        matches!(self, Button::DirectionalPad(_))
    }
}

#[derive(Clone, Debug)]
pub struct Joypad {
    read_buttons: bool,
    read_dpad: bool,

    // Active low, like the register: a clear bit is a held button
    buttons: u8,
    dpad: u8,
}

impl Joypad {
    const UNUSED: u8 = 0b1100_0000;
    const READ_BUTTONS: u8 = 0b0010_0000;
    const READ_DPAD: u8 = 0b0001_0000;
    const START_DOWN: u8 = 0b0000_1000;
    const SELECT_UP: u8 = 0b0000_0100;
    const B_LEFT: u8 = 0b0000_0010;
    const A_RIGHT: u8 = 0b0000_0001;
    const NONE_PRESSED: u8 = 0xf;

    pub fn new() -> Self {
        Self {
            read_buttons: false,
            read_dpad: false,
            buttons: Self::NONE_PRESSED,
            dpad: Self::NONE_PRESSED,
        }
    }

    pub fn read_register(&self) -> u8 {
        let mut value = Self::UNUSED | Self::NONE_PRESSED;

        if self.read_buttons {
            value &= self.buttons | !Self::NONE_PRESSED;
        } else {
            value |= Self::READ_BUTTONS;
        }

        if self.read_dpad {
            value &= self.dpad | !Self::NONE_PRESSED;
        } else {
            value |= Self::READ_DPAD;
        }

        value
    }

    pub fn write_register(&mut self, value: u8) {
        self.read_buttons = value & Self::READ_BUTTONS == 0;
        self.read_dpad = value & Self::READ_DPAD == 0;
    }

    /// Returns true when the press should raise the joypad interrupt: the
    /// button was previously released and its group is currently selected.
    pub fn press_button(&mut self, button: Button) -> bool {
        let line = button.line();
        let (state, selected) = if button.is_directional() {
            (&mut self.dpad, self.read_dpad)
        } else {
            (&mut self.buttons, self.read_buttons)
        };

        let was_released = *state & line != 0;
        *state &= !line;

        was_released && selected
    }

    pub fn release_button(&mut self, button: Button) {
        let line = button.line();
        if button.is_directional() {
            self.dpad |= line;
        } else {
            self.buttons |= line;
        }
    }
}

impl Default for Joypad {
    fn default() -> Self {
        Self::new()
    }
}
