use dmg_core::{
    InputError,
    game_boy::joypad::{Button, DirectionalPad},
};

use crate::common::{self, RomBuilder};

#[test]
fn pressed_keys_show_in_the_selected_group() {
    let mut gb = RomBuilder::new().build();
    gb.write(0xff00, 0x20);

    gb.key_pressed(0).unwrap();
    assert_eq!(gb.read(0xff00) & 0x0f, 0x0e);
    assert_eq!(gb.read(0xff0f) & 0x10, 0x10);

    gb.key_released(0).unwrap();
    assert_eq!(gb.read(0xff00) & 0x0f, 0x0f);
}

#[test]
fn unselected_groups_do_not_interrupt() {
    let mut gb = RomBuilder::new().build();
    gb.write(0xff00, 0x10);

    gb.press_button(Button::DirectionalPad(DirectionalPad::Up));
    assert_eq!(gb.read(0xff00) & 0x0f, 0x0f);
    assert_eq!(gb.read(0xff0f) & 0x10, 0);

    gb.press_button(Button::Start);
    assert_eq!(gb.read(0xff00) & 0x0f, 0x07);
    assert_eq!(gb.read(0xff0f) & 0x10, 0x10);
}

#[test]
fn unknown_keys_are_rejected() {
    let mut gb = RomBuilder::new().build();
    assert_eq!(gb.key_pressed(8), Err(InputError::InvalidKey(8)));
}

#[test]
fn serial_output_is_captured() {
    let mut gb = RomBuilder::new()
        .code(&[
            0x3e, 0x4f, // ld a, 'O'
            0xe0, 0x01, // ldh [$ff01], a
            0x3e, 0x81, // ld a, $81
            0xe0, 0x02, // ldh [$ff02], a
        ])
        .build();

    common::step_n(&mut gb, 4);
    assert_eq!(gb.drain_serial_output(), b"O");
    assert!(gb.drain_serial_output().is_empty());
    assert_eq!(gb.read(0xff0f) & 0x08, 0);

    // Eight bits at 8192Hz take 4096 clocks
    common::step_n(&mut gb, 1024);
    assert_eq!(gb.read(0xff0f) & 0x08, 0x08);
    assert_eq!(gb.read(0xff02) & 0x80, 0);
    assert_eq!(gb.read(0xff01), 0xff);
}
