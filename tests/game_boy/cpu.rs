use dmg_core::{
    ExecutionError,
    game_boy::cpu::{InterruptMasterEnable, Register16},
};

use crate::common::{self, RomBuilder};

#[test]
fn conditional_branches_cost_more_when_taken() {
    // Zero is set at power on
    let mut gb = RomBuilder::new()
        .code(&[
            0x20, 0x00, // jr nz, +0
            0x28, 0x00, // jr z, +0
            0xc2, 0x00, 0x02, // jp nz, $0200
            0xca, 0x0a, 0x01, // jp z, $010a
            0xc4, 0x00, 0x02, // call nz, $0200
            0xcc, 0x20, 0x01, // call z, $0120
        ])
        .at(
            0x120,
            &[
                0xc0, // ret nz
                0xc8, // ret z
            ],
        )
        .build();

    let cycles: Vec<u32> = (0..8).map(|_| common::step(&mut gb)).collect();
    assert_eq!(cycles, [2, 3, 3, 4, 3, 6, 2, 5]);
    assert_eq!(gb.cpu().program_counter, 0x0110);
    assert_eq!(gb.cpu().stack_pointer, 0xfffe);
}

#[test]
fn push_then_pop_round_trips() {
    let mut gb = RomBuilder::new()
        .code(&[
            0x01, 0x34, 0x12, // ld bc, $1234
            0xc5, // push bc
            0xd1, // pop de
        ])
        .build();

    assert_eq!(common::step_n(&mut gb, 3), 3 + 4 + 3);
    assert_eq!(gb.cpu().get_register16(Register16::De), 0x1234);
    assert_eq!(gb.cpu().stack_pointer, 0xfffe);
    assert_eq!(gb.read(0xfffd), 0x12);
    assert_eq!(gb.read(0xfffc), 0x34);
}

#[test]
fn interrupts_enable_after_the_next_instruction() {
    let mut gb = RomBuilder::new()
        .code(&[
            0xfb, // ei
            0x00, // nop
            0x00, // nop
        ])
        .build();
    gb.write(0xffff, 0x04);
    gb.write(0xff0f, 0x04);

    common::step(&mut gb);
    assert_eq!(
        gb.cpu().interrupt_master_enable,
        InterruptMasterEnable::EnableAfterNextInstruction
    );

    common::step(&mut gb);
    assert_eq!(gb.cpu().program_counter, 0x0102);
    assert_eq!(gb.cpu().interrupt_master_enable, InterruptMasterEnable::Enabled);

    assert_eq!(common::step(&mut gb), 5);
    assert_eq!(gb.cpu().program_counter, 0x0050);
    assert_eq!(gb.cpu().interrupt_master_enable, InterruptMasterEnable::Disabled);
    assert_eq!(gb.read(0xff0f) & 0x04, 0);
    assert_eq!(gb.read(0xfffc), 0x02);
    assert_eq!(gb.read(0xfffd), 0x01);
}

#[test]
fn highest_priority_interrupt_is_dispatched_first() {
    let mut gb = RomBuilder::new().code(&[0xfb, 0x00, 0x00]).build();
    gb.write(0xffff, 0x1f);
    gb.write(0xff0f, 0x14);

    common::step_n(&mut gb, 3);
    assert_eq!(gb.cpu().program_counter, 0x0050);
    assert_eq!(gb.read(0xff0f) & 0x1f, 0x10);
}

#[test]
fn halt_wakes_without_master_enable() {
    let mut gb = RomBuilder::new()
        .code(&[
            0x76, // halt
            0x3c, // inc a
        ])
        .build();
    gb.write(0xffff, 0x04);

    assert_eq!(common::step(&mut gb), 1);
    assert!(gb.cpu().halted);
    assert_eq!(common::step(&mut gb), 1);
    assert_eq!(gb.cpu().program_counter, 0x0101);

    gb.write(0xff0f, 0x04);
    common::step(&mut gb);
    assert!(!gb.cpu().halted);
    assert_eq!(gb.cpu().a, 0x02);
    assert_eq!(gb.cpu().program_counter, 0x0102);
}

#[test]
fn halt_with_master_enable_services_the_interrupt() {
    let mut gb = RomBuilder::new()
        .code(&[
            0xfb, // ei
            0x76, // halt
        ])
        .build();
    gb.write(0xffff, 0x01);

    common::step_n(&mut gb, 2);
    assert!(gb.cpu().halted);

    // Runs until the vertical blank interrupt arrives and is dispatched
    while gb.cpu().program_counter != 0x0040 {
        common::step(&mut gb);
    }
    assert!(!gb.cpu().halted);
    assert_eq!(gb.read(0xfffc), 0x02);
}

#[test]
fn interrupt_signals_are_checked() {
    let mut gb = RomBuilder::new().build();

    gb.request_interrupt(2).unwrap();
    assert_eq!(gb.read(0xff0f) & 0x1f, 0x04);
    assert_eq!(gb.request_interrupt(5), Err(ExecutionError::InvalidInterrupt(5)));
}

#[test]
fn invalid_opcode_stops_execution() {
    let mut gb = RomBuilder::new().code(&[0x00, 0xd3]).build();

    common::step(&mut gb);
    assert_eq!(
        gb.step(),
        Err(ExecutionError::InvalidOpcode {
            opcode: 0xd3,
            program_counter: 0x0101
        })
    );
}

#[test]
fn memory_operands_cost_extra_cycles() {
    let mut gb = RomBuilder::new()
        .code(&[
            0x21, 0x00, 0xc0, // ld hl, $c000
            0x36, 0x42, // ld [hl], $42
            0x34, // inc [hl]
            0xcb, 0x46, // bit 0, [hl]
            0xcb, 0xc6, // set 0, [hl]
            0xea, 0x01, 0xc0, // ld [$c001], a
            0x08, 0x02, 0xc0, // ld [$c002], sp
        ])
        .build();

    let cycles: Vec<u32> = (0..7).map(|_| common::step(&mut gb)).collect();
    assert_eq!(cycles, [3, 3, 3, 3, 4, 4, 5]);
    assert_eq!(gb.read(0xc000), 0x43);
    assert_eq!(gb.read(0xc001), 0x01);
    assert_eq!(gb.read(0xc002), 0xfe);
    assert_eq!(gb.read(0xc003), 0xff);
}

#[test]
fn hl_post_increment_and_decrement() {
    let mut gb = RomBuilder::new()
        .code(&[
            0x21, 0x00, 0xc0, // ld hl, $c000
            0x3e, 0x11, // ld a, $11
            0x22, // ld [hl+], a
            0x32, // ld [hl-], a
            0xaf, // xor a, a
            0x2a, // ld a, [hl+]
        ])
        .build();

    common::step_n(&mut gb, 3);
    assert_eq!(gb.cpu().get_register16(Register16::Hl), 0xc001);
    common::step(&mut gb);
    assert_eq!(gb.cpu().get_register16(Register16::Hl), 0xc000);
    assert_eq!((gb.read(0xc000), gb.read(0xc001)), (0x11, 0x11));

    common::step_n(&mut gb, 2);
    assert_eq!(gb.cpu().a, 0x11);
    assert_eq!(gb.cpu().get_register16(Register16::Hl), 0xc001);
}

#[test]
fn reti_returns_with_interrupts_enabled() {
    let mut gb = RomBuilder::new()
        .code(&[0xcd, 0x10, 0x01]) // call $0110
        .at(0x110, &[0xd9]) // reti
        .build();

    assert_eq!(common::step_n(&mut gb, 2), 6 + 4);
    assert_eq!(gb.cpu().program_counter, 0x0103);
    assert_eq!(gb.cpu().stack_pointer, 0xfffe);
    assert_eq!(gb.cpu().interrupt_master_enable, InterruptMasterEnable::Enabled);
}

#[test]
fn di_straight_after_ei_keeps_interrupts_off() {
    let mut gb = RomBuilder::new()
        .code(&[
            0xfb, // ei
            0xf3, // di
            0x00, // nop
        ])
        .build();
    gb.write(0xffff, 0x04);
    gb.write(0xff0f, 0x04);

    common::step_n(&mut gb, 3);
    assert_eq!(gb.cpu().interrupt_master_enable, InterruptMasterEnable::Disabled);
    assert_eq!(gb.cpu().program_counter, 0x0103);
    assert_eq!(gb.read(0xff0f) & 0x04, 0x04);
}
