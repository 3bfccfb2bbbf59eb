use dmg_core::{
    CartridgeError, GameBoy,
    game_boy::cartridge::{Cartridge, RAM_SIZE},
};

use crate::common::RomBuilder;

fn banked_rom(cartridge_type: u8) -> RomBuilder {
    let mut builder = RomBuilder::new().banks(8).cartridge_type(cartridge_type);
    for bank in 0..8 {
        builder = builder.at(bank * 0x4000 + 0x200, &[bank as u8]);
    }
    builder
}

#[test]
fn mbc1_selects_bank_one_for_zero() {
    let mut gb = banked_rom(0x01).build();
    assert_eq!(gb.read(0x4200), 1);

    gb.write(0x2000, 5);
    assert_eq!(gb.read(0x4200), 5);

    gb.write(0x2000, 0);
    assert_eq!(gb.read(0x4200), 1);
    assert_eq!(gb.read(0x0200), 0);
}

#[test]
fn mbc1_switches_banks_from_running_code() {
    let mut gb = banked_rom(0x01)
        .code(&[
            0x3e, 0x03, // ld a, $03
            0xea, 0x00, 0x20, // ld [$2000], a
            0xfa, 0x00, 0x42, // ld a, [$4200]
        ])
        .build();

    for _ in 0..3 {
        gb.step().unwrap();
    }
    assert_eq!(gb.cpu().a, 3);
}

#[test]
fn external_ram_is_gated_and_exported() {
    let mut gb = banked_rom(0x03).build();

    gb.write(0xa010, 0x42);
    assert_eq!(gb.read(0xa010), 0xff);

    gb.write(0x0000, 0x0a);
    gb.write(0xa010, 0x42);
    assert_eq!(gb.read(0xa010), 0x42);
    assert_eq!(gb.cartridge().ram()[0x10], 0x42);

    gb.write(0x0000, 0x00);
    assert_eq!(gb.read(0xa010), 0xff);
}

#[test]
fn saved_ram_is_restored() {
    let mut save = vec![0; RAM_SIZE];
    save[0x20] = 0x99;

    let mut rom = vec![0; 0x8000];
    rom[0x147] = 0x03;
    let cartridge = Cartridge::new(rom, Some(save)).unwrap();

    let mut gb = GameBoy::new(cartridge);
    gb.write(0x0000, 0x0a);
    assert_eq!(gb.read(0xa020), 0x99);
}

#[test]
fn mbc2_ram_holds_nibbles() {
    let mut gb = banked_rom(0x06).build();
    gb.write(0x0000, 0x0a);
    gb.write(0xa005, 0xab);
    assert_eq!(gb.read(0xa005), 0xfb);
    assert_eq!(gb.read(0xa205), 0xfb);
}

#[test]
fn unsupported_controllers_are_rejected() {
    let mut rom = vec![0; 0x8000];
    rom[0x147] = 0x13;
    assert_eq!(
        Cartridge::new(rom, None).unwrap_err(),
        CartridgeError::UnsupportedMbc(0x13)
    );
}
