use dmg_core::{
    GameBoy,
    game_boy::video::{palette::Palette, ppu::FRAME_CLOCKS},
};
use rgb::RGB8;

use crate::common::{self, RomBuilder};

const WHITE: RGB8 = RGB8::new(0xff, 0xff, 0xff);
const BLACK: RGB8 = RGB8::new(0x00, 0x00, 0x00);

#[test]
fn scanline_modes_add_up_to_456_clocks() {
    let mut gb = RomBuilder::new().build();

    let mut clocks_in_mode = [0u32; 4];
    while gb.read(0xff44) == 0 {
        let mode = gb.read(0xff41) & 0b11;
        clocks_in_mode[mode as usize] += common::step(&mut gb) * 4;
    }

    assert_eq!(clocks_in_mode, [204, 0, 80, 172]);
}

#[test]
fn vertical_blank_only_on_lines_144_to_153() {
    let mut gb = RomBuilder::new().build();

    let mut clocks = 0;
    while clocks < FRAME_CLOCKS {
        let line = gb.read(0xff44);
        let mode = gb.read(0xff41) & 0b11;
        assert_eq!(mode == 1, (144..=153).contains(&line), "line {line}");
        clocks += common::step(&mut gb) * 4;
    }
}

#[test]
fn vertical_blank_interrupt_is_requested_each_frame() {
    let mut gb = RomBuilder::new().build();

    gb.run_frame().unwrap();
    assert_eq!(gb.read(0xff0f) & 0x01, 0x01);

    gb.write(0xff0f, 0);
    gb.run_frame().unwrap();
    assert_eq!(gb.read(0xff0f) & 0x01, 0x01);
}

#[test]
fn blank_tiles_render_palette_colour_zero() {
    let mut gb = RomBuilder::new().build();

    let screen = gb.run_frame().unwrap();
    assert!(screen.line(0).iter().all(|pixel| *pixel == WHITE));
    assert!(screen.to_rgb_bytes()[..160 * 3].iter().all(|byte| *byte == 0xff));
}

#[test]
fn background_tiles_are_drawn_through_the_palette() {
    let mut gb = RomBuilder::new().build();
    // Tile 0, first row, all colour 3; the map is all tile 0
    gb.write(0x8000, 0xff);
    gb.write(0x8001, 0xff);

    let screen = gb.run_frame().unwrap();
    assert!(screen.line(0).iter().all(|pixel| *pixel == BLACK));
    assert!(screen.line(1).iter().all(|pixel| *pixel == WHITE));
    assert!(screen.line(8).iter().all(|pixel| *pixel == BLACK));
}

#[test]
fn palette_can_be_chosen() {
    let mut gb = RomBuilder::new().build();
    gb.set_palette(Palette::MONOCHROME_GREEN);

    let screen = gb.run_frame().unwrap();
    assert_eq!(screen.pixel(0, 0), Palette::MONOCHROME_GREEN.color(0));
}

#[test]
fn lcd_off_stops_the_beam() {
    let mut gb = RomBuilder::new().build();
    common::step_n(&mut gb, 1000);
    assert_ne!(gb.read(0xff44), 0);

    gb.write(0xff40, 0x11);
    assert_eq!(gb.read(0xff44), 0);
    assert_eq!(gb.read(0xff41) & 0b11, 0);

    common::step_n(&mut gb, 1000);
    assert_eq!(gb.read(0xff44), 0);
}

#[test]
fn dma_copies_into_sprite_memory() {
    let mut gb = RomBuilder::new().build();
    for offset in 0..0xa0u16 {
        gb.write(0xc100 + offset, offset as u8 ^ 0x5a);
    }

    gb.write(0xff46, 0xc1);

    assert_eq!(gb.read(0xff46), 0xc1);
    for offset in 0..0xa0u16 {
        assert_eq!(gb.read(0xfe00 + offset), offset as u8 ^ 0x5a);
    }
}

#[test]
fn window_covers_the_background_from_wx_and_wy() {
    let mut gb = RomBuilder::new().build();
    // Tile 1 is solid colour 3 and fills the window map at 0x9c00
    for offset in 0..16 {
        gb.write(0x8010 + offset, 0xff);
    }
    for offset in 0..0x400 {
        gb.write(0x9c00 + offset, 1);
    }
    gb.write(0xff4a, 2);
    gb.write(0xff4b, 87);
    gb.write(0xff40, 0xf1);

    let screen = gb.run_frame().unwrap();
    assert_eq!(screen.pixel(79, 5), WHITE);
    assert_eq!(screen.pixel(80, 5), BLACK);
    assert_eq!(screen.pixel(80, 2), BLACK);
    assert_eq!(screen.pixel(100, 1), WHITE);
    assert_eq!(screen.pixel(159, 143), BLACK);
}

#[test]
fn sprites_use_their_palette_and_flip_vertically() {
    let mut gb = RomBuilder::new().build();
    // Tile 2 only has colour 3 on its last row
    gb.write(0x802e, 0xff);
    gb.write(0x802f, 0xff);
    // Top left corner, tile 2, flipped vertically, second sprite palette
    for (offset, byte) in [16, 8, 2, 0x50].into_iter().enumerate() {
        gb.write(0xfe00 + offset as u16, byte);
    }
    gb.write(0xff49, 0b0100_0000);
    gb.write(0xff40, 0x93);

    let screen = gb.run_frame().unwrap();
    let light = Palette::GREYSCALE.color(1);
    assert!(screen.line(0)[..8].iter().all(|pixel| *pixel == light));
    assert_eq!(screen.pixel(8, 0), WHITE);
    assert!(screen.line(7)[..8].iter().all(|pixel| *pixel == WHITE));
}

/// Steps until `done` holds, counting the steps that raised the status
/// interrupt. The request bit is cleared each time it is seen.
fn count_status_interrupts(gb: &mut GameBoy, done: impl Fn(&GameBoy, u32) -> bool) -> u32 {
    let mut count = 0;
    let mut clocks = 0;
    while !done(&*gb, clocks) {
        clocks += common::step(gb) * 4;
        if gb.read(0xff0f) & 0x02 != 0 {
            count += 1;
            gb.write(0xff0f, 0);
        }
    }
    count
}

#[test]
fn oam_scan_status_interrupt_fires_once_per_line() {
    let mut gb = RomBuilder::new().build();
    gb.write(0xff41, 0x20);
    gb.write(0xff0f, 0);

    let count = count_status_interrupts(&mut gb, |gb, _| gb.read(0xff44) >= 3);
    assert_eq!(count, 3);
}

#[test]
fn vertical_blank_status_interrupt_fires_once_per_frame() {
    let mut gb = RomBuilder::new().build();
    gb.write(0xff41, 0x10);
    gb.write(0xff0f, 0);

    let count = count_status_interrupts(&mut gb, |_, clocks| clocks >= FRAME_CLOCKS);
    assert_eq!(count, 1);
}
