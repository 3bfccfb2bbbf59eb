use bitflags::bitflags;
use rgb::RGB8;

use super::interrupts::InterruptFlags;
use control::Control;
use memory::VideoMemory;
use palette::{Palette, PaletteMap, Palettes};
use ppu::{Mode, ScanlineTimer};
use screen::{PIXELS_PER_LINE, Screen};
use sprites::{Priority, SpritePalette};
use tiles::TileAddressMode;

pub mod control;
pub mod memory;
pub mod palette;
pub mod ppu;
pub mod screen;
pub mod sprites;
pub mod tile_maps;
pub mod tiles;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Register {
    Control,
    Status,
    BackgroundViewportY,
    BackgroundViewportX,
    CurrentScanline,
    InterruptOnScanline,
    BackgroundPalette,
    Sprite0Palette,
    Sprite1Palette,
    WindowY,
    WindowX,
}

bitflags! {
    /// The writable STAT bits: which events raise the status interrupt.
    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    pub struct StatusInterrupts: u8 {
        const CURRENT_LINE_COMPARE = 0b01000000;
        const PREPARING_SCANLINE   = 0b00100000;
        const BETWEEN_FRAMES       = 0b00010000;
        const FINISHING_SCANLINE   = 0b00001000;
    }
}

const STATUS_UNUSED: u8 = 0b10000000;
const STATUS_LINE_COMPARE_MATCH: u8 = 0b00000100;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

#[derive(Clone, Debug)]
pub struct Video {
    control: Control,
    status_interrupts: StatusInterrupts,
    current_line_compare: u8,
    line_compare_match: bool,
    background_viewport: Position,
    /// WY and WX as written; WX is offset by 7.
    window: Position,
    palettes: Palettes,
    palette: Palette,
    memory: VideoMemory,
    timer: ScanlineTimer,
    screen: Screen,
}

impl Video {
    pub fn new(palette: Palette) -> Self {
        Self {
            control: Control::default(),
            status_interrupts: StatusInterrupts::empty(),
            current_line_compare: 0,
            line_compare_match: true,
            background_viewport: Position::default(),
            window: Position::default(),
            palettes: Palettes::default(),
            palette,
            memory: VideoMemory::new(),
            timer: ScanlineTimer::new(),
            screen: Screen::new(palette.color(0)),
        }
    }

    pub fn read_register(&self, register: Register) -> u8 {
        match register {
            Register::Control => self.control.bits(),
            Register::Status => {
                let line_compare = if self.line_compare_match {
                    STATUS_LINE_COMPARE_MATCH
                } else {
                    0
                };
                STATUS_UNUSED | self.status_interrupts.bits() | line_compare | self.mode() as u8
            }
            Register::BackgroundViewportY => self.background_viewport.y,
            Register::BackgroundViewportX => self.background_viewport.x,
            Register::CurrentScanline => self.current_line(),
            Register::InterruptOnScanline => self.current_line_compare,
            Register::BackgroundPalette => self.palettes.background.0,
            Register::Sprite0Palette => self.palettes.sprite0.0,
            Register::Sprite1Palette => self.palettes.sprite1.0,
            Register::WindowY => self.window.y,
            Register::WindowX => self.window.x,
        }
    }

    /// Returns the interrupts the write raised, which can only be a status
    /// interrupt from a line compare match.
    pub fn write_register(&mut self, register: Register, value: u8) -> InterruptFlags {
        let mut requested = InterruptFlags::empty();
        match register {
            Register::Control => {
                self.write_control(Control::from_bits_retain(value), &mut requested)
            }
            Register::Status => {
                self.status_interrupts = StatusInterrupts::from_bits_truncate(value)
            }
            Register::BackgroundViewportY => self.background_viewport.y = value,
            Register::BackgroundViewportX => self.background_viewport.x = value,
            Register::CurrentScanline => {
                self.timer = ScanlineTimer::new();
                self.compare_line(&mut requested);
            }
            Register::InterruptOnScanline => {
                self.current_line_compare = value;
                self.compare_line(&mut requested);
            }
            Register::BackgroundPalette => self.palettes.background = PaletteMap(value),
            Register::Sprite0Palette => self.palettes.sprite0 = PaletteMap(value),
            Register::Sprite1Palette => self.palettes.sprite1 = PaletteMap(value),
            Register::WindowY => self.window.y = value,
            Register::WindowX => self.window.x = value,
        }
        requested
    }

    fn write_control(&mut self, control: Control, requested: &mut InterruptFlags) {
        let was_enabled = self.control.video_enabled();
        self.control = control;

        if was_enabled != control.video_enabled() {
            log::debug!(
                "LCD {}",
                if control.video_enabled() { "on" } else { "off" }
            );
            self.timer = ScanlineTimer::new();
            if control.video_enabled() {
                self.compare_line(requested);
            }
        }
    }

    pub fn read_memory(&self, address: memory::MappedAddress) -> u8 {
        self.memory.read(address)
    }

    pub fn write_memory(&mut self, address: memory::MappedAddress, value: u8) {
        self.memory.write(address, value);
    }

    pub fn load_oam(&mut self, data: &[u8; memory::OAM_SIZE]) {
        self.memory.load_oam(data);
    }

    pub fn mode(&self) -> Mode {
        if self.control.video_enabled() {
            self.timer.mode()
        } else {
            Mode::BetweenLines
        }
    }

    pub fn current_line(&self) -> u8 {
        if self.control.video_enabled() {
            self.timer.line()
        } else {
            0
        }
    }

    /// Clocks left on the current line; a full line while the LCD is off.
    pub fn line_clocks_remaining(&self) -> u32 {
        self.timer.remaining()
    }

    pub fn control(&self) -> Control {
        self.control
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Advances the beam by `clocks`, rendering each visible line as pixel
    /// transfer ends. Returns the interrupts raised on the way.
    pub fn step(&mut self, clocks: u32) -> InterruptFlags {
        let mut requested = InterruptFlags::empty();
        if !self.control.video_enabled() {
            return requested;
        }

        let mut clocks = clocks;
        while clocks > 0 {
            let (consumed, transition) = self.timer.advance(clocks);
            clocks -= consumed;

            if transition.line_changed {
                self.compare_line(&mut requested);
            }
            if transition.mode_changed {
                self.enter_mode(self.timer.mode(), &mut requested);
            }
        }

        requested
    }

    fn enter_mode(&mut self, mode: Mode, requested: &mut InterruptFlags) {
        let source = match mode {
            Mode::PreparingScanline => StatusInterrupts::PREPARING_SCANLINE,
            Mode::DrawingPixels => return,
            Mode::BetweenLines => {
                self.render_line(self.timer.line());
                StatusInterrupts::FINISHING_SCANLINE
            }
            Mode::BetweenFrames => {
                requested.insert(InterruptFlags::VIDEO_BETWEEN_FRAMES);
                StatusInterrupts::BETWEEN_FRAMES
            }
        };

        if self.status_interrupts.contains(source) {
            requested.insert(InterruptFlags::VIDEO_STATUS);
        }
    }

    fn compare_line(&mut self, requested: &mut InterruptFlags) {
        let matches = self.current_line() == self.current_line_compare;
        if matches
            && !self.line_compare_match
            && self
                .status_interrupts
                .contains(StatusInterrupts::CURRENT_LINE_COMPARE)
        {
            requested.insert(InterruptFlags::VIDEO_STATUS);
        }
        self.line_compare_match = matches;
    }

    fn render_line(&mut self, line: u8) {
        let mut background_indices = [0u8; PIXELS_PER_LINE as usize];

        for x in 0..PIXELS_PER_LINE {
            let index = if self.control.background_and_window_enabled() {
                self.background_color_index(x, line)
            } else {
                0
            };
            background_indices[x as usize] = index;
            self.screen.set_pixel(
                x,
                line,
                self.palettes.background.get(index, &self.palette),
            );
        }

        if self.control.sprites_enabled() {
            self.render_sprites(line, &background_indices);
        }
    }

    fn window_visible(&self, x: u8, line: u8) -> bool {
        self.control.window_enabled()
            && line >= self.window.y
            && x as u16 + 7 >= self.window.x as u16
    }

    fn background_color_index(&self, x: u8, line: u8) -> u8 {
        let (map, map_x, map_y) = if self.window_visible(x, line) {
            (
                self.control.window_tile_map(),
                (x as u16 + 7 - self.window.x as u16) as u8,
                line - self.window.y,
            )
        } else {
            (
                self.control.background_tile_map(),
                x.wrapping_add(self.background_viewport.x),
                line.wrapping_add(self.background_viewport.y),
            )
        };

        let tile = self.memory.tile_index(map, map_x, map_y);
        self.memory
            .tile_row(self.control.tile_address_mode(), tile, map_y % 8)
            .color_index(map_x % 8)
    }

    fn render_sprites(&mut self, line: u8, background_indices: &[u8]) {
        let size = self.control.sprite_size();
        let sprites = sprites::select_for_line(self.memory.sprites(), line, size);
        let row_in_sprite = |y: u8| line + 16 - y;

        for x in 0..PIXELS_PER_LINE {
            let pixel = sprites.iter().find_map(|sprite| {
                let column = sprite.column(x)?;
                let column = if sprite.attributes.flip_x() {
                    7 - column
                } else {
                    column
                };
                let (tile, row) = sprite.tile_row(row_in_sprite(sprite.position.y), size);
                let index = self
                    .memory
                    .tile_row(TileAddressMode::Unsigned, tile, row)
                    .color_index(column);
                (index != 0).then_some((sprite.attributes, index))
            });

            let Some((attributes, index)) = pixel else {
                continue;
            };
            if attributes.priority() == Priority::BackgroundAndWindow
                && background_indices[x as usize] != 0
            {
                continue;
            }

            let map = match attributes.palette() {
                SpritePalette::Palette0 => self.palettes.sprite0,
                SpritePalette::Palette1 => self.palettes.sprite1,
            };
            let color: RGB8 = map.get(index, &self.palette);
            self.screen.set_pixel(x, line, color);
        }
    }
}

impl Default for Video {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprites::Attributes;

    fn step_until_line(video: &mut Video, line: u8) -> InterruptFlags {
        let mut requested = InterruptFlags::empty();
        while video.current_line() != line {
            requested |= video.step(4);
        }
        requested
    }

    #[test]
    fn vertical_blank_interrupt_once_per_frame() {
        let mut video = Video::default();
        let mut count = 0;
        for _ in 0..(ppu::FRAME_CLOCKS / 4) {
            if video.step(4).contains(InterruptFlags::VIDEO_BETWEEN_FRAMES) {
                count += 1;
                assert_eq!(video.current_line(), 144);
            }
        }
        assert_eq!(count, 1);
    }

    #[test]
    fn status_reports_mode_and_match() {
        let mut video = Video::default();
        assert_eq!(video.read_register(Register::Status), 0x80 | 0x04 | 2);

        video.step(80);
        assert_eq!(video.read_register(Register::Status) & 0b11, 3);
        video.step(172);
        assert_eq!(video.read_register(Register::Status) & 0b11, 0);
    }

    #[test]
    fn line_compare_interrupt() {
        let mut video = Video::default();
        video.write_register(Register::Status, StatusInterrupts::CURRENT_LINE_COMPARE.bits());
        video.write_register(Register::InterruptOnScanline, 3);

        let requested = step_until_line(&mut video, 3);
        assert!(requested.contains(InterruptFlags::VIDEO_STATUS));
        assert_ne!(video.read_register(Register::Status) & STATUS_LINE_COMPARE_MATCH, 0);

        let requested = step_until_line(&mut video, 4);
        assert!(!requested.contains(InterruptFlags::VIDEO_STATUS));
    }

    #[test]
    fn mode_interrupts_follow_enabled_sources() {
        let mut video = Video::default();
        video.write_register(Register::Status, StatusInterrupts::FINISHING_SCANLINE.bits());

        assert!(!video.step(80).contains(InterruptFlags::VIDEO_STATUS));
        assert!(video.step(172).contains(InterruptFlags::VIDEO_STATUS));
        assert!(!video.step(204).contains(InterruptFlags::VIDEO_STATUS));
    }

    #[test]
    fn lcd_off_holds_line_zero() {
        let mut video = Video::default();
        step_until_line(&mut video, 10);

        video.write_register(Register::Control, 0x11);
        assert_eq!(video.read_register(Register::CurrentScanline), 0);
        assert_eq!(video.read_register(Register::Status) & 0b11, 0);
        assert_eq!(video.line_clocks_remaining(), 456);
        assert!(video.step(1000).is_empty());
        assert_eq!(video.read_register(Register::CurrentScanline), 0);
    }

    #[test]
    fn writing_current_line_restarts_frame() {
        let mut video = Video::default();
        step_until_line(&mut video, 20);
        video.write_register(Register::CurrentScanline, 0x99);
        assert_eq!(video.current_line(), 0);
    }

    fn write_tile_row(video: &mut Video, offset: u16, low: u8, high: u8) {
        video.write_memory(memory::MappedAddress::VideoRam(offset), low);
        video.write_memory(memory::MappedAddress::VideoRam(offset + 1), high);
    }

    #[test]
    fn renders_background_through_palette() {
        let mut video = Video::default();
        video.write_register(Register::BackgroundPalette, 0b11_10_01_00);
        // Tile 1, row 0: colour indices 3 2 1 0 3 2 1 0.
        write_tile_row(&mut video, 0x0010, 0b1010_1010, 0b1100_1100);
        video.write_memory(memory::MappedAddress::VideoRam(0x1800), 1);

        video.step(252);
        let line = video.screen().line(0);
        assert_eq!(line[0], Palette::GREYSCALE.color(3));
        assert_eq!(line[1], Palette::GREYSCALE.color(2));
        assert_eq!(line[2], Palette::GREYSCALE.color(1));
        assert_eq!(line[3], Palette::GREYSCALE.color(0));
        assert_eq!(line[8], Palette::GREYSCALE.color(0));
    }

    #[test]
    fn renders_sprites_over_background() {
        let mut video = Video::default();
        video.write_register(Register::Control, 0x93);
        video.write_register(Register::Sprite0Palette, 0b11_10_01_00);
        write_tile_row(&mut video, 0x0020, 0xff, 0x00);

        let mut oam = [0; memory::OAM_SIZE];
        oam[0..4].copy_from_slice(&[16, 8 + 4, 2, 0]);
        oam[4..8].copy_from_slice(&[16, 8 + 20, 2, Attributes::FLIP_X.bits()]);
        video.load_oam(&oam);

        video.step(252);
        let line = video.screen().line(0);
        assert_eq!(line[3], Palette::GREYSCALE.color(0));
        assert_eq!(line[4], Palette::GREYSCALE.color(1));
        assert_eq!(line[11], Palette::GREYSCALE.color(1));
        assert_eq!(line[12], Palette::GREYSCALE.color(0));
        assert_eq!(line[20], Palette::GREYSCALE.color(1));
    }

    #[test]
    fn background_priority_hides_sprites() {
        let mut video = Video::default();
        video.write_register(Register::Control, 0x93);
        video.write_register(Register::BackgroundPalette, 0b11_10_01_00);
        video.write_register(Register::Sprite0Palette, 0b11_10_01_00);
        // Background tile 1 has colour 1 in its left half only.
        write_tile_row(&mut video, 0x0010, 0xf0, 0x00);
        video.write_memory(memory::MappedAddress::VideoRam(0x1800), 1);
        // Sprite tile 2 is solid colour 2.
        write_tile_row(&mut video, 0x0020, 0x00, 0xff);

        let mut oam = [0; memory::OAM_SIZE];
        oam[0..4].copy_from_slice(&[16, 8, 2, Attributes::PRIORITY.bits()]);
        video.load_oam(&oam);

        video.step(252);
        let line = video.screen().line(0);
        assert_eq!(line[0], Palette::GREYSCALE.color(1));
        assert_eq!(line[4], Palette::GREYSCALE.color(2));
    }
}
