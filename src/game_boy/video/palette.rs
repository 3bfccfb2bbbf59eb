use rgb::RGB8;

/// The four shades a 2-bit palette entry is displayed with, lightest first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    colors: [RGB8; 4],
}

impl Palette {
    pub const GREYSCALE: Self = Self::new([
        RGB8::new(0xff, 0xff, 0xff),
        RGB8::new(0xcc, 0xcc, 0xcc),
        RGB8::new(0x77, 0x77, 0x77),
        RGB8::new(0x00, 0x00, 0x00),
    ]);

    pub const MONOCHROME_GREEN: Self = Self::new([
        RGB8::new(0x9b, 0xbc, 0x0f),
        RGB8::new(0x8b, 0xac, 0x0f),
        RGB8::new(0x30, 0x62, 0x30),
        RGB8::new(0x0f, 0x38, 0x0f),
    ]);

    pub const fn new(colors: [RGB8; 4]) -> Self {
        Self { colors }
    }

    pub fn color(&self, shade: u8) -> RGB8 {
        self.colors[(shade & 0b11) as usize]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::GREYSCALE
    }
}

/// A BGP/OBP register: maps colour indices to shades.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PaletteMap(pub u8);

impl PaletteMap {
    pub fn get(&self, index: u8, palette: &Palette) -> RGB8 {
        palette.color(self.map(index))
    }

    pub fn map(&self, index: u8) -> u8 {
        (self.0 >> ((index & 0b11) * 2)) & 0b11
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palettes {
    pub background: PaletteMap,
    pub sprite0: PaletteMap,
    pub sprite1: PaletteMap,
}

impl Default for Palettes {
    fn default() -> Self {
        Self {
            background: PaletteMap(0xfc),
            sprite0: PaletteMap(0xff),
            sprite1: PaletteMap(0xff),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_on_background_map() {
        let map = Palettes::default().background;
        assert_eq!(map.map(0), 0);
        assert_eq!(map.map(1), 3);
        assert_eq!(map.map(3), 3);
        assert_eq!(map.get(0, &Palette::GREYSCALE), RGB8::new(0xff, 0xff, 0xff));
    }

    #[test]
    fn maps_each_index() {
        let map = PaletteMap(0b00_01_10_11);
        assert_eq!(map.map(0), 3);
        assert_eq!(map.map(1), 2);
        assert_eq!(map.map(2), 1);
        assert_eq!(map.map(3), 0);
        assert_eq!(
            map.get(1, &Palette::MONOCHROME_GREEN),
            RGB8::new(0x30, 0x62, 0x30)
        );
    }
}
