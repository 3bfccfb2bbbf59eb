use rgb::RGB8;

pub const NUM_SCANLINES: u8 = 144;
pub const PIXELS_PER_LINE: u8 = 160;

const PIXEL_COUNT: usize = NUM_SCANLINES as usize * PIXELS_PER_LINE as usize;

/// The frame buffer, row-major.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Screen {
    pixels: Vec<RGB8>,
}

impl Screen {
    pub fn new(background: RGB8) -> Self {
        Self {
            pixels: vec![background; PIXEL_COUNT],
        }
    }

    pub fn pixel(&self, x: u8, y: u8) -> RGB8 {
        self.pixels[Self::index(x, y)]
    }

    pub fn set_pixel(&mut self, x: u8, y: u8, color: RGB8) {
        self.pixels[Self::index(x, y)] = color;
    }

    pub fn line(&self, y: u8) -> &[RGB8] {
        let start = Self::index(0, y);
        &self.pixels[start..start + PIXELS_PER_LINE as usize]
    }

    pub fn pixels(&self) -> &[RGB8] {
        &self.pixels
    }

    /// Packed `r, g, b` bytes, 160 * 144 * 3 of them.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|pixel| [pixel.r, pixel.g, pixel.b])
            .collect()
    }

    fn index(x: u8, y: u8) -> usize {
        y as usize * PIXELS_PER_LINE as usize + x as usize
    }
}
