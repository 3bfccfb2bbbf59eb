pub const TILE_BYTES: u16 = 16;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TileIndex(pub u8);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TileAddressMode {
    /// Indices 0-255 from 0x8000.
    Unsigned,
    /// Indices -128-127 around 0x9000.
    Signed,
}

impl TileAddressMode {
    /// Offset of the tile's first byte from the start of video RAM.
    pub fn tile_offset(self, index: TileIndex) -> u16 {
        match self {
            TileAddressMode::Unsigned => index.0 as u16 * TILE_BYTES,
            TileAddressMode::Signed => {
                0x0800 + (index.0 as i8 as i16 + 128) as u16 * TILE_BYTES
            }
        }
    }
}

/// The two bitplanes of one row of a tile.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TileRow {
    pub low: u8,
    pub high: u8,
}

impl TileRow {
    /// Colour index of column `x`, where column 0 is the leftmost pixel.
    pub fn color_index(&self, x: u8) -> u8 {
        let bit = 7 - (x & 7);
        (((self.high >> bit) & 1) << 1) | ((self.low >> bit) & 1)
    }
}
