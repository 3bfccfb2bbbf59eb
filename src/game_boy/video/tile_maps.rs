pub const TILE_MAP_SIZE: u16 = 0x400;
pub const TILES_PER_ROW: u16 = 32;

/// One of the two 32x32 background maps, at 0x9800 or 0x9c00.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TileMapId(pub u8);

impl TileMapId {
    /// Offset of the map from the start of video RAM.
    pub fn base_offset(self) -> u16 {
        0x1800 + self.0 as u16 * TILE_MAP_SIZE
    }

    /// Offset of the tile index covering background pixel `(x, y)`.
    pub fn entry_offset(self, x: u8, y: u8) -> u16 {
        self.base_offset() + (y as u16 / 8) * TILES_PER_ROW + x as u16 / 8
    }
}
