use super::{
    sprites::{SPRITE_COUNT, Sprite},
    tile_maps::TileMapId,
    tiles::{TileAddressMode, TileIndex, TileRow},
};

pub const VIDEO_RAM_SIZE: usize = 0x2000;
pub const OAM_SIZE: usize = SPRITE_COUNT * 4;

/// Tile data, tile maps (0x8000-0x9fff) and sprite attributes (0xfe00-0xfe9f).
#[derive(Clone, Debug)]
pub struct VideoMemory {
    video_ram: Box<[u8; VIDEO_RAM_SIZE]>,
    oam: [u8; OAM_SIZE],
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MappedAddress {
    VideoRam(u16),
    Oam(u8),
}

impl VideoMemory {
    pub fn new() -> Self {
        Self {
            video_ram: Box::new([0; VIDEO_RAM_SIZE]),
            oam: [0; OAM_SIZE],
        }
    }

    pub fn read(&self, address: MappedAddress) -> u8 {
        match address {
            MappedAddress::VideoRam(offset) => self.video_ram[offset as usize],
            MappedAddress::Oam(offset) => self.oam[offset as usize],
        }
    }

    pub fn write(&mut self, address: MappedAddress, value: u8) {
        match address {
            MappedAddress::VideoRam(offset) => self.video_ram[offset as usize] = value,
            MappedAddress::Oam(offset) => self.oam[offset as usize] = value,
        }
    }

    /// Replaces the whole sprite table, as an OAM DMA transfer does.
    pub fn load_oam(&mut self, data: &[u8; OAM_SIZE]) {
        self.oam = *data;
    }

    pub fn tile_index(&self, map: TileMapId, x: u8, y: u8) -> TileIndex {
        TileIndex(self.video_ram[map.entry_offset(x, y) as usize])
    }

    pub fn tile_row(&self, mode: TileAddressMode, tile: TileIndex, row: u8) -> TileRow {
        let offset = (mode.tile_offset(tile) + (row as u16 & 7) * 2) as usize;
        TileRow {
            low: self.video_ram[offset],
            high: self.video_ram[offset + 1],
        }
    }

    pub fn sprites(&self) -> impl Iterator<Item = Sprite> + '_ {
        self.oam
            .chunks_exact(4)
            .map(|bytes| Sprite::from_bytes(&[bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

impl Default for VideoMemory {
    fn default() -> Self {
        Self::new()
    }
}
