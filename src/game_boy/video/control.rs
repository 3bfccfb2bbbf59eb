use bitflags::bitflags;

use super::{sprites::SpriteSize, tile_maps::TileMapId, tiles::TileAddressMode};

bitflags! {
    /// LCDC (0xff40). Every bit is meaningful, so writes are retained as is.
    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    pub struct Control: u8 {
        const LCD_ENABLE        = 0x80;
        const WINDOW_MAP_HIGH   = 0x40;
        const WINDOW_ENABLE     = 0x20;
        const UNSIGNED_TILES    = 0x10;
        const BACKGROUND_MAP_HIGH = 0x08;
        const TALL_SPRITES      = 0x04;
        const SPRITE_ENABLE     = 0x02;
        const BACKGROUND_ENABLE = 0x01;
    }
}

impl Default for Control {
    /// The value left behind by the boot rom.
    fn default() -> Self {
        Self::LCD_ENABLE | Self::UNSIGNED_TILES | Self::BACKGROUND_ENABLE
    }
}

impl Control {
    pub fn video_enabled(self) -> bool {
        self.contains(Self::LCD_ENABLE)
    }

    /// With this clear the window is hidden too.
    pub fn background_and_window_enabled(self) -> bool {
        self.contains(Self::BACKGROUND_ENABLE)
    }

    pub fn window_enabled(self) -> bool {
        self.contains(Self::WINDOW_ENABLE)
    }

    pub fn sprites_enabled(self) -> bool {
        self.contains(Self::SPRITE_ENABLE)
    }

    pub fn tile_address_mode(self) -> TileAddressMode {
        match self.contains(Self::UNSIGNED_TILES) {
            true => TileAddressMode::Unsigned,
            false => TileAddressMode::Signed,
        }
    }

    pub fn background_tile_map(self) -> TileMapId {
        TileMapId(self.contains(Self::BACKGROUND_MAP_HIGH) as u8)
    }

    pub fn window_tile_map(self) -> TileMapId {
        TileMapId(self.contains(Self::WINDOW_MAP_HIGH) as u8)
    }

    pub fn sprite_size(self) -> SpriteSize {
        match self.contains(Self::TALL_SPRITES) {
            true => SpriteSize::Double,
            false => SpriteSize::Single,
        }
    }
}
