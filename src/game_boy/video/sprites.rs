use bitflags::bitflags;

use super::tiles::TileIndex;

pub const SPRITE_COUNT: usize = 40;
pub const MAX_SPRITES_PER_LINE: usize = 10;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SpriteSize {
    Single,
    Double,
}

impl SpriteSize {
    pub fn height(self) -> u8 {
        match self {
            SpriteSize::Single => 8,
            SpriteSize::Double => 16,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Sprite {
    pub position: Position,
    pub tile: TileIndex,
    pub attributes: Attributes,
}

impl Sprite {
    pub fn from_bytes(bytes: &[u8; 4]) -> Self {
        Self {
            position: Position {
                y: bytes[0],
                x: bytes[1],
            },
            tile: TileIndex(bytes[2]),
            attributes: Attributes::from_bits_retain(bytes[3]),
        }
    }

    /// Whether any row of the sprite falls on `line`. Positions are offset
    /// by 16 vertically so sprites can scroll in from the top.
    pub fn on_line(&self, line: u8, size: SpriteSize) -> bool {
        let top = self.position.y as i16 - 16;
        let line = line as i16;
        line >= top && line < top + size.height() as i16
    }

    /// Horizontal offset into the sprite for screen column `x`, if covered.
    pub fn column(&self, x: u8) -> Option<u8> {
        let offset = x as i16 + 8 - self.position.x as i16;
        (0..8).contains(&offset).then_some(offset as u8)
    }

    /// Tile and tile row for sprite row `row`, after vertical flip.
    pub fn tile_row(&self, row: u8, size: SpriteSize) -> (TileIndex, u8) {
        let height = size.height();
        let row = if self.attributes.flip_y() {
            height - 1 - row
        } else {
            row
        };

        match size {
            SpriteSize::Single => (self.tile, row),
            SpriteSize::Double => (TileIndex((self.tile.0 & 0xfe) + row / 8), row % 8),
        }
    }
}

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct Attributes: u8 {
        const PRIORITY = 0b1000_0000;
        const FLIP_Y = 0b0100_0000;
        const FLIP_X = 0b0010_0000;
        const PALETTE = 0b0001_0000;
        const _OTHER = !0;
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Priority {
    Sprite,
    BackgroundAndWindow,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SpritePalette {
    Palette0,
    Palette1,
}

impl Attributes {
    pub fn priority(&self) -> Priority {
        if self.contains(Attributes::PRIORITY) {
            Priority::BackgroundAndWindow
        } else {
            Priority::Sprite
        }
    }

    pub fn flip_y(&self) -> bool {
        self.contains(Attributes::FLIP_Y)
    }

    pub fn flip_x(&self) -> bool {
        self.contains(Attributes::FLIP_X)
    }

    pub fn palette(&self) -> SpritePalette {
        if self.contains(Attributes::PALETTE) {
            SpritePalette::Palette1
        } else {
            SpritePalette::Palette0
        }
    }
}

/// Picks the sprites drawn on `line`: the first ten in OAM order that
/// intersect it, ordered so that earlier entries win overlapping pixels.
/// Lower X wins, and OAM order breaks ties.
pub fn select_for_line(
    sprites: impl Iterator<Item = Sprite>,
    line: u8,
    size: SpriteSize,
) -> Vec<Sprite> {
    let mut selected: Vec<Sprite> = sprites
        .filter(|sprite| sprite.on_line(line, size))
        .take(MAX_SPRITES_PER_LINE)
        .collect();
    selected.sort_by_key(|sprite| sprite.position.x);
    selected
}
