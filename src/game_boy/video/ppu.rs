use super::screen::NUM_SCANLINES;

pub const SCANLINE_TOTAL_CLOCKS: u32 = 456;
pub const SCANLINE_PREPARING_CLOCKS: u32 = 80;
pub const SCANLINE_DRAWING_CLOCKS: u32 = 172;
pub const SCANLINE_COUNT: u8 = 154;
pub const FRAME_CLOCKS: u32 = SCANLINE_TOTAL_CLOCKS * SCANLINE_COUNT as u32;

/// Clocks left on the line when pixel transfer begins.
const DRAWING_STARTS_AT: u32 = SCANLINE_TOTAL_CLOCKS - SCANLINE_PREPARING_CLOCKS;
/// Clocks left on the line when horizontal blank begins.
const BETWEEN_LINES_STARTS_AT: u32 = DRAWING_STARTS_AT - SCANLINE_DRAWING_CLOCKS;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Mode {
    BetweenLines = 0,
    BetweenFrames = 1,
    PreparingScanline = 2,
    DrawingPixels = 3,
}

/// Position of the beam: the current line and a counter of clocks left on
/// it, counting down from 456. The mode is derived from both.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScanlineTimer {
    line: u8,
    remaining: u32,
}

/// What happened on the last call to [`ScanlineTimer::advance`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Transition {
    pub mode_changed: bool,
    pub line_changed: bool,
}

impl ScanlineTimer {
    pub fn new() -> Self {
        Self {
            line: 0,
            remaining: SCANLINE_TOTAL_CLOCKS,
        }
    }

    pub fn line(&self) -> u8 {
        self.line
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn mode(&self) -> Mode {
        if self.line >= NUM_SCANLINES {
            Mode::BetweenFrames
        } else if self.remaining > DRAWING_STARTS_AT {
            Mode::PreparingScanline
        } else if self.remaining > BETWEEN_LINES_STARTS_AT {
            Mode::DrawingPixels
        } else {
            Mode::BetweenLines
        }
    }

    /// Clocks until the mode or line next changes.
    pub fn clocks_until_transition(&self) -> u32 {
        match self.mode() {
            Mode::PreparingScanline => self.remaining - DRAWING_STARTS_AT,
            Mode::DrawingPixels => self.remaining - BETWEEN_LINES_STARTS_AT,
            Mode::BetweenLines | Mode::BetweenFrames => self.remaining,
        }
    }

    /// Advances by up to `clocks`, stopping at the next transition so that
    /// none is skipped. Returns the clocks consumed.
    pub fn advance(&mut self, clocks: u32) -> (u32, Transition) {
        let consumed = clocks.min(self.clocks_until_transition());
        let mode = self.mode();

        self.remaining -= consumed;
        let line_changed = self.remaining == 0;
        if line_changed {
            self.line = (self.line + 1) % SCANLINE_COUNT;
            self.remaining = SCANLINE_TOTAL_CLOCKS;
        }

        (
            consumed,
            Transition {
                mode_changed: self.mode() != mode,
                line_changed,
            },
        )
    }
}

impl Default for ScanlineTimer {
    fn default() -> Self {
        Self::new()
    }
}
