use crate::*;

/// Single axis used for board rows and columns.
pub type Dim = u16;

/// Validated board dimensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    rows: Dim,
    cols: Dim,
}

impl Layout {
    pub fn new(rows: Dim, cols: Dim) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidLayout { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub const fn rows(&self) -> Dim {
        self.rows
    }

    pub const fn cols(&self) -> Dim {
        self.cols
    }

    pub const fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

/// Animation timing of a single flip, in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FlipTiming {
    /// How long the upcoming character is shown before it is committed.
    pub flip_ms: u32,
    /// Pause between committing one step and starting the next.
    pub step_delay_ms: u32,
}

impl FlipTiming {
    pub const DEFAULT_FLIP_MS: u32 = 300;
    pub const DEFAULT_STEP_DELAY_MS: u32 = 30;

    pub const fn new(flip_ms: u32, step_delay_ms: u32) -> Self {
        Self {
            flip_ms,
            step_delay_ms,
        }
    }

    /// Timing for a status `speed`, which counts milliseconds per half flip.
    pub const fn with_speed(self, speed: u32) -> Self {
        Self {
            flip_ms: speed.saturating_mul(2),
            ..self
        }
    }
}

impl Default for FlipTiming {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FLIP_MS, Self::DEFAULT_STEP_DELAY_MS)
    }
}

/// Where a short message sits inside the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}
