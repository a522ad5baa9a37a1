use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

use crate::*;

/// Remote board state as served by the status endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub rows: Dim,
    pub cols: Dim,
    pub theme: String,
    pub current_message: String,
    /// Milliseconds per half flip, when the backend sets one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<u32>,
}

impl BoardSnapshot {
    pub fn layout(&self) -> Result<Layout> {
        Layout::new(self.rows, self.cols)
    }

    pub fn timing(&self, base: FlipTiming) -> FlipTiming {
        match self.speed {
            Some(speed) => base.with_speed(speed),
            None => base,
        }
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 22,
            theme: "black".to_string(),
            current_message: "WELCOME TO OMNI BOARD".to_string(),
            speed: Some(150),
        }
    }
}
