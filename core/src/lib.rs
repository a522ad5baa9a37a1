#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use error::*;
pub use schedule::*;
pub use snapshot::*;
pub use theme::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod schedule;
mod snapshot;
mod theme;
mod types;
pub mod wheel;

/// Path of the status endpoint relative to the page origin.
pub const STATUS_PATH: &str = "/api/status";

/// How often the remote status is polled, in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 2000;
