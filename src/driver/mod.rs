//! Drivers that play many rounds in a row.

pub mod fast_forward;

pub use fast_forward::{
    DriveHandle, DriveReport, DriveUpdate, FastForward, StopToken, UPDATE_CAPACITY,
};
