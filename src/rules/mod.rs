//! Craps rules.
//!
//! The engine calls [`transition`] once per roll and never interprets totals
//! itself.

pub mod transition;

pub use transition::{transition, try_transition, MAX_TOTAL, MIN_TOTAL, SEVEN};
