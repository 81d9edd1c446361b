//! Core domain model for Kaizen: the enumerations shared across the
//! workspace, the daily action record and its outcome lifecycle, and the
//! per-user state aggregate with its mutation contract.

pub mod action;
pub mod date;
pub mod error;
pub mod state;
pub mod types;

pub use action::{DailyAction, NewActionParams, Outcome};
pub use error::StateError;
pub use state::UserState;
pub use types::*;
