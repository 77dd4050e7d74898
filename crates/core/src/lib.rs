//! Core errors and constants for the `hitrate` workspace.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias
//!   used by configuration loading and the background reporter.
//! - **`constants`**: Environment variable names and defaults shared by the
//!   aggregator and its configuration.

pub mod constants;
pub mod errors;

pub use self::{
    constants::*,
    errors::{Error, Result},
};
