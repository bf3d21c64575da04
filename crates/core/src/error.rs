//! User-facing launch errors
//!
//! The `Display` text of each variant is the exact message shown to the user.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    /// `/s` was given without a screen index
    #[error("Parameter /s requires a number")]
    MissingParameter,

    /// `/s` was given something that is not a non-negative integer
    #[error("Parameter /s requires a number, but \"{0}\" is not a valid screen index")]
    InvalidParameter(String),

    /// `/s` index is not below the number of attached screens
    #[error("Provided screen index {index} exceeds number of screens [{count}]")]
    IndexOutOfRange { index: usize, count: usize },

    /// First token is not one of the supported commands
    #[error("Sorry, but the command line argument \"{0}\" is not valid.")]
    UnrecognizedCommand(String),
}
