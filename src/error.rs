//! Error type for slice operations.
//!
//! Only cheap preconditions are checked at runtime. Properties that would cost
//! a full scan to verify (such as "the input is sorted") are caller contracts
//! and are never reported here.

use thiserror::Error;

/// Error returned when an argument violates a documented precondition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A parameter is outside its allowed range.
    #[error("invalid argument `{param}` = {value}: {constraint}")]
    InvalidArgument {
        /// Name of the offending parameter.
        param: &'static str,
        /// The value that was supplied.
        value: usize,
        /// Human-readable description of the allowed range.
        constraint: String,
    },
}

/// Result alias for fallible slice operations.
pub type Result<T> = std::result::Result<T, Error>;
