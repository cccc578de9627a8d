//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! via `From` impls or wrap it as one variant.

use thiserror::Error;

/// Errors raised by `depot-core` constructors.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid shuttle id {0}: ids are 1-based and must be non-zero")]
    InvalidShuttleId(u32),
}

/// Shorthand result type for `depot-core`.
pub type CoreResult<T> = Result<T, CoreError>;
