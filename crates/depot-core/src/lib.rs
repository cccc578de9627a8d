//! `depot-core` — foundational types for the `rust_depot` charge planner.
//!
//! This crate is a dependency of every other `depot-*` crate.  It
//! intentionally has no `depot-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                  |
//! |-------------|-------------------------------------------|
//! | [`ids`]     | `ShuttleId`, `ChargerId`                  |
//! | [`time`]    | `Minute`, `PlanParams`                    |
//! | [`shuttle`] | The immutable `Shuttle` record            |
//! | [`error`]   | `CoreError`, `CoreResult`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod shuttle;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{ChargerId, ShuttleId};
pub use shuttle::Shuttle;
pub use time::{Minute, PlanParams, DEFAULT_HORIZON_MINUTES};
