//! `depot-fleet` — the immutable shuttle batch and its input loaders.
//!
//! # Crate layout
//!
//! | Module     | Contents                                         |
//! |------------|--------------------------------------------------|
//! | [`batch`]  | `ShuttleBatch` — validated, order-preserving set |
//! | [`loader`] | CSV and plain-text batch loaders                 |
//! | [`error`]  | `FleetError`, `FleetResult<T>`                   |
//!
//! # Ordering contract
//!
//! The batch preserves input order, and that order is the admission
//! tie-break for shuttles with equal arrival minutes: the simulator admits
//! same-minute arrivals in batch slot order.  Both loaders therefore append
//! records exactly as read.

pub mod batch;
pub mod error;
pub mod loader;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use batch::ShuttleBatch;
pub use error::{FleetError, FleetResult};
pub use loader::{
    load_shuttles_csv, load_shuttles_plain, load_shuttles_reader, parse_shuttles_plain,
};
