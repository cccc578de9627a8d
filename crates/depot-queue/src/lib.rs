//! `depot-queue` — bounded max-oriented binary heap.
//!
//! # Why this exists
//!
//! The dispatch loop needs "highest-priority waiting shuttle" in O(log n)
//! many times per simulated minute.  `std::collections::BinaryHeap` would
//! grow without bound and hide its comparison order behind an `Ord` impl on
//! the element type; this heap instead keys on an explicit integer priority,
//! enforces a fixed capacity (a trial can never hold more entries than the
//! batch has shuttles — exceeding it is a caller bug worth failing on), and
//! keeps the classic swim/sink mechanics visible.
//!
//! The heap knows nothing about shuttles or simulation semantics: it stores
//! opaque items of type `T` under `i32` priorities.

pub mod error;
pub mod heap;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{QueueError, QueueResult};
pub use heap::MaxHeap;
