//! Lazy move generation.
//!
//! Each generator comes in two forms: a cursor that owns only its position
//! in the enumeration and is advanced against a `&Board` passed per call, and
//! a borrowing `Iterator` wrapper around that cursor. The cursor form lets a
//! search keep its place in the move list while it makes and undoes moves on
//! the same board between steps.

pub mod reachable;
pub mod legal;

pub use reachable::*;
pub use legal::*;
