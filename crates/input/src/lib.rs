//! Input: window pointer events mapped to normalized graphics coordinates
//! and a small action set.
//!
//! # Invariants
//! - Normalized pointer coordinates always lie in `[-1, 1]`.
//! - The application consumes actions, never raw window events.

pub mod action;
pub mod pointer;

pub use action::Action;
pub use pointer::NormalizedPointer;
