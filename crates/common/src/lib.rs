//! Shared value types: colors and line vertices.

mod types;

pub use types::{LineVertex, Rgba};
