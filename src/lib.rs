//! 2D vector and axis-aligned rectangle value types for game code.
//!
//! [`Vector`] and [`Rect`] are small `Copy` types with pure operations: every
//! method returns a new value and nothing is mutated through shared state.

pub mod error;
pub mod math;
pub mod shapes;

pub use error::{GeometryError, Result};
pub use math::{GOLDEN_RATIO, Vector};
pub use shapes::{Alignment, Anchor, Padding, Rect, Shape, Target};
