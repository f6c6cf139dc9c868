pub mod utils;
pub mod vector;

pub use utils::{distance, distance_squared, interpolate};
pub use vector::Vector;

/// The golden ratio, a common aspect ratio for [`crate::Rect::from_width`]
/// and [`crate::Rect::from_height`].
pub const GOLDEN_RATIO: f32 = 1.618_034;
