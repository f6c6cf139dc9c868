pub mod rect;
pub mod shape;

pub use rect::Rect;
pub use shape::{Alignment, Anchor, Padding, Shape, Target};
