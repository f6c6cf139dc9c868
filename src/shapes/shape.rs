use crate::math::Vector;
use crate::shapes::Rect;

/// Anything with an axis-aligned bounding rectangle.
///
/// Implement this for game objects so they can be passed to
/// [`Rect::from_shape`], [`Rect::from_union`] and [`Rect::inside`].
pub trait Shape {
    fn bounding_rect(&self) -> Rect;
}

impl Shape for Rect {
    #[inline]
    fn bounding_rect(&self) -> Rect {
        *self
    }
}

impl<S: Shape + ?Sized> Shape for &S {
    #[inline]
    fn bounding_rect(&self) -> Rect {
        (**self).bounding_rect()
    }
}

/// Argument of the point-or-rect queries [`Rect::contains`] and
/// [`Rect::touching`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Target {
    Point(Vector),
    Rect(Rect),
}

impl Target {
    /// The target as a rectangle; a point becomes a zero-area rect.
    #[inline]
    pub fn to_rect(self) -> Rect {
        match self {
            Target::Point(p) => Rect::from_vector(p),
            Target::Rect(r) => r,
        }
    }
}

impl From<Vector> for Target {
    #[inline]
    fn from(p: Vector) -> Self {
        Target::Point(p)
    }
}

impl From<(f32, f32)> for Target {
    #[inline]
    fn from(p: (f32, f32)) -> Self {
        Target::Point(p.into())
    }
}

impl From<Rect> for Target {
    #[inline]
    fn from(r: Rect) -> Self {
        Target::Rect(r)
    }
}

impl From<&Rect> for Target {
    #[inline]
    fn from(r: &Rect) -> Self {
        Target::Rect(*r)
    }
}

/// The nine named points of a rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::CenterLeft,
        Anchor::Center,
        Anchor::CenterRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    /// Position of the anchor as a fraction of the rect's size, measured from
    /// its bottom-left corner.
    #[inline]
    pub(crate) fn fraction(self) -> Vector {
        let fx = match self {
            Anchor::TopLeft | Anchor::CenterLeft | Anchor::BottomLeft => 0.0,
            Anchor::TopCenter | Anchor::Center | Anchor::BottomCenter => 0.5,
            Anchor::TopRight | Anchor::CenterRight | Anchor::BottomRight => 1.0,
        };
        let fy = match self {
            Anchor::BottomLeft | Anchor::BottomCenter | Anchor::BottomRight => 0.0,
            Anchor::CenterLeft | Anchor::Center | Anchor::CenterRight => 0.5,
            Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight => 1.0,
        };
        Vector::new(fx, fy)
    }
}

/// Edge or center line used by [`Rect::aligned_to`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Alignment {
    Left,
    CenterX,
    Right,
    Top,
    CenterY,
    Bottom,
}

/// Per-side padding for [`Rect::grown`] and [`Rect::shrunk`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Padding {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Padding {
    #[inline]
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    #[inline]
    pub const fn uniform(pad: f32) -> Self {
        Self::new(pad, pad, pad, pad)
    }

    #[inline]
    pub(crate) fn negated(self) -> Self {
        Self::new(-self.left, -self.right, -self.top, -self.bottom)
    }
}

impl From<f32> for Padding {
    #[inline]
    fn from(pad: f32) -> Self {
        Self::uniform(pad)
    }
}

impl From<(f32, f32, f32, f32)> for Padding {
    #[inline]
    fn from((left, right, top, bottom): (f32, f32, f32, f32)) -> Self {
        Self::new(left, right, top, bottom)
    }
}
