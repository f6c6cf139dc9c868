use core::fmt;
use core::ops::{Add, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use rand::Rng;

use crate::math::Vector;
use crate::math::utils::random_range;
use crate::math::vector::round_to;
use crate::shapes::{Alignment, Anchor, Padding, Shape, Target};

/// An axis-aligned rectangle with `y` pointing up.
///
/// The canonical form is `(x, y, width, height)` where `(x, y)` is the
/// bottom-left corner. Rectangles are always normalized: `left <= right` and
/// `bottom <= top`, so `width()` and `height()` are never negative. Passing a
/// negative width or height to a constructor flips the reference corner
/// instead of failing, e.g. `Rect::new(4, 0, -4, 2) == Rect::new(0, 0, 4, 2)`.
///
/// The size is kept as given rather than recomputed from the edges, so
/// `Rect::new(x, y, w, h).width() == w.abs()` holds exactly even where
/// `right() - left()` would round differently.
///
/// A `Rect` is never mutated in place; every update returns a new value.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    min: Vector,
    max: Vector,
    size: Vector,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        let (left, right) = ordered(x, x + width);
        let (bottom, top) = ordered(y, y + height);
        Self {
            min: Vector::new(left, bottom),
            max: Vector::new(right, top),
            size: Vector::new(width.abs(), height.abs()),
        }
    }

    // Edges are authoritative here; the size is derived from them.
    #[inline]
    fn from_extents(min: Vector, max: Vector) -> Self {
        Self {
            min,
            max,
            size: max - min,
        }
    }

    /// Zero-area rect at the origin.
    #[inline]
    pub const fn null() -> Self {
        Self::from_vector(Vector::null())
    }

    /// Bottom-left corner on the origin.
    #[inline]
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// `height = ratio * width`, bottom-left corner on the origin.
    #[inline]
    pub fn from_width(width: f32, ratio: f32) -> Self {
        Self::from_size(width, ratio * width)
    }

    /// `width = ratio * height`, bottom-left corner on the origin.
    #[inline]
    pub fn from_height(height: f32, ratio: f32) -> Self {
        Self::from_size(ratio * height, height)
    }

    #[inline]
    pub fn from_square(size: f32) -> Self {
        Self::from_size(size, size)
    }

    /// From edge coordinates. Swapped edges are put back in order.
    pub fn from_sides(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        let (left, right) = ordered(left, right);
        let (bottom, top) = ordered(bottom, top);
        Self::from_extents(Vector::new(left, bottom), Vector::new(right, top))
    }

    /// The rect spanned by two opposite corners given in any order.
    pub fn from_corners(a: impl Into<Vector>, b: impl Into<Vector>) -> Self {
        let (a, b) = (a.into(), b.into());
        Self::from_extents(
            Vector::new(a.x.min(b.x), a.y.min(b.y)),
            Vector::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }

    #[inline]
    pub fn from_bottom_left(position: impl Into<Vector>, width: f32, height: f32) -> Self {
        let p = position.into();
        Self::new(p.x, p.y, width, height)
    }

    pub fn from_center(center: impl Into<Vector>, width: f32, height: f32) -> Self {
        let c = center.into();
        Self::new(c.x - width / 2.0, c.y - height / 2.0, width, height)
    }

    /// Zero-area rect located at `position`.
    #[inline]
    pub const fn from_vector(position: Vector) -> Self {
        Self {
            min: position,
            max: position,
            size: Vector::null(),
        }
    }

    /// Smallest rect containing every point, or `None` if there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Into<Vector>,
    {
        let mut iter = points.into_iter().map(Into::into);
        let first = Self::from_vector(iter.next()?);
        Some(iter.fold(first, |acc, p| acc.union(&Self::from_vector(p))))
    }

    /// Smallest rect containing every shape, or `None` if there are none.
    pub fn from_union<I>(shapes: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Shape,
    {
        shapes
            .into_iter()
            .map(|s| s.bounding_rect())
            .reduce(|acc, r| acc.union(&r))
    }

    /// Area shared by every shape. `None` if there are no shapes or if they do
    /// not all overlap.
    pub fn from_intersection<I>(shapes: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Shape,
    {
        let mut iter = shapes.into_iter().map(|s| s.bounding_rect());
        let first = iter.next()?;
        iter.try_fold(first, |acc, r| acc.intersection(&r))
    }

    #[inline]
    pub fn from_shape(shape: &impl Shape) -> Self {
        shape.bounding_rect()
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.max.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width() / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height() / 2.0
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        (self.min.x + self.max.x) / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        (self.min.y + self.max.y) / 2.0
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    #[inline]
    pub fn size(&self) -> Vector {
        self.size
    }

    /// Size rounded up to whole units, e.g. for allocating a pixel buffer.
    /// `None` if either dimension does not fit in a `u32` or is NaN.
    pub fn ceil_size(&self) -> Option<(u32, u32)> {
        Some((ceil_to_u32(self.width())?, ceil_to_u32(self.height())?))
    }

    #[inline]
    pub fn top_left(&self) -> Vector {
        Vector::new(self.left(), self.top())
    }

    #[inline]
    pub fn top_center(&self) -> Vector {
        Vector::new(self.center_x(), self.top())
    }

    #[inline]
    pub fn top_right(&self) -> Vector {
        self.max
    }

    #[inline]
    pub fn center_left(&self) -> Vector {
        Vector::new(self.left(), self.center_y())
    }

    #[inline]
    pub fn center(&self) -> Vector {
        Vector::new(self.center_x(), self.center_y())
    }

    #[inline]
    pub fn center_right(&self) -> Vector {
        Vector::new(self.right(), self.center_y())
    }

    #[inline]
    pub fn bottom_left(&self) -> Vector {
        self.min
    }

    #[inline]
    pub fn bottom_center(&self) -> Vector {
        Vector::new(self.center_x(), self.bottom())
    }

    #[inline]
    pub fn bottom_right(&self) -> Vector {
        Vector::new(self.right(), self.bottom())
    }

    pub fn anchor(&self, anchor: Anchor) -> Vector {
        match anchor {
            Anchor::TopLeft => self.top_left(),
            Anchor::TopCenter => self.top_center(),
            Anchor::TopRight => self.top_right(),
            Anchor::CenterLeft => self.center_left(),
            Anchor::Center => self.center(),
            Anchor::CenterRight => self.center_right(),
            Anchor::BottomLeft => self.bottom_left(),
            Anchor::BottomCenter => self.bottom_center(),
            Anchor::BottomRight => self.bottom_right(),
        }
    }

    /// Corners in the order top-left, top-right, bottom-right, bottom-left.
    #[inline]
    pub fn vertices(&self) -> [Vector; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    /// `(bottom_left, size)`
    #[inline]
    pub fn dimensions(&self) -> (Vector, Vector) {
        (self.bottom_left(), self.size())
    }

    /// `(x, y, width, height)`
    #[inline]
    pub fn to_tuple(&self) -> (f32, f32, f32, f32) {
        (self.x(), self.y(), self.width(), self.height())
    }

    #[inline]
    pub fn with_left(&self, left: f32) -> Self {
        Self::new(left, self.bottom(), self.width(), self.height())
    }

    #[inline]
    pub fn with_right(&self, right: f32) -> Self {
        self.with_left(right - self.width())
    }

    #[inline]
    pub fn with_center_x(&self, x: f32) -> Self {
        self.with_left(x - self.half_width())
    }

    #[inline]
    pub fn with_bottom(&self, bottom: f32) -> Self {
        Self::new(self.left(), bottom, self.width(), self.height())
    }

    #[inline]
    pub fn with_top(&self, top: f32) -> Self {
        self.with_bottom(top - self.height())
    }

    #[inline]
    pub fn with_center_y(&self, y: f32) -> Self {
        self.with_bottom(y - self.half_height())
    }

    /// Resized, keeping the bottom-left corner.
    #[inline]
    pub fn with_width(&self, width: f32) -> Self {
        Self::new(self.left(), self.bottom(), width, self.height())
    }

    /// Resized, keeping the bottom-left corner.
    #[inline]
    pub fn with_height(&self, height: f32) -> Self {
        Self::new(self.left(), self.bottom(), self.width(), height)
    }

    /// Resized, keeping the bottom-left corner.
    #[inline]
    pub fn with_size(&self, width: f32, height: f32) -> Self {
        Self::new(self.left(), self.bottom(), width, height)
    }

    /// Same size, moved so that `anchor` lands on `point`.
    pub fn moved_to(&self, anchor: Anchor, point: impl Into<Vector>) -> Self {
        let size = self.size();
        let min = point.into() - size * anchor.fraction();
        Self::new(min.x, min.y, size.x, size.y)
    }

    /// Same size, moved so that the chosen edge or center line matches the
    /// one of `target`.
    pub fn aligned_to(&self, alignment: Alignment, target: &Rect) -> Self {
        match alignment {
            Alignment::Left => self.with_left(target.left()),
            Alignment::CenterX => self.with_center_x(target.center_x()),
            Alignment::Right => self.with_right(target.right()),
            Alignment::Top => self.with_top(target.top()),
            Alignment::CenterY => self.with_center_y(target.center_y()),
            Alignment::Bottom => self.with_bottom(target.bottom()),
        }
    }

    #[inline]
    pub fn displaced(&self, offset: impl Into<Vector>) -> Self {
        let offset = offset.into();
        Self {
            min: self.min + offset,
            max: self.max + offset,
            size: self.size,
        }
    }

    /// Pushes each side outwards by the given padding, either one value for
    /// every side or a [`Padding`] per side.
    pub fn grown(&self, padding: impl Into<Padding>) -> Self {
        let p = padding.into();
        Self::from_sides(
            self.left() - p.left,
            self.top() + p.top,
            self.right() + p.right,
            self.bottom() - p.bottom,
        )
    }

    /// Pulls each side inwards. Shrinking past zero size flips the rect
    /// rather than producing a negative size.
    pub fn shrunk(&self, padding: impl Into<Padding>) -> Self {
        self.grown(padding.into().negated())
    }

    /// Position and size each rounded to `digits` decimal places.
    pub fn rounded(&self, digits: i32) -> Self {
        Self::new(
            round_to(self.x(), digits),
            round_to(self.y(), digits),
            round_to(self.width(), digits),
            round_to(self.height(), digits),
        )
    }

    /// Smallest rect containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Self {
        Self::from_extents(
            Vector::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            Vector::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        )
    }

    /// Shared area, or `None` if the rects do not overlap. Rects that only
    /// touch produce a zero-width or zero-height intersection.
    pub fn intersection(&self, other: &Rect) -> Option<Self> {
        let left = self.left().max(other.left());
        let right = self.right().min(other.right());
        let bottom = self.bottom().max(other.bottom());
        let top = self.top().min(other.top());

        if left > right || bottom > top {
            return None;
        }
        Some(Self::from_extents(
            Vector::new(left, bottom),
            Vector::new(right, top),
        ))
    }

    /// Containment with an inclusive boundary: a point lying exactly on an
    /// edge is inside. A rect is contained iff all four of its corners are.
    pub fn contains(&self, target: impl Into<Target>) -> bool {
        match target.into() {
            Target::Point(p) => self.contains_point(p),
            Target::Rect(r) => r.vertices().into_iter().all(|v| self.contains_point(v)),
        }
    }

    #[inline]
    fn contains_point(&self, p: Vector) -> bool {
        self.left() <= p.x && p.x <= self.right() && self.bottom() <= p.y && p.y <= self.top()
    }

    /// Standard AABB test. Rects sharing only an edge or a corner overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() < other.left()
            || self.left() > other.right()
            || self.top() < other.bottom()
            || self.bottom() > other.top())
    }

    /// [`Rect::overlaps`] against a point or a rect.
    #[inline]
    pub fn touching(&self, target: impl Into<Target>) -> bool {
        self.overlaps(&target.into().to_rect())
    }

    #[inline]
    pub fn outside(&self, target: impl Into<Target>) -> bool {
        !self.touching(target)
    }

    /// True if `self` lies entirely within the bounds of `shape`.
    #[inline]
    pub fn inside(&self, shape: &impl Shape) -> bool {
        shape.bounding_rect().contains(*self)
    }

    /// Uniformly random point inside, boundary included.
    pub fn random_point(&self, rng: &mut impl Rng) -> Vector {
        Vector::new(
            random_range(rng, self.left(), self.right()),
            random_range(rng, self.bottom(), self.top()),
        )
    }
}

// 2^32, the first f32 above u32::MAX.
const U32_LIMIT: f32 = 4_294_967_296.0;

#[inline]
fn ceil_to_u32(value: f32) -> Option<u32> {
    let c = value.ceil();
    (c >= 0.0 && c < U32_LIMIT).then_some(c as u32)
}

#[inline]
fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect({}, {}, {}, {})",
            self.x(),
            self.y(),
            self.width(),
            self.height()
        )
    }
}

impl Add<Vector> for Rect {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Vector) -> Self {
        self.displaced(rhs)
    }
}

impl Sub<Vector> for Rect {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Vector) -> Self {
        self.displaced(-rhs)
    }
}

impl AbsDiffEq for Rect {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.min.abs_diff_eq(&other.min, epsilon)
            && self.max.abs_diff_eq(&other.max, epsilon)
            && self.size.abs_diff_eq(&other.size, epsilon)
    }
}

impl RelativeEq for Rect {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.min.relative_eq(&other.min, epsilon, max_relative)
            && self.max.relative_eq(&other.max, epsilon, max_relative)
            && self.size.relative_eq(&other.size, epsilon, max_relative)
    }
}

impl UlpsEq for Rect {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.min.ulps_eq(&other.min, epsilon, max_ulps)
            && self.max.ulps_eq(&other.max, epsilon, max_ulps)
            && self.size.ulps_eq(&other.size, epsilon, max_ulps)
    }
}
