//! Geometric primitives for graph layout.
//!
//! This module provides the value types the layout engine computes with.
//! Every operation returns a new value; nothing here mutates in place.
//!
//! # Overview
//!
//! - [`Vector2`] - A 2D point or displacement
//! - [`Size`] - Width and height dimensions
//! - [`Rect`] - An axis-aligned rectangle anchored at its top-left corner
//!
//! # Coordinate System
//!
//! Layouts use screen coordinates:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! A node's position is the top-left corner of its rectangle.

use serde::{Deserialize, Serialize};

/// A 2D vector used both as a position and as a displacement.
///
/// # Examples
///
/// ```
/// # use fdlayout_core::geometry::Vector2;
/// let a = Vector2::new(3.0, 4.0);
/// let b = Vector2::new(1.0, 1.0);
///
/// assert_eq!(a.magnitude(), 5.0);
/// assert_eq!(a.add_vector(b), Vector2::new(4.0, 5.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    x: f64,
    y: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new vector with the specified components
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x component
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y component
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks if both components are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another vector to this one, returning a new vector
    pub fn add_vector(self, other: Vector2) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another vector from this one, returning a new vector
    pub fn sub_vector(self, other: Vector2) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both components by the given factor
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Divides both components by the given divisor.
    ///
    /// The divisor must not be zero. Callers floor distances with
    /// [`EPSILON`](crate::EPSILON) before dividing.
    pub fn divide(self, divisor: f64) -> Self {
        debug_assert!(divisor != 0.0, "vector divided by zero");
        Self {
            x: self.x / divisor,
            y: self.y / divisor,
        }
    }

    /// Euclidean length of the vector
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Shortens the vector to `max` if its magnitude exceeds it.
    pub fn limit(self, max: f64) -> Self {
        let magnitude = self.magnitude();
        if magnitude > max {
            self.divide(magnitude).scale(max)
        } else {
            self
        }
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// Must not be called on the zero vector.
    pub fn normalize(self) -> Self {
        self.divide(self.magnitude())
    }

    /// Rotates the vector counter-clockwise by `angle` radians
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// A size with zero width and height.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f64 {
        self.height
    }

    /// Returns the larger of the two dimensions
    pub fn max_dimension(self) -> f64 {
        self.width.max(self.height)
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// An axis-aligned rectangle stored as top-left corner plus size.
///
/// Width and height are never negative: the corner based constructors
/// normalize their inputs.
///
/// # Examples
///
/// ```
/// # use fdlayout_core::geometry::Rect;
/// let rect = Rect::from_ltrb(10.0, 10.0, 20.0, 30.0);
/// assert_eq!(rect.width(), 10.0);
/// assert_eq!(rect.height(), 20.0);
///
/// let moved = rect.translate(5.0, -5.0);
/// assert_eq!(moved.left(), 15.0);
/// assert_eq!(moved.top(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    /// An empty rectangle at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a rectangle from its top-left corner and dimensions.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0, "negative rect size");
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from its four edges.
    ///
    /// Swapped edges are normalized so the result always has a
    /// non-negative size.
    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            x: left.min(right),
            y: top.min(bottom),
            width: (right - left).abs(),
            height: (bottom - top).abs(),
        }
    }

    /// Creates the smallest rectangle containing both corner points
    pub fn from_points(a: Vector2, b: Vector2) -> Self {
        Self::from_ltrb(
            a.x().min(b.x()),
            a.y().min(b.y()),
            a.x().max(b.x()),
            a.y().max(b.y()),
        )
    }

    /// Creates a rectangle of the given size anchored at the origin
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width(), size.height())
    }

    pub fn x(self) -> f64 {
        self.x
    }

    pub fn y(self) -> f64 {
        self.y
    }

    pub fn width(self) -> f64 {
        self.width
    }

    pub fn height(self) -> f64 {
        self.height
    }

    pub fn left(self) -> f64 {
        self.x
    }

    pub fn top(self) -> f64 {
        self.y
    }

    pub fn right(self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    /// Returns the top-left corner
    pub fn position(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(self) -> Vector2 {
        Vector2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns a copy with the top-left corner moved to `(x, y)`
    pub fn move_to(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    /// Returns a copy shifted by `(dx, dy)`
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        self.move_to(self.x + dx, self.y + dy)
    }

    /// Smallest rectangle containing both rectangles
    pub fn union(self, other: Rect) -> Self {
        Self::from_ltrb(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    /// Returns true if the interiors of the two rectangles overlap.
    ///
    /// Rectangles that only share an edge do not intersect.
    pub fn intersects(self, other: Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn test_vector_zero() {
        let zero = Vector2::ZERO;
        let translated = zero.add_vector(Vector2::new(10.0, 10.0));

        assert!(zero.is_zero());
        assert_eq!(translated.x(), 10.0);
        assert_eq!(translated.y(), 10.0);
    }

    #[test]
    fn test_vector_add_leaves_original() {
        let v = Vector2::new(10.0, 10.0);
        let translated = v.add_vector(Vector2::new(10.0, 10.0));

        assert_eq!(v, Vector2::new(10.0, 10.0));
        assert_eq!(translated, Vector2::new(20.0, 20.0));
    }

    #[test]
    fn test_vector_sub_scale_divide() {
        let v = Vector2::new(6.0, -4.0);
        assert_eq!(v.sub_vector(Vector2::new(1.0, 1.0)), Vector2::new(5.0, -5.0));
        assert_eq!(v.scale(0.5), Vector2::new(3.0, -2.0));
        assert_eq!(v.divide(2.0), Vector2::new(3.0, -2.0));
    }

    #[test]
    fn test_vector_magnitude() {
        assert_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Vector2::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_vector_limit() {
        let long = Vector2::new(30.0, 40.0).limit(5.0);
        assert!(approx_eq!(f64, long.x(), 3.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, long.y(), 4.0, epsilon = 1e-12));

        let short = Vector2::new(1.0, 1.0);
        assert_eq!(short.limit(5.0), short);
    }

    #[test]
    fn test_vector_rotate() {
        let v = Vector2::new(1.0, 0.0);

        let quarter = v.rotate(FRAC_PI_2);
        assert!(approx_eq!(f64, quarter.x(), 0.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, quarter.y(), 1.0, epsilon = 1e-12));

        let half = v.rotate(PI);
        assert!(approx_eq!(f64, half.x(), -1.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, half.y(), 0.0, epsilon = 1e-12));
    }

    #[test]
    fn test_rect_zero_translate() {
        let rect = Rect::ZERO;
        let translated = rect.translate(10.0, 10.0);

        assert_eq!(rect.top(), 0.0);
        assert_eq!(rect.left(), 0.0);
        assert_eq!(rect.right(), 0.0);
        assert_eq!(rect.bottom(), 0.0);
        assert_eq!(translated.top(), 10.0);
        assert_eq!(translated.left(), 10.0);
    }

    #[test]
    fn test_rect_from_ltrb_translate() {
        let rect = Rect::from_ltrb(10.0, 10.0, 20.0, 20.0);
        let translated = rect.translate(10.0, 10.0);

        assert_eq!(rect.top(), 10.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 20.0);
        assert_eq!(rect.bottom(), 20.0);
        assert_eq!(translated.top(), 20.0);
        assert_eq!(translated.left(), 20.0);
        assert_eq!(translated.size(), rect.size());
    }

    #[test]
    fn test_rect_from_points_normalizes() {
        let rect = Rect::from_points(Vector2::new(20.0, 5.0), Vector2::new(10.0, 15.0));

        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.top(), 5.0);
        assert_eq!(rect.right(), 20.0);
        assert_eq!(rect.bottom(), 15.0);
    }

    #[test]
    fn test_rect_from_ltrb_swapped_edges() {
        let rect = Rect::from_ltrb(20.0, 30.0, 10.0, 10.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.top(), 10.0);
        assert_eq!(rect.width(), 10.0);
        assert_eq!(rect.height(), 20.0);
    }

    #[test]
    fn test_rect_center_and_size() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.center(), Vector2::new(60.0, 45.0));
        assert_eq!(rect.size(), Size::new(100.0, 50.0));
        assert_eq!(Rect::from_size(Size::new(4.0, 2.0)), Rect::new(0.0, 0.0, 4.0, 2.0));
    }

    #[test]
    fn test_rect_union() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, -5.0, 10.0, 10.0);
        let merged = a.union(b);

        assert_eq!(merged.left(), 0.0);
        assert_eq!(merged.top(), -5.0);
        assert_eq!(merged.right(), 30.0);
        assert_eq!(merged.bottom(), 10.0);
    }

    #[test]
    fn test_rect_union_far_edge_within_rounding() {
        let a = Rect::new(0.0, 0.0, 158.2698392510175, 10.0);
        let b = Rect::new(-973.5697154524726, 0.0, 0.0, 10.0);
        let merged = a.union(b);

        assert_eq!(merged.left(), b.left());
        assert!(approx_eq!(f64, merged.right(), a.right(), epsilon = 1e-9));
        assert!(merged.right() >= a.right() - 1e-9);
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.intersects(Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(Rect::new(25.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_size_accessors() {
        let size = Size::new(10.0, 20.0);
        assert_eq!(size.width(), 10.0);
        assert_eq!(size.height(), 20.0);
        assert_eq!(size.max_dimension(), 20.0);
        assert!(Size::ZERO.is_zero());
    }
}
