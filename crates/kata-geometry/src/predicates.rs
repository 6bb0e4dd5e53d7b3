//! Geometric predicates.

use serde::{Deserialize, Serialize};

use crate::shapes::{Circle, Point};

/// `true` if sides `a`, `b` and `c` form a non-degenerate triangle: each
/// side is strictly shorter than the sum of the other two.
///
/// `(1, 2, 3) -> false`, `(3, 4, 5) -> true`, `(10, 1, 1) -> false`,
/// `(10, 10, 10) -> true`.
#[must_use]
pub fn is_triangle(a: u64, b: u64, c: u64) -> bool {
    let (a, b, c) = (u128::from(a), u128::from(b), u128::from(c));
    a < b + c && b < a + c && c < a + b
}

/// An axis-aligned rectangle placed on a screen: `top` grows downwards,
/// `left` grows rightwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    /// Distance of the top edge from the origin.
    pub top: f64,
    /// Distance of the left edge from the origin.
    pub left: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Bounds {
    /// Create bounds from position and size.
    #[must_use]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// `true` if the two rectangles share an area. Rectangles that only touch
/// along an edge do not overlap.
///
/// `{0,0,10,10}` and `{5,5,20,20}` overlap; `{0,0,10,10}` and
/// `{20,20,20,20}` do not.
#[must_use]
pub fn do_rectangles_overlap(a: &Bounds, b: &Bounds) -> bool {
    a.left < b.right() && b.left < a.right() && a.top < b.bottom() && b.top < a.bottom()
}

/// `true` if `point` lies strictly inside `circle`.
#[must_use]
pub fn is_inside_circle(circle: &Circle, point: &Point) -> bool {
    let dx = point.x - circle.center.x;
    let dy = point.y - circle.center.y;
    dx.hypot(dy) < circle.radius
}
