use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::offset::Offset2D;

/// Point in a 2d cartesian coordinate system (screen pixels, dp, tile
/// space etc). The numeric type is generic so that backends can use the
/// precision native to them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D<Num = f64> {
    x: Num,
    y: Num,
}

impl<Num: num_traits::Num + Copy> Point2D<Num> {
    /// Creates a new point.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }

    /// X coordinate.
    pub fn x(&self) -> Num {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> Num {
        self.y
    }

    /// Offset from this point to `other`.
    pub fn offset_to(&self, other: &Point2D<Num>) -> Offset2D<Num> {
        Offset2D::new(other.x - self.x, other.y - self.y)
    }

    /// Squared distance between the points.
    pub fn distance_sq(&self, other: &Point2D<Num>) -> Num {
        self.offset_to(other).length_sq()
    }
}

impl<Num: Float> Point2D<Num> {
    /// Distance between the points.
    pub fn distance(&self, other: &Point2D<Num>) -> Num {
        self.distance_sq(other).sqrt()
    }
}

impl<Num: num_traits::Num + Copy> std::ops::Add<Offset2D<Num>> for Point2D<Num> {
    type Output = Self;

    fn add(self, rhs: Offset2D<Num>) -> Self::Output {
        Self {
            x: self.x + rhs.dx(),
            y: self.y + rhs.dy(),
        }
    }
}

impl<Num: num_traits::Num + Copy> std::ops::Sub<Offset2D<Num>> for Point2D<Num> {
    type Output = Self;

    fn sub(self, rhs: Offset2D<Num>) -> Self::Output {
        Self {
            x: self.x - rhs.dx(),
            y: self.y - rhs.dy(),
        }
    }
}

impl<Num: num_traits::Num + Copy> std::ops::Sub<Point2D<Num>> for Point2D<Num> {
    type Output = Offset2D<Num>;

    fn sub(self, rhs: Point2D<Num>) -> Self::Output {
        rhs.offset_to(&self)
    }
}
