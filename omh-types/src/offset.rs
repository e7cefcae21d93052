use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Displacement between two points in a 2d cartesian coordinate system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset2D<Num = f64> {
    dx: Num,
    dy: Num,
}

impl<Num: num_traits::Num + Copy> Offset2D<Num> {
    /// Creates a new offset.
    pub const fn new(dx: Num, dy: Num) -> Self {
        Self { dx, dy }
    }

    /// Horizontal component.
    pub fn dx(&self) -> Num {
        self.dx
    }

    /// Vertical component.
    pub fn dy(&self) -> Num {
        self.dy
    }

    /// Squared length of the offset.
    pub fn length_sq(&self) -> Num {
        self.dx * self.dx + self.dy * self.dy
    }
}

impl<Num: Float> Offset2D<Num> {
    /// Length of the offset.
    pub fn length(&self) -> Num {
        self.length_sq().sqrt()
    }
}

impl<Num: num_traits::Num + Copy> std::ops::Add for Offset2D<Num> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            dx: self.dx + rhs.dx,
            dy: self.dy + rhs.dy,
        }
    }
}

impl<Num: num_traits::Num + Copy> std::ops::Mul<Num> for Offset2D<Num> {
    type Output = Self;

    fn mul(self, rhs: Num) -> Self::Output {
        Self {
            dx: self.dx * rhs,
            dy: self.dy * rhs,
        }
    }
}

impl<Num: num_traits::Signed + Copy> std::ops::Neg for Offset2D<Num> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length() {
        let offset = Offset2D::new(6.0, 8.0);
        assert_eq!(offset.length_sq(), 100.0);
        assert_eq!(offset.length(), 10.0);
    }

    #[test]
    fn scale_and_negate() {
        let offset = Offset2D::new(1.5, -2.0);
        assert_eq!(offset * 2.0, Offset2D::new(3.0, -4.0));
        assert_eq!(-offset, Offset2D::new(-1.5, 2.0));
        assert_eq!(offset + -offset, Offset2D::new(0.0, 0.0));
    }
}
