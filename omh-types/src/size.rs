//! 2d size type.

use num_traits::{FromPrimitive, NumCast};
use serde::{Deserialize, Serialize};

/// Size of a rectangular area (an icon, a viewport) in a 2d cartesian
/// coordinate system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size<Num: num_traits::Num + PartialOrd + Copy = f64> {
    width: Num,
    height: Num,
}

impl<Num: num_traits::Num + FromPrimitive + PartialOrd + Copy + NumCast> Size<Num> {
    /// Creates a new size.
    pub fn new(width: Num, height: Num) -> Self {
        Self { width, height }
    }

    /// Width of the area.
    pub fn width(&self) -> Num {
        self.width
    }

    /// Half of the width of the area.
    pub fn half_width(&self) -> Num {
        self.width / Num::from_f64(2.0).expect("const conversion failed")
    }

    /// Height of the area.
    pub fn height(&self) -> Num {
        self.height
    }

    /// Half of the height of the area.
    pub fn half_height(&self) -> Num {
        self.height / Num::from_f64(2.0).expect("const conversion failed")
    }

    /// Returns true if either of the dimensions is zero.
    pub fn is_zero(&self) -> bool {
        self.width.is_zero() || self.height.is_zero()
    }

    /// Converts the numeric type of the size.
    pub fn cast<T: num_traits::Num + FromPrimitive + PartialOrd + Copy + NumCast>(
        &self,
    ) -> Size<T> {
        Size {
            width: NumCast::from(self.width).expect("invalid value"),
            height: NumCast::from(self.height).expect("invalid value"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_extents() {
        let size = Size::new(48.0, 64.0);
        assert_eq!(size.half_width(), 24.0);
        assert_eq!(size.half_height(), 32.0);
        assert!(!size.is_zero());
        assert!(Size::new(0.0, 10.0).is_zero());
    }

    #[test]
    fn cast() {
        let size: Size<f64> = Size::new(32.5, 32.4);
        let px: Size<i32> = size.cast();
        assert_eq!(px, Size::new(32, 32));
    }
}
