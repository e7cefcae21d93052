//! Screen density and dp/pixel conversions.

use serde::{Deserialize, Serialize};

/// Pixel density of a screen, expressed in dots per inch.
///
/// Sizes in the option records are given in density-independent pixels
/// (dp), defined against a 160 dpi baseline; backends convert them into
/// physical pixels for the screen they draw on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenDensity(f64);

impl ScreenDensity {
    /// The baseline density at which 1 dp equals 1 physical pixel.
    pub const BASELINE_DPI: f64 = 160.0;

    /// Density of the baseline screen.
    pub const BASELINE: ScreenDensity = ScreenDensity(Self::BASELINE_DPI);

    /// Creates a density from a dpi value. Non-positive values fall back
    /// to the baseline.
    pub fn new(dpi: f64) -> Self {
        if dpi > 0.0 {
            Self(dpi)
        } else {
            Self::BASELINE
        }
    }

    /// Dots per inch.
    pub fn dpi(&self) -> f64 {
        self.0
    }

    /// Ratio of this density to the baseline one.
    pub fn scale_factor(&self) -> f64 {
        self.0 / Self::BASELINE_DPI
    }

    /// Converts a size in density-independent pixels to physical pixels.
    pub fn dp_to_px(&self, dp: f64) -> f64 {
        dp * self.scale_factor()
    }

    /// Converts a size in physical pixels to density-independent pixels.
    pub fn px_to_dp(&self, px: f64) -> f64 {
        px / self.scale_factor()
    }
}

impl Default for ScreenDensity {
    fn default() -> Self {
        Self::BASELINE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn baseline_is_identity() {
        let density = ScreenDensity::BASELINE;
        assert_eq!(density.dp_to_px(24.0), 24.0);
        assert_eq!(density.px_to_dp(24.0), 24.0);
    }

    #[test]
    fn dense_screen_scales_up() {
        // xxhdpi phone screen
        let density = ScreenDensity::new(480.0);
        assert_eq!(density.scale_factor(), 3.0);
        assert_eq!(density.dp_to_px(10.0), 30.0);
        assert_abs_diff_eq!(density.px_to_dp(density.dp_to_px(7.5)), 7.5);
    }

    #[test]
    fn invalid_dpi_falls_back_to_baseline() {
        assert_eq!(ScreenDensity::new(0.0), ScreenDensity::BASELINE);
        assert_eq!(ScreenDensity::new(-20.0), ScreenDensity::BASELINE);
    }
}
