//! This module implements points in the CIE 1931 xy chromaticity diagram, the representation Zigbee
//! color lights are driven with. A chromaticity says nothing about brightness, so turning one into
//! something displayable always takes a brightness and a gamut as well.

use std::fmt;

use geo::{Coord as GeoCoord, Point};

use color::{Color, DeviceColor, XYZColor};
use gamut::Gamut;

/// A point `(x, y)` in the CIE 1931 chromaticity diagram. Both components conventionally range from
/// 0 to 1, but a point is not required to lie inside any particular gamut: whether it does is a
/// question for [`Gamut::contains`](../gamut/enum.Gamut.html#method.contains).
/// # Example
/// ```
/// # use chroma_wheel::prelude::*;
/// let warm = XYPoint::new(0.5, 0.41);
/// let color = warm.to_device_color(0.5, Gamut::C);
/// // a warm white: red is the largest component, blue the smallest
/// assert!(color.r >= color.g && color.g >= color.b);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYPoint {
    /// The x chromaticity coordinate, `X / (X + Y + Z)`.
    pub x: f64,
    /// The y chromaticity coordinate, `Y / (X + Y + Z)`.
    pub y: f64,
}

impl XYPoint {
    /// Creates a new point. No validation is done.
    pub fn new(x: f64, y: f64) -> XYPoint {
        XYPoint { x, y }
    }

    /// The Euclidean distance between two points in the diagram.
    pub fn distance(&self, other: &XYPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// The 2D cross product `self.x * other.y - self.y * other.x`, treating both points as vectors.
    pub fn cross(&self, other: &XYPoint) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Treats the point as a vector and subtracts another.
    pub fn minus(&self, other: &XYPoint) -> XYPoint {
        XYPoint::new(self.x - other.x, self.y - other.y)
    }

    /// Converts to CIE XYZ using `brightness` as the luminance `Y`. A point with `y == 0` has no
    /// defined XYZ value, and maps to black.
    pub fn to_xyz(&self, brightness: f64) -> XYZColor {
        if self.y == 0.0 {
            return XYZColor { x: 0., y: 0., z: 0. };
        }
        let scale = brightness / self.y;
        XYZColor {
            x: scale * self.x,
            y: brightness,
            z: scale * (1.0 - self.x - self.y),
        }
    }

    /// Converts a chromaticity and brightness into a displayable color. The point is first pulled
    /// into `gamut` if it lies outside of it. Negative components are clipped to 0, and if any
    /// component ends up above 1 all three are scaled down together so that the largest is exactly 1,
    /// which keeps the ratios between them (and so the hue) intact.
    pub fn to_device_color(&self, brightness: f64, gamut: Gamut) -> DeviceColor {
        let xy = gamut.closest_point(*self);
        if xy.y <= 0.0 {
            debug!("chromaticity {} has no luminance in {:?}", xy, gamut);
            return DeviceColor::BLACK;
        }
        xy.to_xyz(brightness).to_rgb()
    }
}

impl fmt::Display for XYPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

impl From<XYPoint> for Point<f64> {
    fn from(xy: XYPoint) -> Point<f64> {
        Point::new(xy.x, xy.y)
    }
}

impl From<XYPoint> for GeoCoord<f64> {
    fn from(xy: XYPoint) -> GeoCoord<f64> {
        GeoCoord { x: xy.x, y: xy.y }
    }
}

impl From<Point<f64>> for XYPoint {
    fn from(p: Point<f64>) -> XYPoint {
        XYPoint::new(p.x(), p.y())
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use consts::TEST_PRECISION;

    #[test]
    fn test_xy_rgb_roundtrip_inside_gamut_c() {
        let points = [
            XYPoint::new(0.3127, 0.329),
            XYPoint::new(0.35, 0.35),
            XYPoint::new(0.25, 0.25),
            XYPoint::new(0.3, 0.3),
            XYPoint::new(0.4, 0.38),
        ];
        for xy in points.iter() {
            let color = xy.to_device_color(0.5, Gamut::C);
            let back = color.xy_in_gamut(Gamut::C);
            assert!(
                back.distance(xy) <= TEST_PRECISION,
                "{} came back as {}",
                xy,
                back
            );
        }
    }

    #[test]
    fn test_out_of_gamut_is_clamped_first() {
        let outside = XYPoint::new(0.8, 0.2);
        let clamped = Gamut::C.closest_point(outside);
        let a = outside.to_device_color(0.5, Gamut::C);
        let b = clamped.to_device_color(0.5, Gamut::C);
        assert!(a.approx_equal(&b));
    }

    #[test]
    fn test_overflow_scales_to_one() {
        // saturated red at half brightness overflows the red channel
        let color = XYPoint::new(0.68, 0.31).to_device_color(0.5, Gamut::C);
        assert!((color.r - 1.).abs() <= 1e-12);
        assert!(color.g <= 1. && color.b <= 1.);
        assert!(color.g >= 0. && color.b >= 0.);
    }

    #[test]
    fn test_zero_brightness_is_black() {
        let color = XYPoint::new(0.3, 0.3).to_device_color(0., Gamut::B);
        assert!(color.approx_equal(&DeviceColor::BLACK));
    }

    #[test]
    fn test_to_xyz() {
        let xyz = XYPoint::new(0.25, 0.5).to_xyz(0.5);
        assert!((xyz.x - 0.25).abs() <= 1e-12);
        assert!((xyz.y - 0.5).abs() <= 1e-12);
        assert!((xyz.z - 0.25).abs() <= 1e-12);
    }
}
