//! This module defines the [`Color`] trait and the two color types everything else is built around:
//! [`DeviceColor`], the gamma-corrected RGB color that ends up on screen, and [`XYZColor`], the CIE
//! 1931 XYZ space that lights are described in. Other representations (such as HSB, in the
//! [`colors`](../colors/index.html) module) convert through `DeviceColor`.

use std::error::Error;
use std::fmt;

use float_cmp::{ApproxEq, F64Margin};

use bound::Bound;
use chromaticity::XYPoint;
use colors::HSBColor;
use consts::{self, LINEAR_RGB_TO_XYZ, XYZ_TO_LINEAR_RGB};
use coord::Coord;
use gamut::Gamut;

/// A trait that includes any color representation that can be converted to and from a
/// [`DeviceColor`]. Everything a picker shows is eventually a device color, so it's the common
/// currency here, the way XYZ would be in a general-purpose color library.
pub trait Color: Sized {
    /// Converts from a device color.
    fn from_rgb(rgb: DeviceColor) -> Self;
    /// Converts to a device color. This may be lossy: XYZ values outside of what the screen can show
    /// have to be brought into range.
    fn to_rgb(&self) -> DeviceColor;
    /// Converts between any two color representations.
    /// # Example
    /// ```
    /// # use chroma_wheel::prelude::*;
    /// let red = DeviceColor::new(1., 0., 0.);
    /// let hsb: HSBColor = red.convert();
    /// assert!(hsb.h.abs() <= 1e-12);
    /// assert!((hsb.s - 1.).abs() <= 1e-12);
    /// ```
    fn convert<T: Color>(&self) -> T {
        T::from_rgb(self.to_rgb())
    }
}

/// An error in parsing a hex code.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RGBParseError {
    /// The string wasn't of the form `#RRGGBB` or `#RGB`.
    InvalidHexSyntax,
}

impl fmt::Display for RGBParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RGBParseError::InvalidHexSyntax => write!(f, "invalid hex code syntax"),
        }
    }
}

impl Error for RGBParseError {}

/// A color as a screen shows it: gamma-corrected sRGB components between 0 and 1. Alpha is always
/// 1: every color here describes light, which is never translucent.
/// # Example
/// ```
/// # use chroma_wheel::prelude::*;
/// let teal = DeviceColor::from_hex_code("#008080").unwrap();
/// assert_eq!(teal.to_string(), "#008080");
/// assert!(teal.hsb().h > 0.49 && teal.hsb().h < 0.51);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceColor {
    /// The red component, between 0 and 1.
    pub r: f64,
    /// The green component, between 0 and 1.
    pub g: f64,
    /// The blue component, between 0 and 1.
    pub b: f64,
}

impl DeviceColor {
    /// Pure black, also the fallback when a color can't be computed.
    pub const BLACK: DeviceColor = DeviceColor { r: 0., g: 0., b: 0. };
    /// Pure white.
    pub const WHITE: DeviceColor = DeviceColor { r: 1., g: 1., b: 1. };

    /// Creates a new color, clamping each component to the range 0 to 1.
    pub fn new(r: f64, g: f64, b: f64) -> DeviceColor {
        DeviceColor::clamp(DeviceColor { r, g, b })
    }

    /// The alpha component, which is always 1.
    pub fn alpha(&self) -> f64 {
        1.0
    }

    /// Parses a hex code of the form `#RRGGBB` or `#RGB`, case insensitive.
    /// # Errors
    /// Returns `RGBParseError::InvalidHexSyntax` on anything else.
    pub fn from_hex_code(hex: &str) -> Result<DeviceColor, RGBParseError> {
        let digits = match hex.strip_prefix('#') {
            Some(digits) if digits.chars().all(|c| c.is_ascii_hexdigit()) => digits,
            _ => return Err(RGBParseError::InvalidHexSyntax),
        };
        let expanded: String = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| vec![c, c]).collect(),
            _ => return Err(RGBParseError::InvalidHexSyntax),
        };
        let component = |i: usize| {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .map(|v| f64::from(v) / 255.)
                .map_err(|_| RGBParseError::InvalidHexSyntax)
        };
        Ok(DeviceColor {
            r: component(0)?,
            g: component(2)?,
            b: component(4)?,
        })
    }

    /// Returns `true` if every component is within a millionth of the other color's.
    pub fn approx_equal(&self, other: &DeviceColor) -> bool {
        let margin = F64Margin {
            epsilon: 1e-6,
            ulps: 4,
        };
        self.r.approx_eq(other.r, margin)
            && self.g.approx_eq(other.g, margin)
            && self.b.approx_eq(other.b, margin)
    }

    /// The hue, saturation and brightness of this color.
    pub fn hsb(&self) -> HSBColor {
        HSBColor::from_rgb(*self)
    }

    /// The CIE xy chromaticity of this color, clamped into gamut C. See
    /// [`xy_in_gamut`](#method.xy_in_gamut).
    pub fn xy(&self) -> XYPoint {
        self.xy_in_gamut(Gamut::C)
    }

    /// The CIE xy chromaticity of this color. If that falls outside of `gamut`, the closest point
    /// inside of it is returned instead. Black has no chromaticity at all; it's given the center of
    /// the gamut.
    pub fn xy_in_gamut(&self, gamut: Gamut) -> XYPoint {
        match XYZColor::from_rgb(*self).chromaticity() {
            Some(xy) => gamut.closest_point(xy),
            None => gamut.centroid(),
        }
    }

    /// Linearly blends the components of two colors: a `fraction` of 0 gives `self`, 1 gives
    /// `other`.
    pub fn lerp(&self, other: &DeviceColor, fraction: f64) -> DeviceColor {
        let start: Coord = (*self).into();
        let end: Coord = (*other).into();
        end.weighted_midpoint(&start, fraction).into()
    }
}

impl Color for DeviceColor {
    fn from_rgb(rgb: DeviceColor) -> DeviceColor {
        rgb
    }
    fn to_rgb(&self) -> DeviceColor {
        *self
    }
}

impl fmt::Display for DeviceColor {
    /// Formats as an uppercase hex code such as `#FF8000`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let to_u8 = |c: f64| (c.max(0.0).min(1.0) * 255.0).round() as u8;
        write!(f, "#{:02X}{:02X}{:02X}", to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }
}

impl From<Coord> for DeviceColor {
    fn from(c: Coord) -> DeviceColor {
        DeviceColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl From<DeviceColor> for Coord {
    fn from(val: DeviceColor) -> Coord {
        Coord {
            x: val.r,
            y: val.g,
            z: val.b,
        }
    }
}

/// A color in the CIE 1931 XYZ space, relative to the D65 white point. `y` is the luminance.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis of the CIE 1931 XYZ space.
    pub x: f64,
    /// The Y axis: luminance.
    pub y: f64,
    /// The Z axis, roughly corresponding to blue stimulation.
    pub z: f64,
}

impl XYZColor {
    /// The chromaticity `(X / (X + Y + Z), Y / (X + Y + Z))`, or `None` for black, which has no
    /// chromaticity.
    pub fn chromaticity(&self) -> Option<XYPoint> {
        let sum = self.x + self.y + self.z;
        if sum == 0.0 {
            return None;
        }
        Some(XYPoint::new(self.x / sum, self.y / sum))
    }
}

impl Color for XYZColor {
    /// Undoes gamma companding and converts the linear components with the D65 matrix.
    fn from_rgb(rgb: DeviceColor) -> XYZColor {
        let linear = [
            consts::gamma_expand(rgb.r),
            consts::gamma_expand(rgb.g),
            consts::gamma_expand(rgb.b),
        ];
        let [x, y, z] = consts::transform(&LINEAR_RGB_TO_XYZ, linear);
        XYZColor { x, y, z }
    }

    /// Converts to linear RGB with the D65 matrix and applies gamma companding. Negative components
    /// are clipped to 0; if a component exceeds 1, all three are divided by the largest.
    fn to_rgb(&self) -> DeviceColor {
        let linear = consts::transform(&XYZ_TO_LINEAR_RGB, [self.x, self.y, self.z]);
        let mut rgb = [0.; 3];
        for i in 0..3 {
            rgb[i] = consts::gamma_compand(linear[i]).max(0.0);
        }
        let max = rgb.iter().cloned().fold(0.0, f64::max);
        if max > 1.0 {
            for c in rgb.iter_mut() {
                *c /= max;
            }
        }
        DeviceColor {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hex_parsing() {
        let orange = DeviceColor::from_hex_code("#ff8000").unwrap();
        assert!((orange.r - 1.).abs() <= 1e-12);
        assert!((orange.g - 128. / 255.).abs() <= 1e-12);
        assert_eq!(orange.b, 0.);
        assert_eq!(orange.to_string(), "#FF8000");
        let short = DeviceColor::from_hex_code("#0F0").unwrap();
        assert_eq!(short.to_string(), "#00FF00");
        assert!(DeviceColor::from_hex_code("ff8000").is_err());
        assert!(DeviceColor::from_hex_code("#ff80").is_err());
        assert!(DeviceColor::from_hex_code("#gg8000").is_err());
    }

    #[test]
    fn test_new_clamps() {
        let c = DeviceColor::new(-0.5, 0.5, 1.5);
        assert_eq!(c, DeviceColor { r: 0., g: 0.5, b: 1. });
    }

    #[test]
    fn test_black_xy_is_centroid() {
        assert_eq!(DeviceColor::BLACK.xy(), Gamut::C.centroid());
        assert_eq!(DeviceColor::BLACK.xy_in_gamut(Gamut::A), Gamut::A.centroid());
    }

    #[test]
    fn test_xy_is_in_gamut() {
        // pure sRGB blue is outside of gamut B
        let blue = DeviceColor::new(0., 0., 1.);
        let xy = blue.xy_in_gamut(Gamut::B);
        let clamped_again = Gamut::B.closest_point(xy);
        assert!(xy.distance(&clamped_again) <= 1e-9);
    }

    #[test]
    fn test_white_xy() {
        let xy = DeviceColor::WHITE.xy();
        // the white point of the wide gamut matrices
        assert!((xy.x - 0.3227).abs() <= 1e-3);
        assert!((xy.y - 0.3290).abs() <= 1e-3);
    }

    #[test]
    fn test_lerp() {
        let a = DeviceColor::new(1., 0., 0.);
        let b = DeviceColor::new(0., 0., 1.);
        let mid = a.lerp(&b, 0.25);
        assert!(mid.approx_equal(&DeviceColor::new(0.75, 0., 0.25)));
        assert!(a.lerp(&b, 0.).approx_equal(&a));
        assert!(a.lerp(&b, 1.).approx_equal(&b));
    }

    #[test]
    fn test_xyz_rgb_roundtrip() {
        let color = DeviceColor::new(0.2, 0.6, 0.4);
        let xyz: XYZColor = color.convert();
        let back = xyz.to_rgb();
        assert!((back.r - color.r).abs() <= 1e-4);
        assert!((back.g - color.g).abs() <= 1e-4);
        assert!((back.b - color.b).abs() <= 1e-4);
    }
}
