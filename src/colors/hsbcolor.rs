//! This module implements the HSB color space, also known as HSV: a cylindrical rearrangement of RGB
//! where hue is an angle, saturation the distance from gray, and brightness the largest RGB
//! component. It's a poor model of how colors actually look, but it's the one a hue wheel is drawn
//! in: walking around the wheel changes hue and walking outward changes saturation, so gradients
//! around a wheel are interpolated here.

use bound::Bound;
use color::{Color, DeviceColor};
use coord::Coord;

/// An HSB color. Unlike the usual degrees, hue is given as a fraction of a full turn, from 0
/// (inclusive) to 1 (exclusive), with red at 0, green at 1/3 and blue at 2/3.
/// # Example
/// ```
/// # use chroma_wheel::prelude::*;
/// let red = HSBColor{h: 0., s: 1., b: 1., a: 1.};
/// let yellow = HSBColor{h: 1. / 6., s: 1., b: 1., a: 1.};
/// assert_eq!(red.to_rgb().to_string(), "#FF0000");
/// assert_eq!(yellow.to_rgb().to_string(), "#FFFF00");
/// // halfway between them, the short way around
/// assert_eq!(red.interpolate(&yellow, 0.5).to_rgb().to_string(), "#FF8000");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSBColor {
    /// The hue, as a fraction of a full turn in `[0, 1)`.
    pub h: f64,
    /// The saturation, the relative distance from the gray of equal brightness. Ranges from 0 to 1.
    pub s: f64,
    /// The brightness, the largest of the RGB components. Ranges from 0 to 1.
    pub b: f64,
    /// The alpha component. Carried through interpolation, but device colors are always opaque.
    pub a: f64,
}

/// Wraps any hue into `[0, 1)`.
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(1.0);
    // rem_euclid rounds tiny negative hues up to exactly 1
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// The signed hue change that takes `from` to `to` along the shorter way around the wheel. Positive
/// values go up in hue. A change of exactly half a turn is positive.
pub fn shortest_hue_delta(from: f64, to: f64) -> f64 {
    let delta = wrap_hue(to) - wrap_hue(from);
    if delta > 0.5 {
        delta - 1.0
    } else if delta < -0.5 {
        delta + 1.0
    } else {
        delta
    }
}

/// How far apart two hues are around the wheel, between 0 and 1/2.
pub fn hue_distance(h1: f64, h2: f64) -> f64 {
    shortest_hue_delta(h1, h2).abs()
}

impl HSBColor {
    /// Interpolates between two colors. Hue takes the shorter way around the wheel; saturation,
    /// brightness and alpha are blended linearly. A `fraction` of 0 gives `self` and 1 gives `other`.
    pub fn interpolate(&self, other: &HSBColor, fraction: f64) -> HSBColor {
        let lerp = |a: f64, b: f64| a + (b - a) * fraction;
        HSBColor {
            h: wrap_hue(self.h + shortest_hue_delta(self.h, other.h) * fraction),
            s: lerp(self.s, other.s),
            b: lerp(self.b, other.b),
            a: lerp(self.a, other.a),
        }
    }
}

impl Color for HSBColor {
    fn from_rgb(rgb: DeviceColor) -> HSBColor {
        // More info: https://en.wikipedia.org/wiki/HSL_and_HSV#Formal_derivation
        let components = [rgb.r, rgb.g, rgb.b];
        let max_c = components.iter().cloned().fold(-1.0, f64::max);
        let min_c = components.iter().cloned().fold(2.0, f64::min);
        let chroma = max_c - min_c;

        // hue on the hexagon, in sixths of a turn; gray gets a hue of 0
        let sextant = if chroma == 0.0 {
            0.0
        } else if max_c == rgb.r {
            (rgb.g - rgb.b) / chroma
        } else if max_c == rgb.g {
            (rgb.b - rgb.r) / chroma + 2.0
        } else {
            (rgb.r - rgb.g) / chroma + 4.0
        };

        let saturation = if max_c == 0.0 { 0.0 } else { chroma / max_c };

        HSBColor {
            h: wrap_hue(sextant / 6.0),
            s: saturation,
            b: max_c,
            a: rgb.alpha(),
        }
    }

    fn to_rgb(&self) -> DeviceColor {
        let chroma = self.s * self.b;
        let sextant = wrap_hue(self.h) * 6.0;
        // the second-largest component, where chroma is the largest and the smallest is 0
        let x = chroma * (1.0 - (sextant % 2.0 - 1.0).abs());
        let (r1, g1, b1) = if sextant < 1.0 {
            (chroma, x, 0.0)
        } else if sextant < 2.0 {
            (x, chroma, 0.0)
        } else if sextant < 3.0 {
            (0.0, chroma, x)
        } else if sextant < 4.0 {
            (0.0, x, chroma)
        } else if sextant < 5.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };
        let offset = self.b - chroma;
        DeviceColor::new(r1 + offset, g1 + offset, b1 + offset)
    }
}

impl From<Coord> for HSBColor {
    fn from(c: Coord) -> HSBColor {
        HSBColor {
            h: c.x,
            s: c.y,
            b: c.z,
            a: 1.0,
        }
    }
}

impl From<HSBColor> for Coord {
    fn from(val: HSBColor) -> Coord {
        Coord {
            x: val.h,
            y: val.s,
            z: val.b,
        }
    }
}

impl Bound for HSBColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }
}
