//! This module describes the Bound trait, which allows for a description of which component values a
//! color representation supports. A device color can't have components below 0 or above 1, and
//! neither can the saturation or brightness of an HSB color, but interpolation and radial scaling can
//! produce values just outside of those ranges.

use color::{Color, DeviceColor};
use coord::Coord;

/// Describes a color representation whose components each have explicit bounds. Only applies to
/// colors that can be embedded in 3D space, hence the conversions to and from `Coord`.
/// # Example
/// ```
/// # use chroma_wheel::prelude::*;
/// let overshoot = HSBColor{h: 0.25, s: 1.2, b: -0.1, a: 1.};
/// let clamped = HSBColor::clamp(overshoot);
/// assert_eq!((clamped.h, clamped.s, clamped.b), (0.25, 1., 0.));
/// ```
pub trait Bound: Color + Into<Coord> + From<Coord> + Copy {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component, in the order that they appear in the Coord representation.
    fn bounds() -> [(f64, f64); 3];
    /// Given a Coord, returns a Coord such that each component has been clamped to the correct
    /// bounds.
    fn clamp_coord(point: Coord) -> Coord {
        let ranges = Self::bounds();
        let mut point_vals = point.to_array();
        for (val, &(min, max)) in point_vals.iter_mut().zip(ranges.iter()) {
            *val = val.max(min).min(max);
        }
        Coord {
            x: point_vals[0],
            y: point_vals[1],
            z: point_vals[2],
        }
    }
    /// Returns a copy of `color` with every component brought within bounds. Colors that are already
    /// in bounds are returned unchanged.
    fn clamp(color: Self) -> Self {
        Self::from(Self::clamp_coord(color.into()))
    }
}

impl Bound for DeviceColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }
}
