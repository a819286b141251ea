//! This module approximates the Planckian locus, the curve of chromaticities a black body takes on as
//! it heats up, which is how white lights describe their color: as a correlated color temperature
//! (CCT), or its reciprocal, the mired. There's no closed form for the locus, so the standard
//! piecewise cubic approximation of Kim et al. is used: `x` as a cubic in `1/T`, then `y` as a cubic
//! in `x`, with a separate fit for each of three temperature ranges. Outside of 1667 K to 25000 K the
//! approximation isn't valid and no chromaticity is given.

use chromaticity::XYPoint;
use color::DeviceColor;
use gamut::Gamut;

/// The smallest mired (hottest temperature, 25000 K) on the locus approximation.
pub const MIN_MIRED: i32 = 40;
/// The largest mired (coolest temperature, about 1669 K) on the locus approximation.
pub const MAX_MIRED: i32 = 599;

/// The brightness colors computed from a temperature are shown at.
pub const PREVIEW_BRIGHTNESS: f64 = 0.5;

/// One piece of the locus approximation, valid for `min_kelvin <= T < max_kelvin`, or up to and
/// including `max_kelvin` for the last piece.
#[derive(Debug, Copy, Clone, PartialEq)]
struct LocusSegment {
    min_kelvin: f64,
    max_kelvin: f64,
    /// Coefficients of `1/T^3`, `1/T^2`, `1/T` and 1 for `x`.
    x_coeffs: [f64; 4],
    /// Coefficients of `x^3`, `x^2`, `x` and 1 for `y`.
    y_coeffs: [f64; 4],
}

impl LocusSegment {
    fn chromaticity(&self, kelvin: f64) -> XYPoint {
        let t = 1.0 / kelvin;
        let x = cubic(self.x_coeffs, t);
        XYPoint::new(x, cubic(self.y_coeffs, x))
    }
}

// Horner's method for a[0] * v^3 + a[1] * v^2 + a[2] * v + a[3]
fn cubic(a: [f64; 4], v: f64) -> f64 {
    ((a[0] * v + a[1]) * v + a[2]) * v + a[3]
}

static LOCUS_SEGMENTS: [LocusSegment; 3] = [
    LocusSegment {
        min_kelvin: 1667.0,
        max_kelvin: 2222.0,
        x_coeffs: [-0.2661239e9, -0.2343589e6, 0.8776956e3, 0.179910],
        y_coeffs: [-1.1063814, -1.34811020, 2.18555832, -0.20219683],
    },
    LocusSegment {
        min_kelvin: 2222.0,
        max_kelvin: 4000.0,
        x_coeffs: [-0.2661239e9, -0.2343589e6, 0.8776956e3, 0.179910],
        y_coeffs: [-0.9549476, -1.37418593, 2.09137015, -0.16748867],
    },
    LocusSegment {
        min_kelvin: 4000.0,
        max_kelvin: 25000.0,
        x_coeffs: [-3.0258469e9, 2.1070379e6, 0.2226347e3, 0.240390],
        y_coeffs: [3.0817580, -5.87338670, 3.75112997, -0.37001483],
    },
];

lazy_static! {
    // every whole mired on the locus, for the reverse search
    static ref LOCUS_TABLE: Vec<(i32, XYPoint)> = (MIN_MIRED..=MAX_MIRED)
        .filter_map(|mired| cct_from_mired(mired)
            .and_then(xy_from_cct)
            .map(|xy| (mired, xy)))
        .collect();
}

/// Converts a mired value to a color temperature in Kelvin, or `None` if the mired isn't positive.
/// # Example
/// ```
/// # use chroma_wheel::planckian::cct_from_mired;
/// assert_eq!(cct_from_mired(500), Some(2000.));
/// assert_eq!(cct_from_mired(0), None);
/// ```
pub fn cct_from_mired(mired: i32) -> Option<f64> {
    if mired <= 0 {
        return None;
    }
    Some(1e6 / f64::from(mired))
}

/// Converts a color temperature in Kelvin to the nearest whole mired, or `None` if the temperature
/// isn't a positive, finite number.
pub fn kelvin_to_mired(kelvin: f64) -> Option<i32> {
    if !(kelvin > 0.0) || !kelvin.is_finite() {
        return None;
    }
    Some((1e6 / kelvin).round() as i32)
}

/// The chromaticity of the Planckian locus at the given temperature. The ranges `[1667, 2222)`,
/// `[2222, 4000)` and `[4000, 25000]` each use their own fit; anything else returns `None`.
/// # Example
/// ```
/// # use chroma_wheel::planckian::xy_from_cct;
/// let candle = xy_from_cct(2000.).unwrap();
/// assert!((candle.x - 0.527).abs() <= 1e-3);
/// assert!(xy_from_cct(1000.).is_none());
/// ```
pub fn xy_from_cct(kelvin: f64) -> Option<XYPoint> {
    let last = LOCUS_SEGMENTS.len() - 1;
    LOCUS_SEGMENTS
        .iter()
        .enumerate()
        .find(|&(i, seg)| {
            kelvin >= seg.min_kelvin
                && (kelvin < seg.max_kelvin || (i == last && kelvin <= seg.max_kelvin))
        })
        .map(|(_, seg)| seg.chromaticity(kelvin))
}

/// The color of a white light at the given mired, at [`PREVIEW_BRIGHTNESS`] within gamut C. `None`
/// if the mired isn't on the locus approximation.
pub fn color_from_mired(mired: i32) -> Option<DeviceColor> {
    cct_from_mired(mired)
        .and_then(xy_from_cct)
        .map(|xy| xy.to_device_color(PREVIEW_BRIGHTNESS, Gamut::C))
}

/// Finds the whole mired whose point on the locus is closest to `xy`, searching every mired from
/// [`MIN_MIRED`] to [`MAX_MIRED`]. Ties go to the smaller mired. Returns `None` only for
/// non-finite input.
/// # Example
/// ```
/// # use chroma_wheel::planckian::{mired_for_xy, xy_from_cct};
/// let xy = xy_from_cct(1e6 / 370.).unwrap();
/// assert_eq!(mired_for_xy(xy), Some(370));
/// ```
pub fn mired_for_xy(xy: XYPoint) -> Option<i32> {
    if !xy.x.is_finite() || !xy.y.is_finite() {
        return None;
    }
    let mut best: Option<(i32, f64)> = None;
    for &(mired, locus_xy) in LOCUS_TABLE.iter() {
        let dist = xy.distance(&locus_xy);
        match best {
            Some((_, best_dist)) if !(dist < best_dist) => {}
            _ => best = Some((mired, dist)),
        }
    }
    best.map(|(mired, _)| mired)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_mired_conversion() {
        assert_eq!(cct_from_mired(250), Some(4000.));
        assert_eq!(cct_from_mired(-3), None);
        assert_eq!(kelvin_to_mired(6500.), Some(154));
        assert_eq!(kelvin_to_mired(0.), None);
        assert_eq!(kelvin_to_mired(::std::f64::NAN), None);
    }

    #[test]
    fn test_concrete_temperatures() {
        // 2000 K comes from the first segment: warm
        let warm = cct_from_mired(500).and_then(xy_from_cct).unwrap();
        assert!((warm.x - 0.53).abs() <= 0.01);
        // 153 mired is daylight, from the last segment
        let daylight = cct_from_mired(153).and_then(xy_from_cct).unwrap();
        assert!((daylight.x - 0.31).abs() <= 0.01);
        assert!(warm.x > daylight.x);
    }

    #[test]
    fn test_range_boundaries() {
        assert!(xy_from_cct(1666.9).is_none());
        assert!(xy_from_cct(1667.).is_some());
        assert!(xy_from_cct(25000.).is_some());
        assert!(xy_from_cct(25000.1).is_none());
        assert!(xy_from_cct(::std::f64::NAN).is_none());
        assert!(color_from_mired(MIN_MIRED).is_some());
        assert!(color_from_mired(MAX_MIRED).is_some());
        assert!(color_from_mired(MAX_MIRED + 1).is_none());
        assert!(color_from_mired(0).is_none());
    }

    #[test]
    fn test_x_decreases_with_temperature() {
        let ranges = [(1667., 2221.), (2222., 3999.), (4000., 25000.)];
        for &(lo, hi) in ranges.iter() {
            let steps = 50;
            let mut prev_x = ::std::f64::INFINITY;
            for i in 0..=steps {
                let kelvin = lo + (hi - lo) * f64::from(i) / f64::from(steps);
                let xy = xy_from_cct(kelvin).unwrap();
                assert!(xy.x < prev_x, "x did not decrease at {} K", kelvin);
                prev_x = xy.x;
            }
        }
    }

    #[test]
    fn test_segments_meet_smoothly() {
        let to_color = |kelvin: f64| {
            xy_from_cct(kelvin)
                .unwrap()
                .to_device_color(PREVIEW_BRIGHTNESS, Gamut::C)
        };
        for &boundary in [2222., 4000.].iter() {
            let below = to_color(boundary - 0.5);
            let above = to_color(boundary + 0.5);
            assert!((below.r - above.r).abs() < 0.05);
            assert!((below.g - above.g).abs() < 0.05);
            assert!((below.b - above.b).abs() < 0.05);
        }
    }

    #[test]
    fn test_reverse_search() {
        for &mired in [MIN_MIRED, 153, 250, 366, 454, 500, MAX_MIRED].iter() {
            let xy = cct_from_mired(mired).and_then(xy_from_cct).unwrap();
            assert_eq!(mired_for_xy(xy), Some(mired));
        }
        // off-locus points still find their nearest neighbor
        assert!(mired_for_xy(XYPoint::new(0.6, 0.1)).is_some());
        assert_eq!(mired_for_xy(XYPoint::new(::std::f64::NAN, 0.3)), None);
    }
}
