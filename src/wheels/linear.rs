//! This module implements the temperature picker: a gradient of whites laid out from the top of the
//! picker to the bottom, blended linearly in RGB, which looks smoother than HSB for colors this close
//! to gray. Only the vertical position of a location matters. Going from a color back to a location
//! can't use hue, as most whites barely have one; the color temperature picks the transition
//! instead, and the exact spot is found by projecting the color onto that transition in RGB.

use geo::Point;

use color::DeviceColor;
use coord::Coord;
use gradient::{build_transitions, Gradient, GradientError, GradientShape, Transition};
use planckian::{self, mired_for_xy};
use range::remap;
use wheel::{self, WheelMapping};

/// Channels that change less than this across a transition can't tell where in it a color is.
const CHANNEL_EPSILON: f64 = 1e-9;

/// A temperature picker.
/// # Example
/// ```
/// # use chroma_wheel::prelude::*;
/// let strip = LinearRGBInterpolation::from_mireds(&[153, 500]).unwrap();
/// let top = strip.color_at_y(0., 100.).unwrap();
/// let bottom = strip.color_at_y(100., 100.).unwrap();
/// // cool at the top, warm at the bottom
/// assert!(top.b > bottom.b);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRGBInterpolation {
    gradient: Gradient,
    transitions: Vec<Transition>,
}

impl LinearRGBInterpolation {
    /// Lays `gradient` out from top to bottom.
    pub fn new(gradient: Gradient) -> LinearRGBInterpolation {
        let transitions = build_transitions(&gradient, GradientShape::Open);
        LinearRGBInterpolation {
            gradient,
            transitions,
        }
    }

    /// Builds a picker through the colors of the given mireds, in order. Mireds that aren't on the
    /// Planckian locus are left out.
    /// # Errors
    /// Returns `GradientError::TooFewColors` if fewer than two mireds are usable.
    pub fn from_mireds(mireds: &[i32]) -> Result<LinearRGBInterpolation, GradientError> {
        let colors = mireds
            .iter()
            .filter_map(|&mired| {
                let color = planckian::color_from_mired(mired);
                if color.is_none() {
                    debug!("skipping mired {}, which has no color", mired);
                }
                color
            })
            .collect();
        Gradient::new(colors).map(LinearRGBInterpolation::new)
    }

    /// The gradient from top to bottom.
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// The color at height `y` in a picker of the given size.
    /// # Errors
    /// Returns `GradientError::PercentNotInGradient` if `y` is NaN.
    pub fn color_at_y(&self, y: f64, size: f64) -> Result<DeviceColor, GradientError> {
        self.color_at_position(remap(y, 0.0, size, 0.0, 1.0))
    }
}

// how far `mired` is from the range a transition spans, in mireds
fn mired_gap(transition: &Transition, mired: i32) -> Option<i32> {
    let start = mired_for_xy(transition.from_color.xy())?;
    let end = mired_for_xy(transition.to_color.xy())?;
    if mired >= start.min(end) && mired <= start.max(end) {
        Some(0)
    } else {
        Some((mired - start).abs().min((mired - end).abs()))
    }
}

impl WheelMapping for LinearRGBInterpolation {
    fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    fn interpolate(&self, transition: &Transition, fraction: f64) -> DeviceColor {
        transition.rgb_color_at(fraction)
    }

    fn color_at_location(&self, location: Point<f64>, size: f64) -> Result<DeviceColor, GradientError> {
        let y = location.y().max(0.0).min(size);
        self.color_at_y(y, size)
    }

    /// Picks the transition whose end colors are closest in color temperature, the earliest one on a
    /// tie, and finds the spot on it closest to `color` in RGB. Colors off the gradient are
    /// projected onto the line through the transition's colors without stopping at either end, so
    /// the result can land outside of the transition.
    fn location_for_color(&self, color: &DeviceColor, size: f64) -> Result<Point<f64>, GradientError> {
        let mired = mired_for_xy(color.xy()).ok_or(GradientError::ColorNotInGradient)?;
        let mut best: Option<(&Transition, i32)> = None;
        for transition in self.transitions.iter() {
            let gap = match mired_gap(transition, mired) {
                Some(gap) => gap,
                None => continue,
            };
            match best {
                Some((_, best_gap)) if gap >= best_gap => {}
                _ => best = Some((transition, gap)),
            }
        }
        let (transition, gap) = best.ok_or(GradientError::ColorNotInGradient)?;
        trace!("{} at {} mired is {} mired from its transition", color, mired, gap);

        let start: Coord = transition.from_color.into();
        let end: Coord = transition.to_color.into();
        let closest = Coord::from(*color).closest_point_on_line(&start, &end);
        let fraction = closest
            .to_array()
            .iter()
            .zip(start.to_array().iter().zip(end.to_array().iter()))
            .find(|&(_, (a, b))| (b - a).abs() > CHANNEL_EPSILON)
            .map_or(0.0, |(&c, (&a, &b))| remap(c, a, b, 0.0, 1.0));

        Ok(Point::new(
            wheel::wheel_center(size).x(),
            transition.position_at(fraction) * size,
        ))
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn strip() -> LinearRGBInterpolation {
        LinearRGBInterpolation::from_mireds(&[153, 250, 350, 454, 500]).unwrap()
    }

    #[test]
    fn test_from_mireds() {
        assert_eq!(strip().transitions().len(), 4);
        let skipped = LinearRGBInterpolation::from_mireds(&[0, 153, 99999, 500]).unwrap();
        assert_eq!(skipped.gradient().len(), 2);
        assert_eq!(
            LinearRGBInterpolation::from_mireds(&[153, 99999]),
            Err(GradientError::TooFewColors(1))
        );
    }

    #[test]
    fn test_ends_of_strip() {
        let strip = strip();
        let first = planckian::color_from_mired(153).unwrap();
        let last = planckian::color_from_mired(500).unwrap();
        assert!(strip.color_at_y(0., 200.).unwrap().approx_equal(&first));
        assert!(strip.color_at_y(200., 200.).unwrap().approx_equal(&last));
        // outside of the strip is the same as its edge, and x doesn't matter
        let above = strip.color_at_location(Point::new(-30., -50.), 200.).unwrap();
        assert!(above.approx_equal(&first));
        assert!(strip.color_at_y(::std::f64::NAN, 200.).is_err());
    }

    #[test]
    fn test_interpolates_in_rgb() {
        let strip = strip();
        let a = planckian::color_from_mired(250).unwrap();
        let b = planckian::color_from_mired(350).unwrap();
        // halfway down the second of four transitions
        let mid = strip.color_at_y(75., 200.).unwrap();
        assert!(mid.approx_equal(&a.lerp(&b, 0.5)));
    }

    #[test]
    fn test_temperature_roundtrip() {
        let strip = strip();
        let size = 200.;
        for &y in [75., 30., 140., 190.].iter() {
            let color = strip.color_at_y(y, size).unwrap();
            let loc = strip.location_for_color(&color, size).unwrap();
            assert!((loc.x() - 100.).abs() <= 1e-9);
            assert!((loc.y() - y).abs() <= 1e-3, "{} came back as {}", y, loc.y());
        }
    }

    #[test]
    fn test_stop_color_maps_to_boundary() {
        let strip = strip();
        let stop = planckian::color_from_mired(350).unwrap();
        let loc = strip.location_for_color(&stop, 200.).unwrap();
        assert!((loc.y() - 100.).abs() <= 1e-6);
    }
}
