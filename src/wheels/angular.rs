//! This module implements the hue wheel: a gradient spread evenly around a circle, starting at the
//! bottom and going clockwise, with the last color blending back into the first. Colors are blended
//! in HSB, so hues travel around the color wheel instead of cutting through gray. The angle of a
//! location picks the hue, and its distance from the center picks the saturation, relative to the
//! most saturated color the gradient has at that hue: the rim of the wheel is the gradient itself.

use std::f64::consts::PI;

use geo::Point;

use bound::Bound;
use color::{Color, DeviceColor};
use colors::hsbcolor::{self, HSBColor};
use gradient::{build_transitions, Gradient, GradientError, GradientShape, Transition};
use range::{remap, remap_zero_based};
use wheel::{self, WheelMapping};

/// A hue wheel.
/// # Example
/// ```
/// # use chroma_wheel::prelude::*;
/// let colors = ["#FF0000", "#00FF00", "#0000FF"].iter()
///     .map(|hex| DeviceColor::from_hex_code(hex).unwrap())
///     .collect();
/// let wheel = AngularHSBInterpolation::new(Gradient::new(colors).unwrap());
/// // the first color sits at the bottom of the wheel, on the rim
/// let bottom = wheel.color_at_location(Point::new(50., 100.), 100.).unwrap();
/// assert_eq!(bottom.to_string(), "#FF0000");
/// // and the center is white
/// let center = wheel.color_at_location(Point::new(50., 50.), 100.).unwrap();
/// assert_eq!(center.to_string(), "#FFFFFF");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AngularHSBInterpolation {
    gradient: Gradient,
    transitions: Vec<Transition>,
}

impl AngularHSBInterpolation {
    /// Lays `gradient` out around a wheel.
    pub fn new(gradient: Gradient) -> AngularHSBInterpolation {
        let transitions = build_transitions(&gradient, GradientShape::Closed);
        AngularHSBInterpolation {
            gradient,
            transitions,
        }
    }

    /// The gradient around the rim.
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// The color on the rim at `angle` radians clockwise from the bottom of the wheel. Any angle is
    /// accepted and wrapped into a single turn.
    /// # Errors
    /// Returns `GradientError::PercentNotInGradient` if `angle` is NaN.
    pub fn color_at_angle(&self, angle: f64) -> Result<DeviceColor, GradientError> {
        self.color_at_position(angle_to_position(angle))
    }

    fn hsb_at_angle(&self, angle: f64) -> Result<HSBColor, GradientError> {
        let position = angle_to_position(angle);
        let transition = self.transition_at(position)?;
        Ok(transition.hsb_color_at(transition.local_fraction(position)))
    }
}

fn angle_to_position(angle: f64) -> f64 {
    remap(wheel::wrap_angle(angle), 0.0, 2.0 * PI, 0.0, 1.0)
}

/// Differences in a closeness term smaller than this are rounding noise, not a better match.
const CLOSENESS_EPSILON: f64 = 1e-9;

// hue, then saturation, then brightness
fn closeness(found: &HSBColor, target: &HSBColor) -> [f64; 3] {
    [
        hsbcolor::hue_distance(found.h, target.h),
        (found.s - target.s).abs(),
        (found.b - target.b).abs(),
    ]
}

// lexicographic, moving on to the next term when two are equal up to noise
fn is_closer(score: &[f64; 3], best: &[f64; 3]) -> bool {
    score
        .iter()
        .zip(best.iter())
        .find(|&(a, b)| (a - b).abs() > CLOSENESS_EPSILON)
        .map_or(false, |(a, b)| a < b)
}

impl WheelMapping for AngularHSBInterpolation {
    fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    fn interpolate(&self, transition: &Transition, fraction: f64) -> DeviceColor {
        transition.hsb_color_at(fraction).to_rgb()
    }

    fn color_at_location(&self, location: Point<f64>, size: f64) -> Result<DeviceColor, GradientError> {
        let radius = wheel::wheel_radius(size);
        let location = wheel::constrain_to_wheel(location, size);
        let (angle, dist) = wheel::location_to_polar(location, size);
        let mut hsb = self.hsb_at_angle(angle)?;
        hsb.s = remap_zero_based(dist.min(radius), radius, hsb.s);
        Ok(HSBColor::clamp(hsb).to_rgb())
    }

    /// A hue can show up in more than one transition, so every transition that passes through the
    /// color's hue proposes a location, and the one whose color comes closest to `color` wins, the
    /// earliest one on a tie. Every candidate reproduces the hue and saturation up to rounding, so
    /// those are compared with some slack, and brightness, which isn't part of the wheel, decides
    /// between transitions that pass through the same hue.
    fn location_for_color(&self, color: &DeviceColor, size: f64) -> Result<Point<f64>, GradientError> {
        let target = color.hsb();
        let radius = wheel::wheel_radius(size);
        let mut best: Option<(Point<f64>, [f64; 3])> = None;
        for transition in self.transitions.iter().filter(|t| t.contains_hue(target.h)) {
            let fraction = transition.fraction_for_hue(target.h);
            let max_saturation = transition.hsb_color_at(fraction).s;
            let dist = remap_zero_based(target.s, max_saturation, radius).min(radius);
            let angle = remap(transition.position_at(fraction), 0.0, 1.0, 0.0, 2.0 * PI);
            let candidate = wheel::polar_to_location(angle, dist, size);
            let found = self.color_at_location(candidate, size)?.hsb();
            let score = closeness(&found, &target);
            trace!("candidate {:?} for {} scores {:?}", candidate, color, score);
            match best {
                Some((_, best_score)) if !is_closer(&score, &best_score) => {}
                _ => best = Some((candidate, score)),
            }
        }
        best.map(|(location, _)| location)
            .ok_or(GradientError::ColorNotInGradient)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn hex_gradient(hexes: &[&str]) -> Gradient {
        let colors = hexes
            .iter()
            .map(|hex| DeviceColor::from_hex_code(hex).unwrap())
            .collect();
        Gradient::new(colors).unwrap()
    }

    fn rainbow() -> AngularHSBInterpolation {
        AngularHSBInterpolation::new(hex_gradient(&[
            "#FF0000", "#FFFF00", "#00FF00", "#0000FF", "#FF00FF",
        ]))
    }

    #[test]
    fn test_colors_sit_at_even_angles() {
        let wheel = rainbow();
        let step = 2. * PI / 5.;
        assert_eq!(wheel.color_at_angle(0.).unwrap().to_string(), "#FF0000");
        assert_eq!(wheel.color_at_angle(step).unwrap().to_string(), "#FFFF00");
        assert_eq!(wheel.color_at_angle(3. * step).unwrap().to_string(), "#0000FF");
        // a full turn comes back around to the start
        assert_eq!(wheel.color_at_angle(2. * PI).unwrap().to_string(), "#FF0000");
        assert_eq!(wheel.color_at_angle(-step).unwrap().to_string(), "#FF00FF");
        assert!(wheel.color_at_angle(::std::f64::NAN).is_err());
    }

    #[test]
    fn test_closing_transition_goes_short_way() {
        let wheel = rainbow();
        // halfway from magenta back to red is a pinkish red, not green
        let between = wheel.color_at_angle(2. * PI * 0.9).unwrap().hsb();
        assert!((between.h - 11. / 12.).abs() <= 1e-9);
    }

    #[test]
    fn test_wheel_roundtrip() {
        let wheel = rainbow();
        let size = 300.;
        for &(x, y) in [(200., 120.), (100., 220.), (150., 40.), (60., 140.), (160., 250.)].iter() {
            let loc = Point::new(x, y);
            let color = wheel.color_at_location(loc, size).unwrap();
            let back = wheel.location_for_color(&color, size).unwrap();
            assert!(
                (back.x() - x).abs() <= 1. && (back.y() - y).abs() <= 1.,
                "{:?} came back as {:?}",
                loc,
                back
            );
        }
    }

    #[test]
    fn test_roundtrip_with_recurring_hues_and_brightness() {
        // the third transition runs from blue up past red to yellow, and the fourth comes back down
        // through red to purple, so reds show up three times at different brightnesses
        let wheel = AngularHSBInterpolation::new(hex_gradient(&[
            "#FF8080", "#40C040", "#2020FF", "#FFD000", "#A000A0",
        ]));
        let size = 300.;
        for i in 1..20 {
            for j in 0..72 {
                let angle = 2. * PI * f64::from(j) / 72.;
                let dist = wheel::wheel_radius(size) * f64::from(i) / 20.;
                let loc = wheel::polar_to_location(angle, dist, size);
                let color = wheel.color_at_location(loc, size).unwrap();
                let back = wheel.location_for_color(&color, size).unwrap();
                let error = (back.x() - loc.x()).hypot(back.y() - loc.y());
                assert!(error <= 1e-6, "{:?} came back as {:?}", loc, back);
            }
        }
    }

    #[test]
    fn test_noise_does_not_outrank_brightness() {
        let best = [1e-16, 0., 0.4];
        assert!(is_closer(&[0., 1e-17, 0.], &best));
        assert!(!is_closer(&[0., 0., 0.5], &best));
        assert!(!is_closer(&best, &best));
        assert!(is_closer(&[0., 0.9, 0.9], &[0.1, 0., 0.]));
    }

    #[test]
    fn test_outside_clamps_to_rim() {
        let wheel = rainbow();
        let rim = wheel.color_at_location(Point::new(150., 300.), 300.).unwrap();
        let beyond = wheel.color_at_location(Point::new(150., 1000.), 300.).unwrap();
        assert!(rim.approx_equal(&beyond));
        assert_eq!(rim.to_string(), "#FF0000");
    }

    #[test]
    fn test_saturation_is_relative() {
        let pastel = |h: f64| HSBColor { h, s: 0.5, b: 1., a: 1. }.to_rgb();
        let gradient = Gradient::new(vec![pastel(0.), pastel(1. / 3.), pastel(2. / 3.)]).unwrap();
        let wheel = AngularHSBInterpolation::new(gradient);
        let rim = wheel.color_at_location(Point::new(50., 100.), 100.).unwrap();
        assert!((rim.hsb().s - 0.5).abs() <= 1e-9);
        let halfway = wheel.color_at_location(Point::new(50., 75.), 100.).unwrap();
        assert!((halfway.hsb().s - 0.25).abs() <= 1e-9);

        let back = wheel.location_for_color(&halfway, 100.).unwrap();
        assert!((back.x() - 50.).abs() <= 1e-6);
        assert!((back.y() - 75.).abs() <= 1e-6);
    }

    #[test]
    fn test_recurring_hue() {
        let wheel = AngularHSBInterpolation::new(hex_gradient(&[
            "#FF0000", "#FFFF00", "#FF0000", "#0000FF",
        ]));
        // orange is in both the first and second transition
        let orange = DeviceColor::from_hex_code("#FF8000").unwrap();
        let loc = wheel.location_for_color(&orange, 200.).unwrap();
        let found = wheel.color_at_location(loc, 200.).unwrap();
        assert!(hsbcolor::hue_distance(found.hsb().h, orange.hsb().h) <= 1e-3);
        // cyan is nowhere: red to blue goes the short way, through magenta
        let cyan = DeviceColor::from_hex_code("#00FFFF").unwrap();
        assert_eq!(
            wheel.location_for_color(&cyan, 200.),
            Err(GradientError::ColorNotInGradient)
        );
    }
}
