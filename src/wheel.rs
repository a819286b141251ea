//! This module defines the contract shared by the interactive pickers, and the geometry of the square
//! area they're drawn in. A picker of size `s` occupies the square from `(0, 0)` to `(s, s)` in screen
//! coordinates, with `y` growing downwards; the wheel is the circle inscribed in it. Angles are
//! measured clockwise on screen, starting from the bottom of the wheel, which is where the first
//! color of a hue wheel sits.
//!
//! The two kinds of picker live in the [`wheels`](../wheels/index.html) module.

use std::f64::consts::{FRAC_PI_2, PI};

use geo::Point;

use color::DeviceColor;
use gradient::{self, GradientError, Transition};

/// A full turn, in radians.
const TAU: f64 = 2.0 * PI;

/// The radius of the wheel in a picker of the given size.
pub fn wheel_radius(size: f64) -> f64 {
    size / 2.0
}

/// The center of the wheel in a picker of the given size.
pub fn wheel_center(size: f64) -> Point<f64> {
    Point::new(size / 2.0, size / 2.0)
}

/// Pulls a location outside of the wheel back to the wheel's edge, along the ray from the center.
/// Locations inside the wheel are returned unchanged.
/// # Example
/// ```
/// # extern crate geo;
/// # extern crate chroma_wheel;
/// # use geo::Point;
/// # use chroma_wheel::wheel::constrain_to_wheel;
/// # fn main() {
/// let inside = Point::new(60., 40.);
/// assert_eq!(constrain_to_wheel(inside, 100.), inside);
/// // 100 to the right of the center of a wheel of radius 50
/// let outside = constrain_to_wheel(Point::new(150., 50.), 100.);
/// assert!((outside.x() - 100.).abs() <= 1e-9);
/// assert!((outside.y() - 50.).abs() <= 1e-9);
/// # }
/// ```
pub fn constrain_to_wheel(location: Point<f64>, size: f64) -> Point<f64> {
    let center = wheel_center(size);
    let radius = wheel_radius(size);
    let offset = location - center;
    let dist = offset.x().hypot(offset.y());
    if dist <= radius {
        return location;
    }
    trace!("pulling {:?} back onto a wheel of radius {}", location, radius);
    center + offset * (radius / dist)
}

/// Wraps any angle into `[0, 2π)`.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Converts a location to the angle from the bottom of the wheel, clockwise, in `[0, 2π)`, and the
/// distance from the wheel's center.
pub fn location_to_polar(location: Point<f64>, size: f64) -> (f64, f64) {
    let offset = location - wheel_center(size);
    // atan2 starts at the right-hand side; the bottom is a quarter turn further
    let angle = wrap_angle(offset.y().atan2(offset.x()) - FRAC_PI_2);
    (angle, offset.x().hypot(offset.y()))
}

/// The inverse of [`location_to_polar`].
pub fn polar_to_location(angle: f64, distance: f64, size: f64) -> Point<f64> {
    let center = wheel_center(size);
    let theta = angle + FRAC_PI_2;
    Point::new(
        center.x() + distance * theta.cos(),
        center.y() + distance * theta.sin(),
    )
}

/// A picker: a gradient laid out over a wheel, which maps locations to colors and back. Every
/// picker splits its gradient into transitions covering positions 0 to 1, and only differs in how
/// it lays those positions out and how it blends the two colors of a transition.
pub trait WheelMapping {
    /// The transitions of the gradient, in order of position.
    fn transitions(&self) -> &[Transition];

    /// The color `fraction` of the way through `transition`.
    fn interpolate(&self, transition: &Transition, fraction: f64) -> DeviceColor;

    /// The color shown at `location` in a picker of the given size. Locations outside of the wheel
    /// give the color on its edge.
    /// # Errors
    /// Returns `GradientError::PercentNotInGradient` if the location isn't made of numbers.
    fn color_at_location(&self, location: Point<f64>, size: f64) -> Result<DeviceColor, GradientError>;

    /// Where `color` appears in a picker of the given size, or as close to it as the picker gets.
    /// # Errors
    /// Returns `GradientError::ColorNotInGradient` if the gradient has nothing resembling `color`.
    fn location_for_color(&self, color: &DeviceColor, size: f64) -> Result<Point<f64>, GradientError>;

    /// The transition covering `position`, falling back to the nearest end.
    fn transition_at(&self, position: f64) -> Result<&Transition, GradientError> {
        gradient::transition_at(self.transitions(), position)
    }

    /// The color at `position` on the gradient, between 0 and 1.
    fn color_at_position(&self, position: f64) -> Result<DeviceColor, GradientError> {
        let transition = self.transition_at(position)?;
        Ok(self.interpolate(transition, transition.local_fraction(position)))
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_geometry() {
        assert_eq!(wheel_radius(300.), 150.);
        assert_eq!(wheel_center(300.), Point::new(150., 150.));
    }

    #[test]
    fn test_constrain_keeps_direction() {
        let constrained = constrain_to_wheel(Point::new(0., 0.), 200.);
        let (angle, dist) = location_to_polar(constrained, 200.);
        let (orig_angle, _) = location_to_polar(Point::new(0., 0.), 200.);
        assert!((dist - 100.).abs() <= 1e-9);
        assert!((angle - orig_angle).abs() <= 1e-9);
    }

    #[test]
    fn test_angles_start_at_bottom_and_go_clockwise() {
        let size = 100.;
        let (bottom, _) = location_to_polar(Point::new(50., 90.), size);
        assert!(bottom.abs() <= 1e-12);
        let (left, _) = location_to_polar(Point::new(10., 50.), size);
        assert!((left - FRAC_PI_2).abs() <= 1e-12);
        let (top, _) = location_to_polar(Point::new(50., 10.), size);
        assert!((top - PI).abs() <= 1e-12);
        let (right, _) = location_to_polar(Point::new(90., 50.), size);
        assert!((right - 3. * FRAC_PI_2).abs() <= 1e-12);
    }

    #[test]
    fn test_polar_roundtrip() {
        let size = 240.;
        for &(x, y) in [(10., 200.), (130., 20.), (119., 121.), (200., 200.)].iter() {
            let (angle, dist) = location_to_polar(Point::new(x, y), size);
            assert!(angle >= 0. && angle < TAU);
            let back = polar_to_location(angle, dist, size);
            assert!((back.x() - x).abs() <= 1e-9);
            assert!((back.y() - y).abs() <= 1e-9);
        }
    }

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(-FRAC_PI_2) - 3. * FRAC_PI_2).abs() <= 1e-12);
        assert_eq!(wrap_angle(TAU), 0.);
        assert!(wrap_angle(::std::f64::NAN).is_nan());
    }
}
