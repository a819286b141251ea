//! This module defines multi-color gradients and the transitions they're made of. A gradient is an
//! ordered list of at least two colors, laid out at equal spacing either around a closed loop (a
//! hue wheel, where the last color leads back into the first) or along an open strip (a temperature
//! wheel). Each pair of neighboring colors forms a [`Transition`] covering its share of the
//! positions from 0 to 1. Transitions are derived data: [`build_transitions`] recomputes them from a
//! gradient whenever they're needed, and nothing keeps them in sync.

use std::convert::TryFrom;
use std::error::Error;
use std::fmt;

use color::DeviceColor;
use colors::hsbcolor::{self, HSBColor};
use range::remap;

/// Hue comparisons allow for this much floating point slack.
const HUE_EPSILON: f64 = 1e-9;

/// Errors that come up when building gradients or looking things up in them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientError {
    /// A gradient needs at least two colors; this many were given.
    TooFewColors(usize),
    /// No transition covers this position. Only happens for positions that aren't numbers.
    PercentNotInGradient(f64),
    /// The color doesn't appear anywhere in the gradient.
    ColorNotInGradient,
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GradientError::TooFewColors(n) => {
                write!(f, "a gradient needs at least 2 colors, got {}", n)
            }
            GradientError::PercentNotInGradient(p) => write!(f, "position {} is not in gradient", p),
            GradientError::ColorNotInGradient => write!(f, "color is not in gradient"),
        }
    }
}

impl Error for GradientError {}

/// An ordered list of two or more colors. Immutable once built.
/// # Example
/// ```
/// # use chroma_wheel::prelude::*;
/// let red = DeviceColor::new(1., 0., 0.);
/// assert!(Gradient::new(vec![red]).is_err());
/// let gradient = Gradient::new(vec![red, DeviceColor::new(0., 0., 1.)]).unwrap();
/// assert_eq!(gradient.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DeviceColor>", into = "Vec<DeviceColor>")]
pub struct Gradient {
    colors: Vec<DeviceColor>,
}

impl Gradient {
    /// Creates a gradient from its colors, in order.
    /// # Errors
    /// Returns `GradientError::TooFewColors` if there are fewer than two.
    pub fn new(colors: Vec<DeviceColor>) -> Result<Gradient, GradientError> {
        if colors.len() < 2 {
            debug!("rejecting gradient of {} colors", colors.len());
            return Err(GradientError::TooFewColors(colors.len()));
        }
        Ok(Gradient { colors })
    }

    /// The colors, in order.
    pub fn colors(&self) -> &[DeviceColor] {
        &self.colors
    }

    /// The number of colors. Always at least 2.
    pub fn len(&self) -> usize {
        self.colors.len()
    }
}

impl TryFrom<Vec<DeviceColor>> for Gradient {
    type Error = GradientError;

    fn try_from(colors: Vec<DeviceColor>) -> Result<Gradient, GradientError> {
        Gradient::new(colors)
    }
}

impl From<Gradient> for Vec<DeviceColor> {
    fn from(gradient: Gradient) -> Vec<DeviceColor> {
        gradient.colors
    }
}

/// How a gradient's colors are laid out.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradientShape {
    /// Around a loop: `n` colors make `n` transitions, the last one leading back to the first color.
    Closed,
    /// Along a strip: `n` colors make `n - 1` transitions.
    Open,
}

/// One segment of a gradient, from one color to the next, covering the positions `[from, to)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transition {
    /// The color at the start of the segment.
    pub from_color: DeviceColor,
    /// The color at the end of the segment.
    pub to_color: DeviceColor,
    /// The first position covered.
    pub from: f64,
    /// The end of the covered positions, exclusive.
    pub to: f64,
}

impl Transition {
    /// Returns `true` if `position` is in `[from, to)`.
    pub fn contains_position(&self, position: f64) -> bool {
        position >= self.from && position < self.to
    }

    /// Converts a position on the whole gradient to a fraction of the way through this transition.
    pub fn local_fraction(&self, position: f64) -> f64 {
        remap(position, self.from, self.to, 0.0, 1.0)
    }

    /// Converts a fraction of the way through this transition to a position on the whole gradient.
    pub fn position_at(&self, fraction: f64) -> f64 {
        remap(fraction, 0.0, 1.0, self.from, self.to)
    }

    /// The color `fraction` of the way through, interpolated in HSB.
    pub fn hsb_color_at(&self, fraction: f64) -> HSBColor {
        self.from_color.hsb().interpolate(&self.to_color.hsb(), fraction)
    }

    /// The color `fraction` of the way through, interpolated linearly in RGB.
    pub fn rgb_color_at(&self, fraction: f64) -> DeviceColor {
        self.from_color.lerp(&self.to_color, fraction)
    }

    // the signed hue change across the transition, and how far along it `hue` is
    fn hue_offset(&self, hue: f64) -> (f64, f64) {
        let from_hue = self.from_color.hsb().h;
        let delta = hsbcolor::shortest_hue_delta(from_hue, self.to_color.hsb().h);
        let offset = if delta >= 0.0 {
            hsbcolor::wrap_hue(hue - from_hue)
        } else {
            hsbcolor::wrap_hue(from_hue - hue)
        };
        // just short of a full turn is really just past the start
        let offset = if offset >= 1.0 - HUE_EPSILON { 0.0 } else { offset };
        (delta, offset)
    }

    /// Returns `true` if `hue` is passed through on the way from the start color to the end color,
    /// going the shorter way around the wheel as HSB interpolation does.
    pub fn contains_hue(&self, hue: f64) -> bool {
        let (delta, offset) = self.hue_offset(hue);
        offset <= delta.abs() + HUE_EPSILON
    }

    /// The fraction of the way through the transition at which its interpolated hue equals `hue`.
    /// Only meaningful if [`contains_hue`](#method.contains_hue) holds; clamped to `[0, 1]`.
    pub fn fraction_for_hue(&self, hue: f64) -> f64 {
        let (delta, offset) = self.hue_offset(hue);
        if delta.abs() < HUE_EPSILON {
            return 0.0;
        }
        (offset / delta.abs()).min(1.0)
    }
}

/// Splits a gradient into its transitions, each covering an equal share of the positions from 0 to
/// 1. A closed gradient also gets a transition from its last color back to its first.
/// # Example
/// ```
/// # use chroma_wheel::prelude::*;
/// # use chroma_wheel::gradient::{build_transitions, GradientShape};
/// let colors = vec![DeviceColor::new(1., 0., 0.), DeviceColor::new(0., 1., 0.),
///                   DeviceColor::new(0., 0., 1.)];
/// let gradient = Gradient::new(colors).unwrap();
/// assert_eq!(build_transitions(&gradient, GradientShape::Closed).len(), 3);
/// let open = build_transitions(&gradient, GradientShape::Open);
/// assert_eq!(open.len(), 2);
/// assert_eq!((open[1].from, open[1].to), (0.5, 1.));
/// ```
pub fn build_transitions(gradient: &Gradient, shape: GradientShape) -> Vec<Transition> {
    let colors = gradient.colors();
    let count = match shape {
        GradientShape::Closed => colors.len(),
        GradientShape::Open => colors.len() - 1,
    };
    (0..count)
        .map(|i| Transition {
            from_color: colors[i],
            to_color: colors[(i + 1) % colors.len()],
            from: i as f64 / count as f64,
            to: (i + 1) as f64 / count as f64,
        })
        .collect()
}

/// Finds the transition covering `position`. Positions that fall outside of every transition, like
/// exactly 1 or anything past either end, go to the first transition if they're at most 0.5 and
/// the last otherwise.
/// # Errors
/// Returns `GradientError::PercentNotInGradient` if `position` is NaN or there are no transitions.
pub fn transition_at(transitions: &[Transition], position: f64) -> Result<&Transition, GradientError> {
    if position.is_nan() {
        return Err(GradientError::PercentNotInGradient(position));
    }
    if let Some(transition) = transitions.iter().find(|t| t.contains_position(position)) {
        return Ok(transition);
    }
    trace!("position {} is in no transition, using the nearest end", position);
    let fallback = if position <= 0.5 {
        transitions.first()
    } else {
        transitions.last()
    };
    fallback.ok_or(GradientError::PercentNotInGradient(position))
}
