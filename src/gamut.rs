//! This module describes the color gamuts of Zigbee color lights: the triangle of chromaticities a
//! light can actually produce, spanned by its red, green and blue primaries. Lights fall into one of
//! three vendor capability classes, A, B and C, and a light that reports its own primaries can be
//! described by a custom triangle. Chromaticities outside of a gamut are mapped to the closest point
//! on its boundary.

use std::convert::TryFrom;
use std::error::Error;
use std::fmt;

use geo::{Area, Centroid, Closest, ClosestPoint, Line, Point, Triangle};

use chromaticity::XYPoint;

/// Triangles with less area than this are treated as degenerate.
const MIN_GAMUT_AREA: f64 = 1e-9;

/// An error in describing a gamut.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GamutError {
    /// The three primaries are (nearly) collinear, so they don't span a triangle: nothing could be
    /// inside such a gamut and the closest point on it isn't well-defined.
    Degenerate,
}

impl fmt::Display for GamutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GamutError::Degenerate => write!(f, "gamut primaries do not span a triangle"),
        }
    }
}

impl Error for GamutError {}

/// The triangle spanned by three primaries. The only way to construct one is through
/// [`new`](#method.new), which guarantees it has a nonzero area.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[XYPoint; 3]", into = "[XYPoint; 3]")]
pub struct GamutTriangle {
    red: XYPoint,
    green: XYPoint,
    blue: XYPoint,
}

impl GamutTriangle {
    /// Creates a triangle from the three primaries of a light.
    /// # Errors
    /// Returns `GamutError::Degenerate` if the primaries are collinear or coincide.
    /// # Example
    /// ```
    /// # use chroma_wheel::prelude::*;
    /// # use chroma_wheel::gamut::{GamutError, GamutTriangle};
    /// let ok = GamutTriangle::new(
    ///     XYPoint::new(0.7, 0.3), XYPoint::new(0.17, 0.7), XYPoint::new(0.15, 0.05));
    /// assert!(ok.is_ok());
    /// let flat = GamutTriangle::new(
    ///     XYPoint::new(0.1, 0.1), XYPoint::new(0.2, 0.2), XYPoint::new(0.3, 0.3));
    /// assert_eq!(flat, Err(GamutError::Degenerate));
    /// ```
    pub fn new(red: XYPoint, green: XYPoint, blue: XYPoint) -> Result<GamutTriangle, GamutError> {
        let area = Triangle::<f64>::new(red.into(), green.into(), blue.into()).unsigned_area();
        if !(area > MIN_GAMUT_AREA) {
            debug!("rejecting gamut {} {} {} with area {}", red, green, blue, area);
            return Err(GamutError::Degenerate);
        }
        Ok(GamutTriangle { red, green, blue })
    }

    /// The primaries, in the order red, green, blue.
    pub fn vertices(&self) -> [XYPoint; 3] {
        [self.red, self.green, self.blue]
    }
}

impl TryFrom<[XYPoint; 3]> for GamutTriangle {
    type Error = GamutError;

    fn try_from(vertices: [XYPoint; 3]) -> Result<GamutTriangle, GamutError> {
        GamutTriangle::new(vertices[0], vertices[1], vertices[2])
    }
}

impl From<GamutTriangle> for [XYPoint; 3] {
    fn from(triangle: GamutTriangle) -> [XYPoint; 3] {
        triangle.vertices()
    }
}

/// A light's color gamut. The lettered gamuts are the fixed capability classes used by Zigbee Light
/// Link devices; `Custom` holds the primaries a light reports about itself.
/// # Example
/// ```
/// # use chroma_wheel::prelude::*;
/// assert!(Gamut::C.contains(XYPoint::new(0.3, 0.3)));
/// assert!(!Gamut::C.contains(XYPoint::new(2., 2.)));
/// // points outside are moved onto the nearest edge, here the red corner
/// let clamped = Gamut::C.closest_point(XYPoint::new(0.8, 0.3));
/// assert_eq!(clamped, XYPoint::new(0.692, 0.308));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gamut {
    /// Older color lights with a wide green primary.
    A,
    /// First generation extended color lights, with a narrow gamut.
    B,
    /// Current generation extended color lights. This is the default when nothing better is known.
    C,
    /// A gamut given by explicit primaries.
    Custom(GamutTriangle),
}

/// The primaries of gamut A, B and C, in that order. Each row is red, green, blue.
pub static GAMUT_VERTICES: [[XYPoint; 3]; 3] = [
    [
        XYPoint { x: 0.704, y: 0.296 },
        XYPoint { x: 0.2151, y: 0.7106 },
        XYPoint { x: 0.138, y: 0.08 },
    ],
    [
        XYPoint { x: 0.675, y: 0.322 },
        XYPoint { x: 0.409, y: 0.518 },
        XYPoint { x: 0.167, y: 0.04 },
    ],
    [
        XYPoint { x: 0.692, y: 0.308 },
        XYPoint { x: 0.17, y: 0.70 },
        XYPoint { x: 0.153, y: 0.048 },
    ],
];

impl Default for Gamut {
    fn default() -> Gamut {
        Gamut::C
    }
}

impl Gamut {
    /// The red, green and blue primaries spanning the gamut.
    pub fn vertices(&self) -> [XYPoint; 3] {
        match *self {
            Gamut::A => GAMUT_VERTICES[0],
            Gamut::B => GAMUT_VERTICES[1],
            Gamut::C => GAMUT_VERTICES[2],
            Gamut::Custom(triangle) => triangle.vertices(),
        }
    }

    /// Returns `true` if `point` is inside the gamut or on its boundary. With `v0` as the origin,
    /// `point` is written as `s * (v1 - v0) + t * (v2 - v0)`; it's inside exactly when both weights
    /// are non-negative and sum to at most 1.
    pub fn contains(&self, point: XYPoint) -> bool {
        let [v0, v1, v2] = self.vertices();
        let e1 = v1.minus(&v0);
        let e2 = v2.minus(&v0);
        let q = point.minus(&v0);
        let denom = e1.cross(&e2);
        let s = q.cross(&e2) / denom;
        let t = e1.cross(&q) / denom;
        s >= 0.0 && t >= 0.0 && s + t <= 1.0
    }

    /// Returns the point of the gamut closest to `point`: `point` itself if it's already inside, and
    /// otherwise the nearest point on one of the three edges. Edges are checked in the order
    /// red-green, red-blue, green-blue, and the first one wins a tie.
    pub fn closest_point(&self, point: XYPoint) -> XYPoint {
        if self.contains(point) {
            return point;
        }
        let [red, green, blue] = self.vertices();
        let target: Point<f64> = point.into();
        let mut best: Option<(XYPoint, f64)> = None;
        for &(start, end) in [(red, green), (red, blue), (green, blue)].iter() {
            let candidate = closest_on_edge(start, end, target);
            let dist = candidate.distance(&point);
            match best {
                Some((_, best_dist)) if !(dist < best_dist) => {}
                _ => best = Some((candidate, dist)),
            }
        }
        let clamped = best.map_or(point, |(p, _)| p);
        trace!("{} is outside {:?}, clamped to {}", point, self, clamped);
        clamped
    }

    /// The center of mass of the gamut triangle. This is where black ends up when asked for its
    /// chromaticity, as black has none.
    pub fn centroid(&self) -> XYPoint {
        let [red, green, blue] = self.vertices();
        Triangle::<f64>::new(red.into(), green.into(), blue.into())
            .centroid()
            .into()
    }
}

// the edge is never degenerate: built-in gamuts are fixed and custom ones are validated
fn closest_on_edge(start: XYPoint, end: XYPoint, target: Point<f64>) -> XYPoint {
    let line = Line::new(Point::from(start), Point::from(end));
    match line.closest_point(&target) {
        Closest::Intersection(p) | Closest::SinglePoint(p) => p.into(),
        Closest::Indeterminate => start,
    }
}
