//! This module contains a struct, [`Coord`](coord::Coord), that models a 3D coordinate space and
//! supports limited math in 3 dimensions with scalars and other coordinates. Device colors project
//! into it as `(r, g, b)`, which is what the temperature wheel needs to find the closest point of a
//! gradient segment to an arbitrary color.

use std::ops::{Add, Div, Mul, Sub};

/// A point in 3D space. Supports the common arithmetic operations on points, a dot product, and
/// projection onto a line. `Coord` has three axes, denoted `x`, `y`, and `z`, that are treated
/// identically; a [`DeviceColor`](../color/struct.DeviceColor.html) maps `r`, `g` and `b` onto them
/// in that order.
///
/// # Examples
/// ```
/// # use chroma_wheel::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// let sum = point_1 + point_2;  // the point (8, 10, 10)
/// let diff = point_1 - point_2;  // the point (-6, 6, 4)
/// let prod = point_1 * 2.; // the point (2, 16, 14)
/// let quot = point_1 / 2.; // the point (0.5, 4, 3.5)
/// assert_eq!(sum, Coord{x: 8., y: 10., z: 10.});
/// assert_eq!(prod - quot, Coord{x: 1.5, y: 12., z: 10.5});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<f64> for Coord {
    type Output = Coord;
    fn mul(self, rhs: f64) -> Coord {
        Coord {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

// dividing by zero gives infinite components, same as the underlying floats
impl Div<f64> for Coord {
    type Output = Coord;
    fn div(self, rhs: f64) -> Coord {
        Coord {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl Coord {
    /// The components as an array `[x, y, z]`, for code that needs to walk the axes.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// The dot product of two points treated as vectors from the origin.
    pub fn dot(&self, other: &Coord) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// The Euclidean distance between two 3D points.
    /// # Example
    /// ```
    /// # use chroma_wheel::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        let diff = *self - *other;
        diff.dot(&diff).sqrt()
    }

    /// The weighted midpoint: a weight of 1 returns `self`, a weight of 0 returns `other`, and
    /// everything in between is a linear blend of the two.
    /// # Example
    /// ```
    /// # use chroma_wheel::coord::Coord;
    /// let point1 = Coord{x: 0.2, y: 0., z: 1.};
    /// let point2 = Coord{x: 1., y: 0.8, z: 1.};
    /// let mid = point1.weighted_midpoint(&point2, 0.25);
    /// assert!((mid.x - 0.8).abs() <= 1e-10);
    /// assert!((mid.y - 0.6).abs() <= 1e-10);
    /// assert!((mid.z - 1.).abs() <= 1e-10);
    /// ```
    pub fn weighted_midpoint(&self, other: &Coord, weight: f64) -> Coord {
        *self * weight + *other * (1.0 - weight)
    }

    /// Projects `self` onto the infinite line running through `start` and `end`, returning the
    /// scalar `t` such that `start + (end - start) * t` is the closest point on that line. `t` is
    /// not clamped to `[0, 1]`: points beyond either end project past it. If `start` and `end`
    /// coincide there is no line, and `t` is 0.
    /// # Example
    /// ```
    /// # use chroma_wheel::coord::Coord;
    /// let start = Coord{x: 0., y: 0., z: 0.};
    /// let end = Coord{x: 2., y: 0., z: 0.};
    /// let t = Coord{x: 3., y: 5., z: -1.}.line_projection(&start, &end);
    /// assert!((t - 1.5).abs() <= 1e-10);
    /// ```
    pub fn line_projection(&self, start: &Coord, end: &Coord) -> f64 {
        let dir = *end - *start;
        let len_sq = dir.dot(&dir);
        if len_sq == 0.0 {
            return 0.0;
        }
        (*self - *start).dot(&dir) / len_sq
    }

    /// The closest point to `self` on the infinite line through `start` and `end`. See
    /// [`line_projection`](#method.line_projection).
    pub fn closest_point_on_line(&self, start: &Coord, end: &Coord) -> Coord {
        *start + (*end - *start) * self.line_projection(start, end)
    }
}
