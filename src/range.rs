//! This module provides the two affine remapping functions that every other part of the crate leans
//! on: moving a value from one numeric range into another. Gradients use them to go from a position
//! on the whole wheel to a position inside one transition, and the wheels use them to turn a radial
//! distance into saturation and back.

use num::Float;

/// Maps `value` from the range `[old_min, old_max]` to the range `[new_min, new_max]` with an affine
/// transformation. Values outside of the old range are extrapolated, not clamped. If the old range
/// is empty (`old_min == old_max`), there is no meaningful answer, and `new_min` is returned instead
/// of dividing by zero.
/// # Example
/// ```
/// # use chroma_wheel::range::remap;
/// assert_eq!(remap(5., 0., 10., 100., 200.), 150.);
/// // inverted ranges work too
/// assert_eq!(remap(2.5, 0., 10., 1., 0.), 0.75);
/// // an empty source range maps everything to the start of the target range
/// assert_eq!(remap(3., 4., 4., 7., 9.), 7.);
/// ```
pub fn remap<T: Float>(value: T, old_min: T, old_max: T, new_min: T, new_max: T) -> T {
    let old_span = old_max - old_min;
    if old_span == T::zero() {
        return new_min;
    }
    (value - old_min) * (new_max - new_min) / old_span + new_min
}

/// The special case of [`remap`] where both ranges start at zero: `value * new_max / old_max`. An
/// `old_max` of zero maps everything to zero, for the same reason as [`remap`].
/// # Example
/// ```
/// # use chroma_wheel::range::remap_zero_based;
/// assert_eq!(remap_zero_based(25., 100., 1.), 0.25);
/// ```
pub fn remap_zero_based<T: Float>(value: T, old_max: T, new_max: T) -> T {
    remap(value, T::zero(), old_max, T::zero(), new_max)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_remap_endpoints() {
        assert!((remap(0.2, 0.2, 0.4, 0., 1.)).abs() <= 1e-12);
        assert!((remap(0.4, 0.2, 0.4, 0., 1.) - 1.).abs() <= 1e-12);
        assert!((remap(0.3, 0.2, 0.4, 0., 1.) - 0.5).abs() <= 1e-12);
    }

    #[test]
    fn test_remap_extrapolates() {
        assert!((remap(1.5, 0., 1., 0., 10.) - 15.).abs() <= 1e-12);
        assert!((remap(-1., 0., 1., 0., 10.) + 10.).abs() <= 1e-12);
    }

    #[test]
    fn test_remap_empty_range() {
        assert_eq!(remap(0.7, 0.5, 0.5, 0.25, 1.), 0.25);
        assert_eq!(remap_zero_based(12., 0., 1.), 0.);
    }

    #[test]
    fn test_remap_f32() {
        let mapped: f32 = remap(50f32, 0., 100., 0., 360.);
        assert!((mapped - 180.).abs() <= 1e-4);
    }
}
