//! This module contains the two kinds of picker that implement [`WheelMapping`]: a hue wheel that
//! lays its gradient around a circle, and a temperature strip that lays it top to bottom. For
//! convenience, each picker type is imported into this module's namespace directly.
//!
//! [`WheelMapping`]: ../wheel/trait.WheelMapping.html
pub mod angular;
pub mod linear;

pub use self::angular::AngularHSBInterpolation;
pub use self::linear::LinearRGBInterpolation;
