//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports. The prelude includes every trait, the color types [`DeviceColor`],
//! [`XYZColor`] and [`HSBColor`], chromaticities and gamuts, gradients and both kinds of picker,
//! scene light colors, and `geo`'s `Point`, which pickers take their locations as. The lower-level
//! pieces, such as the Planckian locus functions and wheel geometry, are not included.
//!
//! [`DeviceColor`]: ../color/struct.DeviceColor.html
//! [`XYZColor`]: ../color/struct.XYZColor.html
//! [`HSBColor`]: ../colors/hsbcolor/struct.HSBColor.html

pub use bound::Bound;
pub use chromaticity::XYPoint;
pub use color::{Color, DeviceColor, RGBParseError, XYZColor};
pub use colors::HSBColor;
pub use gamut::Gamut;
pub use geo::Point;
pub use gradient::{Gradient, GradientError};
pub use light_state::LightColor;
pub use wheel::WheelMapping;
pub use wheels::{AngularHSBInterpolation, LinearRGBInterpolation};
