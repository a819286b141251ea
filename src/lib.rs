//! Chroma Wheel is a library for the color math behind picking colors for smart lights. Lights are
//! driven in the CIE 1931 xy chromaticity diagram, limited to a triangular gamut; they're shown on
//! screen in sRGB; and white lights are described by their color temperature. This library converts
//! between all three, keeping chromaticities inside the gamut a light can actually produce, and maps
//! colors to and from locations on the two kinds of interactive picker: a hue wheel, where a
//! gradient wraps around a circle, and a temperature strip, where a gradient of whites runs from top
//! to bottom.
//!
//! Nothing here draws anything or talks to a light: it's all plain values and functions, and the
//! only diagnostics are emitted through the `log` facade.

#![doc(html_root_url = "https://docs.rs/chroma-wheel/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.354851 with -0.354_851
#![allow(clippy::unreadable_literal)]

extern crate float_cmp;
extern crate geo;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate num;
#[macro_use]
extern crate rulinalg;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg(test)]
extern crate serde_json;

pub mod bound;
pub mod chromaticity;
pub mod color;
pub mod colors;
mod consts;
pub mod coord;
pub mod gamut;
pub mod gradient;
pub mod light_state;
pub mod planckian;
pub mod prelude;
pub mod range;
pub mod wheel;
pub mod wheels;
