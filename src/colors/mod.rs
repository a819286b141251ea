//! This module contains the color types that implement [`Color`] besides the two base types. For
//! convenience, each main type is imported into this module's namespace directly.
//!
//! [`Color`]: ../color/trait.Color.html
pub mod hsbcolor;

pub use self::hsbcolor::HSBColor;
