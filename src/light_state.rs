//! This module describes the color a light in a scene is set to. Zigbee lights take their color in
//! one of three modes, and a light state remembers whichever was used last: a point in the xy
//! chromaticity diagram, a white color temperature, or a hue and saturation on the light's own
//! integer scales. Each can be previewed as an on-screen color, or placed on a picker.

use geo::Point;

use chromaticity::XYPoint;
use color::{Color, DeviceColor};
use colors::HSBColor;
use gamut::Gamut;
use gradient::GradientError;
use planckian;
use wheel::WheelMapping;

/// Hue, on the light's scale, for a full turn of the color wheel.
pub const MAX_HUE: u16 = 65535;
/// Saturation, on the light's scale, for a fully saturated color.
pub const MAX_SATURATION: u8 = 255;

/// Colors are placed on a picker as if the light were at full brightness.
const PICKER_BRIGHTNESS: f64 = 1.0;

/// The color of a light in a scene.
/// # Example
/// ```
/// # use chroma_wheel::prelude::*;
/// let red = LightColor::HueSaturation { hue: 0, sat: 255 };
/// assert_eq!(red.preview(Gamut::C, 1.).unwrap().to_string(), "#FF0000");
/// assert!(LightColor::ColorTemperature(0).preview(Gamut::C, 1.).is_none());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum LightColor {
    /// A chromaticity. Lights can't show everything, so it's brought into the light's gamut first.
    Xy(XYPoint),
    /// A white light, at the given mired.
    ColorTemperature(i32),
    /// A hue from 0 to [`MAX_HUE`] and a saturation from 0 to [`MAX_SATURATION`].
    HueSaturation {
        /// The hue, where 0 and [`MAX_HUE`] are both red.
        hue: u16,
        /// The saturation, where 0 is white.
        sat: u8,
    },
}

impl LightColor {
    /// The on-screen color of a light with this color and the given brightness, between 0 and 1.
    /// Chromaticities are clamped into `gamut`, as the light itself would. Returns `None` for color
    /// temperatures off the Planckian locus approximation.
    pub fn preview(&self, gamut: Gamut, brightness: f64) -> Option<DeviceColor> {
        match *self {
            LightColor::Xy(xy) => Some(xy.to_device_color(brightness, gamut)),
            LightColor::ColorTemperature(mired) => planckian::cct_from_mired(mired)
                .and_then(planckian::xy_from_cct)
                .map(|xy| xy.to_device_color(brightness, gamut)),
            LightColor::HueSaturation { hue, sat } => {
                let hsb = HSBColor {
                    h: f64::from(hue) / f64::from(MAX_HUE),
                    s: f64::from(sat) / f64::from(MAX_SATURATION),
                    b: brightness,
                    a: 1.0,
                };
                Some(hsb.to_rgb())
            }
        }
    }

    /// Where this color sits on `wheel`, a picker of the given size. The color is previewed at full
    /// brightness first, so xy colors are clamped into `gamut` before they're looked for.
    /// # Errors
    /// Returns `GradientError::ColorNotInGradient` if the color has no preview or the wheel doesn't
    /// have it.
    pub fn wheel_location<W: WheelMapping>(
        &self,
        wheel: &W,
        size: f64,
        gamut: Gamut,
    ) -> Result<Point<f64>, GradientError> {
        let color = self
            .preview(gamut, PICKER_BRIGHTNESS)
            .ok_or(GradientError::ColorNotInGradient)?;
        wheel.location_for_color(&color, size)
    }
}
