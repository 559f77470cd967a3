//! HSV samples and the conversions around them.
//!
//! Samples follow the 8-bit HSV convention used by most image libraries:
//! hue in half-degrees (`0..=180`), saturation and value in `0..=255`.

use palette::{FromColor, Hsv, Srgb};

/// One pixel expressed as hue / saturation / value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sample {
    pub hue: u8,
    pub saturation: u8,
    pub value: u8,
}

impl Sample {
    pub const fn new(hue: u8, saturation: u8, value: u8) -> Self {
        Self { hue, saturation, value }
    }

    /// Convert an 8-bit sRGB pixel into a sample.
    ///
    /// Hue is halved and rounded into `0..180`; achromatic pixels get hue 0.
    pub fn from_rgb(rgb: Srgb<u8>) -> Self {
        let hsv: Hsv = Hsv::from_color(rgb.into_format::<f32>());
        let half_degrees = (hsv.hue.into_positive_degrees() / 2.0).round() as u16 % 180;
        Self {
            hue: half_degrees as u8,
            saturation: to_byte(hsv.saturation),
            value: to_byte(hsv.value),
        }
    }
}

#[inline]
fn to_byte(unit: f32) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert a sample back to 8-bit RGB.
///
/// Channels are truncated, not rounded. Hues past 180 wrap around the wheel,
/// so 180 renders the same as 0.
pub fn hsv_to_rgb(sample: Sample) -> Srgb<u8> {
    let h = (u16::from(sample.hue) * 2) % 360;
    let s = f64::from(sample.saturation) / 255.0;
    let v = f64::from(sample.value) / 255.0;

    let c = v * s;
    let x = c * (1.0 - ((f64::from(h) / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h {
        0..60 => (c, x, 0.0),
        60..120 => (x, c, 0.0),
        120..180 => (0.0, c, x),
        180..240 => (0.0, x, c),
        240..300 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let channel = |unit: f64| ((unit + m) * 255.0).clamp(0.0, 255.0) as u8;
    Srgb::new(channel(r), channel(g), channel(b))
}

/// Uppercase, zero-padded `RRGGBB` without a leading `#`.
pub fn hex_string(rgb: Srgb<u8>) -> String {
    format!("{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue)
}
