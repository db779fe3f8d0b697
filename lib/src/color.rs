use image::Rgb;

pub type Color = Rgb<u8>;

/// Perceptual luminance of an RGB triple, in `[0, 255]`.
pub fn to_grayscale(r: u8, g: u8, b: u8) -> f64 {
    0.2126 * r as f64 + 0.7152 * g as f64 + 0.0722 * b as f64
}

/// Per-channel mean of `colors`, truncated towards zero.
///
/// The rasterizer never hands out an empty slice, but if it happens the result is black.
pub fn average(colors: &[Color]) -> Color {
    if colors.is_empty() {
        return Rgb([0, 0, 0]);
    }

    let mut sums = [0u64; 3];

    for color in colors {
        for (sum, channel) in sums.iter_mut().zip(color.0.iter()) {
            *sum += *channel as u64;
        }
    }

    let len = colors.len() as u64;

    Rgb([
        (sums[0] / len) as u8,
        (sums[1] / len) as u8,
        (sums[2] / len) as u8,
    ])
}

/// Serde adapter writing a color as `[r, g, b]`.
pub(crate) mod rgb_serde {
    use super::Color;
    use image::Rgb;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        color.0.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        <[u8; 3]>::deserialize(deserializer).map(Rgb)
    }
}
