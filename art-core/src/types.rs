/// An RGB color with 8-bit channels, as stored in rendered frames.
///
/// This is the pixel type of [`image::RgbImage`]; channel `i` is
/// accessed as `color[i]` with `0 = red`, `1 = green`, `2 = blue`.
pub type Color = image::Rgb<u8>;
