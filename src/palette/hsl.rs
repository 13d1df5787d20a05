//! hsl to hex conversion

/// a color in HSL space
///
/// - `hue`: degrees, normalized into `0.0..360.0`
/// - `saturation`: percent, `0.0..=100.0`
/// - `lightness`: percent, `0.0..=100.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// hue in degrees
    pub hue: f64,
    /// saturation in percent
    pub saturation: f64,
    /// lightness in percent
    pub lightness: f64,
}

impl Hsl {
    /// make a new color
    ///
    /// negative or oversized hues wrap around (`-30` becomes `330`), saturation
    /// and lightness are clamped
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation: saturation.clamp(0.0, 100.0),
            lightness: lightness.clamp(0.0, 100.0),
        }
    }

    /// compute one rgb channel, `n` is 0 for red, 8 for green and 4 for blue
    fn channel(&self, n: f64) -> u8 {
        let l = self.lightness / 100.0;
        let a = self.saturation * l.min(1.0 - l) / 100.0;
        let k = (n + self.hue / 30.0).rem_euclid(12.0);
        let c = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);

        (255.0 * c).round().clamp(0.0, 255.0) as u8
    }

    /// convert to an `(r, g, b)` tuple
    pub fn to_rgb(self) -> (u8, u8, u8) {
        (self.channel(0.0), self.channel(8.0), self.channel(4.0))
    }

    /// convert to a lowercase `#rrggbb` string
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// convert an hsl triple straight to `#rrggbb`
pub fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> String {
    Hsl::new(hue, saturation, lightness).to_hex()
}
