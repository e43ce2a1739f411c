//! 32-bit ARGB colour values.

use std::fmt;
use std::str::FromStr;

use palette::Srgba;
use palette::rgb::channels;

use crate::error::ProfileError;

/// A colour packed as `0xAARRGGBB`.
///
/// This is the representation hosts hand over for background fills, icon
/// tints and label colours.
///
/// # Example
///
/// ```
/// use swipe_decor::Argb;
///
/// let red: Argb = "#ff0000".parse().unwrap();
/// assert_eq!(red, Argb::new(0xFFFF0000));
/// assert_eq!(red.to_string(), "#FFFF0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Argb(pub u32);

impl Argb {
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    /// Default colour for swipe labels.
    pub const DARK_GRAY: Self = Self(0xFF44_4444);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Packs the four channels into a colour.
    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Converts to a palette sRGBA colour.
    pub fn to_srgba(self) -> Srgba<u8> {
        Srgba::from_u32::<channels::Argb>(self.0)
    }

    /// Returns the channels in RGBA order, as used by `image` pixels.
    pub fn to_rgba_array(self) -> [u8; 4] {
        let c = self.to_srgba();
        [c.red, c.green, c.blue, c.alpha]
    }
}

impl From<Srgba<u8>> for Argb {
    fn from(color: Srgba<u8>) -> Self {
        Self(color.into_u32::<channels::Argb>())
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Argb {
    type Err = ProfileError;

    /// Parses `#RRGGBB` (opaque) or `#AARRGGBB`. The leading `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || ProfileError::InvalidColor(s.to_string());

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            6 => Ok(Self(0xFF00_0000 | value)),
            8 => Ok(Self(value)),
            _ => Err(invalid()),
        }
    }
}
