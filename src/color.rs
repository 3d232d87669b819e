/// Accent colors for detail cards
///
/// Every time a detail card is opened it gets a fresh accent, drawn
/// uniformly from a small fixed palette. The accent tints the card body
/// and its Prev/Next button row.

use rand::seq::SliceRandom;
use rand::Rng;

/// A named sRGB accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    pub name: &'static str,
    pub rgb: [u8; 3],
}

/// The fixed palette accents are chosen from
pub const PALETTE: [Accent; 6] = [
    Accent { name: "coral", rgb: [0xF2, 0x6D, 0x5B] },
    Accent { name: "teal", rgb: [0x2A, 0x9D, 0x8F] },
    Accent { name: "saffron", rgb: [0xE9, 0xC4, 0x6A] },
    Accent { name: "indigo", rgb: [0x4F, 0x5D, 0xC9] },
    Accent { name: "plum", rgb: [0x8E, 0x4A, 0x9E] },
    Accent { name: "slate", rgb: [0x5C, 0x6B, 0x7A] },
];

impl Accent {
    /// Pick one accent uniformly from the palette
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Accent {
        // PALETTE is a non-empty const, so choose() always returns Some
        *PALETTE.choose(rng).unwrap_or(&PALETTE[0])
    }

    /// Convert to an iced color
    pub fn to_color(self) -> iced::Color {
        iced::Color::from_rgb8(self.rgb[0], self.rgb[1], self.rgb[2])
    }

    /// Darker variant for the button row under the card body
    pub fn shade(self, factor: f32) -> iced::Color {
        let factor = factor.clamp(0.0, 1.0);
        let [r, g, b] = self.rgb;
        iced::Color::from_rgb(
            r as f32 / 255.0 * factor,
            g as f32 / 255.0 * factor,
            b as f32 / 255.0 * factor,
        )
    }
}
