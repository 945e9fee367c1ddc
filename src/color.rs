// SPDX-License-Identifier: MPL-2.0
//! Color manipulation helpers shared by the theme and the style resolver.
//!
//! The content surface derives its background by emphasizing the theme
//! background, then asks the theme for a readable text color against that
//! background. The luminance, contrast and emphasis primitives live here so
//! the two values are always computed from the same definitions.

use iced::Color;

/// Linearizes one sRGB channel for luminance computation.
fn linearize(channel: f32) -> f32 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance of a color (0.0 = black, 1.0 = white).
#[must_use]
pub fn relative_luminance(color: Color) -> f32 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// WCAG contrast ratio between two colors, from 1.0 (identical) to 21.0
/// (black on white).
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f32 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Moves each channel toward white by `coefficient` (0.0 keeps the color,
/// 1.0 yields white). Alpha is preserved; the coefficient is clamped to 0–1.
#[must_use]
pub fn lighten(color: Color, coefficient: f32) -> Color {
    let k = coefficient.clamp(0.0, 1.0);
    Color {
        r: color.r + (1.0 - color.r) * k,
        g: color.g + (1.0 - color.g) * k,
        b: color.b + (1.0 - color.b) * k,
        a: color.a,
    }
}

/// Moves each channel toward black by `coefficient` (0.0 keeps the color,
/// 1.0 yields black). Alpha is preserved; the coefficient is clamped to 0–1.
#[must_use]
pub fn darken(color: Color, coefficient: f32) -> Color {
    let k = coefficient.clamp(0.0, 1.0);
    Color {
        r: color.r * (1.0 - k),
        g: color.g * (1.0 - k),
        b: color.b * (1.0 - k),
        a: color.a,
    }
}

/// Produces a surface color that stands out against a base color.
///
/// Implementations must lighten dark bases and darken light ones; the
/// coefficient (0–1) controls how strongly. The style resolver accepts any
/// implementation, so the algorithm can be swapped without touching the
/// resolver.
pub trait Emphasize {
    /// Returns the emphasized variant of `base`.
    fn emphasize(&self, base: Color, coefficient: f32) -> Color;
}

/// Default emphasis algorithm: a relative luminance above 0.5 counts as a
/// light base and is darkened, anything else is lightened.
#[derive(Debug, Clone, Copy, Default)]
pub struct LuminanceEmphasize;

impl Emphasize for LuminanceEmphasize {
    fn emphasize(&self, base: Color, coefficient: f32) -> Color {
        if relative_luminance(base) > 0.5 {
            darken(base, coefficient)
        } else {
            lighten(base, coefficient)
        }
    }
}

/// Emphasizes `base` with the default luminance-based algorithm.
#[must_use]
pub fn emphasize(base: Color, coefficient: f32) -> Color {
    LuminanceEmphasize.emphasize(base, coefficient)
}
