// SPDX-License-Identifier: MPL-2.0
//! Theme model consumed by the style resolver.
//!
//! A [`Theme`] bundles everything the resolver reads: the light/dark flag,
//! the color scheme, body typography, shape and breakpoint tokens, and the
//! contrast computation. Each constructed theme carries a [`ThemeId`]
//! identity token; mutating a theme through its `with_*` methods mints a new
//! token so style caches know to re-resolve.

use crate::color::contrast_ratio;
use crate::design_tokens::{breakpoints, opacity, palette, radius, typography};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    /// Default background the content surface emphasizes against.
    pub background_default: Color,
    /// Surface color for cards and panels.
    pub surface: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            background_default: palette::WHITE,
            surface: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background_default: palette::GRAY_900,
            surface: Color::from_rgb(0.15, 0.15, 0.15),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,
        }
    }
}

/// User-facing theme selection, persisted through the config module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}

/// Identity token of a constructed theme, used as the style-cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeId(u64);

impl ThemeId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Shape tokens read by the style resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub border_radius: f32,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            border_radius: radius::SM,
        }
    }
}

/// Body text settings inherited by the content surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyText {
    pub size: f32,
    pub line_height: f32,
}

impl Default for BodyText {
    fn default() -> Self {
        Self {
            size: typography::BODY,
            line_height: typography::BODY_LINE_HEIGHT,
        }
    }
}

/// Viewport width thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    /// Width at which the surface stops growing to fill the viewport.
    pub sm: f32,
}

impl Breakpoints {
    /// Returns true when the viewport is at or above the small threshold.
    #[must_use]
    pub fn is_small_up(self, viewport_width: f32) -> bool {
        viewport_width >= self.sm
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            sm: breakpoints::SM,
        }
    }
}

/// Read-only theme object threaded explicitly through the style resolver
/// and the content renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    id: ThemeId,
    dark: bool,
    colors: ColorScheme,
    shape: Shape,
    body_text: BodyText,
    breakpoints: Breakpoints,
    contrast_threshold: f32,
    light_text: Color,
    dark_text: Color,
}

/// Contrast threshold below which light text is considered unreadable.
const DEFAULT_CONTRAST_THRESHOLD: f32 = 3.0;

impl Theme {
    fn with_scheme(dark: bool, colors: ColorScheme) -> Self {
        Self {
            id: ThemeId::next(),
            dark,
            colors,
            shape: Shape::default(),
            body_text: BodyText::default(),
            breakpoints: Breakpoints::default(),
            contrast_threshold: DEFAULT_CONTRAST_THRESHOLD,
            light_text: palette::WHITE,
            dark_text: Color {
                a: opacity::TEXT_PRIMARY,
                ..palette::BLACK
            },
        }
    }

    /// Light theme preset.
    #[must_use]
    pub fn light() -> Self {
        Self::with_scheme(false, ColorScheme::light())
    }

    /// Dark theme preset.
    #[must_use]
    pub fn dark() -> Self {
        Self::with_scheme(true, ColorScheme::dark())
    }

    /// Builds the preset matching `mode`, resolving System against the
    /// actual system theme.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Identity token of this theme.
    #[must_use]
    pub fn id(&self) -> ThemeId {
        self.id
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    #[must_use]
    pub fn is_light(&self) -> bool {
        !self.dark
    }

    #[must_use]
    pub fn colors(&self) -> &ColorScheme {
        &self.colors
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn body_text(&self) -> BodyText {
        self.body_text
    }

    #[must_use]
    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    #[must_use]
    pub fn contrast_threshold(&self) -> f32 {
        self.contrast_threshold
    }

    /// Returns a text color readable against `background`: the light text
    /// candidate when it clears the contrast threshold, the dark one
    /// otherwise.
    #[must_use]
    pub fn contrast_text(&self, background: Color) -> Color {
        if contrast_ratio(background, self.light_text) >= self.contrast_threshold {
            self.light_text
        } else {
            self.dark_text
        }
    }

    /// Replaces the contrast threshold, minting a new theme identity.
    #[must_use]
    pub fn with_contrast_threshold(mut self, threshold: f32) -> Self {
        self.contrast_threshold = threshold;
        self.id = ThemeId::next();
        self
    }

    /// Replaces the corner radius, minting a new theme identity.
    #[must_use]
    pub fn with_border_radius(mut self, border_radius: f32) -> Self {
        self.shape.border_radius = border_radius;
        self.id = ThemeId::next();
        self
    }

    /// Replaces the default background, minting a new theme identity.
    #[must_use]
    pub fn with_background_default(mut self, background: Color) -> Self {
        self.colors.background_default = background;
        self.id = ThemeId::next();
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_background() {
        let theme = Theme::light();
        assert!(theme.colors().background_default.r > 0.9); // Close to white
    }

    #[test]
    fn dark_theme_has_dark_background() {
        let theme = Theme::dark();
        assert!(theme.colors().background_default.r < 0.2); // Close to black
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on the actual system theme, so just verify it
        // doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn from_mode_follows_the_flag() {
        assert!(Theme::from_mode(ThemeMode::Dark).is_dark());
        assert!(Theme::from_mode(ThemeMode::Light).is_light());
    }

    #[test]
    fn theme_ids_are_unique() {
        let a = Theme::light();
        let b = Theme::light();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn clone_preserves_identity() {
        let theme = Theme::dark();
        assert_eq!(theme.id(), theme.clone().id());
    }

    #[test]
    fn with_methods_mint_new_identity() {
        let theme = Theme::light();
        let original = theme.id();
        let adjusted = theme.with_border_radius(8.0);
        assert_ne!(adjusted.id(), original);

        let retuned = adjusted.with_contrast_threshold(4.5);
        assert_ne!(retuned.id(), original);
        assert_eq!(retuned.contrast_threshold(), 4.5);
    }

    #[test]
    fn contrast_text_on_white_is_dark() {
        let theme = Theme::light();
        let text = theme.contrast_text(Color::WHITE);
        assert!(text.r < 0.1 && text.g < 0.1 && text.b < 0.1);
    }

    #[test]
    fn contrast_text_on_black_is_light() {
        let theme = Theme::dark();
        let text = theme.contrast_text(Color::BLACK);
        assert_eq!(text, palette::WHITE);
    }

    #[test]
    fn contrast_threshold_moves_the_cutoff() {
        // Mid gray: light text clears a low threshold but not a high one.
        let gray = Color::from_rgb(0.45, 0.45, 0.45);
        let lenient = Theme::light().with_contrast_threshold(1.5);
        let strict = Theme::light().with_contrast_threshold(6.0);
        assert_eq!(lenient.contrast_text(gray), palette::WHITE);
        assert_ne!(strict.contrast_text(gray), palette::WHITE);
    }

    #[test]
    fn breakpoints_classify_viewports() {
        let theme = Theme::light();
        assert!(!theme.breakpoints().is_small_up(599.0));
        assert!(theme.breakpoints().is_small_up(600.0));
        assert!(theme.breakpoints().is_small_up(1024.0));
    }

    #[test]
    fn default_theme_is_dark() {
        assert!(Theme::default().is_dark());
    }
}
