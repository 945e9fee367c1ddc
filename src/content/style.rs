// SPDX-License-Identifier: MPL-2.0
//! Style resolution for the three content slots.
//!
//! [`StyleSheet::resolve`] is a pure function from a [`Theme`] to the slot
//! styles; the background/text pairing is always derived together. The
//! emphasis algorithm is a collaborator, so `resolve_with` accepts any
//! [`Emphasize`] implementation. [`StyleCache`] memoizes one resolved sheet
//! per theme identity.

use std::sync::Arc;

use iced::{Color, Padding};

use crate::color::{Emphasize, LuminanceEmphasize};
use crate::design_tokens::{sizing, spacing};
use crate::theme::{BodyText, Theme, ThemeId};

/// Class names registered for the slots.
pub const ROOT_CLASS: &str = "snackbar-content-root";
pub const MESSAGE_CLASS: &str = "snackbar-content-message";
pub const ACTION_CLASS: &str = "snackbar-content-action";

/// Emphasis factor applied to the theme background in light mode.
pub const LIGHT_EMPHASIS: f32 = 0.8;
/// Emphasis factor applied to the theme background in dark mode.
pub const DARK_EMPHASIS: f32 = 0.98;

const ROOT_PADDING: Padding = Padding {
    top: 6.0,
    right: spacing::MD,
    bottom: 6.0,
    left: spacing::MD,
};

const MESSAGE_PADDING: Padding = Padding {
    top: spacing::XS,
    right: 0.0,
    bottom: spacing::XS,
    left: 0.0,
};

const ACTION_PADDING: Padding = Padding {
    top: 0.0,
    right: 0.0,
    bottom: 0.0,
    left: spacing::MD,
};

/// Pulls trailing icon buttons flush with the surface edge.
const ACTION_MARGIN_END: f32 = -spacing::XS;

/// Width behavior of the surface for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootWidth {
    /// Fill the available width (narrow viewports).
    Grow,
    /// Natural width, at least `min_width`.
    Natural { min_width: f32 },
}

/// Style of the surface itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootStyle {
    /// Body typography inherited by the surface text.
    pub typography: BodyText,
    /// Emphasized theme background.
    pub background: Color,
    /// Contrast color for `background`; the two are always paired.
    pub text_color: Color,
    pub padding: Padding,
    pub border_radius: f32,
    /// Children wrap onto further lines when the surface is narrow.
    pub wrap: bool,
    pub min_width: f32,
    /// Viewport width at which the surface stops growing.
    pub small_breakpoint: f32,
}

impl RootStyle {
    /// Width behavior for a viewport; absent means a narrow viewport.
    #[must_use]
    pub fn width_for(&self, viewport_width: Option<f32>) -> RootWidth {
        match viewport_width {
            Some(width) if width >= self.small_breakpoint => RootWidth::Natural {
                min_width: self.min_width,
            },
            _ => RootWidth::Grow,
        }
    }
}

/// Style of the message wrapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MessageStyle {
    pub padding: Padding,
}

/// Style of the action wrapper, applied only when an action is present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionStyle {
    pub padding: Padding,
    /// Negative trailing margin aligning icon buttons with the surface edge.
    pub margin_end: f32,
}

/// Resolved styles for the three content slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSheet {
    pub root: RootStyle,
    pub message: MessageStyle,
    pub action: ActionStyle,
}

impl StyleSheet {
    /// Resolves the slot styles from `theme` with the default emphasis
    /// algorithm.
    #[must_use]
    pub fn resolve(theme: &Theme) -> Self {
        Self::resolve_with(theme, &LuminanceEmphasize)
    }

    /// Resolves the slot styles using a caller-supplied emphasis algorithm.
    ///
    /// The root background is the emphasized theme background (factor
    /// [`LIGHT_EMPHASIS`] in light mode, [`DARK_EMPHASIS`] in dark mode) and
    /// the root text color is the theme contrast color for that background.
    #[must_use]
    pub fn resolve_with(theme: &Theme, emphasis: &impl Emphasize) -> Self {
        let factor = if theme.is_light() {
            LIGHT_EMPHASIS
        } else {
            DARK_EMPHASIS
        };
        let background = emphasis.emphasize(theme.colors().background_default, factor);
        let text_color = theme.contrast_text(background);

        Self {
            root: RootStyle {
                typography: theme.body_text(),
                background,
                text_color,
                padding: ROOT_PADDING,
                border_radius: theme.shape().border_radius,
                wrap: true,
                min_width: sizing::CONTENT_MIN_WIDTH,
                small_breakpoint: theme.breakpoints().sm,
            },
            message: MessageStyle {
                padding: MESSAGE_PADDING,
            },
            action: ActionStyle {
                padding: ACTION_PADDING,
                margin_end: ACTION_MARGIN_END,
            },
        }
    }
}

/// Single-entry memo for resolved style sheets, keyed by theme identity.
///
/// Keeps the sheet of the last seen theme identity and re-resolves only when
/// the identity changes or after [`StyleCache::invalidate`].
#[derive(Debug, Default)]
pub struct StyleCache {
    entry: Option<(ThemeId, Arc<StyleSheet>)>,
}

impl StyleCache {
    #[must_use]
    pub fn new() -> Self {
        Self { entry: None }
    }

    /// Returns the sheet for `theme`, resolving it on an identity change.
    pub fn get_or_resolve(&mut self, theme: &Theme) -> Arc<StyleSheet> {
        if let Some((id, sheet)) = &self.entry {
            if *id == theme.id() {
                return Arc::clone(sheet);
            }
        }
        let sheet = Arc::new(StyleSheet::resolve(theme));
        self.entry = Some((theme.id(), Arc::clone(&sheet)));
        sheet
    }

    /// Drops the cached entry; the next lookup re-resolves.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Identity of the currently cached theme, if any.
    #[must_use]
    pub fn cached_theme(&self) -> Option<ThemeId> {
        self.entry.as_ref().map(|(id, _)| *id)
    }
}
