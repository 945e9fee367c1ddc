// SPDX-License-Identifier: MPL-2.0
//! Snackbar content component.
//!
//! This module provides the styled surface inside a snackbar-style
//! notification: a message region plus an optional action region on an
//! elevated, theme-colored surface.
//!
//! # Components
//!
//! - [`props`] - `SnackbarContent` builder, role and prop contract
//! - [`style`] - slot style resolution and the theme-keyed style cache
//! - [`view`] - render-tree description and iced widget construction
//!
//! # Usage
//!
//! ```
//! use iced_snackbar::content::{SnackbarContent, StyleCache};
//! use iced_snackbar::theme::Theme;
//!
//! let theme = Theme::dark();
//! let mut cache = StyleCache::new();
//!
//! let content: SnackbarContent<'_, ()> = SnackbarContent::new()
//!     .classes(cache.get_or_resolve(&theme))
//!     .message("Photo saved");
//!
//! let layout = content.layout();
//! assert_eq!(layout.surface.role, Some("alert"));
//! ```
//!
//! # Design Considerations
//!
//! - Dismiss timers, focus handling, transitions and positioning belong to
//!   the snackbar host wrapping this surface, not to the content itself.
//! - The surface background is an emphasized variant of the theme
//!   background and the text color is its contrast color; the pairing is
//!   never split.

mod props;
mod style;
mod view;

pub use props::{Diagnostic, ParseRoleError, Role, SnackbarContent, Slot};
pub use style::{
    ActionStyle, MessageStyle, RootStyle, RootWidth, StyleCache, StyleSheet, ACTION_CLASS,
    DARK_EMPHASIS, LIGHT_EMPHASIS, MESSAGE_CLASS, ROOT_CLASS,
};
pub use view::{BlockLayout, ContentLayout, SlotKind, SURFACE_ELEVATION};
