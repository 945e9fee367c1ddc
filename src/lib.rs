// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` provides the themed content surface used by snackbar-style
//! transient notifications in Iced applications.
//!
//! The crate covers the content surface only: a style resolver deriving a
//! background/text pairing from a theme, a renderer composing a message
//! region and an optional action region on an elevated surface, and a
//! development-time prop contract. Dismiss timers, focus orchestration,
//! transitions and positioning belong to the embedding snackbar host.

#![doc(html_root_url = "https://docs.rs/iced_snackbar/0.1.0")]

pub mod color;
pub mod config;
pub mod content;
pub mod design_tokens;
pub mod error;
pub mod surface;
pub mod theme;

pub use content::{ContentLayout, Role, SnackbarContent, StyleCache, StyleSheet};
pub use theme::{Theme, ThemeMode};
