// SPDX-License-Identifier: MPL-2.0
//! Elevated surface primitive backing the snackbar content.
//!
//! The surface owns the non-layout rendering concerns: shadow depth from an
//! elevation level, corner treatment, and the background/text pairing. The
//! content renderer supplies those inputs; embedders receive a
//! [`SurfaceLayout`] description alongside the built widget.

use crate::design_tokens::shadow;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow};

/// Shadow for an elevation level, collapsed onto the token shadow scale.
#[must_use]
pub fn shadow_for_elevation(elevation: u8) -> Shadow {
    match elevation {
        0 => shadow::NONE,
        1..=3 => shadow::SM,
        4..=8 => shadow::MD,
        _ => shadow::LG,
    }
}

/// Visual inputs of the surface container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceStyle {
    pub background: Color,
    pub text_color: Color,
    pub border_radius: f32,
    pub elevation: u8,
}

impl SurfaceStyle {
    /// Container style for iced, with the shadow derived from the elevation
    /// level.
    #[must_use]
    pub fn container_style(&self) -> container::Style {
        container::Style {
            background: Some(Background::Color(self.background)),
            text_color: Some(self.text_color),
            border: Border {
                radius: self.border_radius.into(),
                ..Default::default()
            },
            shadow: shadow_for_elevation(self.elevation),
            ..Default::default()
        }
    }
}

/// Description of the rendered surface, exposed for tests and embedders.
///
/// `handle_id` is an opaque identifier the embedding layer can map onto its
/// own focus or measurement machinery; the surface itself never interprets
/// it. `attributes` is the open passthrough bag forwarded unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceLayout {
    pub role: Option<&'static str>,
    pub square: bool,
    pub elevation: u8,
    pub class_list: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub handle_id: Option<String>,
}
