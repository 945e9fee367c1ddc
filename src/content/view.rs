// SPDX-License-Identifier: MPL-2.0
//! Render-tree construction for the snackbar content surface.
//!
//! [`SnackbarContent::layout`] describes the tree as plain data so tests and
//! embedders can inspect it; [`SnackbarContent::view`] builds the matching
//! iced widget tree. The action block is an explicit [`Option`] in both.

use iced::widget::{Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

use super::props::{Slot, SnackbarContent};
use super::style::{RootWidth, StyleSheet, ACTION_CLASS, MESSAGE_CLASS, ROOT_CLASS};
use crate::surface::{SurfaceLayout, SurfaceStyle};
use crate::theme::Theme;

/// Elevation of the content surface.
pub const SURFACE_ELEVATION: u8 = 6;

/// Which region a rendered block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Message,
    Action,
}

/// One block inside the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockLayout {
    pub slot: SlotKind,
    pub class: String,
    /// Plain text of the block, when the slot carries any.
    pub text: Option<String>,
}

/// Inspectable description of the rendered content tree.
///
/// The message block is always present; the action block only when an action
/// was supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentLayout {
    pub surface: SurfaceLayout,
    /// Blocks in render order.
    pub blocks: Vec<BlockLayout>,
}

impl ContentLayout {
    /// The message block.
    #[must_use]
    pub fn message(&self) -> Option<&BlockLayout> {
        self.blocks.iter().find(|b| b.slot == SlotKind::Message)
    }

    /// The action block, when present.
    #[must_use]
    pub fn action(&self) -> Option<&BlockLayout> {
        self.blocks.iter().find(|b| b.slot == SlotKind::Action)
    }
}

impl<'a, Message> SnackbarContent<'a, Message> {
    /// Describes the tree this builder will render.
    #[must_use]
    pub fn layout(&self) -> ContentLayout {
        let mut class_list = vec![ROOT_CLASS.to_string()];
        if let Some(extra) = &self.class_name {
            class_list.push(extra.clone());
        }

        let surface = SurfaceLayout {
            role: Some(self.effective_role().as_str()),
            square: true,
            elevation: SURFACE_ELEVATION,
            class_list,
            attributes: self.attributes.clone(),
            handle_id: self.handle_id.clone(),
        };

        let mut blocks = vec![BlockLayout {
            slot: SlotKind::Message,
            class: MESSAGE_CLASS.to_string(),
            text: self
                .message
                .as_ref()
                .and_then(Slot::text)
                .map(str::to_string),
        }];
        if let Some(action) = &self.action {
            blocks.push(BlockLayout {
                slot: SlotKind::Action,
                class: ACTION_CLASS.to_string(),
                text: action.text().map(str::to_string),
            });
        }

        ContentLayout { surface, blocks }
    }

    /// Builds the iced widget tree for this content.
    ///
    /// Styles come from the injected sheet; a missing sheet violates the
    /// prop contract and falls back to styles resolved from the default
    /// theme so rendering always succeeds. Contract violations are logged in
    /// debug builds.
    #[must_use]
    pub fn view(self) -> Element<'a, Message>
    where
        Message: 'a,
    {
        if cfg!(debug_assertions) {
            for diagnostic in self.validate() {
                log::warn!("snackbar content: {diagnostic}");
            }
        }

        let sheet = self
            .classes
            .as_deref()
            .copied()
            .unwrap_or_else(|| StyleSheet::resolve(&Theme::default()));
        let width = sheet.root.width_for(self.viewport_width);

        let message_element: Element<'a, Message> = match self.message {
            Some(Slot::Element(element)) => element,
            Some(Slot::Text(text)) => Text::new(text).size(sheet.root.typography.size).into(),
            None => Text::new(String::new()).into(),
        };

        let mut row = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(Container::new(message_element).padding(sheet.message.padding));

        if let Some(action) = self.action {
            let action_element: Element<'a, Message> = match action {
                Slot::Element(element) => element,
                Slot::Text(text) => Text::new(text).size(sheet.root.typography.size).into(),
            };
            row = row
                .push(Space::new().width(Length::Fill))
                .push(Container::new(action_element).padding(sheet.action.padding));
        }

        let body: Element<'a, Message> = match width {
            RootWidth::Grow => row.width(Length::Fill).into(),
            RootWidth::Natural { min_width } => Column::new()
                .push(row)
                .push(
                    Space::new()
                        .width(Length::Fixed(min_width))
                        .height(Length::Fixed(0.0)),
                )
                .into(),
        };

        let style = SurfaceStyle {
            background: sheet.root.background,
            text_color: sheet.root.text_color,
            border_radius: sheet.root.border_radius,
            elevation: SURFACE_ELEVATION,
        };

        let surface = Container::new(body)
            .padding(sheet.root.padding)
            .style(move |_theme: &iced::Theme| style.container_style());
        let surface = match width {
            RootWidth::Grow => surface.width(Length::Fill),
            RootWidth::Natural { .. } => surface,
        };

        surface.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Role;

    type Content = SnackbarContent<'static, ()>;

    fn classed(content: Content) -> Content {
        content.classes(StyleSheet::resolve(&Theme::light()))
    }

    #[test]
    fn message_only_renders_one_message_block() {
        let layout = classed(Content::new().message("Saved")).layout();
        let messages: Vec<_> = layout
            .blocks
            .iter()
            .filter(|b| b.slot == SlotKind::Message)
            .collect();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text.as_deref(), Some("Saved"));
        assert!(layout.action().is_none());
    }

    #[test]
    fn message_block_exists_even_without_a_message() {
        let layout = classed(Content::new()).layout();
        assert!(layout.message().is_some());
        assert_eq!(layout.message().unwrap().text, None);
    }

    #[test]
    fn action_block_follows_the_message_block() {
        let layout = classed(Content::new().message("Saved").action("Undo")).layout();
        assert_eq!(layout.blocks.len(), 2);
        assert_eq!(layout.blocks[0].slot, SlotKind::Message);
        assert_eq!(layout.blocks[1].slot, SlotKind::Action);
        assert_eq!(layout.blocks[1].text.as_deref(), Some("Undo"));
    }

    #[test]
    fn surface_is_square_and_elevated() {
        let layout = classed(Content::new()).layout();
        assert!(layout.surface.square);
        assert_eq!(layout.surface.elevation, SURFACE_ELEVATION);
    }

    #[test]
    fn default_role_reaches_the_surface() {
        let layout = classed(Content::new()).layout();
        assert_eq!(layout.surface.role, Some("alert"));
    }

    #[test]
    fn alertdialog_role_propagates_verbatim() {
        let layout = classed(Content::new().role(Role::AlertDialog)).layout();
        assert_eq!(layout.surface.role, Some("alertdialog"));
    }

    #[test]
    fn unknown_named_role_falls_back_to_alert() {
        let layout = classed(Content::new().role_named("banner")).layout();
        assert_eq!(layout.surface.role, Some("alert"));
    }

    #[test]
    fn class_name_is_appended_after_the_root_class() {
        let layout = classed(Content::new().class_name("extra")).layout();
        assert_eq!(layout.surface.class_list, vec![ROOT_CLASS, "extra"]);
    }

    #[test]
    fn blocks_carry_their_slot_classes() {
        let layout = classed(Content::new().message("m").action("a")).layout();
        assert_eq!(layout.message().unwrap().class, MESSAGE_CLASS);
        assert_eq!(layout.action().unwrap().class, ACTION_CLASS);
    }

    #[test]
    fn attributes_and_handle_pass_through() {
        let layout = classed(
            Content::new()
                .attribute("data-test", "snackbar")
                .handle_id("save-snackbar"),
        )
        .layout();
        assert_eq!(
            layout.surface.attributes,
            vec![("data-test".to_string(), "snackbar".to_string())]
        );
        assert_eq!(layout.surface.handle_id.as_deref(), Some("save-snackbar"));
    }

    #[test]
    fn view_builds_without_classes() {
        // Missing classes is a contract violation but never a crash.
        let content = Content::new().message("Saved");
        assert!(!content.validate().is_empty());
        let _element = content.view();
    }

    #[test]
    fn view_builds_with_an_action_and_viewport() {
        let content = classed(Content::new().message("Saved").action("Undo"))
            .viewport_width(800.0);
        let _element = content.view();
    }

    #[test]
    fn element_slots_render_without_text_metadata() {
        let element: Element<'static, ()> = Text::new("custom").into();
        let layout = classed(Content::new().message(element)).layout();
        assert_eq!(layout.message().unwrap().text, None);
    }
}
