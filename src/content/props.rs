// SPDX-License-Identifier: MPL-2.0
//! Builder and prop contract for the snackbar content surface.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use iced::Element;

use super::style::StyleSheet;

/// Accessibility role forwarded to the surface element.
///
/// `Alert` suits non-blocking announcements. Hosts that require focus before
/// the snackbar can be dismissed should pass `AlertDialog` instead; the
/// choice belongs to the host, not to this component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Alert,
    AlertDialog,
}

impl Role {
    /// Role name as forwarded to the surface.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Alert => "alert",
            Role::AlertDialog => "alertdialog",
        }
    }
}

/// Error returned when parsing an unknown role name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError(String);

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown snackbar role: {}", self.0)
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alert" => Ok(Role::Alert),
            "alertdialog" => Ok(Role::AlertDialog),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// Content for the message or action region: plain text or a prebuilt
/// element.
pub enum Slot<'a, Message> {
    Text(String),
    Element(Element<'a, Message>),
}

impl<'a, Message> Slot<'a, Message> {
    /// The plain text of this slot, when it carries any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Slot::Text(text) => Some(text),
            Slot::Element(_) => None,
        }
    }
}

impl<'a, Message> From<&str> for Slot<'a, Message> {
    fn from(text: &str) -> Self {
        Slot::Text(text.to_string())
    }
}

impl<'a, Message> From<String> for Slot<'a, Message> {
    fn from(text: String) -> Self {
        Slot::Text(text)
    }
}

impl<'a, Message> From<Element<'a, Message>> for Slot<'a, Message> {
    fn from(element: Element<'a, Message>) -> Self {
        Slot::Element(element)
    }
}

/// Role as supplied by the caller: typed, or a raw name validated at render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum RoleProp {
    Typed(Role),
    Named(String),
}

impl Default for RoleProp {
    fn default() -> Self {
        RoleProp::Typed(Role::Alert)
    }
}

/// Development-time prop contract violations.
///
/// Collected at render time and logged in debug builds; rendering always
/// proceeds with the documented fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No style sheet was supplied; default-theme styles are used instead.
    MissingClasses,
    /// The role name is neither `alert` nor `alertdialog`; `alert` is used
    /// instead.
    UnknownRole(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingClasses => {
                write!(f, "missing `classes`; falling back to default-theme styles")
            }
            Diagnostic::UnknownRole(name) => {
                write!(f, "unknown role {name:?}; falling back to \"alert\"")
            }
        }
    }
}

/// Builder for the snackbar content surface.
///
/// All props are optional except the style sheet, which is part of the prop
/// contract: omitting it produces a [`Diagnostic`] and the surface renders
/// with styles resolved from the default theme.
pub struct SnackbarContent<'a, Message> {
    pub(super) message: Option<Slot<'a, Message>>,
    pub(super) action: Option<Slot<'a, Message>>,
    pub(super) role: RoleProp,
    pub(super) class_name: Option<String>,
    pub(super) classes: Option<Arc<StyleSheet>>,
    pub(super) attributes: Vec<(String, String)>,
    pub(super) handle_id: Option<String>,
    pub(super) viewport_width: Option<f32>,
}

impl<'a, Message> SnackbarContent<'a, Message> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: None,
            action: None,
            role: RoleProp::default(),
            class_name: None,
            classes: None,
            attributes: Vec::new(),
            handle_id: None,
            viewport_width: None,
        }
    }

    /// Sets the message to display.
    #[must_use]
    pub fn message(mut self, message: impl Into<Slot<'a, Message>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the action to display, typically a button.
    #[must_use]
    pub fn action(mut self, action: impl Into<Slot<'a, Message>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Sets the accessibility role of the surface.
    #[must_use]
    pub fn role(mut self, role: Role) -> Self {
        self.role = RoleProp::Typed(role);
        self
    }

    /// Sets the role from a raw name; unknown names are reported at render
    /// and fall back to [`Role::Alert`].
    #[must_use]
    pub fn role_named(mut self, role: impl Into<String>) -> Self {
        self.role = RoleProp::Named(role.into());
        self
    }

    /// Appends an extra class to the root class list.
    #[must_use]
    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }

    /// Injects the resolved style sheet the surface renders with.
    #[must_use]
    pub fn classes(mut self, classes: impl Into<Arc<StyleSheet>>) -> Self {
        self.classes = Some(classes.into());
        self
    }

    /// Adds a passthrough attribute forwarded to the surface description.
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Identifier embedders can use to find the surface for measurement or
    /// focus.
    #[must_use]
    pub fn handle_id(mut self, id: impl Into<String>) -> Self {
        self.handle_id = Some(id.into());
        self
    }

    /// Viewport width driving the responsive width rule; absent means a
    /// narrow viewport.
    #[must_use]
    pub fn viewport_width(mut self, width: f32) -> Self {
        self.viewport_width = Some(width);
        self
    }

    /// The role the surface will carry, after fallback for unknown names.
    #[must_use]
    pub fn effective_role(&self) -> Role {
        match &self.role {
            RoleProp::Typed(role) => *role,
            RoleProp::Named(name) => name.parse().unwrap_or_default(),
        }
    }

    /// Checks the prop contract, returning every violation found.
    ///
    /// Violations never abort rendering; they are logged in debug builds and
    /// each has a defined fallback.
    #[must_use]
    pub fn validate(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        if self.classes.is_none() {
            diagnostics.push(Diagnostic::MissingClasses);
        }
        if let RoleProp::Named(name) = &self.role {
            if Role::from_str(name).is_err() {
                diagnostics.push(Diagnostic::UnknownRole(name.clone()));
            }
        }
        diagnostics
    }
}

impl<'a, Message> Default for SnackbarContent<'a, Message> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Content = SnackbarContent<'static, ()>;

    #[test]
    fn role_names_round_trip() {
        assert_eq!("alert".parse::<Role>(), Ok(Role::Alert));
        assert_eq!("alertdialog".parse::<Role>(), Ok(Role::AlertDialog));
        assert_eq!(Role::Alert.as_str(), "alert");
        assert_eq!(Role::AlertDialog.as_str(), "alertdialog");
    }

    #[test]
    fn unknown_role_name_fails_to_parse() {
        let err = "tooltip".parse::<Role>().unwrap_err();
        assert!(err.to_string().contains("tooltip"));
    }

    #[test]
    fn default_role_is_alert() {
        let content = Content::new();
        assert_eq!(content.effective_role(), Role::Alert);
    }

    #[test]
    fn typed_role_is_used_verbatim() {
        let content = Content::new().role(Role::AlertDialog);
        assert_eq!(content.effective_role(), Role::AlertDialog);
    }

    #[test]
    fn named_role_parses_or_falls_back() {
        let content = Content::new().role_named("alertdialog");
        assert_eq!(content.effective_role(), Role::AlertDialog);

        let content = Content::new().role_named("banner");
        assert_eq!(content.effective_role(), Role::Alert);
    }

    #[test]
    fn validate_reports_missing_classes() {
        let content = Content::new().message("Saved");
        assert!(content.validate().contains(&Diagnostic::MissingClasses));
    }

    #[test]
    fn validate_reports_unknown_role() {
        let content = Content::new().role_named("banner");
        assert!(content
            .validate()
            .contains(&Diagnostic::UnknownRole("banner".to_string())));
    }

    #[test]
    fn validate_accepts_known_named_role() {
        let content = Content::new().role_named("alert");
        let diagnostics = content.validate();
        assert!(!diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::UnknownRole(_))));
    }

    #[test]
    fn slot_text_is_exposed() {
        let slot: Slot<'static, ()> = "Saved".into();
        assert_eq!(slot.text(), Some("Saved"));
    }

    #[test]
    fn diagnostics_have_readable_messages() {
        assert!(Diagnostic::MissingClasses.to_string().contains("classes"));
        assert!(Diagnostic::UnknownRole("banner".into())
            .to_string()
            .contains("banner"));
    }
}
