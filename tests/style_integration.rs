// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced_snackbar::color::{contrast_ratio, emphasize};
    use iced_snackbar::content::{StyleSheet, DARK_EMPHASIS, LIGHT_EMPHASIS};
    use iced_snackbar::design_tokens::{palette, radius, sizing, spacing, typography};
    use iced_snackbar::theme::{Theme, ThemeMode};

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::INFO_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Typography
        let _ = typography::BODY;

        // Radius and sizing
        let _ = radius::SM;
        let _ = sizing::CONTENT_MIN_WIDTH;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = Theme::light();
        let dark = Theme::dark();

        // Backgrounds should be visually opposite between light and dark
        assert!(light.colors().background_default.r > dark.colors().background_default.r);

        // Text colors should also be opposite between light and dark
        assert!(light.colors().text_primary.r < dark.colors().text_primary.r);
    }

    #[test]
    fn resolver_and_theme_agree_on_the_emphasis_factor() {
        let light = Theme::light();
        let dark = Theme::dark();

        assert_eq!(
            StyleSheet::resolve(&light).root.background,
            emphasize(light.colors().background_default, LIGHT_EMPHASIS)
        );
        assert_eq!(
            StyleSheet::resolve(&dark).root.background,
            emphasize(dark.colors().background_default, DARK_EMPHASIS)
        );
    }

    #[test]
    fn resolved_surfaces_are_readable_in_both_modes() {
        for theme in [Theme::light(), Theme::dark()] {
            let sheet = StyleSheet::resolve(&theme);
            let ratio = contrast_ratio(sheet.root.background, sheet.root.text_color);
            assert!(
                ratio >= theme.contrast_threshold(),
                "unreadable pairing, contrast ratio {ratio}"
            );
        }
    }

    #[test]
    fn explicit_modes_resolve_without_system_lookup() {
        assert!(Theme::from_mode(ThemeMode::Dark).is_dark());
        assert!(!Theme::from_mode(ThemeMode::Light).is_dark());
    }

    #[test]
    fn min_width_sits_below_the_small_breakpoint() {
        let sheet = StyleSheet::resolve(&Theme::light());
        assert!(sheet.root.min_width < sheet.root.small_breakpoint);
    }
}
