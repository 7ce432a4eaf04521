//! Page-level UI state handed to every template render

use serde::{Deserialize, Serialize};

/// Colour scheme of the rendered pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class put on the `<html>` element
    pub fn html_class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    /// Caption of the toggle button, naming the theme it switches to
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark",
            Theme::Dark => "☀️ Light",
        }
    }
}

/// Session-local UI state. Nothing here is persisted; the page script
/// starts from these values and flips them in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub theme: Theme,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Template view of this state
    pub fn data(&self) -> UiData {
        UiData {
            theme: self.theme,
            html_class: self.theme.html_class(),
            toggle_label: self.theme.toggle_label(),
            toggle_label_light: Theme::Dark.toggle_label(),
            toggle_label_dark: Theme::Light.toggle_label(),
        }
    }
}

/// Serialized form of [`UiState`] for the templates
#[derive(Debug, Clone, Serialize)]
pub struct UiData {
    pub theme: Theme,
    pub html_class: &'static str,
    pub toggle_label: &'static str,
    /// Caption shown while the dark theme is active
    pub toggle_label_light: &'static str,
    /// Caption shown while the light theme is active
    pub toggle_label_dark: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_labels_name_the_other_theme() {
        assert_eq!(Theme::Light.toggle_label(), "🌙 Dark");
        assert_eq!(Theme::Dark.toggle_label(), "☀️ Light");
        assert_eq!(Theme::Dark.html_class(), "dark");
    }

    #[test]
    fn test_ui_data() {
        let data = UiState::new(Theme::Dark).data();
        assert_eq!(data.html_class, "dark");
        assert_eq!(data.toggle_label, "☀️ Light");
        assert_eq!(data.toggle_label_light, "☀️ Light");
        assert_eq!(data.toggle_label_dark, "🌙 Dark");
    }
}
