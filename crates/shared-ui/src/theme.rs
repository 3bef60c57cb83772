use dioxus::prelude::*;

/// Color mode for the application.
///
/// Kaksha ships a single palette with a light and a dark rendition,
/// applied through the `data-theme` attribute on the document root.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Internal key used for the cookie and the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a mode key, falling back to light.
    pub fn from_key(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    /// The opposite mode.
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Shared theme state provided as context by the top-level App component.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub mode: Signal<ThemeMode>,
}

impl ThemeState {
    /// Apply the current mode to the document.
    pub fn apply(&self) {
        set_theme(self.mode.read().as_str());
    }
}

/// Seed the theme on application startup.
///
/// Reads the persisted mode from a cookie and applies it to the document
/// root. Call this once in your top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        document::eval(
            r#"
            (function() {
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'light';
                document.documentElement.setAttribute('data-theme', theme);
            })();
            "#,
        );
    });

    rsx! {}
}

/// A small sun/moon button that flips between light and dark mode.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<ThemeState>();
    let mode = *theme.mode.read();

    rsx! {
        button {
            class: "theme-toggle",
            aria_label: "Toggle color theme",
            onclick: move |_| {
                theme.mode.set(mode.toggled());
                theme.apply();
            },
            if mode == ThemeMode::Dark { "\u{2600}" } else { "\u{263E}" }
        }
    }
}

/// Set the active theme, persisting to a cookie and updating the document.
pub fn set_theme(theme: &str) {
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
        }})();
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn theme_mode_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn theme_mode_as_str_roundtrip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_key(mode.as_str()), mode);
        }
    }

    #[test]
    fn theme_mode_from_key_unknown_falls_back() {
        assert_eq!(ThemeMode::from_key("unknown"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_key(""), ThemeMode::Light);
    }

    #[test]
    fn theme_mode_toggle_is_an_involution() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }
}
