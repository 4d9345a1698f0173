//! Color theme record.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "auto" => Ok(Theme::Auto),
            _ => Err(()),
        }
    }
}

/// Theme preference plus the effective dark flag.
///
/// The server cannot see the system preference, so `Auto` renders light
/// until the client calls [`ThemeStore::hydrate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeStore {
    pub theme: Theme,
    pub is_dark: bool,
}

impl ThemeStore {
    pub fn set_theme(&mut self, theme: Theme, system_dark: bool) {
        self.theme = theme;
        self.is_dark = match theme {
            Theme::Dark => true,
            Theme::Light => false,
            Theme::Auto => system_dark,
        };
    }

    pub fn toggle_theme(&mut self, system_dark: bool) {
        let next = if self.theme == Theme::Dark {
            Theme::Light
        } else {
            Theme::Dark
        };
        self.set_theme(next, system_dark);
    }

    /// Recompute `is_dark` once the system preference is known.
    pub fn hydrate(&mut self, system_dark: bool) {
        self.set_theme(self.theme, system_dark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_default() {
        let store = ThemeStore::default();
        assert_eq!(store.theme, Theme::Auto);
        assert!(!store.is_dark);
    }

    #[test]
    fn test_toggle() {
        let mut store = ThemeStore::default();
        store.toggle_theme(false);
        assert_eq!(store.theme, Theme::Dark);
        assert!(store.is_dark);
        store.toggle_theme(true);
        assert_eq!(store.theme, Theme::Light);
        assert!(!store.is_dark);
    }

    #[test]
    fn test_hydrate_auto_follows_system() {
        let mut store = ThemeStore::default();
        store.hydrate(true);
        assert!(store.is_dark);

        store.set_theme(Theme::Light, true);
        store.hydrate(true);
        assert!(!store.is_dark);
    }

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse(), Ok(Theme::Dark));
        assert!("Dark".parse::<Theme>().is_err());
    }
}
