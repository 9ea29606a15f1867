use std::fmt;

use crate::storage::{KeyValueStore, StorageError};

pub const THEME_KEY: &str = "theme";

/// Class placed on the root element while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Only the exact marker `"dark"` selects the dark theme. Anything else,
    /// including garbage, is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The document-wide switch that style rules read to pick light or dark
/// variants.
pub trait StyleScope {
    fn apply(&self, theme: Theme);
}

impl<S: StyleScope + ?Sized> StyleScope for &S {
    fn apply(&self, theme: Theme) {
        (**self).apply(theme)
    }
}

pub fn load_theme(store: &impl KeyValueStore) -> Theme {
    Theme::from_stored(store.get(THEME_KEY).as_deref())
}

pub fn save_theme(store: &impl KeyValueStore, theme: Theme) -> Result<(), StorageError> {
    store.set(THEME_KEY, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn only_exact_marker_is_dark() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn load_after_save() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store), Theme::Light);
        save_theme(&store, Theme::Dark).unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(load_theme(&store), Theme::Dark);
    }

    #[test]
    fn toggled_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }
}
