//! The page's view state and the transitions that move it forward.
//!
//! Every transition takes the current record by reference and hands back a new
//! one. Side effects (storage writes, the document class) go through the
//! injected [`KeyValueStore`] and [`StyleScope`] so the whole flow can run
//! without a browser.

use crate::profile::{self, AvatarImage};
use crate::section::{self, Section, ViewportSectionLocator};
use crate::storage::KeyValueStore;
use crate::theme::{self, StyleScope, Theme};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
    pub active_section: Section,
    pub dark_mode: bool,
    pub avatar: AvatarImage,
}

impl UiState {
    /// Rehydrates the persisted parts of the state. A stored dark preference is
    /// pushed to the style scope before the state is returned.
    pub fn mount(store: &impl KeyValueStore, scope: &impl StyleScope) -> Self {
        let theme = theme::load_theme(store);
        if theme.is_dark() {
            scope.apply(theme);
        }
        Self {
            dark_mode: theme.is_dark(),
            avatar: profile::load_avatar(store),
            ..Self::default()
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.dark_mode)
    }

    pub fn toggle_menu(&self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self.clone()
        }
    }

    /// Closes the mobile menu. The active section is left to the scroll
    /// tracker, which picks it up once the smooth scroll lands.
    pub fn navigate_to(&self, _target: Section) -> Self {
        Self {
            menu_open: false,
            ..self.clone()
        }
    }

    pub fn on_scroll(&self, locator: &impl ViewportSectionLocator) -> Self {
        match section::locate_active_section(locator) {
            Some(active) if active != self.active_section => Self {
                active_section: active,
                ..self.clone()
            },
            _ => self.clone(),
        }
    }

    /// Flips the theme, updates the style scope and persists the choice. A
    /// failed write is logged; the toggle still takes effect for this page.
    pub fn toggle_theme(&self, store: &impl KeyValueStore, scope: &impl StyleScope) -> Self {
        let next = self.theme().toggled();
        scope.apply(next);
        if let Err(e) = theme::save_theme(store, next) {
            log::warn!("theme preference not saved: {e}");
        }
        Self {
            dark_mode: next.is_dark(),
            ..self.clone()
        }
    }

    /// Swaps in a freshly uploaded avatar and persists it.
    pub fn with_avatar(&self, avatar: AvatarImage, store: &impl KeyValueStore) -> Self {
        if let Err(e) = profile::save_avatar(store, &avatar) {
            log::warn!("profile image not saved: {e}");
        }
        Self {
            avatar,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{DEFAULT_AVATAR_URL, PROFILE_IMAGE_KEY};
    use crate::section::SectionBounds;
    use crate::storage::MemoryStore;
    use crate::theme::THEME_KEY;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingScope(RefCell<Vec<Theme>>);

    impl StyleScope for RecordingScope {
        fn apply(&self, theme: Theme) {
            self.0.borrow_mut().push(theme);
        }
    }

    struct Only(Section);

    impl ViewportSectionLocator for Only {
        fn bounds(&self, section: Section) -> Option<SectionBounds> {
            (section == self.0).then(|| SectionBounds::new(0.0, 600.0))
        }
    }

    struct Nowhere;

    impl ViewportSectionLocator for Nowhere {
        fn bounds(&self, _: Section) -> Option<SectionBounds> {
            None
        }
    }

    #[test]
    fn mount_with_empty_storage() {
        let scope = RecordingScope::default();
        let state = UiState::mount(&MemoryStore::new(), &scope);
        assert_eq!(state.active_section, Section::Home);
        assert!(!state.dark_mode);
        assert!(!state.menu_open);
        assert_eq!(state.avatar.as_str(), DEFAULT_AVATAR_URL);
        assert!(scope.0.borrow().is_empty());
    }

    #[test]
    fn mount_applies_stored_dark_theme() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "dark").unwrap();
        let scope = RecordingScope::default();
        let state = UiState::mount(&store, &scope);
        assert!(state.dark_mode);
        assert_eq!(*scope.0.borrow(), vec![Theme::Dark]);
    }

    #[test]
    fn toggle_twice_restores_scope_and_storage() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "light").unwrap();
        let scope = RecordingScope::default();
        let initial = UiState::mount(&store, &scope);

        let once = initial.toggle_theme(&store, &scope);
        assert!(once.dark_mode);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        let twice = once.toggle_theme(&store, &scope);
        assert_eq!(twice, initial);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(scope.0.borrow().last(), Some(&Theme::Light));
    }

    #[test]
    fn toggle_survives_unwritable_storage() {
        let store = MemoryStore::with_quota(0);
        let scope = RecordingScope::default();
        let state = UiState::default().toggle_theme(&store, &scope);
        assert!(state.dark_mode);
        assert_eq!(*scope.0.borrow(), vec![Theme::Dark]);
        assert!(store.is_empty());
    }

    #[test]
    fn navigation_always_closes_menu() {
        let open = UiState::default().toggle_menu();
        assert!(open.menu_open);
        for target in Section::ALL {
            assert!(!open.navigate_to(target).menu_open);
            let closed = UiState::default();
            assert_eq!(closed.navigate_to(target), closed);
        }
    }

    #[test]
    fn scroll_updates_or_keeps_active_section() {
        let state = UiState::default().on_scroll(&Only(Section::Portfolio));
        assert_eq!(state.active_section, Section::Portfolio);
        assert_eq!(state.on_scroll(&Nowhere).active_section, Section::Portfolio);
    }

    #[test]
    fn upload_replaces_and_persists_avatar() {
        let store = MemoryStore::new();
        let data = "data:image/gif;base64,R0lGODlhAQABAAAAACw=";
        let state = UiState::default().with_avatar(AvatarImage::from_upload(data).unwrap(), &store);
        assert_eq!(state.avatar.as_str(), data);
        assert_eq!(store.get(PROFILE_IMAGE_KEY).as_deref(), Some(data));
    }

    #[test]
    fn last_completed_upload_wins() {
        let store = MemoryStore::new();
        let first = AvatarImage::from_upload("data:image/png;base64,AAAA").unwrap();
        let second = AvatarImage::from_upload("data:image/png;base64,BBBB").unwrap();
        // reads finish out of order: the second file completes first
        let state = UiState::default()
            .with_avatar(second, &store)
            .with_avatar(first.clone(), &store);
        assert_eq!(state.avatar, first);
        assert_eq!(store.get(PROFILE_IMAGE_KEY).as_deref(), Some(first.as_str()));
    }
}
