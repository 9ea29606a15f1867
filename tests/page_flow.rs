use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use designer_portfolio::profile::{AvatarImage, DEFAULT_AVATAR_URL, PROFILE_IMAGE_KEY};
use designer_portfolio::section::{Section, SectionBounds, ViewportSectionLocator};
use designer_portfolio::state::UiState;
use designer_portfolio::storage::{KeyValueStore, MemoryStore};
use designer_portfolio::theme::{StyleScope, Theme, THEME_KEY};

/// Mirrors the `dark` class on the root element.
#[derive(Default)]
struct RootClass(Cell<bool>);

impl StyleScope for RootClass {
    fn apply(&self, theme: Theme) {
        self.0.set(theme.is_dark());
    }
}

/// A page of sections with fixed heights, scrolled by `scroll_y`.
struct Page {
    heights: HashMap<Section, f64>,
    scroll_y: RefCell<f64>,
}

impl Page {
    fn new() -> Self {
        Self {
            heights: HashMap::from([
                (Section::Home, 900.0),
                (Section::About, 1200.0),
                (Section::Services, 1100.0),
                (Section::Portfolio, 1600.0),
                (Section::Contact, 1000.0),
            ]),
            scroll_y: RefCell::new(0.0),
        }
    }

    /// Scroll so `section` starts 40px above the viewport top, like
    /// `scrollIntoView` landing under the fixed nav.
    fn scroll_to(&self, section: Section) {
        let top: f64 = Section::ALL
            .iter()
            .take_while(|&&s| s != section)
            .map(|s| self.heights[s])
            .sum();
        *self.scroll_y.borrow_mut() = top + 40.0;
    }
}

impl ViewportSectionLocator for Page {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        let mut top = -*self.scroll_y.borrow();
        for s in Section::ALL {
            let height = *self.heights.get(&s)?;
            if s == section {
                return Some(SectionBounds::new(top, top + height));
            }
            top += height;
        }
        None
    }
}

#[test]
fn first_visit_then_reload() {
    let store = MemoryStore::new();
    let scope = RootClass::default();
    let page = Page::new();

    let state = UiState::mount(&store, &scope);
    assert_eq!(state.active_section, Section::Home);
    assert!(!state.dark_mode);
    assert_eq!(state.avatar.as_str(), DEFAULT_AVATAR_URL);

    // open the mobile menu and jump to each section in turn
    let mut state = state;
    for target in Section::ALL {
        state = state.toggle_menu();
        assert!(state.menu_open);
        state = state.navigate_to(target);
        page.scroll_to(target);
        state = state.on_scroll(&page);
        assert!(!state.menu_open);
        assert_eq!(state.active_section, target);
    }

    let state = state.toggle_theme(&store, &scope);
    assert!(scope.0.get());
    let upload = "data:image/jpeg;base64,/9j/4AAQSkZJRgABAQEASABIAAD/2wBDAP";
    let state = state.with_avatar(AvatarImage::from_upload(upload).unwrap(), &store);
    assert_eq!(store.get(PROFILE_IMAGE_KEY).as_deref(), Some(state.avatar.as_str()));

    // fresh page: new scope, same storage
    let reloaded_scope = RootClass::default();
    let reloaded = UiState::mount(&store, &reloaded_scope);
    assert!(reloaded.dark_mode);
    assert!(reloaded_scope.0.get());
    assert_eq!(reloaded.avatar.as_str(), upload);
    assert_eq!(reloaded.active_section, Section::Home);
    assert!(!reloaded.menu_open);
}

#[test]
fn unrecognised_theme_value_is_light() {
    let store = MemoryStore::new();
    store.set(THEME_KEY, "midnight").unwrap();
    let scope = RootClass::default();
    let state = UiState::mount(&store, &scope);
    assert!(!state.dark_mode);
    assert!(!scope.0.get());

    let state = state.toggle_theme(&store, &scope).toggle_theme(&store, &scope);
    assert!(!state.dark_mode);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn oversized_upload_still_shows_but_is_not_kept() {
    let store = MemoryStore::with_quota(64);
    let big = format!("data:image/png;base64,{}", "A".repeat(4096));
    let state = UiState::default().with_avatar(AvatarImage::from_upload(big.clone()).unwrap(), &store);
    assert_eq!(state.avatar.as_str(), big);
    assert_eq!(store.get(PROFILE_IMAGE_KEY), None);
    assert_eq!(UiState::mount(&store, &RootClass::default()).avatar.as_str(), DEFAULT_AVATAR_URL);
}
