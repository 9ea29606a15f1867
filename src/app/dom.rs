//! Browser-side implementations of the locator and style scope, plus the
//! file read behind the avatar uploader.

use leptos::prelude::document;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{File, FileReader, ProgressEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::profile::{AvatarError, AvatarImage};
use crate::section::{Section, SectionBounds, ViewportSectionLocator};
use crate::theme::{StyleScope, Theme, DARK_CLASS};

/// Reads section bounds with `getBoundingClientRect`.
pub struct DomSectionLocator;

impl ViewportSectionLocator for DomSectionLocator {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        let rect = document()
            .get_element_by_id(section.id())?
            .get_bounding_client_rect();
        Some(SectionBounds::new(rect.top(), rect.bottom()))
    }
}

/// Toggles the `dark` class on `<html>`.
pub struct DocumentScope;

impl StyleScope for DocumentScope {
    fn apply(&self, theme: Theme) {
        let Some(root) = document().document_element() else {
            return;
        };
        let classes = root.class_list();
        let res = if theme.is_dark() {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        if let Err(e) = res {
            log::warn!("could not switch to {theme} theme: {e:?}");
        }
    }
}

pub fn scroll_into_view(section: Section) {
    if let Some(el) = document().get_element_by_id(section.id()) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Starts reading `file` as a data URL. `on_done` runs exactly once, from
/// `loadend`, with the image or the reason the read failed.
pub fn read_image(
    file: &File,
    on_done: impl FnOnce(Result<AvatarImage, AvatarError>) + 'static,
) -> Result<(), AvatarError> {
    let reader = FileReader::new().map_err(|e| AvatarError::ReadFailed(format!("{e:?}")))?;

    let done = reader.clone();
    let name = file.name();
    let onloadend = Closure::once_into_js(move |_: ProgressEvent| {
        let result = done.result().ok().and_then(|v| v.as_string());
        on_done(AvatarImage::from_read(result, &name));
    });

    reader.set_onloadend(Some(onloadend.unchecked_ref()));
    reader
        .read_as_data_url(file)
        .map_err(|e| AvatarError::ReadFailed(format!("{e:?}")))
}
