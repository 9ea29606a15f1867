/// Distance from the top of the viewport, in CSS pixels, that a section must
/// straddle to count as the one being read.
pub const SCROLL_REFERENCE_PX: f64 = 100.0;

/// The five named regions of the page, in document order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Services,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Portfolio,
        Section::Contact,
    ];

    /// The element id of the section, also the text of its nav entry.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Portfolio => "portfolio",
            Section::Contact => "contact",
        }
    }
}

/// Vertical extent of an element relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Looks up where a section currently sits in the viewport.
pub trait ViewportSectionLocator {
    /// `None` when the section has no element on the page.
    fn bounds(&self, section: Section) -> Option<SectionBounds>;
}

/// First section, in document order, whose bounds straddle the reference line.
pub fn locate_active_section(locator: &impl ViewportSectionLocator) -> Option<Section> {
    Section::ALL.into_iter().find(|&section| {
        locator
            .bounds(section)
            .is_some_and(|b| b.straddles(SCROLL_REFERENCE_PX))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Layout(HashMap<Section, SectionBounds>);

    impl ViewportSectionLocator for Layout {
        fn bounds(&self, section: Section) -> Option<SectionBounds> {
            self.0.get(&section).copied()
        }
    }

    /// Stacks sections 800px tall and scrolls the page by `offset`.
    fn stacked(offset: f64) -> Layout {
        Layout(
            Section::ALL
                .into_iter()
                .enumerate()
                .map(|(i, s)| {
                    let top = i as f64 * 800.0 - offset;
                    (s, SectionBounds::new(top, top + 800.0))
                })
                .collect(),
        )
    }

    #[test]
    fn each_section_is_found_when_scrolled_to() {
        for (i, section) in Section::ALL.into_iter().enumerate() {
            let layout = stacked(i as f64 * 800.0 + 50.0);
            assert_eq!(locate_active_section(&layout), Some(section));
        }
    }

    #[test]
    fn boundary_is_inclusive_and_first_wins() {
        // about ends exactly where services begins, both touch the line
        let layout = Layout(HashMap::from([
            (Section::About, SectionBounds::new(-500.0, 100.0)),
            (Section::Services, SectionBounds::new(100.0, 900.0)),
        ]));
        assert_eq!(locate_active_section(&layout), Some(Section::About));
    }

    #[test]
    fn missing_elements_are_skipped() {
        let layout = Layout(HashMap::from([(
            Section::Contact,
            SectionBounds::new(0.0, 400.0),
        )]));
        assert_eq!(locate_active_section(&layout), Some(Section::Contact));
        assert_eq!(locate_active_section(&Layout(HashMap::new())), None);
    }

    #[test]
    fn nothing_straddles_below_the_fold() {
        let layout = Layout(HashMap::from([(Section::Home, SectionBounds::new(120.0, 900.0))]));
        assert_eq!(locate_active_section(&layout), None);
    }

    #[test]
    fn ids_are_distinct_lowercase_anchors() {
        let ids: std::collections::HashSet<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), Section::ALL.len());
        assert!(ids
            .iter()
            .all(|id| !id.is_empty() && id.chars().all(|c| c.is_ascii_lowercase())));
    }
}
