//! Navigation menu derived from a document's sections.
//!
//! The menu mirrors the section set one-to-one: one [`NavItem`] per section,
//! in document order, each carrying the fragment href of its section anchor.
//!
//! # Usage
//!
//! ```rust
//! use scroll_nav::navigation::NavMenu;
//! use scroll_nav::section::{Section, SectionSet};
//!
//! let sections = SectionSet::from_sections(vec![Section {
//!     ordinal: 1,
//!     display_name: "section".into(),
//!     nav_label: "Section 1".into(),
//!     heading: "Section 1".into(),
//!     paragraphs: ["a".into(), "b".into()],
//! }])
//! .unwrap();
//! let menu = NavMenu::from_sections(&sections);
//! assert_eq!(menu.items()[0].href, "#section1");
//! ```

extern crate alloc;

use alloc::string::String;
use smallvec::SmallVec;

use crate::section::SectionSet;

/// A single navigation menu entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Display label for this entry.
    pub label: String,
    /// Fragment href targeting the section anchor (e.g. `#section1`).
    pub href: String,
    /// Element id of the nav item itself (e.g. `listItem1`).
    pub item_id: String,
    /// Ordinal of the section this entry targets.
    pub target: usize,
}

/// Navigation menu for a single-page document.
///
/// Immutable once built; items are index-aligned with the section set the
/// menu was derived from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    items: SmallVec<[NavItem; 8]>,
}

impl NavMenu {
    /// Derive a menu from a section set, one item per section in order.
    pub fn from_sections(sections: &SectionSet) -> Self {
        let items = sections
            .iter()
            .map(|section| NavItem {
                label: section.nav_label.clone(),
                href: section.anchor_href(),
                item_id: section.nav_item_id(),
                target: section.ordinal,
            })
            .collect();
        Self { items }
    }

    /// Menu entries in document order.
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the menu has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up the entry mirroring a section ordinal.
    pub fn item_for(&self, ordinal: usize) -> Option<&NavItem> {
        self.items.iter().find(|item| item.target == ordinal)
    }

    /// Resolve a fragment href back to the section ordinal it targets.
    ///
    /// Accepts the href with or without its leading `#`.
    pub fn href_target(&self, href: &str) -> Option<usize> {
        let fragment = href.strip_prefix('#').unwrap_or(href);
        if fragment.is_empty() {
            return None;
        }
        self.items
            .iter()
            .find(|item| item.href.strip_prefix('#') == Some(fragment))
            .map(|item| item.target)
    }
}
