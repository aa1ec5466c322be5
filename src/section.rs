//! Section descriptors for a single-page document.
//!
//! A [`Section`] is a named content block with a unique 1-based ordinal and a
//! navigable anchor. A [`SectionSet`] is the validated, ordered collection the
//! rest of the crate works against: navigation menus are derived from it and
//! the viewport highlighter identifies sections by the ordinals it holds.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use smallvec::SmallVec;

use crate::error::ScrollNavError;

/// Limits for section set construction and ingest growth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionLimits {
    /// Maximum number of sections in one document.
    pub max_sections: usize,
    /// Maximum UTF-8 byte length for names, labels, and headings.
    pub max_label_bytes: usize,
    /// Maximum UTF-8 byte length for a single body paragraph.
    pub max_text_bytes: usize,
}

impl Default for SectionLimits {
    fn default() -> Self {
        Self {
            max_sections: 256,
            max_label_bytes: 4096,
            max_text_bytes: 64 * 1024,
        }
    }
}

impl SectionLimits {
    /// Preset with smaller bounds for fixed, hand-authored pages.
    pub fn compact() -> Self {
        Self {
            max_sections: 32,
            max_label_bytes: 256,
            max_text_bytes: 8 * 1024,
        }
    }
}

/// A single navigable content block.
///
/// Created once at startup and immutable thereafter; the descriptor never
/// carries visual state. Highlighting is tracked separately by ordinal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// 1-based ordinal, unique within a document.
    pub ordinal: usize,
    /// Base name used to derive the section element id.
    pub display_name: String,
    /// Label shown in the navigation menu (also the `data-nav` value).
    pub nav_label: String,
    /// Heading text rendered at the top of the section.
    pub heading: String,
    /// Body copy, always exactly two paragraphs.
    pub paragraphs: [String; 2],
}

impl Section {
    /// Element id for this section (`{display_name}{ordinal}`, e.g. `section1`).
    pub fn element_id(&self) -> String {
        alloc::format!("{}{}", self.display_name, self.ordinal)
    }

    /// Element id for the nav item mirroring this section (`listItem{ordinal}`).
    pub fn nav_item_id(&self) -> String {
        alloc::format!("listItem{}", self.ordinal)
    }

    /// Fragment href targeting this section's anchor.
    pub fn anchor_href(&self) -> String {
        alloc::format!("#{}", self.element_id())
    }
}

/// Ordered, validated collection of sections.
///
/// Order is document order as given at construction; ordinals are unique but
/// not required to be contiguous.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionSet {
    sections: SmallVec<[Section; 8]>,
}

impl SectionSet {
    /// Build a section set with default limits.
    pub fn from_sections(sections: Vec<Section>) -> Result<Self, ScrollNavError> {
        Self::from_sections_with_limits(sections, SectionLimits::default())
    }

    /// Build a section set with explicit limits.
    ///
    /// Rejects zero ordinals, duplicate ordinals, and any descriptor field
    /// exceeding the byte limits.
    pub fn from_sections_with_limits(
        sections: Vec<Section>,
        limits: SectionLimits,
    ) -> Result<Self, ScrollNavError> {
        if sections.len() > limits.max_sections {
            return Err(ScrollNavError::Section(alloc::format!(
                "Section count exceeds max_sections ({} > {})",
                sections.len(),
                limits.max_sections
            )));
        }

        let mut seen: SmallVec<[usize; 8]> = SmallVec::new();
        for section in &sections {
            if section.ordinal == 0 {
                return Err(ScrollNavError::Section(alloc::format!(
                    "Section '{}' has ordinal 0; ordinals are 1-based",
                    section.display_name
                )));
            }
            if seen.contains(&section.ordinal) {
                return Err(ScrollNavError::Section(alloc::format!(
                    "Duplicate section ordinal {}",
                    section.ordinal
                )));
            }
            seen.push(section.ordinal);

            for label in [&section.display_name, &section.nav_label, &section.heading] {
                if label.len() > limits.max_label_bytes {
                    return Err(ScrollNavError::Section(alloc::format!(
                        "Section {} label exceeds max_label_bytes ({} > {})",
                        section.ordinal,
                        label.len(),
                        limits.max_label_bytes
                    )));
                }
            }
            for paragraph in &section.paragraphs {
                if paragraph.len() > limits.max_text_bytes {
                    return Err(ScrollNavError::Section(alloc::format!(
                        "Section {} paragraph exceeds max_text_bytes ({} > {})",
                        section.ordinal,
                        paragraph.len(),
                        limits.max_text_bytes
                    )));
                }
            }
        }

        Ok(Self {
            sections: sections.into_iter().collect(),
        })
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check whether the set holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Iterate sections in document order.
    pub fn iter(&self) -> core::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Look up a section by ordinal.
    pub fn get(&self, ordinal: usize) -> Option<&Section> {
        self.sections.iter().find(|s| s.ordinal == ordinal)
    }

    /// First section in document order, if any.
    pub fn first(&self) -> Option<&Section> {
        self.sections.first()
    }
}

impl<'a> IntoIterator for &'a SectionSet {
    type Item = &'a Section;
    type IntoIter = core::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(ordinal: usize) -> Section {
        Section {
            ordinal,
            display_name: "section".into(),
            nav_label: alloc::format!("Section {}", ordinal),
            heading: alloc::format!("Section {}", ordinal),
            paragraphs: ["First paragraph.".into(), "Second paragraph.".into()],
        }
    }

    #[test]
    fn test_section_ids_follow_ordinal() {
        let s = section(3);
        assert_eq!(s.element_id(), "section3");
        assert_eq!(s.nav_item_id(), "listItem3");
        assert_eq!(s.anchor_href(), "#section3");
    }

    #[test]
    fn test_section_set_preserves_document_order() {
        let set = SectionSet::from_sections(vec![section(2), section(1)]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.sections()[0].ordinal, 2);
        assert_eq!(set.first().unwrap().ordinal, 2);
        assert_eq!(set.get(1).unwrap().nav_label, "Section 1");
    }

    #[test]
    fn test_section_set_rejects_duplicate_ordinal() {
        let err = SectionSet::from_sections(vec![section(1), section(1)])
            .expect_err("duplicate ordinals should fail");
        match err {
            ScrollNavError::Section(msg) => assert!(msg.contains("Duplicate")),
            other => panic!("expected section error, got {:?}", other),
        }
    }

    #[test]
    fn test_section_set_rejects_zero_ordinal() {
        let err = SectionSet::from_sections(vec![section(0)])
            .expect_err("zero ordinal should fail");
        match err {
            ScrollNavError::Section(msg) => assert!(msg.contains("1-based")),
            other => panic!("expected section error, got {:?}", other),
        }
    }

    #[test]
    fn test_section_set_respects_max_sections() {
        let err = SectionSet::from_sections_with_limits(
            vec![section(1), section(2)],
            SectionLimits {
                max_sections: 1,
                ..SectionLimits::default()
            },
        )
        .expect_err("count over limit should fail");
        match err {
            ScrollNavError::Section(msg) => assert!(msg.contains("max_sections")),
            other => panic!("expected section error, got {:?}", other),
        }
    }

    #[test]
    fn test_section_set_respects_label_limit() {
        let mut long = section(1);
        long.heading = "h".repeat(300);
        let err = SectionSet::from_sections_with_limits(
            vec![long],
            SectionLimits::compact(),
        )
        .expect_err("oversized heading should fail");
        match err {
            ScrollNavError::Section(msg) => assert!(msg.contains("max_label_bytes")),
            other => panic!("expected section error, got {:?}", other),
        }
    }

    #[test]
    fn test_section_set_respects_text_limit() {
        let mut long = section(1);
        long.paragraphs[1] = "p".repeat(9 * 1024);
        let err = SectionSet::from_sections_with_limits(
            vec![long],
            SectionLimits::compact(),
        )
        .expect_err("oversized paragraph should fail");
        match err {
            ScrollNavError::Section(msg) => assert!(msg.contains("max_text_bytes")),
            other => panic!("expected section error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_section_set() {
        let set = SectionSet::from_sections(Vec::new()).unwrap();
        assert!(set.is_empty());
        assert!(set.first().is_none());
        assert!(set.get(1).is_none());
    }
}
