//! XHTML section ingest.
//!
//! Recovers a [`SectionSet`] from existing single-page markup instead of
//! building one programmatically. The expected shape per section is
//!
//! ```text
//! <section id="section1" data-nav="Section 1">
//!   <div class="landing__container">
//!     <h2>Section 1</h2>
//!     <p>...</p>
//!     <p>...</p>
//!   </div>
//! </section>
//! ```
//!
//! The section ordinal is the trailing digit run of the `id` attribute; the
//! leading remainder becomes the display name. Sections missing an id, a
//! `data-nav` label, a heading, or the two body paragraphs are skipped, the
//! same way incomplete entries are dropped rather than guessed at.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use log::debug;

use crate::error::ScrollNavError;
use crate::section::{Section, SectionLimits, SectionSet};

/// Parse single-page XHTML into a section set with default limits.
pub fn parse_sections_xhtml(content: &[u8]) -> Result<SectionSet, ScrollNavError> {
    parse_sections_xhtml_with_limits(content, SectionLimits::default())
}

/// Parse single-page XHTML into a section set with explicit limits.
pub fn parse_sections_xhtml_with_limits(
    content: &[u8],
    limits: SectionLimits,
) -> Result<SectionSet, ScrollNavError> {
    let mut reader = quick_xml::reader::Reader::from_reader(content);
    reader.config_mut().trim_text(true);

    let mut buf = alloc::vec::Vec::with_capacity(8);
    let mut sections: Vec<Section> = Vec::with_capacity(8);
    let mut current: Option<PartialSection> = None;
    // Which text-bearing child of the current section we are inside.
    let mut text_target = TextTarget::None;

    use quick_xml::events::Event;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"section" => {
                    if current.is_some() {
                        return Err(ScrollNavError::Ingest(
                            "Nested <section> elements are not supported".into(),
                        ));
                    }
                    if sections.len() >= limits.max_sections {
                        return Err(ScrollNavError::Ingest(alloc::format!(
                            "Section count exceeds max_sections ({} > {})",
                            sections.len() + 1,
                            limits.max_sections
                        )));
                    }
                    let mut partial = PartialSection::new();
                    for attr in e.attributes().flatten() {
                        let value = reader
                            .decoder()
                            .decode(attr.value.as_ref())
                            .unwrap_or_default();
                        match attr.key.as_ref() {
                            b"id" => partial.id = Some(value.into_owned()),
                            b"data-nav" => {
                                if value.len() > limits.max_label_bytes {
                                    return Err(ScrollNavError::Ingest(alloc::format!(
                                        "Section label exceeds max_label_bytes ({} > {})",
                                        value.len(),
                                        limits.max_label_bytes
                                    )));
                                }
                                partial.nav_label = Some(value.into_owned());
                            }
                            _ => {}
                        }
                    }
                    current = Some(partial);
                }
                name if current.is_some() && is_heading_tag(name) => {
                    text_target = TextTarget::Heading;
                }
                b"p" if current.is_some() => {
                    if let Some(partial) = current.as_mut() {
                        partial.paragraphs.push(String::new());
                    }
                    text_target = TextTarget::Paragraph;
                }
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if let Some(partial) = current.as_mut() {
                    let text = reader.decoder().decode(&e).unwrap_or_default();
                    match text_target {
                        TextTarget::Heading => {
                            append_text(&mut partial.heading, text.as_ref());
                            if partial.heading.len() > limits.max_label_bytes {
                                return Err(ScrollNavError::Ingest(alloc::format!(
                                    "Section heading exceeds max_label_bytes ({} > {})",
                                    partial.heading.len(),
                                    limits.max_label_bytes
                                )));
                            }
                        }
                        TextTarget::Paragraph => {
                            if let Some(paragraph) = partial.paragraphs.last_mut() {
                                append_text(paragraph, text.as_ref());
                                if paragraph.len() > limits.max_text_bytes {
                                    return Err(ScrollNavError::Ingest(alloc::format!(
                                        "Section paragraph exceeds max_text_bytes ({} > {})",
                                        paragraph.len(),
                                        limits.max_text_bytes
                                    )));
                                }
                            }
                        }
                        TextTarget::None => {}
                    }
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"section" => {
                    if let Some(partial) = current.take() {
                        match partial.into_section() {
                            Some(section) => sections.push(section),
                            None => debug!("ingest: skipping incomplete <section>"),
                        }
                    }
                    text_target = TextTarget::None;
                }
                b"p" => {
                    text_target = TextTarget::None;
                }
                name if is_heading_tag(name) => {
                    text_target = TextTarget::None;
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ScrollNavError::Ingest(alloc::format!(
                    "Section XML parse error: {:?}",
                    e
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    debug!("ingest: parsed {} section(s)", sections.len());
    SectionSet::from_sections_with_limits(sections, limits)
}

/// Partial section being built during parsing.
struct PartialSection {
    id: Option<String>,
    nav_label: Option<String>,
    heading: String,
    paragraphs: Vec<String>,
}

impl PartialSection {
    fn new() -> Self {
        Self {
            id: None,
            nav_label: None,
            heading: String::new(),
            paragraphs: Vec::with_capacity(2),
        }
    }

    fn into_section(self) -> Option<Section> {
        let id = self.id?;
        let (display_name, ordinal) = split_element_id(&id)?;
        let nav_label = self.nav_label?;
        if self.heading.is_empty() || self.paragraphs.len() < 2 {
            return None;
        }
        let mut paragraphs = self.paragraphs.into_iter();
        Some(Section {
            ordinal,
            display_name: display_name.into(),
            nav_label,
            heading: self.heading,
            paragraphs: [paragraphs.next()?, paragraphs.next()?],
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum TextTarget {
    None,
    Heading,
    Paragraph,
}

fn is_heading_tag(name: &[u8]) -> bool {
    matches!(name, [b'h', digit] if digit.is_ascii_digit() && *digit != b'0')
}

/// Split an element id into its display-name prefix and trailing ordinal.
///
/// `section12` -> `("section", 12)`. Ids without a non-empty prefix, without
/// trailing digits, or with ordinal zero yield `None`.
fn split_element_id(id: &str) -> Option<(&str, usize)> {
    let digits = id
        .bytes()
        .rev()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    let split = id.len() - digits;
    if digits == 0 || split == 0 {
        return None;
    }
    let ordinal: usize = id[split..].parse().ok()?;
    if ordinal == 0 {
        return None;
    }
    Some((&id[..split], ordinal))
}

/// Concatenate text segments with a single-space join, so formatted runs
/// (e.g. `Part <em>One</em>`) keep their word boundary.
fn append_text(existing: &mut String, text: &str) {
    if !existing.is_empty() && !existing.ends_with(' ') && !text.starts_with(' ') {
        existing.push(' ');
    }
    existing.push_str(text);
}
