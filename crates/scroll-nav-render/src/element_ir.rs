//! Backend-agnostic element IR and class mutation commands.
//!
//! Building a page and mirroring highlight changes never touches a concrete
//! DOM here. Builders produce [`ElementSpec`] trees and the highlighter's
//! transitions become [`ClassOp`] command lists; a [`DocumentHost`]
//! implementation applies both to whatever environment it fronts.
//!
//! [`DocumentHost`]: crate::DocumentHost

use scroll_nav::navigation::NavMenu;
use scroll_nav::section::SectionSet;
use scroll_nav::viewport::HighlightChange;

/// Class and id names used when building pages and mutating visual state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageClasses {
    /// Class carried by the active section element.
    pub active_section: String,
    /// Class carried by every nav item.
    pub nav_link: String,
    /// Class carried by the active nav item.
    pub active_nav_item: String,
    /// Class carried by the content container inside each section.
    pub section_container: String,
    /// Element id of the nav list.
    pub nav_list_id: String,
}

impl Default for PageClasses {
    fn default() -> Self {
        Self {
            active_section: "your-active-class".into(),
            nav_link: "menu__link".into(),
            active_nav_item: "menu__active".into(),
            section_container: "landing__container".into(),
            nav_list_id: "navbar__list".into(),
        }
    }
}

/// One node of a built element tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementSpec {
    /// Tag name.
    pub tag: String,
    /// Optional element id.
    pub id: Option<String>,
    /// Plain attributes in emission order (id and class are kept separate).
    pub attrs: Vec<(String, String)>,
    /// Class list in emission order.
    pub classes: Vec<String>,
    /// Direct text content, emitted before any children.
    pub text: Option<String>,
    /// Child elements.
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    /// Create an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append an attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    /// Append a class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child element.
    pub fn with_child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }

    /// Check whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Build the section elements of a page, one per descriptor in document
/// order.
///
/// Each section becomes `<section id data-nav>` wrapping a container `<div>`
/// with the heading and both body paragraphs. The first section carries the
/// active class, matching the startup highlight state.
pub fn build_section_tree(sections: &SectionSet, classes: &PageClasses) -> Vec<ElementSpec> {
    sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let container = ElementSpec::new("div")
                .with_class(classes.section_container.clone())
                .with_child(ElementSpec::new("h2").with_text(section.heading.clone()))
                .with_child(ElementSpec::new("p").with_text(section.paragraphs[0].clone()))
                .with_child(ElementSpec::new("p").with_text(section.paragraphs[1].clone()));

            let mut element = ElementSpec::new("section")
                .with_id(section.element_id())
                .with_attr("data-nav", section.nav_label.clone())
                .with_child(container);
            if index == 0 {
                element = element.with_class(classes.active_section.clone());
            }
            element
        })
        .collect()
}

/// Build the nav list element for a menu.
///
/// Produces `<ul id=...>` holding one `<li id data-section class>` per entry,
/// each wrapping the anchor link.
pub fn build_nav_tree(menu: &NavMenu, classes: &PageClasses) -> ElementSpec {
    let mut list = ElementSpec::new("ul").with_id(classes.nav_list_id.clone());
    for item in menu.items() {
        list = list.with_child(
            ElementSpec::new("li")
                .with_id(item.item_id.clone())
                .with_attr("data-section", item.label.clone())
                .with_class(classes.nav_link.clone())
                .with_child(
                    ElementSpec::new("a")
                        .with_attr("href", item.href.clone())
                        .with_text(item.label.clone()),
                ),
        );
    }
    list
}

/// Whether a [`ClassOp`] adds or removes its class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassAction {
    Add,
    Remove,
}

/// One class mutation on one element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassOp {
    /// Target element id.
    pub target: String,
    /// Class to add or remove.
    pub class: String,
    /// Mutation direction.
    pub action: ClassAction,
}

impl ClassOp {
    fn add(target: String, class: &str) -> Self {
        Self {
            target,
            class: class.into(),
            action: ClassAction::Add,
        }
    }

    fn remove(target: String, class: &str) -> Self {
        Self {
            target,
            class: class.into(),
            action: ClassAction::Remove,
        }
    }
}

/// Translate one highlight transition into class mutations.
///
/// The deactivated pair (when present) loses the active classes on both its
/// section and nav item before the activated pair gains them, so no pass ever
/// leaves two pairs styled.
pub fn class_ops_for(
    change: &HighlightChange,
    sections: &SectionSet,
    menu: &NavMenu,
    classes: &PageClasses,
) -> Vec<ClassOp> {
    let mut ops = Vec::with_capacity(4);

    if let Some(previous) = change.deactivated {
        push_pair_ops(&mut ops, previous.ordinal, sections, menu, classes, false);
    }
    push_pair_ops(
        &mut ops,
        change.activated.ordinal,
        sections,
        menu,
        classes,
        true,
    );
    ops
}

fn push_pair_ops(
    ops: &mut Vec<ClassOp>,
    ordinal: usize,
    sections: &SectionSet,
    menu: &NavMenu,
    classes: &PageClasses,
    activate: bool,
) {
    let (Some(section), Some(item)) = (sections.get(ordinal), menu.item_for(ordinal)) else {
        // Ordinals come from the highlighter, which only ever sees this
        // section set; a miss means mismatched inputs.
        log::warn!("class ops: no section/nav pair for ordinal {}", ordinal);
        return;
    };
    if activate {
        ops.push(ClassOp::add(section.element_id(), &classes.active_section));
        ops.push(ClassOp::add(item.item_id.clone(), &classes.active_nav_item));
    } else {
        ops.push(ClassOp::remove(
            section.element_id(),
            &classes.active_section,
        ));
        ops.push(ClassOp::remove(
            item.item_id.clone(),
            &classes.active_nav_item,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scroll_nav::section::Section;
    use scroll_nav::viewport::ActivePair;

    fn sections(count: usize) -> SectionSet {
        let descriptors = (1..=count)
            .map(|n| Section {
                ordinal: n,
                display_name: "section".into(),
                nav_label: format!("Section {}", n),
                heading: format!("Section {}", n),
                paragraphs: ["First.".into(), "Second.".into()],
            })
            .collect();
        SectionSet::from_sections(descriptors).unwrap()
    }

    #[test]
    fn test_build_section_tree_shape() {
        let set = sections(2);
        let tree = build_section_tree(&set, &PageClasses::default());
        assert_eq!(tree.len(), 2);

        let first = &tree[0];
        assert_eq!(first.tag, "section");
        assert_eq!(first.id.as_deref(), Some("section1"));
        assert_eq!(
            first.attrs,
            vec![("data-nav".to_string(), "Section 1".to_string())]
        );
        assert!(first.has_class("your-active-class"));

        let container = &first.children[0];
        assert_eq!(container.tag, "div");
        assert!(container.has_class("landing__container"));
        assert_eq!(container.children[0].tag, "h2");
        assert_eq!(container.children[0].text.as_deref(), Some("Section 1"));
        assert_eq!(container.children[1].tag, "p");
        assert_eq!(container.children[2].text.as_deref(), Some("Second."));
    }

    #[test]
    fn test_only_first_section_starts_active() {
        let set = sections(3);
        let tree = build_section_tree(&set, &PageClasses::default());
        assert!(tree[0].has_class("your-active-class"));
        assert!(!tree[1].has_class("your-active-class"));
        assert!(!tree[2].has_class("your-active-class"));
    }

    #[test]
    fn test_build_nav_tree_shape() {
        let set = sections(2);
        let menu = NavMenu::from_sections(&set);
        let nav = build_nav_tree(&menu, &PageClasses::default());

        assert_eq!(nav.tag, "ul");
        assert_eq!(nav.id.as_deref(), Some("navbar__list"));
        assert_eq!(nav.children.len(), 2);

        let item = &nav.children[1];
        assert_eq!(item.tag, "li");
        assert_eq!(item.id.as_deref(), Some("listItem2"));
        assert!(item.has_class("menu__link"));
        assert_eq!(
            item.attrs,
            vec![("data-section".to_string(), "Section 2".to_string())]
        );
        let anchor = &item.children[0];
        assert_eq!(anchor.tag, "a");
        assert_eq!(
            anchor.attrs,
            vec![("href".to_string(), "#section2".to_string())]
        );
        assert_eq!(anchor.text.as_deref(), Some("Section 2"));
    }

    #[test]
    fn test_class_ops_for_first_activation() {
        let set = sections(2);
        let menu = NavMenu::from_sections(&set);
        let ops = class_ops_for(
            &HighlightChange {
                deactivated: None,
                activated: ActivePair { ordinal: 2 },
            },
            &set,
            &menu,
            &PageClasses::default(),
        );
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].target, "section2");
        assert_eq!(ops[0].class, "your-active-class");
        assert_eq!(ops[0].action, ClassAction::Add);
        assert_eq!(ops[1].target, "listItem2");
        assert_eq!(ops[1].class, "menu__active");
    }

    #[test]
    fn test_class_ops_for_transition_removes_before_adding() {
        let set = sections(3);
        let menu = NavMenu::from_sections(&set);
        let ops = class_ops_for(
            &HighlightChange {
                deactivated: Some(ActivePair { ordinal: 1 }),
                activated: ActivePair { ordinal: 3 },
            },
            &set,
            &menu,
            &PageClasses::default(),
        );
        assert_eq!(ops.len(), 4);
        assert_eq!(
            (ops[0].target.as_str(), ops[0].action),
            ("section1", ClassAction::Remove)
        );
        assert_eq!(
            (ops[1].target.as_str(), ops[1].action),
            ("listItem1", ClassAction::Remove)
        );
        assert_eq!(
            (ops[2].target.as_str(), ops[2].action),
            ("section3", ClassAction::Add)
        );
        assert_eq!(
            (ops[3].target.as_str(), ops[3].action),
            ("listItem3", ClassAction::Add)
        );
    }

    #[test]
    fn test_class_ops_skip_unknown_ordinal() {
        let set = sections(1);
        let menu = NavMenu::from_sections(&set);
        let ops = class_ops_for(
            &HighlightChange {
                deactivated: None,
                activated: ActivePair { ordinal: 9 },
            },
            &set,
            &menu,
            &PageClasses::default(),
        );
        assert!(ops.is_empty());
    }
}
