//! Regression: sweeping a built page through scroll positions must walk the
//! active pair through every section in order, and must never leave more than
//! one section/nav-item pair styled.

use scroll_nav::navigation::NavMenu;
use scroll_nav::section::{Section, SectionSet};
use scroll_nav::viewport::HighlightPolicy;
use scroll_nav_render::{
    build_nav_tree, build_section_tree, MemoryDocument, PageClasses, ScrollSession,
};

const SECTION_COUNT: usize = 4;
const SECTION_HEIGHT: f32 = 600.0;

fn fixture_sections() -> SectionSet {
    let descriptors = (1..=SECTION_COUNT)
        .map(|n| Section {
            ordinal: n,
            display_name: "section".into(),
            nav_label: format!("Section {}", n),
            heading: format!("Section {}", n),
            paragraphs: ["First paragraph.".into(), "Second paragraph.".into()],
        })
        .collect();
    SectionSet::from_sections(descriptors).expect("fixture sections are valid")
}

fn build_document(sections: &SectionSet, menu: &NavMenu) -> MemoryDocument {
    let classes = PageClasses::default();
    let mut trees = build_section_tree(sections, &classes);
    trees.push(build_nav_tree(menu, &classes));
    MemoryDocument::from_trees(&trees)
}

/// Position every section as if the page were scrolled `scroll_y` pixels
/// down, with sections stacked top to bottom.
fn scroll_to(doc: &mut MemoryDocument, scroll_y: f32) {
    for n in 1..=SECTION_COUNT {
        let top = (n - 1) as f32 * SECTION_HEIGHT - scroll_y;
        doc.set_top(&format!("section{}", n), top)
            .expect("fixture sections are installed");
    }
}

#[test]
fn sweep_keeps_exactly_one_pair_active() {
    let sections = fixture_sections();
    let menu = NavMenu::from_sections(&sections);
    let mut doc = build_document(&sections, &menu);
    scroll_to(&mut doc, 0.0);

    let mut session = ScrollSession::new(
        &mut doc,
        &sections,
        &menu,
        PageClasses::default(),
        HighlightPolicy::default(),
    );
    let _ = session.activate_initial().expect("initial activation");

    let mut scroll_y = 0.0;
    while scroll_y <= SECTION_COUNT as f32 * SECTION_HEIGHT {
        scroll_to(session.host_mut(), scroll_y);
        let _ = session.on_scroll().expect("measured scroll pass");

        let host = session.host_mut();
        let active_sections = host.ids_with_class("your-active-class");
        let active_items = host.ids_with_class("menu__active");
        assert_eq!(
            active_sections.len(),
            1,
            "exactly one section styled at scroll_y={}",
            scroll_y
        );
        assert_eq!(
            active_items.len(),
            1,
            "exactly one nav item styled at scroll_y={}",
            scroll_y
        );
        let section_ordinal = active_sections[0].trim_start_matches("section").to_string();
        let item_ordinal = active_items[0].trim_start_matches("listItem").to_string();
        assert_eq!(section_ordinal, item_ordinal, "pair refers to one ordinal");

        scroll_y += 37.0;
    }
}

#[test]
fn sweep_walks_through_every_section_in_order() {
    let sections = fixture_sections();
    let menu = NavMenu::from_sections(&sections);
    let mut doc = build_document(&sections, &menu);
    scroll_to(&mut doc, 0.0);

    let mut session = ScrollSession::new(
        &mut doc,
        &sections,
        &menu,
        PageClasses::default(),
        HighlightPolicy::default(),
    );
    let _ = session.activate_initial().expect("initial activation");

    let mut visited = vec![session.active_ordinal().expect("initial pair")];
    let mut scroll_y = 0.0;
    while scroll_y <= (SECTION_COUNT - 1) as f32 * SECTION_HEIGHT + 100.0 {
        scroll_to(session.host_mut(), scroll_y);
        if let Some(change) = session.on_scroll().expect("measured scroll pass") {
            visited.push(change.activated.ordinal);
        }
        scroll_y += 50.0;
    }

    assert_eq!(visited, vec![1, 2, 3, 4]);
}

#[test]
fn scrolling_past_the_last_section_keeps_it_active() {
    let sections = fixture_sections();
    let menu = NavMenu::from_sections(&sections);
    let mut doc = build_document(&sections, &menu);
    scroll_to(&mut doc, (SECTION_COUNT - 1) as f32 * SECTION_HEIGHT);

    let mut session = ScrollSession::new(
        &mut doc,
        &sections,
        &menu,
        PageClasses::default(),
        HighlightPolicy::default(),
    );
    let _ = session.on_scroll().expect("measured scroll pass");
    assert_eq!(session.active_ordinal(), Some(SECTION_COUNT));

    // Every section now sits above the viewport; nothing qualifies, so the
    // previous pair stays styled.
    scroll_to(session.host_mut(), SECTION_COUNT as f32 * SECTION_HEIGHT + 500.0);
    let change = session.on_scroll().expect("measured scroll pass");
    assert!(change.is_none());
    assert_eq!(session.active_ordinal(), Some(SECTION_COUNT));
}
