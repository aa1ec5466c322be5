use scroll_nav::section::SectionSet;

/// Four-section fixture page in the markup shape the ingest expects.
pub const FIXTURE_PAGE: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<html xmlns="http://www.w3.org/1999/xhtml">
<body>
<header>
  <nav><ul id="navbar__list"></ul></nav>
</header>
<main>
  <section id="section1" data-nav="Section 1">
    <div class="landing__container">
      <h2>Section 1</h2>
      <p>First paragraph of section one.</p>
      <p>Second paragraph of section one.</p>
    </div>
  </section>
  <section id="section2" data-nav="Section 2">
    <div class="landing__container">
      <h2>Section 2</h2>
      <p>First paragraph of section two.</p>
      <p>Second paragraph of section two.</p>
    </div>
  </section>
  <section id="section3" data-nav="Section 3">
    <div class="landing__container">
      <h2>Section 3</h2>
      <p>First paragraph of section three.</p>
      <p>Second paragraph of section three.</p>
    </div>
  </section>
  <section id="section4" data-nav="Section 4">
    <div class="landing__container">
      <h2>Section 4</h2>
      <p>First paragraph of section four.</p>
      <p>Second paragraph of section four.</p>
    </div>
  </section>
</main>
</body>
</html>"#;

pub const SECTION_HEIGHT: f32 = 600.0;

pub fn fixture_sections() -> SectionSet {
    scroll_nav::parse_sections_xhtml(FIXTURE_PAGE).expect("fixture page parses")
}

/// Section top offsets for a page scrolled `scroll_y` pixels down, sections
/// stacked top to bottom.
pub fn stacked_tops(count: usize, scroll_y: f32) -> Vec<f32> {
    (0..count)
        .map(|idx| idx as f32 * SECTION_HEIGHT - scroll_y)
        .collect()
}
