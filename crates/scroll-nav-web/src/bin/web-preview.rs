//! Static preview generator for `scroll-nav`.
//!
//! Builds a page from a fixture document, runs one scroll pass through a
//! `MemoryDocument` session, and writes the rendered HTML (with the session
//! snapshot embedded as a comment) to disk. Optionally serves the result
//! over a local TCP listener.
//!
//! Configuration is environment-driven:
//! `SCROLL_NAV_OUT` (output path), `SCROLL_NAV_SERVE` (`1` to serve), and
//! `SCROLL_NAV_PORT`.

use std::env;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;

use scroll_nav::navigation::NavMenu;
use scroll_nav::viewport::HighlightPolicy;
use scroll_nav::parse_sections_xhtml;
use scroll_nav_render::{
    build_nav_tree, build_section_tree, MemoryDocument, PageClasses, ScrollSession,
};
use scroll_nav_web::render_page;

const DEFAULT_OUT_PATH: &str = "target/web-preview/index.html";
const DEFAULT_PORT: u16 = 43117;
const SECTION_HEIGHT: f32 = 600.0;

/// Fixture markup the preview ingests; exercises the same parse path as
/// production callers instead of constructing descriptors by hand.
const FIXTURE_PAGE: &[u8] = br#"<main>
  <section id="section1" data-nav="Section 1">
    <div class="landing__container">
      <h2>Section 1</h2>
      <p>Top of the page. This block starts out highlighted.</p>
      <p>Scroll far enough and the highlight hands off to the next block.</p>
    </div>
  </section>
  <section id="section2" data-nav="Section 2">
    <div class="landing__container">
      <h2>Section 2</h2>
      <p>Second block of the fixture document.</p>
      <p>The nav item for this block mirrors its highlight state.</p>
    </div>
  </section>
  <section id="section3" data-nav="Section 3">
    <div class="landing__container">
      <h2>Section 3</h2>
      <p>Third block of the fixture document.</p>
      <p>Only one block is ever highlighted at a time.</p>
    </div>
  </section>
  <section id="section4" data-nav="Section 4">
    <div class="landing__container">
      <h2>Section 4</h2>
      <p>Last block of the fixture document.</p>
      <p>Past the end, the highlight stays here.</p>
    </div>
  </section>
</main>"#;

#[derive(Clone, Debug, Serialize)]
struct PreviewConfig {
    out_path: String,
    serve: bool,
    port: u16,
}

impl PreviewConfig {
    fn from_env() -> Self {
        let out_path = env::var("SCROLL_NAV_OUT").unwrap_or_else(|_| DEFAULT_OUT_PATH.to_string());
        let serve = env::var("SCROLL_NAV_SERVE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let port = env::var("SCROLL_NAV_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self {
            out_path,
            serve,
            port,
        }
    }
}

fn main() -> ExitCode {
    match run(PreviewConfig::from_env()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("web-preview: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: PreviewConfig) -> Result<(), Box<dyn std::error::Error>> {
    let sections = parse_sections_xhtml(FIXTURE_PAGE)?;
    let menu = NavMenu::from_sections(&sections);
    let classes = PageClasses::default();

    let section_trees = build_section_tree(&sections, &classes);
    let nav_tree = build_nav_tree(&menu, &classes);

    let mut doc = MemoryDocument::from_trees(&section_trees);
    doc.install(&nav_tree);
    let mut session = ScrollSession::new(
        &mut doc,
        &sections,
        &menu,
        classes.clone(),
        HighlightPolicy::default(),
    );
    let _ = session.activate_initial()?;

    // One scroll pass with the page at rest, so the snapshot reflects a
    // measured state rather than only the startup default.
    for (idx, section) in sections.iter().enumerate() {
        session
            .host_mut()
            .set_top(&section.element_id(), idx as f32 * SECTION_HEIGHT)?;
    }
    let _ = session.on_scroll()?;
    let snapshot = session.snapshot();

    let mut html = render_page("scroll-nav preview", &nav_tree, &section_trees);
    html.push_str(&format!(
        "<!-- scroll-nav config: {} -->\n<!-- scroll-nav snapshot: {} -->\n",
        serde_json::to_string(&config)?,
        snapshot.to_json_string()
    ));

    if let Some(parent) = Path::new(&config.out_path).parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config.out_path, &html)?;
    println!(
        "web-preview: wrote {} ({} sections, active ordinal {:?})",
        config.out_path,
        sections.len(),
        snapshot.active_ordinal
    );

    if config.serve {
        serve(&config, &html)?;
    }
    Ok(())
}

fn serve(config: &PreviewConfig, html: &str) -> Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind(("127.0.0.1", config.port))?;
    println!("web-preview: serving on http://127.0.0.1:{}/", config.port);
    for stream in listener.incoming() {
        let mut stream = stream?;
        // Drain the request line; the response is the same for every path.
        let mut buf = [0u8; 1024];
        let _ = stream.read(&mut buf)?;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            html.len(),
            html
        );
        stream.write_all(response.as_bytes())?;
    }
    Ok(())
}
