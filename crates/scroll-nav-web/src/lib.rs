//! HTML emission for `scroll-nav` element trees.
//!
//! Serializes built [`ElementSpec`] trees into a standalone page. Output is
//! structural only: ids, classes, and attributes are emitted verbatim and no
//! styling is attached.

use scroll_nav_render::ElementSpec;

/// Crate marker module.
pub mod preview {
    /// Current crate version.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Serialize one element tree.
pub fn render_element(element: &ElementSpec) -> String {
    let mut out = String::with_capacity(256);
    write_element(&mut out, element, 0);
    out
}

/// Serialize a full preview page: nav list inside `<header><nav>`, sections
/// inside `<main>`.
pub fn render_page(title: &str, nav: &ElementSpec, sections: &[ElementSpec]) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\"/>\n");
    out.push_str(&format!("<title>{}</title>\n", escape_text(title)));
    out.push_str("</head>\n<body>\n<header>\n<nav>\n");
    write_element(&mut out, nav, 0);
    out.push_str("</nav>\n</header>\n<main>\n");
    for section in sections {
        write_element(&mut out, section, 0);
    }
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

fn write_element(out: &mut String, element: &ElementSpec, depth: usize) {
    let indent = "  ".repeat(depth);
    out.push_str(&indent);
    out.push('<');
    out.push_str(&element.tag);
    if let Some(id) = &element.id {
        out.push_str(&format!(" id=\"{}\"", escape_attr(id)));
    }
    if !element.classes.is_empty() {
        out.push_str(&format!(
            " class=\"{}\"",
            escape_attr(&element.classes.join(" "))
        ));
    }
    for (key, value) in &element.attrs {
        out.push_str(&format!(" {}=\"{}\"", key, escape_attr(value)));
    }

    if element.text.is_none() && element.children.is_empty() {
        out.push_str("></");
        out.push_str(&element.tag);
        out.push_str(">\n");
        return;
    }

    out.push('>');
    if let Some(text) = &element.text {
        out.push_str(&escape_text(text));
    }
    if element.children.is_empty() {
        out.push_str(&format!("</{}>\n", element.tag));
        return;
    }

    out.push('\n');
    for child in &element.children {
        write_element(out, child, depth + 1);
    }
    out.push_str(&indent);
    out.push_str(&format!("</{}>\n", element.tag));
}

/// Escape text content.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape attribute values.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
