//! Headless section navigation and scroll-spy engine for single-page
//! documents.
//!
//! The crate models a page as an ordered set of navigable [`Section`]s,
//! derives a [`NavMenu`] from it, and tracks which section is "active" as the
//! host reports scroll measurements. The active-section algorithm lives in
//! [`viewport`]: on each scroll notification, the first section whose top
//! edge sits within a fixed proximity band below the viewport top becomes the
//! highlighted section/nav-item pair, and exactly one pair is highlighted at
//! a time.
//!
//! This core is `no_std`+`alloc`-capable and does no I/O. Element trees,
//! class mutation commands, and document hosts live in the
//! `scroll-nav-render` crate; HTML emission lives in `scroll-nav-web`.
//!
//! # Usage
//!
//! ```rust
//! use scroll_nav::{parse_sections_xhtml, HighlightState, NavMenu, SectionBox};
//!
//! # fn example() -> Result<(), scroll_nav::ScrollNavError> {
//! let sections = parse_sections_xhtml(
//!     br#"<main>
//!       <section id="section1" data-nav="Section 1">
//!         <div><h2>Section 1</h2><p>a</p><p>b</p></div>
//!       </section>
//!     </main>"#,
//! )?;
//! let menu = NavMenu::from_sections(&sections);
//!
//! let mut state = HighlightState::default();
//! let change = state.activate_initial(&sections);
//! assert_eq!(change.map(|c| c.activated.ordinal), Some(1));
//! assert_eq!(state.on_scroll(&[SectionBox { ordinal: 1, top: 42.0 }]), None);
//! assert_eq!(state.active().unwrap().ordinal, 1);
//! assert_eq!(menu.item_for(1).unwrap().href, "#section1");
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod error;
pub mod ingest;
pub mod navigation;
pub mod section;
pub mod viewport;

pub use error::ScrollNavError;
pub use ingest::{parse_sections_xhtml, parse_sections_xhtml_with_limits};
pub use navigation::{NavItem, NavMenu};
pub use section::{Section, SectionLimits, SectionSet};
pub use viewport::{
    ActivePair, HighlightChange, HighlightPolicy, HighlightState, OverlapRule, SectionBox,
};
