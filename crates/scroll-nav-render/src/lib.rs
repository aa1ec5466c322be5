//! Element IR, document hosts, and scroll orchestration for `scroll-nav`.

#![cfg_attr(
    not(test),
    deny(
        clippy::disallowed_methods,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

mod element_ir;
mod host;
mod session;

pub use element_ir::{
    build_nav_tree, build_section_tree, class_ops_for, ClassAction, ClassOp, ElementSpec,
    PageClasses,
};
pub use host::{DocumentHost, HostError, MemoryDocument, MemoryElement};
pub use session::{ScrollSession, SessionSnapshot};
