//! Document hosts: where element trees live and class mutations land.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::element_ir::{ClassAction, ClassOp, ElementSpec};

/// Error from applying commands to a host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostError {
    /// The targeted element does not exist in the host document.
    ///
    /// Missing elements are a precondition violation, not a recoverable
    /// condition; callers propagate this rather than fall back.
    MissingElement(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement(id) => write!(f, "missing element '{}'", id),
        }
    }
}

impl std::error::Error for HostError {}

/// A DOM-like environment the engine drives.
///
/// Hosts expose bounding-box measurement for identified elements and accept
/// class mutations. The engine never creates elements through this trait;
/// trees are built as [`ElementSpec`]s and installed by the host itself.
pub trait DocumentHost {
    /// Current bounding-box top offset of an element relative to the
    /// viewport top, or `None` when the element is absent.
    fn measure_top(&self, id: &str) -> Option<f32>;

    /// Apply one class mutation.
    fn apply(&mut self, op: &ClassOp) -> Result<(), HostError>;

    /// Check whether an element currently carries a class. Absent elements
    /// report `false`.
    fn has_class(&self, id: &str, class: &str) -> bool;
}

/// One element tracked by [`MemoryDocument`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryElement {
    /// Tag name.
    pub tag: String,
    /// Current class set.
    pub classes: BTreeSet<String>,
    /// Plain attributes.
    pub attrs: BTreeMap<String, String>,
    /// Bounding-box top offset, once positioned.
    pub top: Option<f32>,
}

/// In-memory document host.
///
/// Installs identified elements from built trees, lets tests and previews
/// position their bounding boxes, and applies class mutations. Elements
/// without an id are structural only and not tracked.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    elements: BTreeMap<String, MemoryElement>,
}

impl MemoryDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install every identified element of the given trees.
    pub fn from_trees(trees: &[ElementSpec]) -> Self {
        let mut doc = Self::new();
        for tree in trees {
            doc.install(tree);
        }
        doc
    }

    /// Install one tree, recursing into children.
    pub fn install(&mut self, tree: &ElementSpec) {
        if let Some(id) = &tree.id {
            self.elements.insert(
                id.clone(),
                MemoryElement {
                    tag: tree.tag.clone(),
                    classes: tree.classes.iter().cloned().collect(),
                    attrs: tree.attrs.iter().cloned().collect(),
                    top: None,
                },
            );
        }
        for child in &tree.children {
            self.install(child);
        }
    }

    /// Position an element's bounding-box top offset.
    pub fn set_top(&mut self, id: &str, top: f32) -> Result<(), HostError> {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.top = Some(top);
                Ok(())
            }
            None => Err(HostError::MissingElement(id.into())),
        }
    }

    /// Look up a tracked element.
    pub fn element(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }

    /// Number of tracked (identified) elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check whether no elements are tracked.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Ids of elements currently carrying `class`, in id order.
    pub fn ids_with_class(&self, class: &str) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|(_, element)| element.classes.contains(class))
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

impl DocumentHost for MemoryDocument {
    fn measure_top(&self, id: &str) -> Option<f32> {
        self.elements.get(id).and_then(|element| element.top)
    }

    fn apply(&mut self, op: &ClassOp) -> Result<(), HostError> {
        let element = self
            .elements
            .get_mut(&op.target)
            .ok_or_else(|| HostError::MissingElement(op.target.clone()))?;
        match op.action {
            ClassAction::Add => {
                element.classes.insert(op.class.clone());
            }
            ClassAction::Remove => {
                element.classes.remove(&op.class);
            }
        }
        Ok(())
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|element| element.classes.contains(class))
    }
}
