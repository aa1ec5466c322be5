//! Scroll session: per-notification measure/select/mutate orchestration.

use log::debug;
use serde::Serialize;

use scroll_nav::navigation::NavMenu;
use scroll_nav::section::SectionSet;
use scroll_nav::viewport::{
    HighlightChange, HighlightPolicy, HighlightState, OverlapRule, SectionBox,
};

use crate::element_ir::{class_ops_for, PageClasses};
use crate::host::{DocumentHost, HostError};

/// Drives one document host from scroll notifications.
///
/// Each [`on_scroll`](Self::on_scroll) call runs the full pipeline
/// synchronously: measure every section through the host, feed the
/// measurements to the highlight state machine, and mirror any transition
/// back onto the host as class mutations. One call runs to completion before
/// the next; the session holds the only mutable highlight state.
pub struct ScrollSession<'a, H: DocumentHost> {
    host: &'a mut H,
    sections: &'a SectionSet,
    menu: &'a NavMenu,
    classes: PageClasses,
    state: HighlightState,
}

impl<'a, H: DocumentHost> ScrollSession<'a, H> {
    /// Create a session over a host whose document was built from
    /// `sections` and `menu`.
    pub fn new(
        host: &'a mut H,
        sections: &'a SectionSet,
        menu: &'a NavMenu,
        classes: PageClasses,
        policy: HighlightPolicy,
    ) -> Self {
        Self {
            host,
            sections,
            menu,
            classes,
            state: HighlightState::new(policy),
        }
    }

    /// Mark the first section active and mirror it onto the host, the
    /// startup state of a freshly built page.
    pub fn activate_initial(&mut self) -> Result<Option<HighlightChange>, HostError> {
        let change = self.state.activate_initial(self.sections);
        if let Some(change) = &change {
            self.mirror(change)?;
        }
        Ok(change)
    }

    /// Process one scroll notification end to end.
    ///
    /// Fails with [`HostError::MissingElement`] when any section element
    /// cannot be measured; per the engine's contract that is a precondition
    /// violation, not a state the session recovers from.
    pub fn on_scroll(&mut self) -> Result<Option<HighlightChange>, HostError> {
        let mut boxes = Vec::with_capacity(self.sections.len());
        for section in self.sections {
            let id = section.element_id();
            let top = self
                .host
                .measure_top(&id)
                .ok_or(HostError::MissingElement(id))?;
            boxes.push(SectionBox {
                ordinal: section.ordinal,
                top,
            });
        }

        let change = self.state.on_scroll(&boxes);
        if let Some(change) = &change {
            self.mirror(change)?;
        }
        Ok(change)
    }

    /// Mutable access to the underlying host, e.g. to reposition elements
    /// between scroll notifications.
    pub fn host_mut(&mut self) -> &mut H {
        &mut *self.host
    }

    /// Currently active ordinal, if any.
    pub fn active_ordinal(&self) -> Option<usize> {
        self.state.active().map(|pair| pair.ordinal)
    }

    /// Snapshot of the session for debug dumps.
    pub fn snapshot(&self) -> SessionSnapshot {
        let policy = self.state.policy();
        SessionSnapshot {
            active_ordinal: self.active_ordinal(),
            section_count: self.sections.len(),
            top_threshold_px: policy.top_threshold_px,
            overlap: match policy.overlap {
                OverlapRule::LastMatch => "last-match",
                OverlapRule::FirstMatch => "first-match",
            },
        }
    }

    fn mirror(&mut self, change: &HighlightChange) -> Result<(), HostError> {
        let ops = class_ops_for(change, self.sections, self.menu, &self.classes);
        debug!(
            "session: applying {} class op(s) for section {}",
            ops.len(),
            change.activated.ordinal
        );
        for op in &ops {
            self.host.apply(op)?;
        }
        Ok(())
    }
}

/// Serializable view of a session's selection state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// Ordinal of the active pair, if any.
    pub active_ordinal: Option<usize>,
    /// Number of sections under management.
    pub section_count: usize,
    /// Proximity band threshold in effect.
    pub top_threshold_px: f32,
    /// Overlap rule in effect.
    pub overlap: &'static str,
}

impl SessionSnapshot {
    /// JSON form for embedding in previews and logs.
    pub fn to_json_string(&self) -> String {
        // Serialization of this flat struct cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}
