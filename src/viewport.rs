//! Viewport tracking and active-section selection.
//!
//! On each scroll notification the host measures every section's bounding-box
//! top offset relative to the viewport top and hands the list to
//! [`HighlightState::on_scroll`]. A section qualifies as active when its top
//! edge sits inside a fixed proximity band below the viewport top; the state
//! machine keeps exactly one section/nav-item pair active and reports each
//! transition as a [`HighlightChange`].
//!
//! Calls are synchronous and run to completion; there is no queuing,
//! batching, or debouncing. State is explicit and threaded through the
//! handler rather than held in ambient globals.

extern crate alloc;

use log::debug;

use crate::section::SectionSet;

/// Measured bounding box for one section, in section order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBox {
    /// Ordinal of the measured section.
    pub ordinal: usize,
    /// Top edge offset relative to the viewport top, in pixels.
    pub top: f32,
}

/// Which qualifier wins when several sections fall inside the band at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlapRule {
    /// Last qualifier in document order wins; each match overwrites the
    /// previous candidate. Faithful to the observed page behavior.
    #[default]
    LastMatch,
    /// First qualifier in document order wins; the scan stops at the first
    /// match.
    FirstMatch,
}

/// Active-section selection policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightPolicy {
    /// Proximity band below the viewport top, in pixels. A section top of
    /// exactly this value still qualifies.
    pub top_threshold_px: f32,
    /// Tie-break rule for overlapping qualifiers.
    pub overlap: OverlapRule,
}

impl Default for HighlightPolicy {
    fn default() -> Self {
        Self {
            top_threshold_px: 130.0,
            overlap: OverlapRule::LastMatch,
        }
    }
}

/// The currently highlighted section/nav-item pair.
///
/// Both elements always refer to the same ordinal; the pair is the unit of
/// activation and deactivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivePair {
    /// Ordinal of the highlighted section and its mirrored nav item.
    pub ordinal: usize,
}

/// One highlight transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightChange {
    /// Pair that lost highlighting, if any was active.
    pub deactivated: Option<ActivePair>,
    /// Pair that gained highlighting.
    pub activated: ActivePair,
}

/// Highlight state machine.
///
/// Holds at most one [`ActivePair`] at a time. A scroll pass that finds no
/// qualifier leaves the previous pair untouched; a pass that re-selects the
/// already active pair reports no change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HighlightState {
    active: Option<ActivePair>,
    policy: HighlightPolicy,
}

impl HighlightState {
    /// Create a state machine with the given policy and nothing active.
    pub fn new(policy: HighlightPolicy) -> Self {
        Self {
            active: None,
            policy,
        }
    }

    /// Currently active pair, if any.
    pub fn active(&self) -> Option<ActivePair> {
        self.active
    }

    /// Selection policy in effect.
    pub fn policy(&self) -> &HighlightPolicy {
        &self.policy
    }

    /// Mark the first section active, the startup state of a freshly built
    /// page. Returns the resulting change, or `None` for an empty set.
    pub fn activate_initial(&mut self, sections: &SectionSet) -> Option<HighlightChange> {
        let first = sections.first()?;
        self.transition(first.ordinal)
    }

    /// Process one scroll notification.
    ///
    /// `boxes` holds the current measurement for every section in document
    /// order. Returns the transition applied, or `None` when nothing changed.
    pub fn on_scroll(&mut self, boxes: &[SectionBox]) -> Option<HighlightChange> {
        let mut candidate: Option<usize> = None;
        for section_box in boxes {
            if !Self::qualifies(&self.policy, section_box.top) {
                continue;
            }
            candidate = Some(section_box.ordinal);
            if self.policy.overlap == OverlapRule::FirstMatch {
                break;
            }
        }
        self.transition(candidate?)
    }

    /// Band membership test: the top edge must not be scrolled above the
    /// viewport top and must sit within the threshold below it.
    fn qualifies(policy: &HighlightPolicy, top: f32) -> bool {
        !(top < 0.0) && top <= policy.top_threshold_px
    }

    fn transition(&mut self, ordinal: usize) -> Option<HighlightChange> {
        let activated = ActivePair { ordinal };
        if self.active == Some(activated) {
            return None;
        }
        let deactivated = self.active.replace(activated);
        debug!(
            "highlight: active pair {:?} -> {}",
            deactivated.map(|p| p.ordinal),
            ordinal
        );
        Some(HighlightChange {
            deactivated,
            activated,
        })
    }
}
