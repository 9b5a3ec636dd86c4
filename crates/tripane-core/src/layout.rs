#![forbid(unsafe_code)]

//! Expanded-pane selection.
//!
//! A strict single-selection toggle over the three panes: at most one
//! pane is expanded, and expanding one implicitly collapses the others.
//! The whole state is one `Option`, so exclusivity holds by construction.

use crate::fragment::FragmentKind;

/// Which pane, if any, is currently expanded.
///
/// Starts with every pane collapsed; mutated only by [`Self::toggle`].
/// Purely a display concern: layout never touches fragment content or
/// the preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutState {
    expanded: Option<FragmentKind>,
}

impl LayoutState {
    /// All panes collapsed.
    #[must_use]
    pub const fn new() -> Self {
        Self { expanded: None }
    }

    /// Currently expanded pane, if any.
    #[must_use]
    pub const fn expanded(self) -> Option<FragmentKind> {
        self.expanded
    }

    /// Whether `kind`'s pane is the expanded one.
    #[must_use]
    pub fn is_expanded(self, kind: FragmentKind) -> bool {
        self.expanded == Some(kind)
    }

    /// Apply a header click for `kind`.
    ///
    /// Clicking the expanded pane's header collapses everything; clicking
    /// any other header expands that pane and collapses the rest.
    pub fn toggle(&mut self, kind: FragmentKind) {
        self.expanded = if self.expanded == Some(kind) {
            None
        } else {
            Some(kind)
        };
    }
}
