#![forbid(unsafe_code)]

//! The change-notification loop, minus the DOM.
//!
//! A [`Session`] owns the three fragment texts. Each edit produces a
//! [`SyncOutcome`] for the host to publish: the serialized address path
//! and the synthesized preview document, both computed from the same
//! post-edit snapshot. The host environment feeds state back in exactly
//! once, at startup, through [`Session::from_path`].

use crate::document;
use crate::fragment::{FragmentKind, FragmentSet};
use crate::location;

/// Outputs the host must publish after one change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Address path (with leading `/`) to replace into the location.
    pub location_path: String,
    /// Full preview document for the sandboxed frame.
    pub document: String,
}

/// Session state: the three fragment texts plus the sync loop over them.
#[derive(Debug, Clone, Default)]
pub struct Session {
    fragments: FragmentSet,
}

impl Session {
    /// Start an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a session from an address path.
    ///
    /// An empty or malformed address yields an empty session; restoring
    /// never fails.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        Self {
            fragments: location::parse_path(path),
        }
    }

    /// Current fragment snapshot.
    #[must_use]
    pub const fn fragments(&self) -> &FragmentSet {
        &self.fragments
    }

    /// Current text for `kind`.
    #[must_use]
    pub fn text(&self, kind: FragmentKind) -> &str {
        self.fragments.text(kind)
    }

    /// Record a fragment's new text and produce what to publish.
    ///
    /// The address path and preview document come from the same post-edit
    /// snapshot, so the address always encodes exactly the text that
    /// produced the rendered preview.
    pub fn apply_edit(&mut self, kind: FragmentKind, text: String) -> SyncOutcome {
        self.fragments.set_text(kind, text);
        self.refresh()
    }

    /// Recompute outputs from the current snapshot without an edit.
    ///
    /// Used for the initial render pass after restoring from the address.
    #[must_use]
    pub fn refresh(&self) -> SyncOutcome {
        SyncOutcome {
            location_path: location::location_path(&self.fragments),
            document: document::synthesize_set(&self.fragments),
        }
    }
}
