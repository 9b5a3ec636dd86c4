#![forbid(unsafe_code)]

//! Fragment identity and the three-text working set.
//!
//! All pane dispatch in the workspace is a match over [`FragmentKind`];
//! DOM ids and editor syntax modes are derived from the enum, never the
//! other way around.

/// One of the three editable fragment kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// Markup rendered inside the preview document body.
    Markup,
    /// Styling embedded in the preview document head.
    Style,
    /// Scripting executed at the end of the preview document body.
    Script,
}

impl FragmentKind {
    /// All kinds, in pane display order.
    pub const ALL: [Self; 3] = [Self::Markup, Self::Style, Self::Script];

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Markup => "markup",
            Self::Style => "style",
            Self::Script => "script",
        }
    }

    /// Syntax mode handed to the editor widget for this fragment.
    #[must_use]
    pub const fn syntax_mode(self) -> &'static str {
        match self {
            Self::Markup => "html",
            Self::Style => "css",
            Self::Script => "javascript",
        }
    }

    /// DOM id of the pane container owning this fragment's editor.
    #[must_use]
    pub const fn pane_id(self) -> &'static str {
        match self {
            Self::Markup => "pane-markup",
            Self::Style => "pane-style",
            Self::Script => "pane-script",
        }
    }

    /// DOM id of the pane's header control (the expand/collapse target).
    #[must_use]
    pub const fn header_id(self) -> &'static str {
        match self {
            Self::Markup => "pane-markup-header",
            Self::Style => "pane-style-header",
            Self::Script => "pane-script-header",
        }
    }
}

/// The three current fragment texts, one per kind.
///
/// Each text is exclusively written by its own editor region's change
/// handler; the set as a whole is the post-change snapshot the sync loop
/// reads from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentSet {
    markup: String,
    style: String,
    script: String,
}

impl FragmentSet {
    /// Build a set from the three texts.
    #[must_use]
    pub fn new(markup: String, style: String, script: String) -> Self {
        Self {
            markup,
            style,
            script,
        }
    }

    /// Current text for `kind`.
    #[must_use]
    pub fn text(&self, kind: FragmentKind) -> &str {
        match kind {
            FragmentKind::Markup => &self.markup,
            FragmentKind::Style => &self.style,
            FragmentKind::Script => &self.script,
        }
    }

    /// Overwrite the text for `kind`.
    pub fn set_text(&mut self, kind: FragmentKind, text: String) {
        match kind {
            FragmentKind::Markup => self.markup = text,
            FragmentKind::Style => self.style = text,
            FragmentKind::Script => self.script = text,
        }
    }

    /// Whether all three texts are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markup.is_empty() && self.style.is_empty() && self.script.is_empty()
    }
}
