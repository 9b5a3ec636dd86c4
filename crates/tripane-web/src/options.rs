#![forbid(unsafe_code)]

//! Editor widget creation options.

use tripane_core::FragmentKind;

/// Font size shared by all three regions.
const FONT_SIZE: u32 = 16;
/// Color theme name understood by the host widget.
const COLOR_THEME: &str = "dark";

/// Options handed to the host editor factory when creating one region.
///
/// Mirrors the widget contract: `{initialText, syntaxMode, fontSize,
/// colorTheme, autoLayout}`. Regions are created empty and seeded through
/// `setText` before change notifications are subscribed, so a restored
/// session never produces a spurious notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    /// Text the region starts with.
    pub initial_text: String,
    /// Per-kind syntax mode name.
    pub syntax_mode: &'static str,
    /// Editor font size in pixels.
    pub font_size: u32,
    /// Widget color theme.
    pub color_theme: &'static str,
    /// Let the widget track its container's size.
    pub auto_layout: bool,
}

impl EditorOptions {
    /// Options for `kind`'s region.
    #[must_use]
    pub fn for_kind(kind: FragmentKind) -> Self {
        Self {
            initial_text: String::new(),
            syntax_mode: kind.syntax_mode(),
            font_size: FONT_SIZE,
            color_theme: COLOR_THEME,
            auto_layout: true,
        }
    }

    /// Start the region with `text` instead of empty content.
    #[must_use]
    pub fn with_initial_text(mut self, text: String) -> Self {
        self.initial_text = text;
        self
    }
}
