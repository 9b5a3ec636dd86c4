#![forbid(unsafe_code)]

//! Preview document synthesis.

use crate::fragment::{FragmentKind, FragmentSet};

/// Combine the three fragment texts into one renderable HTML document.
///
/// The skeleton is fixed: a UTF-8 document with `style` inside a head
/// `<style>` block, `markup` in the body, and `script` in a trailing
/// `<script>` block. Content is embedded verbatim; the sandboxed preview
/// frame is the trust boundary, not this function. Identical inputs yield
/// byte-identical output.
#[must_use]
pub fn synthesize(markup: &str, style: &str, script: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\" />\n\
         <style>\n\
         {style}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         {markup}\n\
         <script>\n\
         {script}\n\
         </script>\n\
         </body>\n\
         </html>\n"
    )
}

/// [`synthesize`] over a [`FragmentSet`] snapshot.
#[must_use]
pub fn synthesize_set(fragments: &FragmentSet) -> String {
    synthesize(
        fragments.text(FragmentKind::Markup),
        fragments.text(FragmentKind::Style),
        fragments.text(FragmentKind::Script),
    )
}
