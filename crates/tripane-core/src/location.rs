#![forbid(unsafe_code)]

//! Address framing for the three fragment texts.
//!
//! One address path carries the whole session:
//! `/<token_markup>~~<token_script>~~<token_style>`. The joiner `~~` is
//! outside the codec's output alphabet, so splitting is never ambiguous,
//! whatever the fragment texts contain.
//!
//! Parsing is total. A missing part, a part that fails to decode, or a
//! path with fewer than three parts yields empty text for that fragment
//! only; loading never fails outward.

use crate::codec;
use crate::fragment::{FragmentKind, FragmentSet};

/// Two-character joiner between the three tokens.
///
/// Both characters are outside the URL-safe base64 alphabet and are
/// unreserved in URLs, so the joiner survives the address bar untouched.
pub const JOINER: &str = "~~";

/// Serialize the current fragment texts into an address path.
///
/// Token order is markup, script, style.
#[must_use]
pub fn location_path(fragments: &FragmentSet) -> String {
    format!(
        "/{markup}{JOINER}{script}{JOINER}{style}",
        markup = codec::encode(fragments.text(FragmentKind::Markup)),
        script = codec::encode(fragments.text(FragmentKind::Script)),
        style = codec::encode(fragments.text(FragmentKind::Style)),
    )
}

/// Recover fragment texts from an address path.
pub fn parse_path(path: &str) -> FragmentSet {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let mut parts = trimmed.splitn(3, JOINER);
    let markup = decode_or_empty(parts.next());
    let script = decode_or_empty(parts.next());
    let style = decode_or_empty(parts.next());
    FragmentSet::new(markup, style, script)
}

fn decode_or_empty(token: Option<&str>) -> String {
    token
        .and_then(|token| codec::decode(token).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn set(markup: &str, style: &str, script: &str) -> FragmentSet {
        FragmentSet::new(markup.to_owned(), style.to_owned(), script.to_owned())
    }

    #[test]
    fn save_then_load_is_identity() {
        let fragments = set("<b>hi</b>", "b { color: red }", "console.log('hi')");
        assert_eq!(parse_path(&location_path(&fragments)), fragments);
    }

    #[test]
    fn all_empty_round_trips_to_all_empty() {
        let fragments = FragmentSet::default();
        assert_eq!(location_path(&fragments), "/~~~~");
        assert_eq!(parse_path("/~~~~"), fragments);
    }

    #[test]
    fn empty_address_loads_as_empty_session() {
        assert_eq!(parse_path(""), FragmentSet::default());
        assert_eq!(parse_path("/"), FragmentSet::default());
    }

    #[test]
    fn joiner_inside_fragment_text_survives_the_round_trip() {
        let fragments = set("a~~b", "~~", "x~~~~y");
        assert_eq!(parse_path(&location_path(&fragments)), fragments);
    }

    #[test]
    fn missing_parts_degrade_to_empty_text() {
        let markup_only = format!("/{}", codec::encode("<i>m</i>"));
        assert_eq!(parse_path(&markup_only), set("<i>m</i>", "", ""));

        let two_parts = format!(
            "/{}~~{}",
            codec::encode("<i>m</i>"),
            codec::encode("let s = 0;")
        );
        assert_eq!(parse_path(&two_parts), set("<i>m</i>", "", "let s = 0;"));
    }

    #[test]
    fn malformed_part_degrades_only_that_fragment() {
        let path = format!(
            "/!!not-base64!!~~{}~~{}",
            codec::encode("let s = 0;"),
            codec::encode("b {}")
        );
        assert_eq!(parse_path(&path), set("", "b {}", "let s = 0;"));
    }

    #[test]
    fn extra_joiners_degrade_only_the_trailing_fragment() {
        // A fourth part folds into the style token and fails to decode.
        let path = format!(
            "/{}~~{}~~{}~~extra",
            codec::encode("m"),
            codec::encode("s"),
            codec::encode("c")
        );
        let parsed = parse_path(&path);
        assert_eq!(parsed.text(FragmentKind::Markup), "m");
        assert_eq!(parsed.text(FragmentKind::Script), "s");
        assert_eq!(parsed.text(FragmentKind::Style), "");
    }

    proptest! {
        #[test]
        fn save_load_identity_for_arbitrary_texts(
            markup in ".*",
            style in ".*",
            script in ".*",
        ) {
            let fragments = FragmentSet::new(markup, style, script);
            prop_assert_eq!(parse_path(&location_path(&fragments)), fragments);
        }
    }
}
