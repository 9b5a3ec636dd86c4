#![forbid(unsafe_code)]

//! End-to-end loop over the pure session: load, edit, share, reload.

use pretty_assertions::assert_eq;
use tripane_core::{FragmentKind, Session};

#[test]
fn fresh_load_renders_an_empty_preview() {
    let session = Session::from_path("");
    for kind in FragmentKind::ALL {
        assert_eq!(session.text(kind), "");
    }

    let outcome = session.refresh();
    assert!(outcome.document.contains("<style>\n\n</style>"));
    assert!(outcome.document.contains("<body>\n\n<script>"));
    assert!(outcome.document.contains("<script>\n\n</script>"));
}

#[test]
fn typing_markup_updates_preview_and_address_then_reloads() {
    // Fresh page, user types into the markup region.
    let mut session = Session::from_path("/");
    let outcome = session.apply_edit(FragmentKind::Markup, "<b>hi</b>".to_owned());

    // The preview body carries the markup and the address now encodes a
    // non-empty first token.
    assert!(outcome.document.contains("<b>hi</b>"));
    let first_token = outcome
        .location_path
        .trim_start_matches('/')
        .split("~~")
        .next()
        .unwrap();
    assert!(!first_token.is_empty());

    // Reloading that address seeds the markup region again.
    let restored = Session::from_path(&outcome.location_path);
    assert_eq!(restored.text(FragmentKind::Markup), "<b>hi</b>");
    assert_eq!(restored.text(FragmentKind::Style), "");
    assert_eq!(restored.text(FragmentKind::Script), "");
    assert_eq!(restored.refresh().document, outcome.document);
}

#[test]
fn all_three_regions_survive_a_shared_address() {
    let mut session = Session::new();
    session.apply_edit(FragmentKind::Markup, "<div id=\"app\"></div>".to_owned());
    session.apply_edit(FragmentKind::Style, "#app { display: flex }".to_owned());
    let outcome = session.apply_edit(
        FragmentKind::Script,
        "document.querySelector('#app').textContent = 'ready';".to_owned(),
    );

    let restored = Session::from_path(&outcome.location_path);
    for kind in FragmentKind::ALL {
        assert_eq!(restored.text(kind), session.text(kind));
    }
}

#[test]
fn edits_in_one_region_leave_the_others_untouched() {
    let shared = {
        let mut session = Session::new();
        session.apply_edit(FragmentKind::Style, "body { margin: 0 }".to_owned());
        session
            .apply_edit(FragmentKind::Markup, "<p>keep</p>".to_owned())
            .location_path
    };

    let mut session = Session::from_path(&shared);
    session.apply_edit(FragmentKind::Script, "void 0;".to_owned());

    assert_eq!(session.text(FragmentKind::Markup), "<p>keep</p>");
    assert_eq!(session.text(FragmentKind::Style), "body { margin: 0 }");
}
