//! `wasm-bindgen` exports wiring the playground to the host page.
//!
//! The host constructs [`TripaneApp`] once, after the pane containers,
//! header controls, and preview iframe exist in the document. From then
//! on everything is event-driven: each editor change notification runs
//! the save → synthesize → render loop, and each header click drives the
//! expanded-pane toggle. No other code writes to the location.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::{Function, Object, Reflect};
use tracing::{debug, trace, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, HtmlIFrameElement};

use crate::options::EditorOptions;
use tripane_core::{FragmentKind, LayoutState, Session, SyncOutcome};

/// DOM id of the sandboxed preview iframe.
const PREVIEW_ID: &str = "preview";
/// Marker class present on exactly the expanded pane container.
const PANE_EXPANDED_CLASS: &str = "pane--expanded";

#[wasm_bindgen]
extern "C" {
    /// One created editor region: the host widget instance for a pane.
    pub type EditorRegion;

    #[wasm_bindgen(js_namespace = editorHost, js_name = create)]
    fn editor_host_create(container: &HtmlElement, options: &JsValue) -> EditorRegion;

    #[wasm_bindgen(method, js_name = getText)]
    fn get_text(this: &EditorRegion) -> String;

    #[wasm_bindgen(method, js_name = setText)]
    fn set_text(this: &EditorRegion, text: &str);

    #[wasm_bindgen(method, js_name = onChange)]
    fn on_change(this: &EditorRegion, callback: &Function);
}

fn install_panic_hook() {
    use std::sync::Once;
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let global = js_sys::global();
            if let Ok(console) = Reflect::get(&global, &"console".into())
                && let Ok(error) = Reflect::get(&console, &"error".into())
                && let Ok(report) = error.dyn_into::<Function>()
            {
                let _ = report.call1(&console, &JsValue::from_str(&format!("{info}")));
            }
        }));
    });
}

fn set_js(obj: &Object, key: &str, value: JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), &value);
}

fn options_object(options: &EditorOptions) -> JsValue {
    let obj = Object::new();
    set_js(&obj, "initialText", JsValue::from_str(&options.initial_text));
    set_js(&obj, "syntaxMode", JsValue::from_str(options.syntax_mode));
    set_js(&obj, "fontSize", JsValue::from(options.font_size));
    set_js(&obj, "colorTheme", JsValue::from_str(options.color_theme));
    set_js(&obj, "autoLayout", JsValue::from(options.auto_layout));
    obj.into()
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has an unexpected type")))
}

/// Browser handles the sync loop publishes into.
struct HostHandles {
    history: web_sys::History,
    preview: HtmlIFrameElement,
}

/// Push one sync outcome to the browser: replace the location (no new
/// history entry), then hand the document to the sandboxed frame.
fn publish(handles: &HostHandles, outcome: &SyncOutcome) {
    if let Err(err) = handles.history.replace_state_with_url(
        &JsValue::NULL,
        "",
        Some(&outcome.location_path),
    ) {
        warn!(err = ?err, "history replaceState failed");
    }
    handles.preview.set_srcdoc(&outcome.document);
}

fn subscribe_changes(
    kind: FragmentKind,
    region: &EditorRegion,
    session: &Rc<RefCell<Session>>,
    handles: &Rc<HostHandles>,
) -> Closure<dyn FnMut()> {
    let session = Rc::clone(session);
    let handles = Rc::clone(handles);
    let cb_region = region.clone();
    let subscription = Closure::<dyn FnMut()>::new(move || {
        let text = cb_region.get_text();
        trace!(kind = kind.as_str(), chars = text.len(), "change notification");
        let outcome = session.borrow_mut().apply_edit(kind, text);
        publish(&handles, &outcome);
    });
    region.on_change(subscription.as_ref().unchecked_ref());
    subscription
}

fn subscribe_header_click(
    kind: FragmentKind,
    header: &HtmlElement,
    layout: &Rc<Cell<LayoutState>>,
    containers: &Rc<Vec<(FragmentKind, HtmlElement)>>,
) -> Result<Closure<dyn FnMut()>, JsValue> {
    let layout = Rc::clone(layout);
    let containers = Rc::clone(containers);
    let subscription = Closure::<dyn FnMut()>::new(move || {
        let mut state = layout.get();
        state.toggle(kind);
        layout.set(state);
        debug!(kind = kind.as_str(), expanded = ?state.expanded(), "pane toggled");
        reconcile_pane_classes(&containers, state);
    });
    header.add_event_listener_with_callback("click", subscription.as_ref().unchecked_ref())?;
    Ok(subscription)
}

/// Make every pane container's class list agree with the layout state.
/// All three containers are reconciled on every toggle.
fn reconcile_pane_classes(containers: &[(FragmentKind, HtmlElement)], state: LayoutState) {
    for (kind, container) in containers {
        let classes = container.class_list();
        let result = if state.is_expanded(*kind) {
            classes.add_1(PANE_EXPANDED_CLASS)
        } else {
            classes.remove_1(PANE_EXPANDED_CLASS)
        };
        if let Err(err) = result {
            warn!(pane = kind.as_str(), err = ?err, "pane class update failed");
        }
    }
}

/// Web playground session.
///
/// Owns the three editor regions, the preview frame, and the location
/// writer. Construct once per page, after the structural content exists.
#[wasm_bindgen]
pub struct TripaneApp {
    session: Rc<RefCell<Session>>,
    layout: Rc<Cell<LayoutState>>,
    _change_subscriptions: Vec<Closure<dyn FnMut()>>,
    _click_subscriptions: Vec<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl TripaneApp {
    /// Restore the session from the current address, seed the editors,
    /// render the first preview, and wire all event handlers.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<TripaneApp, JsValue> {
        install_panic_hook();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let history = window.history()?;

        let path = window.location().pathname().unwrap_or_default();
        let session = Session::from_path(&path);
        debug!(
            restored = !session.fragments().is_empty(),
            "session loaded from address"
        );

        // Structural content must exist before any editor is created.
        let preview: HtmlIFrameElement = element_by_id(&document, PREVIEW_ID)?;
        let mut containers = Vec::with_capacity(FragmentKind::ALL.len());
        for kind in FragmentKind::ALL {
            let container: HtmlElement = element_by_id(&document, kind.pane_id())?;
            containers.push((kind, container));
        }

        // Create and seed the regions, then render once so the preview
        // matches the restored state before the first interaction. Change
        // notifications are subscribed only after seeding, so restoring
        // never publishes a spurious save.
        let mut regions = Vec::with_capacity(containers.len());
        for (kind, container) in &containers {
            let options = options_object(&EditorOptions::for_kind(*kind));
            let region = editor_host_create(container, &options);
            region.set_text(session.text(*kind));
            regions.push((*kind, region));
        }
        let outcome = session.refresh();
        let handles = Rc::new(HostHandles { history, preview });
        handles.preview.set_srcdoc(&outcome.document);

        let session = Rc::new(RefCell::new(session));
        let change_subscriptions = regions
            .iter()
            .map(|(kind, region)| subscribe_changes(*kind, region, &session, &handles))
            .collect();

        let layout = Rc::new(Cell::new(LayoutState::new()));
        let containers = Rc::new(containers);
        let mut click_subscriptions = Vec::with_capacity(FragmentKind::ALL.len());
        for kind in FragmentKind::ALL {
            let header: HtmlElement = element_by_id(&document, kind.header_id())?;
            click_subscriptions.push(subscribe_header_click(kind, &header, &layout, &containers)?);
        }

        Ok(Self {
            session,
            layout,
            _change_subscriptions: change_subscriptions,
            _click_subscriptions: click_subscriptions,
        })
    }

    /// Version of the JS-facing API surface.
    #[wasm_bindgen(js_name = apiVersion)]
    #[must_use]
    pub fn api_version(&self) -> u32 {
        crate::TRIPANE_JS_API_VERSION
    }

    /// Address path encoding the current session.
    #[wasm_bindgen(js_name = locationPath)]
    #[must_use]
    pub fn location_path(&self) -> String {
        self.session.borrow().refresh().location_path
    }

    /// Current synthesized preview document.
    #[wasm_bindgen(js_name = previewDocument)]
    #[must_use]
    pub fn preview_document(&self) -> String {
        self.session.borrow().refresh().document
    }

    /// Name of the expanded pane, or the empty string when all panes are
    /// collapsed.
    #[wasm_bindgen(js_name = expandedPane)]
    #[must_use]
    pub fn expanded_pane(&self) -> String {
        self.layout
            .get()
            .expanded()
            .map(|kind| kind.as_str().to_owned())
            .unwrap_or_default()
    }
}
