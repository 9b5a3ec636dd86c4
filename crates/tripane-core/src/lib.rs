#![forbid(unsafe_code)]

//! Core: fragment state, address codec, and preview document synthesis.
//!
//! # Role in Tripane
//! `tripane-core` is the pure half of the playground. It owns the
//! state-synchronization loop between the three editable fragment texts,
//! the synthesized preview document, and the serialized location path.
//! No browser types appear here, so the whole loop is natively testable.
//!
//! # Primary responsibilities
//! - **Fragment model**: the three fragment kinds and their current texts.
//! - **Codec**: reversible text ⇄ URL-safe token transform.
//! - **Synthesis**: deterministic combination of the three texts into one
//!   renderable HTML document.
//! - **Location framing**: the three texts ⇄ one address path, with
//!   malformed input degrading to empty text instead of failing.
//! - **Layout state**: the single-selection expanded-pane machine.
//!
//! # How it fits in the system
//! `tripane-web` drives a [`Session`] from editor change notifications and
//! publishes each [`SyncOutcome`] to the browser (history replace + iframe
//! `srcdoc`). The host environment never feeds state back in except once,
//! at startup, through [`Session::from_path`].

pub mod codec;
pub mod document;
pub mod fragment;
pub mod layout;
pub mod location;
pub mod session;

pub use fragment::{FragmentKind, FragmentSet};
pub use layout::LayoutState;
pub use session::{Session, SyncOutcome};
