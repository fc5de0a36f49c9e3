//! A headless sticky-element engine.
//!
//! Elements matched by a selector "stick" to the top of the viewport once the page scrolls past
//! them, and are pushed back up before they would leave their container. The engine decides
//! *when* an element is pinned and *where* it goes; it does not own a document.
//!
//! It is UI-agnostic. A host layer (see [`Host`]) is expected to provide:
//! - document readiness and element lookup
//! - element/container offset geometry and the viewport size
//! - the page scroll offset
//! - style, class and wrapper mutation
//! - event subscription handles (load, scroll, resize)
//!
//! For a simulated document and an event driver, see the `sticky-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod host;
mod key;
mod options;
mod state;
mod sticky;
mod types;

#[cfg(test)]
mod tests;

pub use host::Host;
pub use key::ElementKey;
pub use options::{
    ATTR_MARGIN_BOTTOM, ATTR_MARGIN_TOP, ATTR_STICKY_CLASS, ATTR_STICKY_CONTAINER,
    ATTR_STICKY_FOR, ATTR_STICKY_WRAP, ATTR_STICKY_WRAP_WITH, ElementOptions, StickyOptions,
    parse_int_prefix,
};
pub use state::{ElementSnapshot, ElementState};
pub use sticky::Sticky;
pub use types::{
    CssValue, EventKind, EventTarget, ListenerId, Phase, Rect, StyleProperty, Viewport,
};
