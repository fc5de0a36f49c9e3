//! Adapter utilities for the `sticky` crate.
//!
//! The `sticky` crate is UI-agnostic and only decides when and where elements are pinned. This
//! crate provides small, framework-neutral pieces commonly needed around it:
//!
//! - [`Document`]: an in-memory document implementing [`sticky::Host`] (simulations, tests)
//! - [`Driver`]: owns a document plus a controller, polls readiness on a timer and routes page
//!   events to the controller's listener handles
//!
//! This crate is intentionally framework-agnostic (no browser bindings). Both pieces need the
//! `std` feature (on by default): selectors and wrapper markup are handled by `scraper`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

#[cfg(feature = "std")]
mod document;
#[cfg(feature = "std")]
mod driver;
#[cfg(feature = "std")]
mod html;


#[cfg(feature = "std")]
pub use document::{Document, NodeId};
#[cfg(feature = "std")]
pub use driver::{Driver, READY_POLL_INTERVAL_MS};
