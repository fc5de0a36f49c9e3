use alloc::string::String;

use sticky::{EventKind, EventTarget, Host, Rect, Sticky, StickyOptions, Viewport};

use crate::{Document, NodeId};

/// How often [`Driver::tick`] re-checks document readiness.
pub const READY_POLL_INTERVAL_MS: u64 = 10;

/// A framework-neutral driver that owns a [`Document`] and a [`Sticky`] controller.
///
/// Adapters drive it by calling:
/// - `tick(now_ms)` on a timer until the document is ready (readiness is polled every
///   [`READY_POLL_INTERVAL_MS`])
/// - `load` / `scroll_to` / `resize` / `image_loaded` when the page reports those events
///
/// Each event is delivered to the controller through the listener handles it subscribed, in
/// subscription order, the way a browser dispatches window listeners.
#[derive(Clone, Debug)]
pub struct Driver {
    doc: Document,
    sticky: Sticky<NodeId>,
    next_poll_ms: u64,
}

impl Driver {
    /// Creates a controller for `selector` on `doc`. The first readiness poll is due one
    /// interval after `now_ms`.
    pub fn new(
        mut doc: Document,
        selector: impl Into<String>,
        options: StickyOptions,
        now_ms: u64,
    ) -> Self {
        let sticky = Sticky::new(&mut doc, selector, options);
        Self {
            doc,
            sticky,
            next_poll_ms: now_ms.saturating_add(READY_POLL_INTERVAL_MS),
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Mutable access for layout changes. Call [`Driver::update`] afterwards if no resize event
    /// will report them.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn sticky(&self) -> &Sticky<NodeId> {
        &self.sticky
    }

    pub fn into_parts(self) -> (Document, Sticky<NodeId>) {
        (self.doc, self.sticky)
    }

    pub fn is_ready(&self) -> bool {
        self.sticky.is_ready()
    }

    /// Advances the readiness poll. Returns whether the controller has registered its elements.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.sticky.is_ready() {
            return true;
        }
        if now_ms < self.next_poll_ms {
            return false;
        }
        self.next_poll_ms = now_ms.saturating_add(READY_POLL_INTERVAL_MS);
        let ready = self.sticky.poll_ready(&mut self.doc);
        if ready {
            sdebug!(now_ms, elements = self.sticky.len(), "sticky elements registered");
        }
        ready
    }

    /// Fires `kind` on `target`. Returns how many listener handles were delivered.
    pub fn dispatch(&mut self, target: EventTarget<NodeId>, kind: EventKind) -> usize {
        let ids = self.doc.listeners_for(&target, kind);
        let mut delivered = 0usize;
        for id in ids {
            if self.sticky.handle_event(&mut self.doc, id) {
                delivered += 1;
            }
        }
        delivered
    }

    /// Completes the document and fires the window `load` event.
    pub fn load(&mut self) {
        self.doc.set_ready(true);
        self.dispatch(EventTarget::Window, EventKind::Load);
    }

    pub fn scroll_to(&mut self, scroll_top: i32) {
        self.doc.set_scroll_top(scroll_top);
        self.dispatch(EventTarget::Window, EventKind::Scroll);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.doc.set_viewport(viewport);
        self.dispatch(EventTarget::Window, EventKind::Resize);
    }

    /// Reports that image `el` finished loading, optionally with its new geometry.
    pub fn image_loaded(&mut self, el: NodeId, rect: Option<Rect>) {
        if let Some(rect) = rect {
            self.doc.set_rect(el, rect);
        }
        debug_assert!(self.doc.is_image(&el), "image_loaded on a non-image element");
        self.dispatch(EventTarget::Element(el), EventKind::Load);
    }

    pub fn update(&mut self) {
        self.sticky.update(&mut self.doc);
    }

    pub fn destroy(&mut self) {
        self.sticky.destroy(&mut self.doc);
    }
}
