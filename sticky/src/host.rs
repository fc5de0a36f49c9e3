use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    CssValue, ElementKey, EventKind, EventTarget, ListenerId, Rect, StyleProperty, Viewport,
};

/// The platform surface the engine drives.
///
/// The engine never holds host objects beyond opaque element identities: everything it reads
/// (readiness, geometry, scroll offset) and everything it writes (styles, classes, wrappers,
/// listeners) goes through this trait. A browser binding, a test document or a TUI can all
/// implement it.
pub trait Host {
    type Element: ElementKey;

    /// Whether the document has finished loading (`readyState == "complete"`).
    fn is_ready(&self) -> bool;

    /// Elements matching `selector`, in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;

    fn body(&self) -> Self::Element;

    fn parent(&self, el: &Self::Element) -> Option<Self::Element>;

    fn has_attribute(&self, el: &Self::Element, name: &str) -> bool;

    fn attribute(&self, el: &Self::Element, name: &str) -> Option<String>;

    /// Whether `el` loads content asynchronously (an `<img>`), so its size may change after
    /// registration.
    fn is_image(&self, el: &Self::Element) -> bool;

    fn offset_rect(&self, el: &Self::Element) -> Rect;

    fn viewport(&self) -> Viewport;

    /// Vertical page scroll offset.
    fn scroll_top(&self) -> i32;

    /// Sets an inline style property, or resets it to its default when `value` is `None`.
    fn set_style(&mut self, el: &Self::Element, property: StyleProperty, value: Option<CssValue>);

    fn add_class(&mut self, el: &Self::Element, class: &str);

    fn remove_class(&mut self, el: &Self::Element, class: &str);

    /// Inserts `markup` right before `el` and moves `el` into it.
    ///
    /// Returns the new wrapper, or `None` when the markup did not produce an element.
    fn wrap(&mut self, el: &Self::Element, markup: &str) -> Option<Self::Element>;

    /// Subscribes to `kind` on `target`. The host reports the returned handle back to
    /// [`crate::Sticky::handle_event`] each time the event fires.
    fn listen(&mut self, target: EventTarget<Self::Element>, kind: EventKind) -> ListenerId;

    fn unlisten(&mut self, id: ListenerId);

    /// Applies several style writes to one element.
    fn set_styles(&mut self, el: &Self::Element, styles: &[(StyleProperty, Option<CssValue>)]) {
        for &(property, value) in styles {
            self.set_style(el, property, value);
        }
    }
}
