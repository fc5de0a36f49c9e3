use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::key::ElementMap;
use crate::options::ATTR_STICKY_CONTAINER;
use crate::{
    CssValue, ElementKey, ElementOptions, ElementSnapshot, ElementState, EventKind, EventTarget,
    Host, ListenerId, Phase, StickyOptions, StyleProperty, Viewport,
};

const CLEAR_ELEMENT: [(StyleProperty, Option<CssValue>); 4] = [
    (StyleProperty::Position, None),
    (StyleProperty::Width, None),
    (StyleProperty::Top, None),
    (StyleProperty::Left, None),
];

const CLEAR_WRAPPER: [(StyleProperty, Option<CssValue>); 3] = [
    (StyleProperty::Display, None),
    (StyleProperty::Width, None),
    (StyleProperty::Height, None),
];

/// What a fired listener handle is wired to.
#[derive(Clone, Debug)]
enum Route<E> {
    ScrollTop,
    Scroll(E),
    Resize(E),
    ImageLoad(E),
}

/// A headless sticky-element controller.
///
/// Elements matching `selector` are pinned (fixed position) once the page scrolls past them,
/// and released again before they would overflow the bottom of their container.
///
/// The controller owns all per-element state and every listener handle it creates; the host is
/// borrowed per call. Adapters drive it by:
/// - calling [`Sticky::poll_ready`] until the document is ready,
/// - forwarding fired listener handles to [`Sticky::handle_event`].
///
/// Activation (whether an element fits its container and the viewport is wide enough) is only
/// re-evaluated on resize and [`Sticky::update`]. Scrolling only moves already-active elements.
#[derive(Clone, Debug)]
pub struct Sticky<E> {
    selector: String,
    options: StickyOptions,
    viewport: Viewport,
    scroll_top: Option<i32>,
    ready: bool,

    elements: Vec<E>,
    states: ElementMap<E, ElementState<E>>,
    routes: BTreeMap<ListenerId, Route<E>>,
    load_listener: Option<ListenerId>,
    scroll_listener: Option<ListenerId>,
}

impl<E: ElementKey> Sticky<E> {
    /// Creates a controller and subscribes the window-level load/scroll listeners that keep the
    /// cached scroll offset current.
    ///
    /// Nothing is registered until [`Sticky::poll_ready`] observes a ready document.
    pub fn new<H: Host<Element = E>>(
        host: &mut H,
        selector: impl Into<String>,
        options: StickyOptions,
    ) -> Self {
        let selector = selector.into();
        sdebug!(selector = %selector, ?options, "Sticky::new");
        let mut routes = BTreeMap::new();
        let load_listener = subscribe(
            host,
            &mut routes,
            EventTarget::Window,
            EventKind::Load,
            Route::ScrollTop,
        );
        let scroll_listener = subscribe(
            host,
            &mut routes,
            EventTarget::Window,
            EventKind::Scroll,
            Route::ScrollTop,
        );
        Self {
            selector,
            options,
            viewport: host.viewport(),
            scroll_top: None,
            ready: false,
            elements: Vec::new(),
            states: ElementMap::new(),
            routes,
            load_listener: Some(load_listener),
            scroll_listener: Some(scroll_listener),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn options(&self) -> &StickyOptions {
        &self.options
    }

    /// The viewport size as of the last resize (or construction).
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The last scroll offset reported by a load/scroll event; `None` before the first one.
    pub fn scroll_top(&self) -> Option<i32> {
        self.scroll_top
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Tracked elements, in registration order.
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn state(&self, el: &E) -> Option<&ElementState<E>> {
        self.states.get(el)
    }

    pub fn phase(&self, el: &E) -> Option<Phase> {
        self.states.get(el).map(ElementState::phase)
    }

    pub fn is_active(&self, el: &E) -> bool {
        self.states.get(el).is_some_and(ElementState::is_active)
    }

    pub fn is_pinned(&self, el: &E) -> bool {
        self.states.get(el).is_some_and(ElementState::is_pinned)
    }

    pub fn snapshot(&self, el: &E) -> Option<ElementSnapshot> {
        self.states.get(el).map(ElementState::snapshot)
    }

    /// Number of listener handles currently held.
    pub fn listener_count(&self) -> usize {
        self.routes.len()
    }

    /// Checks document readiness once. On the first ready check, every element matching the
    /// selector is registered.
    ///
    /// Returns whether the document has been seen ready.
    pub fn poll_ready<H: Host<Element = E>>(&mut self, host: &mut H) -> bool {
        if self.ready {
            return true;
        }
        if !host.is_ready() {
            strace!("poll_ready: document not ready");
            return false;
        }
        self.ready = true;
        let matched = host.query_selector_all(&self.selector);
        sdebug!(selector = %self.selector, matched = matched.len(), "document ready");
        for el in &matched {
            self.render_element(host, el);
        }
        true
    }

    /// Registers (or re-registers) `el`.
    ///
    /// Re-registering a tracked element refreshes its options and geometry but keeps its
    /// listener handles, its slot in the tracked collection and its wrapper.
    pub fn render_element<H: Host<Element = E>>(&mut self, host: &mut H, el: &E) {
        let options = ElementOptions::resolve(&*host, el, &self.options);
        let container = resolve_container(&*host, el);
        let container_rect = host.offset_rect(&container);
        let rect = host.offset_rect(el);
        strace!(?rect, ?container_rect, "render_element");

        match self.states.get_mut(el) {
            Some(state) => {
                state.options = options;
                state.container = container;
                state.rect = rect;
                state.container_rect = container_rect;
            }
            None => {
                self.states.insert(
                    el.clone(),
                    ElementState {
                        options,
                        active: false,
                        pinned: false,
                        top: None,
                        container,
                        wrapper: None,
                        rect,
                        container_rect,
                        tracked: false,
                        resize_listener: None,
                        scroll_listener: None,
                        load_listener: None,
                    },
                );
            }
        }
        let Some(state) = self.states.get_mut(el) else {
            return;
        };

        if state.load_listener.is_none() && host.is_image(el) {
            state.load_listener = Some(subscribe(
                host,
                &mut self.routes,
                EventTarget::Element(el.clone()),
                EventKind::Load,
                Route::ImageLoad(el.clone()),
            ));
        }

        if state.options.wrap && state.wrapper.is_none() {
            state.wrapper = host.wrap(el, &state.options.wrap_with);
            if state.wrapper.is_none() {
                swarn!(markup = %state.options.wrap_with, "wrapper markup produced no element");
            }
        }

        self.activate(host, el);
    }

    /// Marks `el` active when it fits inside its container and the viewport is wider than its
    /// `sticky_for` breakpoint. Never deactivates.
    ///
    /// Also starts tracking `el` and subscribes its resize/scroll listeners (once), then applies
    /// its position. Returns whether `el` is active.
    pub fn activate<H: Host<Element = E>>(&mut self, host: &mut H, el: &E) -> bool {
        let viewport = self.viewport;
        let Some(state) = self.states.get_mut(el) else {
            return false;
        };

        if !state.active && fits(state, viewport) {
            state.active = true;
        }
        let active = state.active;

        if !state.tracked {
            state.tracked = true;
            self.elements.push(el.clone());
        }
        if state.resize_listener.is_none() {
            state.resize_listener = Some(subscribe(
                host,
                &mut self.routes,
                EventTarget::Window,
                EventKind::Resize,
                Route::Resize(el.clone()),
            ));
        }
        if state.scroll_listener.is_none() {
            state.scroll_listener = Some(subscribe(
                host,
                &mut self.routes,
                EventTarget::Window,
                EventKind::Scroll,
                Route::Scroll(el.clone()),
            ));
        }

        self.set_position(host, el);
        active
    }

    /// Pins or releases `el` for the last known scroll offset and returns its resulting phase.
    pub fn set_position<H: Host<Element = E>>(&mut self, host: &mut H, el: &E) -> Option<Phase> {
        let viewport = self.viewport;
        let scroll_top = self.scroll_top;
        let state = self.states.get_mut(el)?;

        host.set_styles(el, &CLEAR_ELEMENT);
        if !state.active || viewport.height < state.rect.height {
            release(host, el, state);
            return Some(state.phase());
        }

        // Content that loads late (images) may have had no size at registration.
        if state.rect.width == 0 {
            state.rect = host.offset_rect(el);
        }
        if let Some(wrapper) = state.sized_wrapper() {
            host.set_styles(
                wrapper,
                &[
                    (StyleProperty::Display, Some(CssValue::Block)),
                    (StyleProperty::Width, Some(px(state.rect.width))),
                    (StyleProperty::Height, Some(px(state.rect.height))),
                ],
            );
        }

        let threshold = state.rect.top as i64 - state.options.margin_top as i64;
        match scroll_top {
            Some(offset) if offset as i64 > threshold => {
                let container_height = host.offset_rect(&state.container).height;
                let slack = state.container_rect.top as i64 + container_height as i64
                    - offset as i64
                    - state.rect.height as i64
                    - state.options.margin_bottom as i64;
                let top = if slack >= 0 {
                    state.options.margin_top
                } else {
                    saturate_i32(slack)
                };
                host.set_styles(
                    el,
                    &[
                        (StyleProperty::Position, Some(CssValue::Fixed)),
                        (StyleProperty::Width, Some(px(state.rect.width))),
                        (StyleProperty::Left, Some(CssValue::Px(state.rect.left))),
                        (StyleProperty::Top, Some(CssValue::Px(top))),
                    ],
                );
                if let Some(class) = &state.options.sticky_class {
                    host.add_class(el, class);
                }
                if !state.pinned {
                    strace!(offset, top, slack, "pinned");
                }
                state.pinned = true;
                state.top = Some(top);
            }
            _ => release(host, el, state),
        }
        Some(state.phase())
    }

    /// Window scroll: repositions `el` when it is active.
    pub fn on_scroll<H: Host<Element = E>>(&mut self, host: &mut H, el: &E) {
        if self.is_active(el) {
            self.set_position(host, el);
        }
    }

    /// Window resize: refreshes the viewport and both geometry caches, re-evaluates activation
    /// from scratch and repositions `el`.
    pub fn on_resize<H: Host<Element = E>>(&mut self, host: &mut H, el: &E) {
        self.viewport = host.viewport();
        let viewport = self.viewport;
        let Some(state) = self.states.get_mut(el) else {
            return;
        };
        state.rect = host.offset_rect(el);
        state.container_rect = host.offset_rect(&state.container);
        state.active = fits(state, viewport);
        strace!(active = state.active, ?viewport, "on_resize");
        self.set_position(host, el);
    }

    /// Image load: refreshes the cached geometry of `el`.
    pub fn on_image_load<H: Host<Element = E>>(&mut self, host: &mut H, el: &E) {
        if let Some(state) = self.states.get_mut(el) {
            state.rect = host.offset_rect(el);
        }
    }

    /// Window load/scroll: caches the current scroll offset.
    pub fn update_scroll_top<H: Host<Element = E>>(&mut self, host: &H) {
        self.scroll_top = Some(host.scroll_top());
    }

    /// Routes a fired listener handle to its action.
    ///
    /// Returns `false` for handles this controller does not own (for example after
    /// [`Sticky::destroy`]).
    pub fn handle_event<H: Host<Element = E>>(&mut self, host: &mut H, id: ListenerId) -> bool {
        let Some(route) = self.routes.get(&id).cloned() else {
            return false;
        };
        match route {
            Route::ScrollTop => self.update_scroll_top(&*host),
            Route::Scroll(el) => self.on_scroll(host, &el),
            Route::Resize(el) => self.on_resize(host, &el),
            Route::ImageLoad(el) => self.on_image_load(host, &el),
        }
        true
    }

    /// Re-measures every tracked element and container, then re-runs activation and
    /// positioning. Use this after layout changes that no resize event reports.
    ///
    /// Like [`Sticky::activate`], this never deactivates an element.
    pub fn update<H: Host<Element = E>>(&mut self, host: &mut H) {
        self.viewport = host.viewport();
        sdebug!(elements = self.elements.len(), "update");
        let elements = self.elements.clone();
        for el in &elements {
            if let Some(state) = self.states.get_mut(el) {
                state.rect = host.offset_rect(el);
                state.container_rect = host.offset_rect(&state.container);
            }
            self.activate(host, el);
        }
    }

    /// Releases every listener handle and drops all per-element state.
    ///
    /// Inline styles, classes and wrappers are left as they are.
    pub fn destroy<H: Host<Element = E>>(&mut self, host: &mut H) {
        sdebug!(elements = self.elements.len(), listeners = self.routes.len(), "destroy");
        for id in [self.load_listener.take(), self.scroll_listener.take()]
            .into_iter()
            .flatten()
        {
            host.unlisten(id);
        }
        for el in self.elements.drain(..) {
            if let Some(state) = self.states.remove(&el) {
                for id in state.listeners() {
                    host.unlisten(id);
                }
            }
        }
        self.states.clear();
        self.routes.clear();
    }
}

fn subscribe<H: Host>(
    host: &mut H,
    routes: &mut BTreeMap<ListenerId, Route<H::Element>>,
    target: EventTarget<H::Element>,
    kind: EventKind,
    route: Route<H::Element>,
) -> ListenerId {
    let id = host.listen(target, kind);
    debug_assert!(!routes.contains_key(&id), "host reused a live listener id");
    routes.insert(id, route);
    id
}

/// Walks up from `el` to the nearest ancestor marked as a sticky container, or the body.
fn resolve_container<H: Host + ?Sized>(host: &H, el: &H::Element) -> H::Element {
    let body = host.body();
    let mut cur = host.parent(el);
    while let Some(candidate) = cur {
        if candidate == body || host.has_attribute(&candidate, ATTR_STICKY_CONTAINER) {
            return candidate;
        }
        cur = host.parent(&candidate);
    }
    body
}

fn fits<E>(state: &ElementState<E>, viewport: Viewport) -> bool {
    state.rect.bottom() < state.container_rect.bottom() && state.options.sticky_for < viewport.width
}

/// Drops the pinned state of `el`; its own inline styles are expected to be cleared already.
fn release<H: Host>(host: &mut H, el: &H::Element, state: &mut ElementState<H::Element>) {
    if let Some(class) = &state.options.sticky_class {
        host.remove_class(el, class);
    }
    if let Some(wrapper) = state.sized_wrapper() {
        host.set_styles(wrapper, &CLEAR_WRAPPER);
    }
    if state.pinned {
        strace!("released");
    }
    state.pinned = false;
    state.top = None;
}

fn px(v: u32) -> CssValue {
    CssValue::Px(i32::try_from(v).unwrap_or(i32::MAX))
}

fn saturate_i32(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
