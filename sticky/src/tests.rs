use crate::*;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

const BODY: u32 = 0;

#[derive(Clone, Debug, Default)]
struct Node {
    parent: Option<u32>,
    tag: &'static str,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    styles: BTreeMap<StyleProperty, CssValue>,
    rect: Rect,
}

/// A minimal flat document: node ids are indexes, node 0 is the body, selectors match a
/// single class name (`.name`).
#[derive(Debug)]
struct TestHost {
    ready: bool,
    nodes: Vec<Node>,
    viewport: Viewport,
    scroll: i32,
    listeners: Vec<(ListenerId, EventTarget<u32>, EventKind)>,
    next_listener: u64,
}

impl TestHost {
    fn new(viewport: Viewport) -> Self {
        Self {
            ready: true,
            nodes: vec![Node {
                tag: "body",
                rect: Rect::new(0, 0, viewport.width, 5000),
                ..Node::default()
            }],
            viewport,
            scroll: 0,
            listeners: Vec::new(),
            next_listener: 1,
        }
    }

    fn add(&mut self, parent: u32, tag: &'static str, rect: Rect) -> u32 {
        let id = self.nodes.len() as u32;
        self.nodes.push(Node {
            parent: Some(parent),
            tag,
            rect,
            ..Node::default()
        });
        id
    }

    fn add_container(&mut self, parent: u32, rect: Rect) -> u32 {
        let id = self.add(parent, "div", rect);
        self.set_attr(id, ATTR_STICKY_CONTAINER, "");
        id
    }

    fn add_sticky(&mut self, parent: u32, rect: Rect) -> u32 {
        let id = self.add(parent, "div", rect);
        self.nodes[id as usize].classes.push("sticky".to_string());
        id
    }

    fn set_attr(&mut self, id: u32, name: &str, value: &str) {
        self.nodes[id as usize]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    fn style(&self, id: u32, property: StyleProperty) -> Option<CssValue> {
        self.nodes[id as usize].styles.get(&property).copied()
    }

    fn has_class(&self, id: u32, class: &str) -> bool {
        self.nodes[id as usize].classes.iter().any(|c| c == class)
    }

    fn fire(&self, target: &EventTarget<u32>, kind: EventKind) -> Vec<ListenerId> {
        self.listeners
            .iter()
            .filter(|(_, t, k)| t == target && *k == kind)
            .map(|(id, _, _)| *id)
            .collect()
    }
}

impl Host for TestHost {
    type Element = u32;

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn query_selector_all(&self, selector: &str) -> Vec<u32> {
        let class = selector.trim_start_matches('.');
        (0..self.nodes.len() as u32)
            .filter(|&id| self.has_class(id, class))
            .collect()
    }

    fn body(&self) -> u32 {
        BODY
    }

    fn parent(&self, el: &u32) -> Option<u32> {
        self.nodes[*el as usize].parent
    }

    fn has_attribute(&self, el: &u32, name: &str) -> bool {
        self.nodes[*el as usize].attrs.contains_key(name)
    }

    fn attribute(&self, el: &u32, name: &str) -> Option<String> {
        self.nodes[*el as usize].attrs.get(name).cloned()
    }

    fn is_image(&self, el: &u32) -> bool {
        self.nodes[*el as usize].tag == "img"
    }

    fn offset_rect(&self, el: &u32) -> Rect {
        self.nodes[*el as usize].rect
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_top(&self) -> i32 {
        self.scroll
    }

    fn set_style(&mut self, el: &u32, property: StyleProperty, value: Option<CssValue>) {
        let styles = &mut self.nodes[*el as usize].styles;
        match value {
            Some(v) => {
                styles.insert(property, v);
            }
            None => {
                styles.remove(&property);
            }
        }
    }

    fn add_class(&mut self, el: &u32, class: &str) {
        if !self.has_class(*el, class) {
            self.nodes[*el as usize].classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, el: &u32, class: &str) {
        self.nodes[*el as usize].classes.retain(|c| c != class);
    }

    fn wrap(&mut self, el: &u32, _markup: &str) -> Option<u32> {
        let parent = self.nodes[*el as usize].parent?;
        let rect = self.nodes[*el as usize].rect;
        let wrapper = self.add(parent, "span", rect);
        self.nodes[*el as usize].parent = Some(wrapper);
        Some(wrapper)
    }

    fn listen(&mut self, target: EventTarget<u32>, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, target, kind));
        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.listeners.retain(|(l, _, _)| *l != id);
    }
}

fn dispatch(s: &mut Sticky<u32>, host: &mut TestHost, target: EventTarget<u32>, kind: EventKind) {
    for id in host.fire(&target, kind) {
        s.handle_event(host, id);
    }
}

fn scroll_to(s: &mut Sticky<u32>, host: &mut TestHost, offset: i32) {
    host.scroll = offset;
    dispatch(s, host, EventTarget::Window, EventKind::Scroll);
}

fn resize(s: &mut Sticky<u32>, host: &mut TestHost, viewport: Viewport) {
    host.viewport = viewport;
    dispatch(s, host, EventTarget::Window, EventKind::Resize);
}

/// Element 50px tall at top=100 inside a 500px container at top=0.
fn scenario(options: StickyOptions) -> (TestHost, Sticky<u32>, u32) {
    let mut host = TestHost::new(Viewport::new(1200, 800));
    let container = host.add_container(BODY, Rect::new(0, 0, 1200, 500));
    let el = host.add_sticky(container, Rect::new(100, 20, 300, 50));
    let mut s = Sticky::new(&mut host, ".sticky", options);
    assert!(s.poll_ready(&mut host));
    (host, s, el)
}

#[test]
fn pins_at_margin_top_then_clamps_to_container_bottom() {
    let (mut host, mut s, el) = scenario(StickyOptions::default());
    assert!(s.is_active(&el));
    assert_eq!(s.phase(&el), Some(Phase::Unpinned));

    scroll_to(&mut s, &mut host, 150);
    assert_eq!(s.phase(&el), Some(Phase::Pinned));
    assert_eq!(host.style(el, StyleProperty::Position), Some(CssValue::Fixed));
    assert_eq!(host.style(el, StyleProperty::Top), Some(CssValue::Px(0)));
    assert_eq!(host.style(el, StyleProperty::Width), Some(CssValue::Px(300)));
    assert_eq!(host.style(el, StyleProperty::Left), Some(CssValue::Px(20)));

    // slack = 0 + 500 - 460 - 50 - 0 = -10
    scroll_to(&mut s, &mut host, 460);
    assert_eq!(s.state(&el).unwrap().top(), Some(-10));
    assert_eq!(host.style(el, StyleProperty::Top), Some(CssValue::Px(-10)));

    scroll_to(&mut s, &mut host, 50);
    assert_eq!(s.phase(&el), Some(Phase::Unpinned));
    assert_eq!(host.style(el, StyleProperty::Position), None);
    assert_eq!(host.style(el, StyleProperty::Top), None);
}

#[test]
fn zero_slack_keeps_margin_top() {
    let (mut host, mut s, el) = scenario(StickyOptions::default().with_margin_top(10));
    // slack = 500 - 450 - 50 = 0
    scroll_to(&mut s, &mut host, 450);
    assert_eq!(s.state(&el).unwrap().top(), Some(10));

    scroll_to(&mut s, &mut host, 451);
    assert_eq!(s.state(&el).unwrap().top(), Some(-1));
}

#[test]
fn margin_top_moves_the_pin_threshold() {
    let (mut host, mut s, el) = scenario(StickyOptions::default().with_margin_top(30));
    scroll_to(&mut s, &mut host, 70);
    assert!(!s.is_pinned(&el));
    scroll_to(&mut s, &mut host, 71);
    assert!(s.is_pinned(&el));
    assert_eq!(host.style(el, StyleProperty::Top), Some(CssValue::Px(30)));
}

#[test]
fn margin_bottom_releases_earlier() {
    let (mut host, mut s, el) = scenario(StickyOptions::default().with_margin_bottom(20));
    // slack = 500 - 440 - 50 - 20 = -10
    scroll_to(&mut s, &mut host, 440);
    assert_eq!(s.state(&el).unwrap().top(), Some(-10));
}

#[test]
fn element_taller_than_container_never_activates() {
    let mut host = TestHost::new(Viewport::new(1200, 800));
    let container = host.add_container(BODY, Rect::new(0, 0, 1200, 120));
    let el = host.add_sticky(container, Rect::new(100, 0, 300, 50));
    let mut s = Sticky::new(&mut host, ".sticky", StickyOptions::default());
    s.poll_ready(&mut host);

    assert!(!s.is_active(&el));
    scroll_to(&mut s, &mut host, 400);
    assert_eq!(s.phase(&el), Some(Phase::Inactive));
    assert_eq!(host.style(el, StyleProperty::Position), None);
}

#[test]
fn sticky_for_gates_activation_until_resize() {
    let (mut host, mut s, el) = scenario(StickyOptions::default().with_sticky_for(1200));
    assert!(!s.is_active(&el));

    scroll_to(&mut s, &mut host, 150);
    assert!(!s.is_pinned(&el));

    resize(&mut s, &mut host, Viewport::new(1201, 800));
    assert!(s.is_active(&el));
    assert!(s.is_pinned(&el));

    resize(&mut s, &mut host, Viewport::new(1000, 800));
    assert_eq!(s.phase(&el), Some(Phase::Inactive));
    assert_eq!(host.style(el, StyleProperty::Position), None);
}

#[test]
fn short_viewport_never_pins() {
    let mut host = TestHost::new(Viewport::new(1200, 40));
    let container = host.add_container(BODY, Rect::new(0, 0, 1200, 500));
    let el = host.add_sticky(container, Rect::new(100, 0, 300, 50));
    let mut s = Sticky::new(&mut host, ".sticky", StickyOptions::default());
    s.poll_ready(&mut host);

    assert!(s.is_active(&el));
    for offset in [0, 150, 300, 460, 1000] {
        scroll_to(&mut s, &mut host, offset);
        assert!(!s.is_pinned(&el), "offset={offset}");
        assert_eq!(host.style(el, StyleProperty::Position), None);
    }
}

#[test]
fn element_flush_with_container_bottom_stays_inactive() {
    let mut host = TestHost::new(Viewport::new(1200, 800));
    let container = host.add_container(BODY, Rect::new(0, 0, 1200, 500));
    let el = host.add_sticky(container, Rect::new(450, 0, 300, 50));
    let mut s = Sticky::new(&mut host, ".sticky", StickyOptions::default());
    s.poll_ready(&mut host);

    assert_eq!(s.state(&el).unwrap().rect().bottom(), 500);
    assert!(!s.is_active(&el));
    scroll_to(&mut s, &mut host, 460);
    assert!(!s.phase(&el).unwrap().is_active());
    assert_eq!(host.style(el, StyleProperty::Position), None);
}

#[test]
fn viewport_exactly_as_tall_as_the_element_still_pins() {
    let mut host = TestHost::new(Viewport::new(1200, 50));
    let container = host.add_container(BODY, Rect::new(0, 0, 1200, 500));
    let el = host.add_sticky(container, Rect::new(100, 0, 300, 50));
    let mut s = Sticky::new(&mut host, ".sticky", StickyOptions::default());
    s.poll_ready(&mut host);

    scroll_to(&mut s, &mut host, 150);
    let snapshot = s.snapshot(&el).unwrap();
    assert!(snapshot.phase.is_active());
    assert_eq!(snapshot.phase, Phase::Pinned);
    assert_eq!(host.style(el, StyleProperty::Top), Some(CssValue::Px(0)));
}

#[test]
fn sticky_class_tracks_pin_state() {
    let (mut host, mut s, el) =
        scenario(StickyOptions::default().with_sticky_class(Some("is-sticky")));
    assert!(!host.has_class(el, "is-sticky"));

    scroll_to(&mut s, &mut host, 150);
    assert!(host.has_class(el, "is-sticky"));

    scroll_to(&mut s, &mut host, 460);
    assert!(host.has_class(el, "is-sticky"));

    scroll_to(&mut s, &mut host, 10);
    assert!(!host.has_class(el, "is-sticky"));

    scroll_to(&mut s, &mut host, 150);
    assert!(host.has_class(el, "is-sticky"));
    resize(&mut s, &mut host, Viewport::new(1200, 30));
    assert!(!s.is_pinned(&el));
    assert!(!host.has_class(el, "is-sticky"));
}

#[test]
fn nothing_pins_before_the_first_scroll_offset_is_known() {
    let (mut host, mut s, el) = scenario(StickyOptions::default());
    host.scroll = 300;
    s.set_position(&mut host, &el);
    assert_eq!(s.scroll_top(), None);
    assert!(!s.is_pinned(&el));

    dispatch(&mut s, &mut host, EventTarget::Window, EventKind::Load);
    assert_eq!(s.scroll_top(), Some(300));
    s.set_position(&mut host, &el);
    assert!(s.is_pinned(&el));
}

#[test]
fn registration_waits_for_ready_document() {
    let mut host = TestHost::new(Viewport::new(1200, 800));
    host.ready = false;
    let el = host.add_sticky(BODY, Rect::new(100, 0, 300, 50));
    let mut s = Sticky::new(&mut host, ".sticky", StickyOptions::default());

    assert!(!s.poll_ready(&mut host));
    assert!(s.is_empty());
    assert_eq!(s.phase(&el), None);

    host.ready = true;
    assert!(s.poll_ready(&mut host));
    assert_eq!(s.elements(), &[el]);
    assert!(s.poll_ready(&mut host));
    assert_eq!(s.len(), 1);
}

#[test]
fn re_registration_is_idempotent() {
    let (mut host, mut s, el) = scenario(StickyOptions::default().with_wrap(true));
    let listeners = host.listeners.len();
    let handles = s.listener_count();
    let wrapper = *s.state(&el).unwrap().wrapper().unwrap();

    s.render_element(&mut host, &el);
    s.render_element(&mut host, &el);
    s.activate(&mut host, &el);
    s.update(&mut host);

    assert_eq!(s.elements(), &[el]);
    assert_eq!(host.listeners.len(), listeners);
    assert_eq!(s.listener_count(), handles);
    assert_eq!(s.state(&el).unwrap().wrapper(), Some(&wrapper));
    assert_eq!(host.parent(&el), Some(wrapper));
}

#[test]
fn listener_handles_are_window_scoped_and_ordered() {
    let (host, s, _) = scenario(StickyOptions::default());
    // load + scroll for the controller, resize + scroll for the element.
    assert_eq!(s.listener_count(), 4);
    let kinds: Vec<EventKind> = host.listeners.iter().map(|(_, _, k)| *k).collect();
    assert_eq!(
        kinds,
        vec![
            EventKind::Load,
            EventKind::Scroll,
            EventKind::Resize,
            EventKind::Scroll
        ]
    );
}

#[test]
fn destroy_releases_every_handle() {
    let (mut host, mut s, el) =
        scenario(StickyOptions::default().with_sticky_class(Some("is-sticky")));
    scroll_to(&mut s, &mut host, 150);
    let fired = host.fire(&EventTarget::Window, EventKind::Scroll);

    s.destroy(&mut host);
    assert!(host.listeners.is_empty());
    assert!(s.is_empty());
    assert_eq!(s.listener_count(), 0);
    assert!(s.state(&el).is_none());

    for id in fired {
        assert!(!s.handle_event(&mut host, id));
    }
    // Styles are left untouched.
    assert!(host.has_class(el, "is-sticky"));
}

#[test]
fn container_defaults_to_body() {
    let mut host = TestHost::new(Viewport::new(1200, 800));
    let section = host.add(BODY, "section", Rect::new(0, 0, 1200, 300));
    let el = host.add_sticky(section, Rect::new(100, 0, 300, 50));
    let mut s = Sticky::new(&mut host, ".sticky", StickyOptions::default());
    s.poll_ready(&mut host);

    let state = s.state(&el).unwrap();
    assert_eq!(*state.container(), BODY);
    assert_eq!(state.container_rect().height, 5000);
}

#[test]
fn nearest_marked_ancestor_is_the_container() {
    let mut host = TestHost::new(Viewport::new(1200, 800));
    let outer = host.add_container(BODY, Rect::new(0, 0, 1200, 2000));
    let inner = host.add_container(outer, Rect::new(200, 0, 1200, 400));
    let wrapper = host.add(inner, "div", Rect::new(200, 0, 1200, 100));
    let el = host.add_sticky(wrapper, Rect::new(220, 0, 300, 50));
    let mut s = Sticky::new(&mut host, ".sticky", StickyOptions::default());
    s.poll_ready(&mut host);

    assert_eq!(*s.state(&el).unwrap().container(), inner);
}

#[test]
fn data_attributes_override_options() {
    let mut host = TestHost::new(Viewport::new(1200, 800));
    let container = host.add_container(BODY, Rect::new(0, 0, 1200, 500));
    let el = host.add_sticky(container, Rect::new(100, 0, 300, 50));
    host.set_attr(el, ATTR_MARGIN_TOP, "12px");
    host.set_attr(el, ATTR_MARGIN_BOTTOM, "nope");
    host.set_attr(el, ATTR_STICKY_FOR, "0");
    host.set_attr(el, ATTR_STICKY_CLASS, "pinned");
    host.set_attr(el, ATTR_STICKY_WRAP, "");

    let options = StickyOptions::default()
        .with_margins(5, 7)
        .with_sticky_for(300)
        .with_sticky_class(Some("is-sticky"));
    let mut s = Sticky::new(&mut host, ".sticky", options);
    s.poll_ready(&mut host);

    let resolved = s.state(&el).unwrap().options().clone();
    assert_eq!(resolved.margin_top, 12);
    assert_eq!(resolved.margin_bottom, 7);
    assert_eq!(resolved.sticky_for, 300);
    assert_eq!(resolved.sticky_class.as_deref(), Some("pinned"));
    assert!(resolved.wrap);
    assert_eq!(resolved.wrap_with, "<span></span>");
}

#[test]
fn empty_class_override_falls_back() {
    let mut host = TestHost::new(Viewport::new(1200, 800));
    let el = host.add_sticky(BODY, Rect::new(100, 0, 300, 50));
    host.set_attr(el, ATTR_STICKY_CLASS, "");
    let resolved = ElementOptions::resolve(
        &host,
        &el,
        &StickyOptions::default().with_sticky_class(Some("is-sticky")),
    );
    assert_eq!(resolved.sticky_class.as_deref(), Some("is-sticky"));
    assert!(!resolved.wrap);
}

#[test]
fn parse_int_prefix_reads_leading_integer() {
    assert_eq!(parse_int_prefix("42"), Some(42));
    assert_eq!(parse_int_prefix("  -8px"), Some(-8));
    assert_eq!(parse_int_prefix("+3.5"), Some(3));
    assert_eq!(parse_int_prefix("px12"), None);
    assert_eq!(parse_int_prefix(""), None);
    assert_eq!(parse_int_prefix("-"), None);
    assert_eq!(parse_int_prefix("99999999999999999999999"), None);
}

#[test]
fn wrapper_holds_the_box_only_while_pinned() {
    let (mut host, mut s, el) = scenario(StickyOptions::default().with_wrap(true));
    let wrapper = *s.state(&el).unwrap().wrapper().unwrap();
    assert_eq!(host.style(wrapper, StyleProperty::Display), None);

    scroll_to(&mut s, &mut host, 150);
    assert_eq!(host.style(wrapper, StyleProperty::Display), Some(CssValue::Block));
    assert_eq!(host.style(wrapper, StyleProperty::Width), Some(CssValue::Px(300)));
    assert_eq!(host.style(wrapper, StyleProperty::Height), Some(CssValue::Px(50)));

    scroll_to(&mut s, &mut host, 0);
    assert_eq!(host.style(wrapper, StyleProperty::Display), None);
    assert_eq!(host.style(wrapper, StyleProperty::Height), None);
}

#[test]
fn wrapper_is_left_alone_once_wrapping_is_turned_off() {
    let mut host = TestHost::new(Viewport::new(1200, 800));
    let container = host.add_container(BODY, Rect::new(0, 0, 1200, 500));
    let el = host.add_sticky(container, Rect::new(100, 20, 300, 50));
    host.set_attr(el, ATTR_STICKY_WRAP, "");
    let mut s = Sticky::new(&mut host, ".sticky", StickyOptions::default());
    s.poll_ready(&mut host);
    let wrapper = *s.state(&el).unwrap().wrapper().unwrap();

    host.nodes[el as usize].attrs.remove(ATTR_STICKY_WRAP);
    s.render_element(&mut host, &el);
    assert!(!s.state(&el).unwrap().options().wrap);
    assert_eq!(s.state(&el).unwrap().wrapper(), Some(&wrapper));

    scroll_to(&mut s, &mut host, 150);
    assert!(s.state(&el).unwrap().is_pinned());
    assert_eq!(host.style(wrapper, StyleProperty::Display), None);
    assert_eq!(host.style(wrapper, StyleProperty::Width), None);
    assert_eq!(host.style(wrapper, StyleProperty::Height), None);
}

#[test]
fn activation_is_not_reevaluated_on_scroll() {
    let (mut host, mut s, el) = scenario(StickyOptions::default());
    scroll_to(&mut s, &mut host, 150);
    assert!(s.is_pinned(&el));

    // The element grows past its container; scrolling keeps using the cached geometry.
    host.nodes[el as usize].rect.height = 600;
    scroll_to(&mut s, &mut host, 200);
    assert!(s.is_active(&el));
    assert!(s.is_pinned(&el));
    assert_eq!(s.state(&el).unwrap().rect().height, 50);

    resize(&mut s, &mut host, Viewport::new(1200, 800));
    assert_eq!(s.phase(&el), Some(Phase::Inactive));
}

#[test]
fn update_remeasures_but_never_deactivates() {
    let (mut host, mut s, el) = scenario(StickyOptions::default());
    host.nodes[el as usize].rect.height = 80;
    s.update(&mut host);
    assert_eq!(s.state(&el).unwrap().rect().height, 80);

    host.nodes[el as usize].rect.height = 600;
    s.update(&mut host);
    assert!(s.is_active(&el));
}

#[test]
fn update_activates_elements_that_now_fit() {
    let mut host = TestHost::new(Viewport::new(1200, 800));
    let container = host.add_container(BODY, Rect::new(0, 0, 1200, 120));
    let el = host.add_sticky(container, Rect::new(100, 0, 300, 50));
    let mut s = Sticky::new(&mut host, ".sticky", StickyOptions::default());
    s.poll_ready(&mut host);
    assert!(!s.is_active(&el));

    host.nodes[container as usize].rect.height = 500;
    s.update(&mut host);
    assert!(s.is_active(&el));
}

#[test]
fn images_refresh_geometry_on_load() {
    let mut host = TestHost::new(Viewport::new(1200, 800));
    let container = host.add_container(BODY, Rect::new(0, 0, 1200, 500));
    let img = host.add(container, "img", Rect::new(100, 0, 0, 0));
    host.nodes[img as usize].classes.push("sticky".to_string());
    let mut s = Sticky::new(&mut host, ".sticky", StickyOptions::default());
    s.poll_ready(&mut host);
    assert_eq!(s.listener_count(), 5);

    host.nodes[img as usize].rect = Rect::new(100, 0, 200, 40);
    dispatch(&mut s, &mut host, EventTarget::Element(img), EventKind::Load);
    assert_eq!(s.state(&img).unwrap().rect(), Rect::new(100, 0, 200, 40));
}

#[test]
fn zero_width_is_remeasured_before_pinning() {
    let (mut host, mut s, el) = scenario(StickyOptions::default());
    host.nodes[el as usize].rect.width = 0;
    s.update(&mut host);
    assert_eq!(s.state(&el).unwrap().rect().width, 0);

    host.nodes[el as usize].rect.width = 250;
    scroll_to(&mut s, &mut host, 150);
    assert_eq!(host.style(el, StyleProperty::Width), Some(CssValue::Px(250)));
}

#[test]
fn unknown_listener_ids_are_ignored() {
    let (mut host, mut s, _) = scenario(StickyOptions::default());
    assert!(!s.handle_event(&mut host, ListenerId(9999)));
}

#[test]
fn css_values_render_as_css() {
    assert_eq!(CssValue::Px(-10).to_string(), "-10px");
    assert_eq!(CssValue::Fixed.to_string(), "fixed");
    assert_eq!(StyleProperty::Top.to_string(), "top");
}

#[cfg(feature = "serde")]
#[test]
fn options_deserialize_with_defaults() {
    let options: StickyOptions =
        serde_json::from_str(r#"{"marginTop": 10, "stickyClass": "is-sticky"}"#).unwrap();
    assert_eq!(options.margin_top, 10);
    assert_eq!(options.sticky_class.as_deref(), Some("is-sticky"));
    assert_eq!(options.wrap_with, "<span></span>");
    assert_eq!(options.sticky_container, "body");
}
