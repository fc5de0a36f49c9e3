use alloc::string::{String, ToString};

use crate::Host;

pub const ATTR_MARGIN_TOP: &str = "data-margin-top";
pub const ATTR_MARGIN_BOTTOM: &str = "data-margin-bottom";
pub const ATTR_STICKY_FOR: &str = "data-sticky-for";
pub const ATTR_STICKY_CLASS: &str = "data-sticky-class";
pub const ATTR_STICKY_WRAP: &str = "data-sticky-wrap";
pub const ATTR_STICKY_WRAP_WITH: &str = "data-sticky-wrap-with";
/// Marks an ancestor as the boundary a sticky element must not leave.
pub const ATTR_STICKY_CONTAINER: &str = "data-sticky-container";

/// Configuration for [`crate::Sticky`].
///
/// Every field can be overridden per element through the matching `data-*` attribute
/// (see [`ElementOptions::resolve`]).
///
/// With `feature = "serde"`, this type (de)serializes with camelCase field names and falls back
/// to the defaults for missing fields, so `{"marginTop": 10}` is a complete configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct StickyOptions {
    /// Wraps each element in a placeholder that keeps its box in the layout flow while pinned.
    pub wrap: bool,
    /// Markup of the placeholder inserted before the element when wrapping.
    pub wrap_with: String,
    /// Distance from the viewport top while pinned.
    pub margin_top: i32,
    /// Distance kept from the container bottom edge.
    pub margin_bottom: i32,
    /// Viewport width (px) at or below which stickiness is disabled.
    pub sticky_for: u32,
    /// Class toggled on while pinned.
    pub sticky_class: Option<String>,
    /// Kept for configuration parity; containers are resolved through
    /// [`ATTR_STICKY_CONTAINER`] and the document body.
    pub sticky_container: String,
}

impl Default for StickyOptions {
    fn default() -> Self {
        Self {
            wrap: false,
            wrap_with: "<span></span>".to_string(),
            margin_top: 0,
            margin_bottom: 0,
            sticky_for: 0,
            sticky_class: None,
            sticky_container: "body".to_string(),
        }
    }
}

impl StickyOptions {
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_wrap_with(mut self, wrap_with: impl Into<String>) -> Self {
        self.wrap_with = wrap_with.into();
        self
    }

    pub fn with_margin_top(mut self, margin_top: i32) -> Self {
        self.margin_top = margin_top;
        self
    }

    pub fn with_margin_bottom(mut self, margin_bottom: i32) -> Self {
        self.margin_bottom = margin_bottom;
        self
    }

    pub fn with_margins(mut self, margin_top: i32, margin_bottom: i32) -> Self {
        self.margin_top = margin_top;
        self.margin_bottom = margin_bottom;
        self
    }

    pub fn with_sticky_for(mut self, sticky_for: u32) -> Self {
        self.sticky_for = sticky_for;
        self
    }

    pub fn with_sticky_class(mut self, sticky_class: Option<impl Into<String>>) -> Self {
        self.sticky_class = sticky_class.map(Into::into);
        self
    }

    pub fn with_sticky_container(mut self, sticky_container: impl Into<String>) -> Self {
        self.sticky_container = sticky_container.into();
        self
    }
}

/// Options for a single element after applying its `data-*` overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementOptions {
    pub margin_top: i32,
    pub margin_bottom: i32,
    pub sticky_for: u32,
    pub sticky_class: Option<String>,
    pub wrap: bool,
    pub wrap_with: String,
}

impl ElementOptions {
    /// Resolves the options for `el`: attributes win over `defaults`.
    ///
    /// Numeric attributes that don't start with an integer, or that parse to zero, fall back to
    /// the configured default. An empty class name falls back as well.
    pub fn resolve<H: Host + ?Sized>(host: &H, el: &H::Element, defaults: &StickyOptions) -> Self {
        let margin_top = int_override(host, el, ATTR_MARGIN_TOP)
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or(defaults.margin_top);
        let margin_bottom = int_override(host, el, ATTR_MARGIN_BOTTOM)
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or(defaults.margin_bottom);
        let sticky_for = int_override(host, el, ATTR_STICKY_FOR)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(defaults.sticky_for);
        let sticky_class = host
            .attribute(el, ATTR_STICKY_CLASS)
            .filter(|c| !c.is_empty())
            .or_else(|| defaults.sticky_class.clone());
        let wrap = host.has_attribute(el, ATTR_STICKY_WRAP) || defaults.wrap;
        let wrap_with = host
            .attribute(el, ATTR_STICKY_WRAP_WITH)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| defaults.wrap_with.clone());

        Self {
            margin_top,
            margin_bottom,
            sticky_for,
            sticky_class,
            wrap,
            wrap_with,
        }
    }
}

fn int_override<H: Host + ?Sized>(host: &H, el: &H::Element, name: &str) -> Option<i64> {
    let raw = host.attribute(el, name)?;
    let parsed = parse_int_prefix(&raw);
    if parsed.is_none() {
        swarn!(attribute = name, value = %raw, "ignoring malformed numeric override");
    }
    parsed.filter(|&v| v != 0)
}

/// Parses the leading integer of `s`: optional whitespace, optional sign, then digits.
/// Trailing garbage is ignored (`"12px"` is `12`).
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let mut value = 0i64;
    for b in digits[..end].bytes() {
        value = value.checked_mul(10)?.checked_add((b - b'0') as i64)?;
    }
    Some(if negative { -value } else { value })
}
