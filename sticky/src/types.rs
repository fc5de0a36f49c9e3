use core::fmt;

/// Offset geometry of an element, as reported by the host layout engine.
///
/// `top`/`left` are relative to the offset parent (signed), `width`/`height` are the border box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub top: i32,
    pub left: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(top: i32, left: i32, width: u32, height: u32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Bottom edge (`top + height`), widened to avoid overflow.
    pub fn bottom(&self) -> i64 {
        self.top as i64 + self.height as i64
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Inline style properties the engine writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StyleProperty {
    Position,
    Display,
    Width,
    Height,
    Top,
    Left,
}

impl StyleProperty {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Display => "display",
            Self::Width => "width",
            Self::Height => "height",
            Self::Top => "top",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// A typed inline style value. Writing `None` instead resets the property to its default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CssValue {
    Fixed,
    Block,
    Px(i32),
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => f.write_str("fixed"),
            Self::Block => f.write_str("block"),
            Self::Px(v) => write!(f, "{v}px"),
        }
    }
}

/// Window/element events the engine subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Load,
    Scroll,
    Resize,
}

/// Where a listener is attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventTarget<E> {
    Window,
    Element(E),
}

/// An opaque subscription handle returned by [`crate::Host::listen`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(pub u64);

/// Per-element position in the sticky state machine.
///
/// `Unpinned`/`Pinned` are both sub-states of "active".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Inactive,
    Unpinned,
    Pinned,
}

impl Phase {
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Inactive)
    }
}
