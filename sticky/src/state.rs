use crate::{ElementOptions, ListenerId, Phase, Rect};

/// Per-element state owned by [`crate::Sticky`], keyed by element identity.
#[derive(Clone, Debug)]
pub struct ElementState<E> {
    pub(crate) options: ElementOptions,
    pub(crate) active: bool,
    pub(crate) pinned: bool,
    pub(crate) top: Option<i32>,
    pub(crate) container: E,
    pub(crate) wrapper: Option<E>,
    /// Last known geometry; refreshed on registration, resize, image load and `update`.
    pub(crate) rect: Rect,
    pub(crate) container_rect: Rect,
    pub(crate) tracked: bool,
    pub(crate) resize_listener: Option<ListenerId>,
    pub(crate) scroll_listener: Option<ListenerId>,
    pub(crate) load_listener: Option<ListenerId>,
}

impl<E> ElementState<E> {
    pub fn options(&self) -> &ElementOptions {
        &self.options
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn phase(&self) -> Phase {
        match (self.active, self.pinned) {
            (false, _) => Phase::Inactive,
            (true, false) => Phase::Unpinned,
            (true, true) => Phase::Pinned,
        }
    }

    /// The `top` offset applied while pinned (`None` when unpinned).
    pub fn top(&self) -> Option<i32> {
        self.top
    }

    pub fn container(&self) -> &E {
        &self.container
    }

    /// The placeholder the element was moved into, if it was wrapped.
    pub fn wrapper(&self) -> Option<&E> {
        self.wrapper.as_ref()
    }

    /// The wrapper, while the current options still ask for wrapping.
    pub(crate) fn sized_wrapper(&self) -> Option<&E> {
        self.wrapper.as_ref().filter(|_| self.options.wrap)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn container_rect(&self) -> Rect {
        self.container_rect
    }

    pub fn snapshot(&self) -> ElementSnapshot {
        ElementSnapshot {
            phase: self.phase(),
            top: self.top,
            rect: self.rect,
            container_rect: self.container_rect,
        }
    }

    pub(crate) fn listeners(&self) -> impl Iterator<Item = ListenerId> + '_ {
        [self.resize_listener, self.scroll_listener, self.load_listener]
            .into_iter()
            .flatten()
    }
}

/// A lightweight, serializable snapshot of one element's sticky state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementSnapshot {
    pub phase: Phase,
    pub top: Option<i32>,
    pub rect: Rect,
    pub container_rect: Rect,
}
