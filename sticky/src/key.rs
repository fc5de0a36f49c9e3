#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type ElementMap<E, V> = HashMap<E, V>;
#[cfg(not(feature = "std"))]
pub(crate) type ElementMap<E, V> = BTreeMap<E, V>;

/// Identity of a host element, used to key per-element state outside of the host object.
#[cfg(feature = "std")]
pub trait ElementKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<E: core::hash::Hash + Eq + Clone> ElementKey for E {}

/// Identity of a host element, used to key per-element state outside of the host object.
#[cfg(not(feature = "std"))]
pub trait ElementKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<E: Ord + Clone> ElementKey for E {}
