#[cfg(feature = "std")]
pub trait ElementKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> ElementKey for K {}

#[cfg(not(feature = "std"))]
pub trait ElementKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> ElementKey for K {}
