//! Hash map used by the key-index map.
//!
//! Keys are small `Copy` enums hashed on every lookup during layout, so the
//! Fx hasher is the default. Enable `std-hash` to fall back to SipHash.

#[cfg(feature = "std-hash")]
pub mod map {
    pub use std::collections::hash_map::Entry;
    pub use std::collections::HashMap;

    /// Creates an empty map sized for `capacity` entries.
    #[inline]
    pub fn with_capacity<K, V>(capacity: usize) -> HashMap<K, V> {
        HashMap::with_capacity(capacity)
    }
}

#[cfg(not(feature = "std-hash"))]
pub mod map {
    pub use rustc_hash::FxHashMap as HashMap;
    pub use std::collections::hash_map::Entry;

    /// Creates an empty map sized for `capacity` entries.
    #[inline]
    pub fn with_capacity<K, V>(capacity: usize) -> HashMap<K, V> {
        HashMap::with_capacity_and_hasher(capacity, Default::default())
    }
}
