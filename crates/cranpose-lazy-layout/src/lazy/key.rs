//! Item keys for lazy layouts.

/// Stable identity of a lazy layout item.
///
/// Separates user-provided keys from default index-based keys to prevent collisions.
/// A default key is produced by [`get_default_lazy_layout_key`] whenever an interval
/// has no key factory; because it lives in its own variant it can never alias an
/// authored key, even when the numeric values match.
///
/// # JC Reference
/// - `LazyLayoutIntervalContent.getKey()` returns `content.key?.invoke(localIndex) ?: getDefaultLazyLayoutKey(index)`
/// - `Lazy.android.kt` defines `DefaultLazyKey(index)` as a wrapper data class
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LazyLayoutKey {
    /// User-provided key (from `scope.item(Some(k), ...)` or `scope.items(n, Some(|i| ...), ...)`).
    User(u64),
    /// Default key based on global index.
    Index(usize),
}

impl LazyLayoutKey {
    /// Returns true if this is a user-provided key.
    #[inline]
    pub fn is_user_key(self) -> bool {
        matches!(self, LazyLayoutKey::User(_))
    }

    /// Returns true if this is a default index-based key.
    #[inline]
    pub fn is_index_key(self) -> bool {
        matches!(self, LazyLayoutKey::Index(_))
    }
}

impl From<u64> for LazyLayoutKey {
    fn from(key: u64) -> Self {
        LazyLayoutKey::User(key)
    }
}

/// Returns the key used for the item at global `index` when its interval
/// provides no key factory.
///
/// Pure and deterministic: the same index always yields the same key.
#[inline]
pub fn get_default_lazy_layout_key(index: usize) -> LazyLayoutKey {
    LazyLayoutKey::Index(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_key_is_stable_for_index() {
        assert_eq!(get_default_lazy_layout_key(7), get_default_lazy_layout_key(7));
        assert_ne!(get_default_lazy_layout_key(7), get_default_lazy_layout_key(8));
    }

    #[test]
    fn default_key_never_equals_user_key_with_same_value() {
        let default = get_default_lazy_layout_key(42);
        let user = LazyLayoutKey::from(42u64);
        assert_ne!(default, user);
        assert!(default.is_index_key());
        assert!(user.is_user_key());
    }
}
