//! Single-slot cache for derived values.

/// Caches the value derived from the most recent key.
///
/// The value is rebuilt only when the key passed in differs (by `PartialEq`) from the key it
/// was last built from. Rebuilding is always equivalent to reusing; the cache only saves work.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<K: PartialEq + Clone, V> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, building it with `build` when the key changed.
    pub fn get_or_insert_with(&mut self, key: &K, build: impl FnOnce(&K) -> V) -> &V {
        if self.slot.as_ref().is_some_and(|(cached, _)| cached != key) {
            self.slot = None;
        }
        let (_, value) = self.slot.get_or_insert_with(|| (key.clone(), build(key)));
        value
    }

    pub fn get(&self) -> Option<&V> {
        self.slot.as_ref().map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuilds_only_on_key_change() {
        let mut memo: Memo<u32, String> = Memo::new();
        let mut builds = 0;

        for key in [1, 1, 2, 2, 1] {
            memo.get_or_insert_with(&key, |k| {
                builds += 1;
                k.to_string()
            });
        }

        assert_eq!(builds, 3);
        assert_eq!(memo.get().map(String::as_str), Some("1"));
    }

    #[test]
    fn first_call_builds() {
        let mut memo: Memo<&str, usize> = Memo::new();
        assert!(memo.get().is_none());
        assert_eq!(*memo.get_or_insert_with(&"abc", |k| k.len()), 3);
        assert_eq!(memo.get(), Some(&3));
    }
}
