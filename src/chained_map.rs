//! ChainedMap: fixed-capacity bucket array routing to the chain layer.

use crate::chain::{ChainStore, Iter, IterMut, Link};
use crate::hash::bucket_index;

/// Constructor failure.
#[derive(Debug, PartialEq, Eq)]
pub enum CreateError {
    /// Bucket count must be at least one.
    ZeroCapacity,
    /// The bucket array could not be allocated.
    AllocFailed,
}

/// A string-keyed hash map with a fixed number of buckets and separate
/// chaining for collisions.
///
/// Every operation routes through `djb2(key) % capacity` bucket selection and
/// a linear scan of that bucket's chain, so costs are O(chain length). The
/// bucket count never changes after construction; chains simply grow.
///
/// The map owns each entry and its duplicated key string. Values are opaque:
/// the map never inspects a `V`, and with `V = &T` it stores non-owning
/// references whose referents outlive it by the borrow checker's rules.
pub struct ChainedMap<V> {
    pub(crate) buckets: Vec<Option<Link>>,
    pub(crate) store: ChainStore<V>,
}

impl<V> ChainedMap<V> {
    /// Create a map with `capacity` empty buckets.
    ///
    /// `capacity` is fixed for the map's lifetime; there is no growth or
    /// rehashing. Zero is rejected rather than dividing by zero on the first
    /// lookup.
    pub fn with_capacity(capacity: usize) -> Result<Self, CreateError> {
        if capacity == 0 {
            return Err(CreateError::ZeroCapacity);
        }
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(capacity)
            .map_err(|_| CreateError::AllocFailed)?;
        buckets.resize_with(capacity, || None);
        Ok(Self {
            buckets,
            store: ChainStore::new(),
        })
    }

    /// Number of buckets, as chosen at construction.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn bucket(&self, key: &str) -> usize {
        bucket_index(key, self.buckets.len())
    }

    /// Insert `key` -> `value`.
    ///
    /// An existing key has its value swapped in place, leaving the key and
    /// its chain position untouched, and the previous value is returned. A
    /// new key is duplicated into owned storage and linked as its bucket's
    /// chain head, so the newest entry in a bucket is found first. Exactly
    /// one bucket's chain is touched.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        let idx = self.bucket(key);
        let head = self.buckets[idx];
        if let Some(link) = self.store.find(head, key) {
            return self.store.replace(link, value);
        }
        self.buckets[idx] = Some(self.store.push_front(head, key, value));
        None
    }

    /// Look up `key`, returning the stored value on a byte-equal match.
    pub fn get(&self, key: &str) -> Option<&V> {
        let head = self.buckets[self.bucket(key)];
        let link = self.store.find(head, key)?;
        self.store.value(link)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let head = self.buckets[self.bucket(key)];
        let link = self.store.find(head, key)?;
        self.store.value_mut(link)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        let head = self.buckets[self.bucket(key)];
        self.store.find(head, key).is_some()
    }

    /// Remove `key`, returning its value. The entry's node and owned key are
    /// released; the map is untouched when the key is absent.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let idx = self.bucket(key);
        let (head, value) = self.store.unlink(self.buckets[idx], key)?;
        self.buckets[idx] = head;
        Some(value)
    }

    /// Drop every entry and reset all buckets to empty. Capacity is
    /// unchanged and the map remains usable.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            *bucket = None;
        }
        self.store.clear();
    }

    /// Diagnostic dump: the non-empty buckets in index order, each with its
    /// keys in chain order, head first. No contract beyond reflecting the
    /// current state.
    pub fn describe(&self) -> Vec<(usize, Vec<&str>)> {
        let mut out = Vec::new();
        for (idx, &head) in self.buckets.iter().enumerate() {
            if head.is_some() {
                out.push((idx, self.store.keys(head).collect()));
            }
        }
        out
    }

    /// Iterate entries as `(&str, &V)`. Order is implementation-defined.
    pub fn iter(&self) -> Iter<'_, V> {
        self.store.iter()
    }

    /// Iterate entries as `(&str, &mut V)`. Order is implementation-defined.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        self.store.iter_mut()
    }
}
