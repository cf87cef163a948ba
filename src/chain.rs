//! Chain operations: singly linked buckets over a slotmap node arena.
//!
//! Nodes live in a `SlotMap` and link to their chain successor by slot key
//! instead of by owning pointer, so unlinking is a key splice and teardown is
//! one arena clear. This layer knows nothing about hashing or buckets; the
//! caller threads chain heads through it.

use slotmap::{DefaultKey, SlotMap};

/// Opaque link to a chain node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Link(DefaultKey);

#[derive(Debug)]
struct Node<V> {
    key: Box<str>,
    value: V,
    next: Option<Link>,
}

/// Arena of chain nodes. Owns every node and its duplicated key string.
pub struct ChainStore<V> {
    nodes: SlotMap<DefaultKey, Node<V>>,
}

impl<V> ChainStore<V> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    /// Live nodes across all chains.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Duplicate `key` into owned storage, store `value`, and link the new
    /// node ahead of `head`. Returns the new chain head.
    pub fn push_front(&mut self, head: Option<Link>, key: &str, value: V) -> Link {
        Link(self.nodes.insert(Node {
            key: key.into(),
            value,
            next: head,
        }))
    }

    /// Walk the chain from `head` for a byte-equal key; first match wins.
    pub fn find(&self, head: Option<Link>, key: &str) -> Option<Link> {
        let mut cur = head;
        while let Some(link) = cur {
            let node = self.nodes.get(link.0)?;
            if &*node.key == key {
                return Some(link);
            }
            cur = node.next;
        }
        None
    }

    pub fn value(&self, link: Link) -> Option<&V> {
        self.nodes.get(link.0).map(|n| &n.value)
    }

    pub fn value_mut(&mut self, link: Link) -> Option<&mut V> {
        self.nodes.get_mut(link.0).map(|n| &mut n.value)
    }

    /// Swap the stored value in place, returning the previous one. The key
    /// and the node's chain position are untouched. `None` for a dead link.
    pub fn replace(&mut self, link: Link, value: V) -> Option<V> {
        self.nodes
            .get_mut(link.0)
            .map(|n| core::mem::replace(&mut n.value, value))
    }

    /// Unlink the node with a byte-equal key, tracking the previous node so
    /// either the chain head or the predecessor's link gets spliced. Returns
    /// the chain's new head and the removed value; `None` when no node in the
    /// chain matches.
    pub fn unlink(&mut self, head: Option<Link>, key: &str) -> Option<(Option<Link>, V)> {
        let mut prev: Option<Link> = None;
        let mut cur = head;
        while let Some(link) = cur {
            let (matched, next) = {
                let node = self.nodes.get(link.0)?;
                (&*node.key == key, node.next)
            };
            if matched {
                let node = self.nodes.remove(link.0)?;
                return match prev {
                    // Head of the chain: the successor becomes the new head.
                    None => Some((node.next, node.value)),
                    Some(p) => {
                        if let Some(p_node) = self.nodes.get_mut(p.0) {
                            p_node.next = node.next;
                        }
                        Some((head, node.value))
                    }
                };
            }
            prev = cur;
            cur = next;
        }
        None
    }

    /// Keys of one chain, head first.
    pub fn keys(&self, head: Option<Link>) -> ChainKeys<'_, V> {
        ChainKeys {
            store: self,
            cur: head,
        }
    }

    /// Drop every node and its owned key. Stored values are dropped with
    /// their nodes; for reference values that is a no-op on the referent.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            it: self.nodes.iter(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            it: self.nodes.iter_mut(),
        }
    }
}

impl<V> Default for ChainStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over one chain's keys, head first.
pub struct ChainKeys<'a, V> {
    store: &'a ChainStore<V>,
    cur: Option<Link>,
}

impl<'a, V> Iterator for ChainKeys<'a, V> {
    type Item = &'a str;
    fn next(&mut self) -> Option<Self::Item> {
        let link = self.cur?;
        let node = self.store.nodes.get(link.0)?;
        self.cur = node.next;
        Some(&*node.key)
    }
}

/// Iterator over all nodes in arena order.
pub struct Iter<'a, V> {
    it: slotmap::basic::Iter<'a, DefaultKey, Node<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(_, n)| (&*n.key, &n.value))
    }
}

/// Mutable iterator over all nodes in arena order.
pub struct IterMut<'a, V> {
    it: slotmap::basic::IterMut<'a, DefaultKey, Node<V>>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(_, n)| (&*n.key, &mut n.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_keys<V>(s: &ChainStore<V>, head: Option<Link>) -> Vec<String> {
        s.keys(head).map(str::to_owned).collect()
    }

    /// Invariant: `push_front` makes the newest node the head; earlier nodes
    /// follow in reverse insertion order.
    #[test]
    fn push_front_orders_newest_first() {
        let mut s: ChainStore<i32> = ChainStore::new();
        let h1 = s.push_front(None, "a", 1);
        let h2 = s.push_front(Some(h1), "b", 2);
        let h3 = s.push_front(Some(h2), "c", 3);
        assert_eq!(chain_keys(&s, Some(h3)), ["c", "b", "a"]);
        assert_eq!(s.len(), 3);
    }

    /// Invariant: `find` resolves only keys linked from the given head, not
    /// nodes belonging to other chains in the same arena.
    #[test]
    fn find_is_scoped_to_one_chain() {
        let mut s: ChainStore<i32> = ChainStore::new();
        let a = s.push_front(None, "a", 1);
        let other = s.push_front(None, "b", 2);

        assert_eq!(s.find(Some(a), "a"), Some(a));
        assert_eq!(s.find(Some(a), "b"), None);
        assert_eq!(s.find(Some(other), "b"), Some(other));
        assert_eq!(s.find(None, "a"), None);
    }

    /// Invariant: `replace` swaps the value and hands back the old one
    /// without disturbing the chain.
    #[test]
    fn replace_keeps_position() {
        let mut s: ChainStore<i32> = ChainStore::new();
        let h1 = s.push_front(None, "a", 1);
        let h2 = s.push_front(Some(h1), "b", 2);

        assert_eq!(s.replace(h1, 10), Some(1));
        assert_eq!(s.value(h1), Some(&10));
        assert_eq!(chain_keys(&s, Some(h2)), ["b", "a"]);
        assert_eq!(s.len(), 2);
    }

    /// Invariant: Unlinking the head returns the successor as the new head;
    /// unlinking an interior or tail node splices the predecessor and leaves
    /// the head as-is.
    #[test]
    fn unlink_splices_head_middle_and_tail() {
        let mut s: ChainStore<i32> = ChainStore::new();
        let h1 = s.push_front(None, "a", 1);
        let h2 = s.push_front(Some(h1), "b", 2);
        let h3 = s.push_front(Some(h2), "c", 3);

        // Middle: head untouched, "b" spliced out.
        let (head, v) = s.unlink(Some(h3), "b").unwrap();
        assert_eq!(v, 2);
        assert_eq!(head, Some(h3));
        assert_eq!(chain_keys(&s, head), ["c", "a"]);

        // Head: successor promoted.
        let (head, v) = s.unlink(head, "c").unwrap();
        assert_eq!(v, 3);
        assert_eq!(head, Some(h1));
        assert_eq!(chain_keys(&s, head), ["a"]);

        // Tail (also head of the remaining chain): chain empties.
        let (head, v) = s.unlink(head, "a").unwrap();
        assert_eq!(v, 1);
        assert_eq!(head, None);
        assert!(s.is_empty());
    }

    /// Invariant: Unlinking an absent key leaves the chain untouched.
    #[test]
    fn unlink_absent_is_noop() {
        let mut s: ChainStore<i32> = ChainStore::new();
        let h1 = s.push_front(None, "a", 1);
        assert!(s.unlink(Some(h1), "missing").is_none());
        assert_eq!(chain_keys(&s, Some(h1)), ["a"]);
        assert_eq!(s.len(), 1);
    }

    /// Invariant: `clear` drops every node; old links no longer resolve.
    #[test]
    fn clear_invalidates_links() {
        let mut s: ChainStore<i32> = ChainStore::new();
        let h1 = s.push_front(None, "a", 1);
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.value(h1), None);
        assert_eq!(s.find(Some(h1), "a"), None);
    }
}
