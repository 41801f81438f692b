//! Recency List Module
//!
//! Index-based doubly-linked list ordering resident keys from least recently
//! used (head) to most recently used (tail).
//!
//! Nodes live in a `Vec` arena and link to each other by index. Removed nodes
//! go on a free-list and are reused by later inserts, so every operation is
//! O(1) and the arena never grows past the peak number of resident keys.

// == Slot Id ==
/// Handle to a key's position in a [`RecencyList`].
///
/// Returned by [`RecencyList::push_back`] and valid until the key is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

#[derive(Debug)]
struct Node<K> {
    /// `None` while the node sits on the free-list
    key: Option<K>,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Recency List ==
/// Tracks access order for LRU eviction.
///
/// - Head = least recently used (next to evict)
/// - Tail = most recently used
#[derive(Debug)]
pub struct RecencyList<K> {
    nodes: Vec<Node<K>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<K> RecencyList<K> {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` keys before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Back ==
    /// Appends a key as most recently used and returns its slot.
    pub fn push_back(&mut self, key: K) -> SlotId {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx].key = Some(key);
                idx
            }
            None => {
                self.nodes.push(Node {
                    key: Some(key),
                    prev: None,
                    next: None,
                });
                self.nodes.len() - 1
            }
        };

        self.link_back(idx);
        self.len += 1;
        SlotId(idx)
    }

    // == Move To Back ==
    /// Marks the key in `slot` as most recently used.
    ///
    /// Stale slots are ignored.
    pub fn move_to_back(&mut self, slot: SlotId) {
        let SlotId(idx) = slot;
        if !self.is_occupied(idx) || self.tail == Some(idx) {
            return;
        }
        self.unlink(idx);
        self.link_back(idx);
    }

    // == Remove ==
    /// Removes the key in `slot`, returning it.
    ///
    /// Returns None if the slot is stale.
    pub fn remove(&mut self, slot: SlotId) -> Option<K> {
        let SlotId(idx) = slot;
        if !self.is_occupied(idx) {
            return None;
        }

        self.unlink(idx);
        let key = self.nodes[idx].key.take();
        self.free.push(idx);
        self.len -= 1;
        key
    }

    // == Pop Front ==
    /// Removes and returns the least recently used key.
    ///
    /// Returns None if the list is empty.
    pub fn pop_front(&mut self) -> Option<K> {
        let head = self.head?;
        self.remove(SlotId(head))
    }

    // == Clear ==
    /// Drops every key and releases the arena.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iter ==
    /// Iterates keys from least to most recently used.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn is_occupied(&self, idx: usize) -> bool {
        self.nodes.get(idx).is_some_and(|node| node.key.is_some())
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }

        self.nodes[idx].prev = None;
        self.nodes[idx].next = None;
    }

    fn link_back(&mut self, idx: usize) {
        self.nodes[idx].prev = self.tail;
        self.nodes[idx].next = None;

        match self.tail {
            Some(t) => self.nodes[t].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }
}

impl<K> Default for RecencyList<K> {
    fn default() -> Self {
        Self::new()
    }
}

// == Iterator ==
/// Iterator over a [`RecencyList`], least recently used first.
pub struct Iter<'a, K> {
    list: &'a RecencyList<K>,
    cursor: Option<usize>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = &self.list.nodes[idx];
        self.cursor = node.next;
        node.key.as_ref()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &RecencyList<&'static str>) -> Vec<&'static str> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_list_new() {
        let list: RecencyList<String> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.iter().next().is_none());
    }

    #[test]
    fn test_push_back_orders_oldest_first() {
        let mut list = RecencyList::new();

        list.push_back("key1");
        list.push_back("key2");
        list.push_back("key3");

        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().next(), Some(&"key1"));
        assert_eq!(keys(&list), vec!["key1", "key2", "key3"]);
    }

    #[test]
    fn test_move_to_back() {
        let mut list = RecencyList::new();

        let key1 = list.push_back("key1");
        list.push_back("key2");
        list.push_back("key3");

        list.move_to_back(key1);

        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().next(), Some(&"key2"));
        assert_eq!(keys(&list), vec!["key2", "key3", "key1"]);
    }

    #[test]
    fn test_move_tail_to_back_is_noop() {
        let mut list = RecencyList::new();

        list.push_back("a");
        let b = list.push_back("b");
        list.move_to_back(b);

        assert_eq!(keys(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_pop_front() {
        let mut list = RecencyList::new();

        list.push_back("key1");
        list.push_back("key2");
        list.push_back("key3");

        assert_eq!(list.pop_front(), Some("key1"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.pop_front(), Some("key2"));
        assert_eq!(list.pop_front(), Some("key3"));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_middle() {
        let mut list = RecencyList::new();

        list.push_back("key1");
        let key2 = list.push_back("key2");
        list.push_back("key3");

        assert_eq!(list.remove(key2), Some("key2"));
        assert_eq!(list.len(), 2);
        assert_eq!(keys(&list), vec!["key1", "key3"]);
    }

    #[test]
    fn test_remove_stale_slot() {
        let mut list = RecencyList::new();

        let key1 = list.push_back("key1");
        list.push_back("key2");

        assert_eq!(list.remove(key1), Some("key1"));
        // Second removal through the same handle does nothing
        assert_eq!(list.remove(key1), None);
        list.move_to_back(key1);

        assert_eq!(list.len(), 1);
        assert_eq!(keys(&list), vec!["key2"]);
    }

    #[test]
    fn test_free_slots_are_reused() {
        let mut list = RecencyList::new();

        let a = list.push_back("a");
        list.push_back("b");
        list.remove(a);
        let c = list.push_back("c");

        assert_eq!(c, a);
        assert_eq!(list.nodes.len(), 2);
        assert_eq!(keys(&list), vec!["b", "c"]);
    }

    #[test]
    fn test_order_after_multiple_touches() {
        let mut list = RecencyList::new();

        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        list.move_to_back(a);
        list.move_to_back(c);
        list.move_to_back(b);

        // push a, b, c then touch a, c, b leaves [a, c, b]
        assert_eq!(list.pop_front(), Some("a"));
        assert_eq!(list.pop_front(), Some("c"));
        assert_eq!(list.pop_front(), Some("b"));
    }

    #[test]
    fn test_clear() {
        let mut list = RecencyList::new();

        list.push_back("a");
        list.push_back("b");
        list.clear();

        assert!(list.is_empty());
        assert!(list.iter().next().is_none());
        assert_eq!(list.iter().count(), 0);

        list.push_back("c");
        assert_eq!(keys(&list), vec!["c"]);
    }
}
