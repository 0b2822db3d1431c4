use std::cmp::Ordering;

/// Slot index of a node inside the list's arena.
pub(crate) type NodeId = usize;

/// The header always lives in slot 0.
pub(crate) const HEAD: NodeId = 0;

/// Forward link at one level; `None` is the end of that level.
pub(crate) type Link = Option<NodeId>;

/// What a node carries: nothing for the header, a key/value pair otherwise.
///
/// The header sits outside the key domain and orders before every key,
/// so `0` is a perfectly ordinary key.
#[derive(Debug)]
pub(crate) enum NodeValue<V> {
    Head,
    Entry { key: u32, value: V },
}

impl<V> NodeValue<V> {
    #[inline]
    pub(crate) fn key(&self) -> Option<u32> {
        match self {
            NodeValue::Head => None,
            NodeValue::Entry { key, .. } => Some(*key),
        }
    }

    #[inline]
    pub(crate) fn value(&self) -> Option<&V> {
        match self {
            NodeValue::Head => None,
            NodeValue::Entry { value, .. } => Some(value),
        }
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> Option<&mut V> {
        match self {
            NodeValue::Head => None,
            NodeValue::Entry { value, .. } => Some(value),
        }
    }
}

impl<V> PartialEq<u32> for NodeValue<V> {
    #[inline]
    fn eq(&self, other: &u32) -> bool {
        match self {
            NodeValue::Entry { key, .. } => key == other,
            NodeValue::Head => false,
        }
    }
}

impl<V> PartialOrd<u32> for NodeValue<V> {
    #[inline]
    fn partial_cmp(&self, other: &u32) -> Option<Ordering> {
        match self {
            NodeValue::Head => Some(Ordering::Less),
            NodeValue::Entry { key, .. } => key.partial_cmp(other),
        }
    }
}

pub(crate) struct Node<V> {
    pub(crate) value: NodeValue<V>,
    /// One link per level this node takes part in; `forward[0]` is the densest level.
    pub(crate) forward: Vec<Link>,
}

impl<V> Node<V> {
    /// Header with `level_ceiling` empty links.
    pub(crate) fn head(level_ceiling: usize) -> Self {
        Node {
            value: NodeValue::Head,
            forward: vec![None; level_ceiling],
        }
    }

    /// Entries size their link array to their own level, which never changes.
    pub(crate) fn entry(key: u32, value: V, level: usize) -> Self {
        Node {
            value: NodeValue::Entry { key, value },
            forward: vec![None; level],
        }
    }

    /// Number of levels this node participates in.
    #[inline]
    pub(crate) fn level(&self) -> usize {
        self.forward.len()
    }

    #[inline]
    pub(crate) fn key(&self) -> Option<u32> {
        self.value.key()
    }
}

/// Resolves a live link. Links never point at vacant slots.
#[inline]
pub(crate) fn slot<V>(nodes: &[Option<Node<V>>], id: NodeId) -> &Node<V> {
    match nodes.get(id) {
        Some(Some(node)) => node,
        _ => unreachable!("link to vacant slot {}", id),
    }
}

#[inline]
pub(crate) fn slot_mut<V>(nodes: &mut [Option<Node<V>>], id: NodeId) -> &mut Node<V> {
    match nodes.get_mut(id) {
        Some(Some(node)) => node,
        _ => unreachable!("link to vacant slot {}", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_orders_before_every_key() {
        let head: NodeValue<()> = NodeValue::Head;
        assert!(head < 0u32);
        assert!(head < u32::MAX);
        assert!(head != 0u32);
    }

    #[test]
    fn test_entry_compares_by_key() {
        let entry = NodeValue::Entry { key: 0, value: "zero" };
        assert!(entry == 0u32);
        assert!(entry < 1u32);
        assert!(!(entry < 0u32));
        assert_eq!(entry.key(), Some(0));
    }

    #[test]
    fn test_link_arrays() {
        let head: Node<u8> = Node::head(15);
        assert_eq!(head.level(), 15);
        assert_eq!(head.key(), None);

        let entry = Node::entry(7, 70u8, 3);
        assert_eq!(entry.level(), 3);
        assert!(entry.forward.iter().all(Option::is_none));
    }
}
