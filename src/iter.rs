use crate::node::{slot, Node, NodeId};

/// Left-biased descent towards `key`.
///
/// Starting at the header on the top active level, yields `(level, node)` for
/// every level down to 0, where `node` is the rightmost node on that level
/// whose key is strictly less than `key`. That is exactly the node whose
/// forward link at `level` must be patched to insert or unlink `key`.
pub(crate) struct LeftBiasIter<'a, V> {
    nodes: &'a [Option<Node<V>>],
    curr_node: NodeId,
    level: usize,
    key: u32,
}

impl<'a, V> LeftBiasIter<'a, V> {
    pub(crate) fn new(nodes: &'a [Option<Node<V>>], start: NodeId, levels: usize, key: u32) -> Self {
        Self {
            nodes,
            curr_node: start,
            level: levels,
            key,
        }
    }
}

impl<'a, V> Iterator for LeftBiasIter<'a, V> {
    type Item = (usize, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        if self.level == 0 {
            return None;
        }
        self.level -= 1;
        // Advance while the node to our right is still smaller than `key`.
        while let Some(right) = slot(self.nodes, self.curr_node).forward[self.level] {
            if slot(self.nodes, right).value < self.key {
                self.curr_node = right;
            } else {
                break;
            }
        }
        Some((self.level, self.curr_node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.level, Some(self.level))
    }
}

impl<'a, V> ExactSizeIterator for LeftBiasIter<'a, V> {}

#[cfg(test)]
mod tests {
    use super::LeftBiasIter;
    use crate::node::{Node, HEAD};

    // head -> 10 -> 20 -> 30 on level 0, head -> 20 on level 1.
    fn fixture() -> Vec<Option<Node<u32>>> {
        let mut head = Node::head(4);
        let mut ten = Node::entry(10, 100, 1);
        let mut twenty = Node::entry(20, 200, 2);
        let thirty = Node::entry(30, 300, 1);
        head.forward[0] = Some(1);
        head.forward[1] = Some(2);
        ten.forward[0] = Some(2);
        twenty.forward[0] = Some(3);
        vec![Some(head), Some(ten), Some(twenty), Some(thirty)]
    }

    #[test]
    fn test_predecessors_per_level() {
        let nodes = fixture();
        let path: Vec<_> = LeftBiasIter::new(&nodes, HEAD, 2, 25).collect();
        assert_eq!(path, vec![(1, 2), (0, 2)]);

        let path: Vec<_> = LeftBiasIter::new(&nodes, HEAD, 2, 20).collect();
        assert_eq!(path, vec![(1, HEAD), (0, 1)]);
    }

    #[test]
    fn test_key_smaller_than_everything() {
        let nodes = fixture();
        let path: Vec<_> = LeftBiasIter::new(&nodes, HEAD, 2, 0).collect();
        assert_eq!(path, vec![(1, HEAD), (0, HEAD)]);
    }

    #[test]
    fn test_key_past_the_end() {
        let nodes = fixture();
        let path: Vec<_> = LeftBiasIter::new(&nodes, HEAD, 2, 99).collect();
        assert_eq!(path, vec![(1, 2), (0, 3)]);
    }
}
