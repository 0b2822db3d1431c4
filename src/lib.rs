//! An ordered map from `u32` keys to arbitrary values, backed by a skip list.
//!
//! Search, insert and delete run in expected `O(log n)` without any
//! rebalancing. Each entry is assigned a random level when it is created; the
//! list keeps one sorted chain per level, and every chain is a subsequence of
//! the one below it.
//!
//! ```rust
//! use keyed_skiplist::{Error, SkipList};
//!
//! let mut sk = SkipList::with_seed(15, 0.25, 42).unwrap();
//! for key in &[30u32, 40, 50, 60, 70, 90] {
//!     sk.insert(*key, key * 10);
//! }
//! assert_eq!(sk.search(50), Ok(&500));
//! assert_eq!(sk.delete(40), Ok(400));
//! assert_eq!(sk.search(40), Err(Error::NotFound(40)));
//! ```
//!
//! Entries live in a slot arena owned by the list, with the header in slot 0.
//! Forward links are slot indices, so nothing is reference counted and a
//! deleted entry's slot is recycled by the next insert.

use std::fmt;
use std::iter::FromIterator;

use tracing::{debug, trace};

mod config;
mod error;
mod iter;
mod level;
mod node;
#[cfg(feature = "serde_support")]
mod serde;

pub use crate::config::{Config, DEFAULT_LEVEL_CEILING, DEFAULT_PROMOTION_PROBABILITY};
pub use crate::error::{Error, Result};
pub use crate::level::LevelGenerator;

use crate::iter::LeftBiasIter;
use crate::node::{slot, slot_mut, Link, Node, NodeId, NodeValue, HEAD};

pub struct SkipList<V> {
    /// Slot arena. Slot 0 is the header; vacant slots are `None`.
    nodes: Vec<Option<Node<V>>>,
    /// Vacant slots ready for reuse.
    free: Vec<NodeId>,
    /// Highest level populated by any entry, at least 1.
    level: usize,
    level_gen: LevelGenerator,
}

impl<V> Default for SkipList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SkipList<V> {
    /// Creates an empty list with the default level ceiling (15) and
    /// promotion probability (0.25), seeded from system entropy.
    pub fn new() -> SkipList<V> {
        match Self::from_config(Config::default()) {
            Ok(sk) => sk,
            Err(e) => unreachable!("default configuration rejected: {}", e),
        }
    }

    /// Creates an empty list.
    ///
    /// Fails with [`Error::InvalidConfiguration`] if `level_ceiling < 1` or
    /// `promotion_probability` is outside `[0, 1)`.
    pub fn try_new(level_ceiling: usize, promotion_probability: f64) -> Result<SkipList<V>> {
        Self::from_config(Config::new(level_ceiling, promotion_probability))
    }

    /// Like [`try_new`](SkipList::try_new), but level assignment is
    /// reproducible for a given `seed`.
    pub fn with_seed(
        level_ceiling: usize,
        promotion_probability: f64,
        seed: u64,
    ) -> Result<SkipList<V>> {
        Self::from_config(Config::new(level_ceiling, promotion_probability).seed(seed))
    }

    pub fn from_config(config: Config) -> Result<SkipList<V>> {
        let level_gen = LevelGenerator::from_config(&config)?;
        debug!(
            level_ceiling = config.level_ceiling,
            promotion_probability = config.promotion_probability,
            seeded = config.seed.is_some(),
            "created skiplist"
        );
        Ok(SkipList {
            nodes: vec![Some(Node::head(config.level_ceiling))],
            free: Vec::new(),
            level: 1,
            level_gen,
        })
    }

    /// Highest level currently populated (1 when empty).
    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    #[inline]
    pub fn level_ceiling(&self) -> usize {
        self.level_gen.level_ceiling()
    }

    #[inline]
    pub fn promotion_probability(&self) -> f64 {
        self.level_gen.promotion_probability()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head().forward[0].is_none()
    }

    /// Draws a level from the list's generator. Always in `1..=level_ceiling`.
    pub fn random_level(&mut self) -> usize {
        self.level_gen.random_level()
    }

    /// Changes the level ceiling. Only allowed while the list is empty.
    pub fn set_level_ceiling(&mut self, level_ceiling: usize) -> Result<()> {
        self.ensure_empty("level_ceiling")?;
        self.level_gen.set_level_ceiling(level_ceiling)?;
        self.reset_arena();
        debug!(level_ceiling, "reconfigured skiplist");
        Ok(())
    }

    /// Changes the promotion probability. Only allowed while the list is empty.
    pub fn set_promotion_probability(&mut self, promotion_probability: f64) -> Result<()> {
        self.ensure_empty("promotion_probability")?;
        self.level_gen
            .set_promotion_probability(promotion_probability)?;
        debug!(promotion_probability, "reconfigured skiplist");
        Ok(())
    }

    /// Returns the value stored under `key`.
    pub fn search(&self, key: u32) -> Result<&V> {
        match self.find(key).and_then(|id| self.node(id).value.value()) {
            Some(value) => Ok(value),
            None => Err(Error::NotFound(key)),
        }
    }

    pub fn search_mut(&mut self, key: u32) -> Result<&mut V> {
        match self.find(key) {
            Some(id) => match self.node_mut(id).value.value_mut() {
                Some(value) => Ok(value),
                None => Err(Error::NotFound(key)),
            },
            None => Err(Error::NotFound(key)),
        }
    }

    #[inline]
    pub fn contains(&self, key: u32) -> bool {
        self.find(key).is_some()
    }

    /// Inserts `value` under `key`.
    ///
    /// If `key` is already present only its value is replaced; the entry keeps
    /// its level and links and no level is drawn.
    pub fn insert(&mut self, key: u32, value: V) {
        let mut update = self.update_table(key);

        if let Some(id) = self.node(update[0]).forward[0] {
            if let NodeValue::Entry {
                key: found,
                value: slot_value,
            } = &mut self.node_mut(id).value
            {
                if *found == key {
                    *slot_value = value;
                    trace!(key, "overwrote value");
                    return;
                }
            }
        }

        let level = self.level_gen.random_level();
        if level > self.level {
            // Nothing reaches the new levels yet, so the header is the predecessor.
            update.resize(level, HEAD);
            debug!(from = self.level, to = level, "raised current level");
            self.level = level;
        }

        let id = self.alloc(Node::entry(key, value, level));
        for (i, &prev) in update.iter().enumerate().take(level) {
            let next = self.node(prev).forward[i];
            self.node_mut(id).forward[i] = next;
            self.node_mut(prev).forward[i] = Some(id);
        }
        trace!(key, level, slot = id, "inserted entry");

        #[cfg(debug_assertions)]
        {
            self.ensure_invariants()
        }
    }

    /// Removes `key` and returns its value.
    ///
    /// A missing key yields [`Error::NotFound`] and leaves the list untouched.
    pub fn delete(&mut self, key: u32) -> Result<V> {
        let update = self.update_table(key);
        let target = match self.node(update[0]).forward[0] {
            Some(id) if self.node(id).value == key => id,
            _ => return Err(Error::NotFound(key)),
        };

        let target_level = self.node(target).level();
        for (i, &prev) in update.iter().enumerate().take(target_level) {
            if self.node(prev).forward[i] != Some(target) {
                break;
            }
            let next = self.node(target).forward[i];
            self.node_mut(prev).forward[i] = next;
        }

        if target_level == self.level {
            self.shrink_level();
        }

        let removed = self.release(target);
        trace!(key, level = target_level, slot = target, "deleted entry");

        #[cfg(debug_assertions)]
        {
            self.ensure_invariants()
        }

        match removed.value {
            NodeValue::Entry { value, .. } => Ok(value),
            NodeValue::Head => unreachable!("header unlinked"),
        }
    }

    /// Lowers the current level to the highest one the header still reaches.
    fn shrink_level(&mut self) {
        let before = self.level;
        while self.level > 1 && self.head().forward[self.level - 1].is_none() {
            self.level -= 1;
        }
        if self.level != before {
            debug!(from = before, to = self.level, "lowered current level");
        }
    }

    fn find(&self, key: u32) -> Option<NodeId> {
        let mut curr = HEAD;
        for level in (0..self.level).rev() {
            while let Some(next) = self.node(curr).forward[level] {
                let next_value = &self.node(next).value;
                if *next_value == key {
                    return Some(next);
                }
                if *next_value < key {
                    curr = next;
                } else {
                    break;
                }
            }
        }
        match self.node(curr).forward[0] {
            Some(next) if self.node(next).value == key => Some(next),
            _ => None,
        }
    }

    /// `update[i]` is the rightmost node on level `i` with a key below `key`,
    /// for every active level.
    fn update_table(&self, key: u32) -> Vec<NodeId> {
        let mut update = vec![HEAD; self.level];
        for (level, prev) in LeftBiasIter::new(&self.nodes, HEAD, self.level, key) {
            update[level] = prev;
        }
        update
    }

    fn alloc(&mut self, node: Node<V>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    /// Vacates a slot. The node must already be unlinked on every level.
    fn release(&mut self, id: NodeId) -> Node<V> {
        match self.nodes[id].take() {
            Some(node) => {
                self.free.push(id);
                node
            }
            None => unreachable!("released vacant slot {}", id),
        }
    }

    /// Drops every slot but the header and resizes it to the configured ceiling.
    fn reset_arena(&mut self) {
        self.nodes.truncate(1);
        self.free.clear();
        self.nodes[HEAD] = Some(Node::head(self.level_ceiling()));
        self.level = 1;
    }

    fn ensure_empty(&self, setting: &str) -> Result<()> {
        if !self.is_empty() {
            return Err(Error::InvalidConfiguration(format!(
                "cannot change {} while the list holds entries",
                setting
            )));
        }
        Ok(())
    }

    #[inline]
    fn head(&self) -> &Node<V> {
        self.node(HEAD)
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node<V> {
        slot(&self.nodes, id)
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<V> {
        slot_mut(&mut self.nodes, id)
    }

    /// Nodes on `level`, in link order, header excluded.
    fn walk(&self, level: usize) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut next: Link = self.head().forward[level];
        while let Some(id) = next {
            ids.push(id);
            next = self.node(id).forward[level];
        }
        ids
    }

    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    fn ensure_invariants(&self) {
        assert_eq!(self.head().level(), self.level_ceiling());
        assert!(self.level >= 1 && self.level <= self.level_ceiling());

        let mut below: Option<Vec<NodeId>> = None;
        for level in 0..self.level_ceiling() {
            let row = self.walk(level);
            for pair in row.windows(2) {
                let (l, r) = (self.node(pair[0]).key(), self.node(pair[1]).key());
                assert!(l < r, "level {} out of order: {:?} >= {:?}", level, l, r);
            }
            for &id in &row {
                assert!(self.node(id).level() > level);
            }
            if let Some(below) = &below {
                // Each level is an order-preserving subsequence of the one below.
                let mut rest = below.iter();
                for id in &row {
                    assert!(rest.any(|b| b == id), "level {} not nested", level);
                }
            }
            if level >= self.level {
                assert!(row.is_empty(), "level {} populated above current", level);
            }
            below = Some(row);
        }
        assert!(self.level == 1 || self.head().forward[self.level - 1].is_some());

        let live = self.nodes.iter().filter(|n| n.is_some()).count();
        assert_eq!(live - 1, self.walk(0).len(), "unreachable entries");
        for &id in &self.free {
            assert!(self.nodes[id].is_none());
        }
    }
}

impl<V> FromIterator<(u32, V)> for SkipList<V> {
    fn from_iter<I: IntoIterator<Item = (u32, V)>>(iter: I) -> Self {
        let mut sk = SkipList::new();
        sk.extend(iter);
        sk
    }
}

impl<V> Extend<(u32, V)> for SkipList<V> {
    fn extend<I: IntoIterator<Item = (u32, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Developer dump: the level-0 chain, then every entry with its level and
/// forward targets, top level first. The layout is not stable.
impl<V: fmt::Debug> fmt::Debug for SkipList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "SkipList(level: {}, level_ceiling: {}, p: {})",
            self.level,
            self.level_ceiling(),
            self.promotion_probability()
        )?;
        let row = self.walk(0);
        write!(f, "head")?;
        for &id in &row {
            let node = self.node(id);
            if let NodeValue::Entry { key, value } = &node.value {
                write!(f, " -> [{}: {:?}]", key, value)?;
            }
        }
        writeln!(f, " -> nil")?;
        for &id in &row {
            let node = self.node(id);
            if let NodeValue::Entry { key, value } = &node.value {
                write!(f, "[{}] value: {:?}, level: {}", key, value, node.level())?;
            }
            for (level, link) in node.forward.iter().enumerate().rev() {
                match link {
                    Some(next) => match self.node(*next).key() {
                        Some(k) => write!(f, " fw[{}]: {}", level, k)?,
                        None => write!(f, " fw[{}]: head", level)?,
                    },
                    None => write!(f, " fw[{}]: nil", level)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
