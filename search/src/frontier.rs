//! Best-first frontier with closed set and best-g bookkeeping.
//!
//! Uses `BTreeSet`/`BTreeMap` keyed by [`StateKey`] (not hash collections)
//! so iteration order is deterministic wherever it is observed.
//!
//! Entries are never removed or re-keyed in place. When a better path to a
//! key is found, a second entry is pushed; the outdated one is discarded on
//! pop because its key is already closed by then ("stale pop").

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use waypoint_kernel::carrier::key::StateKey;

use crate::node::FrontierKey;

/// A frontier entry: ordering key plus arena index of the node.
///
/// `BinaryHeap` is a max-heap, so `Reverse<FrontierKey>` gives min-heap
/// behavior (lowest `f_cost` first).
#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node_id: usize,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // creation_order is unique per push, so node_id never decides.
        self.key
            .cmp(&other.key)
            .then(other.node_id.cmp(&self.node_id))
    }
}

/// Best-first frontier manager.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the best entry
/// - A `BTreeSet<StateKey>` of closed (expanded) keys
/// - A `BTreeMap<StateKey, i64>` of the best g-cost seen per key
#[derive(Debug, Default)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<FrontierEntry>,
    closed: BTreeSet<StateKey>,
    best_g: BTreeMap<StateKey, i64>,
    high_water: u64,
}

impl BestFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an entry for node `node_id` with ordering `key`.
    pub fn push(&mut self, key: FrontierKey, node_id: usize) {
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node_id,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the best entry as `(key, node_id)`.
    #[must_use]
    pub fn pop(&mut self) -> Option<(FrontierKey, usize)> {
        self.heap.pop().map(|e| (e.key.0, e.node_id))
    }

    /// Record `g` as a path cost for `key`.
    ///
    /// Returns `true` if `key` was unseen or `g` is strictly better than the
    /// best recorded cost; the record is updated only in that case.
    pub fn offer_g(&mut self, key: &StateKey, g: i64) -> bool {
        match self.best_g.get_mut(key) {
            Some(best) if g >= *best => false,
            Some(best) => {
                *best = g;
                true
            }
            None => {
                self.best_g.insert(key.clone(), g);
                true
            }
        }
    }

    /// Best g-cost recorded for `key`.
    #[must_use]
    pub fn best_g(&self, key: &StateKey) -> Option<i64> {
        self.best_g.get(key).copied()
    }

    /// Mark `key` as expanded. Returns `false` if it was already closed.
    pub fn close(&mut self, key: StateKey) -> bool {
        self.closed.insert(key)
    }

    /// Whether `key` has been expanded.
    #[must_use]
    pub fn is_closed(&self, key: &StateKey) -> bool {
        self.closed.contains(key)
    }

    /// Number of closed keys.
    #[must_use]
    pub fn closed_count(&self) -> usize {
        self.closed.len()
    }

    /// Current number of entries, including stale ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
