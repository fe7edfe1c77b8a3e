// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content abstraction and change detection.
//!
//! The stage never sees concrete shapes. Anything placed on it implements
//! [`Drawable`], and the host hands the current set of nodes to the stage as a
//! [`ContentTree`].
//!
//! Change detection is revision based: each node exposes a
//! [`Drawable::geometry_revision`] counter that it bumps whenever a property
//! affecting its geometry changes. A [`ContentWatcher`] remembers the last
//! revision it saw per node and reports additions, removals, and
//! modifications when it [scans](ContentWatcher::scan) the tree. Hosts that
//! already know what changed can push that knowledge with
//! [`ContentWatcher::mark_modified`] instead.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};
use kurbo::Rect;

/// A node placed on the stage.
pub trait Drawable {
    /// Stable identity of the node.
    type Key: Copy + Eq + Hash;

    /// Identity of this node.
    fn key(&self) -> Self::Key;

    /// Screen‑space bounding box of the node under the current camera.
    fn client_rect(&self) -> Rect;

    /// Counter bumped whenever a geometry‑affecting property changes.
    ///
    /// Nodes that never change may keep the default of `0`.
    fn geometry_revision(&self) -> u64 {
        0
    }
}

/// Enumerates the nodes currently on the stage.
pub trait ContentTree {
    /// Node type of this tree.
    type Node: Drawable;

    /// Iterates over all current nodes.
    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;
}

impl<N: Drawable> ContentTree for [N] {
    type Node = N;

    fn nodes(&self) -> impl Iterator<Item = &N> {
        self.iter()
    }
}

impl<N: Drawable> ContentTree for Vec<N> {
    type Node = N;

    fn nodes(&self) -> impl Iterator<Item = &N> {
        self.iter()
    }
}

/// Result of a [`ContentWatcher::scan`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentChanges<K> {
    /// Nodes seen for the first time.
    pub added: Vec<K>,
    /// Tracked nodes no longer present.
    pub removed: Vec<K>,
    /// Present nodes whose revision changed or that were marked modified.
    pub modified: Vec<K>,
}

impl<K> ContentChanges<K> {
    /// Returns `true` if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }
}

impl<K> Default for ContentChanges<K> {
    fn default() -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
            modified: Vec::new(),
        }
    }
}

/// Tracks which nodes are subscribed and the last revision seen for each.
#[derive(Clone, Debug)]
pub struct ContentWatcher<K> {
    tracked: HashMap<K, u64>,
    marked: HashSet<K>,
    scan_requested: bool,
}

impl<K: Copy + Eq + Hash> Default for ContentWatcher<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash> ContentWatcher<K> {
    /// Creates a watcher with nothing tracked and a scan requested.
    pub fn new() -> Self {
        Self {
            tracked: HashMap::new(),
            marked: HashSet::new(),
            scan_requested: true,
        }
    }

    /// Asks for a scan on the next refresh tick.
    pub fn request_scan(&mut self) {
        self.scan_requested = true;
    }

    /// Returns `true` if a scan has been requested and not yet performed.
    pub fn is_scan_requested(&self) -> bool {
        self.scan_requested
    }

    /// Reports `key` as modified and requests a scan.
    ///
    /// Keys that are not present at the next scan are dropped silently.
    pub fn mark_modified(&mut self, key: K) {
        self.marked.insert(key);
        self.scan_requested = true;
    }

    /// Returns `true` if `key` is currently subscribed.
    pub fn is_tracking(&self, key: K) -> bool {
        self.tracked.contains_key(&key)
    }

    /// Number of subscribed nodes.
    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    /// Returns `true` if no node is subscribed.
    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    /// Diffs `tree` against the tracked set and updates subscriptions.
    ///
    /// `added` and `modified` follow tree order. The order of `removed` is
    /// unspecified.
    pub fn scan<C>(&mut self, tree: &C) -> ContentChanges<K>
    where
        C: ContentTree + ?Sized,
        C::Node: Drawable<Key = K>,
    {
        let mut changes = ContentChanges::default();
        let mut seen: HashSet<K> = HashSet::with_capacity(self.tracked.len());

        for node in tree.nodes() {
            let key = node.key();
            if !seen.insert(key) {
                continue;
            }
            let revision = node.geometry_revision();
            match self.tracked.insert(key, revision) {
                None => changes.added.push(key),
                Some(previous) if previous != revision || self.marked.contains(&key) => {
                    changes.modified.push(key);
                }
                Some(_) => {}
            }
        }

        self.tracked.retain(|key, _| {
            let keep = seen.contains(key);
            if !keep {
                changes.removed.push(*key);
            }
            keep
        });

        self.marked.clear();
        self.scan_requested = false;
        changes
    }

    /// Unsubscribes every node.
    pub fn clear(&mut self) {
        self.tracked.clear();
        self.marked.clear();
        self.scan_requested = false;
    }
}
