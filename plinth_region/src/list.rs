// Copyright 2025 the Plinth Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion-ordered region list with stable keys and linear-scan queries.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::{Region, Scalar};

/// Stable handle for an entry in a [`RegionList`].
///
/// ## Semantics
///
/// - Keys are allocated from a counter that only moves forward, so a later
///   [`push`](RegionList::push) always yields a greater key.
/// - Keys are never reused. A key whose entry was removed stays stale forever
///   and never aliases a different entry.
/// - The ordering of keys is the insertion order of their entries.
///
/// The counter is a `u32`; [`RegionList::push`] panics rather than wrap once it
/// is exhausted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(u32);

impl Key {
    /// The raw counter value of this key.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

struct Entry<T, P> {
    key: Key,
    region: Region<T>,
    payload: P,
}

/// An ordered list of regions with payloads.
///
/// Entries keep the order in which they were pushed, and every query reports
/// matches in that order. This is what makes [`first_at`](Self::first_at) a
/// deterministic priority rule for overlapping regions: the earliest pushed
/// entry wins.
pub struct RegionList<T, P> {
    entries: Vec<Entry<T, P>>,
    next: u32,
}

impl<T, P> Default for RegionList<T, P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next: 0,
        }
    }
}

impl<T: Debug, P> Debug for RegionList<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RegionList")
            .field("len", &self.entries.len())
            .field("next_key", &self.next)
            .finish_non_exhaustive()
    }
}

impl<T, P> RegionList<T, P> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `key` refers to a live entry.
    pub fn contains_key(&self, key: Key) -> bool {
        self.position(key).is_some()
    }

    /// Append a region with its payload. Returns its stable key.
    ///
    /// # Panics
    ///
    /// If `u32::MAX` keys have already been handed out.
    pub fn push(&mut self, region: Region<T>, payload: P) -> Key {
        let key = Key(self.next);
        self.next = self
            .next
            .checked_add(1)
            .expect("RegionList key space exhausted");
        self.entries.push(Entry {
            key,
            region,
            payload,
        });
        key
    }

    /// Remove an entry, returning its region and payload.
    ///
    /// The relative order of the remaining entries is unchanged.
    pub fn remove(&mut self, key: Key) -> Option<(Region<T>, P)> {
        let i = self.position(key)?;
        let e = self.entries.remove(i);
        Some((e.region, e.payload))
    }

    /// Payload of a live entry.
    pub fn get(&self, key: Key) -> Option<&P> {
        let i = self.position(key)?;
        Some(&self.entries[i].payload)
    }

    /// Mutable payload of a live entry.
    pub fn get_mut(&mut self, key: Key) -> Option<&mut P> {
        let i = self.position(key)?;
        Some(&mut self.entries[i].payload)
    }

    /// Keys of all entries in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.entries.iter().map(|e| e.key)
    }

    /// Iterate `(key, region, payload)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, &Region<T>, &P)> + '_ {
        self.entries.iter().map(|e| (e.key, &e.region, &e.payload))
    }

    /// Iterate `(key, region, payload)` in insertion order with mutable payloads.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Key, &Region<T>, &mut P)> + '_ {
        self.entries
            .iter_mut()
            .map(|e| (e.key, &e.region, &mut e.payload))
    }

    /// Drop every entry. Keys handed out before stay stale.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // Entries are sorted by key since keys only grow and removal preserves order.
    fn position(&self, key: Key) -> Option<usize> {
        self.entries.binary_search_by_key(&key, |e| e.key).ok()
    }
}

impl<T: Scalar, P> RegionList<T, P> {
    /// Region of a live entry.
    pub fn region(&self, key: Key) -> Option<Region<T>> {
        let i = self.position(key)?;
        Some(self.entries[i].region)
    }

    /// The earliest pushed entry whose region contains the point.
    pub fn first_at(&self, x: T, y: T) -> Option<Key> {
        self.query_point(x, y).next()
    }

    /// Entries whose region contains the point, in insertion order.
    pub fn query_point(&self, x: T, y: T) -> impl Iterator<Item = Key> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.region.contains_point(x, y))
            .map(|e| e.key)
    }

    /// Entries whose region intersects `rect`, in insertion order.
    pub fn query_rect(&self, rect: Region<T>) -> impl Iterator<Item = Key> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.region.intersects(&rect))
            .map(|e| e.key)
    }
}
