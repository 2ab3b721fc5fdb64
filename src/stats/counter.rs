//! Frequency counter with first-occurrence tie-breaking.
//!
//! Keys are stored in the order they were first seen, and that order is the
//! tie-break for [`OrderedCounter::most_common`]: ranking is by
//! `(-count, first_index)`. Nothing depends on hash iteration order, so the
//! same traversal always produces the same ranking and the same serialized
//! map.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedCounter {
    /// key -> position in `entries`
    slots: HashMap<String, usize>,
    /// (key, count) in first-occurrence order
    entries: Vec<(String, usize)>,
}

impl OrderedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`.
    pub fn add(&mut self, key: &str) {
        self.add_n(key, 1);
    }

    /// Count `n` occurrences of `key`.
    pub fn add_n(&mut self, key: &str, n: usize) {
        match self.slots.get(key) {
            Some(&slot) => self.entries[slot].1 += n,
            None => {
                self.slots.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), n));
            }
        }
    }

    /// Count of `key`, zero if never seen.
    pub fn get(&self, key: &str) -> usize {
        self.slots.get(key).map(|&slot| self.entries[slot].1).unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// (key, count) pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// Highest count, `None` when empty.
    pub fn max_count(&self) -> Option<usize> {
        self.entries.iter().map(|(_, count)| *count).max()
    }

    /// Up to `n` most frequent keys, highest count first; equal counts keep
    /// first-occurrence order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Serializes as a JSON object in first-occurrence order.
impl Serialize for OrderedCounter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

impl<'a> FromIterator<&'a str> for OrderedCounter {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counter = Self::new();
        for key in iter {
            counter.add(key);
        }
        counter
    }
}
