// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-key ordering of timeline entries.
//!
//! A [`SortSpec`] holds up to [`MAX_SORT_KEYS`] fields, each with a key, a
//! direction and a priority. Priority 1 is the primary key; priority 2 only
//! breaks ties. Sorting is stable, so entries equal on every active key keep
//! their input order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::timeline::TimelineEntry;

/// Maximum number of simultaneously active sort keys.
pub const MAX_SORT_KEYS: usize = 2;

/// Entry attribute an ordering can be based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Issue number, compared numerically.
    Id,
    /// Start date.
    Start,
    /// End (due) date.
    End,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Id, SortKey::Start, SortKey::End];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Start => "start",
            SortKey::End => "end",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::Start => "Start date",
            SortKey::End => "Due date",
        }
    }

    /// Compares two entries on this key in ascending order.
    ///
    /// Non-numeric identifiers sort before numeric ones and tie with each
    /// other.
    pub fn compare(&self, a: &TimelineEntry, b: &TimelineEntry) -> Ordering {
        match self {
            SortKey::Id => a.numeric_id().cmp(&b.numeric_id()),
            SortKey::Start => a.start.cmp(&b.start),
            SortKey::End => a.end.cmp(&b.end),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "start" => Ok(SortKey::Start),
            "end" | "due" => Ok(SortKey::End),
            _ => Err(Error::InvalidSortKey(s.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }

    /// Returns the opposite direction.
    pub fn flip(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    /// Applies this direction to an ascending comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

/// One active sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    pub key: SortKey,
    pub direction: Direction,
    /// 1-based rank; lower is evaluated first.
    pub priority: u32,
}

impl SortField {
    pub fn compare(&self, a: &TimelineEntry, b: &TimelineEntry) -> Ordering {
        self.direction.apply(self.key.compare(a, b))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.direction)
    }
}

/// A sort field as persisted, before validation.
///
/// Keys and directions are kept as text so that a file written by another
/// version can still be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSortField {
    pub key: String,
    #[serde(default)]
    pub direction: String,
    #[serde(default)]
    pub priority: u32,
}

impl From<SortField> for StoredSortField {
    fn from(field: SortField) -> Self {
        StoredSortField {
            key: field.key.as_str().to_string(),
            direction: field.direction.as_str().to_string(),
            priority: field.priority,
        }
    }
}

/// The ordered set of active sort keys.
///
/// Holds at most [`MAX_SORT_KEYS`] fields, at most one per key, with dense
/// priorities `1..=n` stored in priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<StoredSortField>", from = "Vec<StoredSortField>")]
pub struct SortSpec {
    fields: Vec<SortField>,
}

impl SortSpec {
    /// Creates an empty spec (no ordering).
    pub fn new() -> Self {
        SortSpec::default()
    }

    /// Builds a spec from `(key, direction)` pairs in priority order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSortSpec`] on duplicate keys or more than
    /// [`MAX_SORT_KEYS`] pairs.
    pub fn from_pairs(pairs: &[(SortKey, Direction)]) -> Result<Self> {
        if pairs.len() > MAX_SORT_KEYS {
            return Err(Error::InvalidSortSpec(format!(
                "at most {} sort keys are allowed, got {}",
                MAX_SORT_KEYS,
                pairs.len()
            )));
        }
        let mut spec = SortSpec::new();
        for &(key, direction) in pairs {
            if spec.get(key).is_some() {
                return Err(Error::InvalidSortSpec(format!(
                    "sort key '{}' given more than once",
                    key
                )));
            }
            spec.push(key, direction);
        }
        Ok(spec)
    }

    /// Builds a spec from persisted fields, skipping anything unusable.
    ///
    /// Unknown keys are dropped, unknown directions become ascending,
    /// repeated keys keep their highest-priority occurrence and fields beyond
    /// [`MAX_SORT_KEYS`] are dropped. Priorities are re-ranked densely.
    pub fn from_stored(stored: &[StoredSortField]) -> Self {
        let mut ordered: Vec<&StoredSortField> = stored.iter().collect();
        ordered.sort_by_key(|field| field.priority);

        let mut spec = SortSpec::new();
        for field in ordered {
            let key = match field.key.parse::<SortKey>() {
                Ok(key) => key,
                Err(_) => {
                    tracing::warn!("ignoring unknown sort key '{}'", field.key);
                    continue;
                }
            };
            let direction = field.direction.parse::<Direction>().unwrap_or_else(|_| {
                tracing::warn!(
                    "unknown sort direction '{}' for key '{}', using asc",
                    field.direction,
                    key
                );
                Direction::Asc
            });
            if spec.get(key).is_some() {
                tracing::warn!("ignoring repeated sort key '{}'", key);
                continue;
            }
            if spec.len() == MAX_SORT_KEYS {
                tracing::warn!("ignoring sort key '{}' beyond the limit of {}", key, MAX_SORT_KEYS);
                continue;
            }
            spec.push(key, direction);
        }
        spec
    }

    fn push(&mut self, key: SortKey, direction: Direction) {
        let priority = self.fields.len() as u32 + 1;
        self.fields.push(SortField {
            key,
            direction,
            priority,
        });
    }

    /// Active fields in priority order.
    pub fn fields(&self) -> &[SortField] {
        &self.fields
    }

    /// Returns the active field for `key`, if any.
    pub fn get(&self, key: SortKey) -> Option<&SortField> {
        self.fields.iter().find(|field| field.key == key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Applies a user toggle of `key`.
    ///
    /// - active key: its direction flips, nothing else changes
    /// - inactive key with room left: appended as ascending, next priority
    /// - inactive key at capacity: every field is replaced by this key alone
    pub fn toggle(&mut self, key: SortKey) {
        if let Some(field) = self.fields.iter_mut().find(|field| field.key == key) {
            field.direction = field.direction.flip();
            return;
        }
        if self.fields.len() >= MAX_SORT_KEYS {
            self.fields.clear();
        }
        self.push(key, Direction::Asc);
    }

    /// Removes every active key.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Compares two entries under every active key, in priority order.
    pub fn compare(&self, a: &TimelineEntry, b: &TimelineEntry) -> Ordering {
        self.fields
            .iter()
            .map(|field| field.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl From<Vec<StoredSortField>> for SortSpec {
    fn from(stored: Vec<StoredSortField>) -> Self {
        SortSpec::from_stored(&stored)
    }
}

impl From<SortSpec> for Vec<StoredSortField> {
    fn from(spec: SortSpec) -> Self {
        spec.fields.into_iter().map(StoredSortField::from).collect()
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fields.is_empty() {
            return write!(f, "none");
        }
        let parts: Vec<String> = self.fields.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join(","))
    }
}

impl FromStr for SortSpec {
    type Err = Error;

    /// Parses `key[:direction]` items separated by commas, highest priority
    /// first. `none` or an empty string yields an empty spec.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(SortSpec::new());
        }
        let mut pairs = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let (key, direction) = match part.split_once(':') {
                Some((key, direction)) => (key.parse()?, direction.parse()?),
                None => (part.parse()?, Direction::Asc),
            };
            pairs.push((key, direction));
        }
        SortSpec::from_pairs(&pairs)
    }
}

/// Returns the entries ordered by `spec`. The input is left untouched.
///
/// An empty spec returns the entries in input order.
pub fn sort_entries(entries: &[TimelineEntry], spec: &SortSpec) -> Vec<TimelineEntry> {
    let mut sorted = entries.to_vec();
    if !spec.is_empty() {
        sorted.sort_by(|a, b| spec.compare(a, b));
    }
    sorted
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
