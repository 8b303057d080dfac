//! Piecewise-constant interval diagrams.
//!
//! An [`IntervalDiagram`] stores a function over an `i64` time axis as an ordered
//! map of breakpoints. For two consecutive keys `k1 < k2` the function's value on
//! `[k1, k2)` is the value stored at `k1`; before the first key the function takes
//! the diagram's default value. Writes cover a right-open interval and resolve
//! conflicts with the values already present under a [`Precedence`] rule.
//!
//! A breakpoint either holds a written value or marks the start of an unwritten
//! region, where the default holds. Only unwritten regions give way to any
//! write; a written value, even one equal to the default, competes under the
//! precedence rule. The map is kept minimal: two adjacent breakpoints never hold
//! the same entry and the first breakpoint is never an unwritten marker.

use std::{collections::BTreeMap, ops::Bound::Excluded};

use crate::errors::TemporalMetricError;

/// Which value survives where a write overlaps existing data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precedence {
    Min,
    Max,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntervalDiagram<Y> {
    // `None` marks an unwritten region.
    data: BTreeMap<i64, Option<Y>>,
    default_value: Y,
}

impl<Y> IntervalDiagram<Y>
where
    Y: Ord + Clone,
{
    pub fn new(default_value: Y) -> Self {
        Self {
            data: BTreeMap::new(),
            default_value,
        }
    }

    /// Writes `value` over `[from, to)`, keeping the lower value where regions overlap.
    pub fn insert_min(&mut self, from: i64, to: i64, value: Y) -> Result<(), TemporalMetricError> {
        self.insert(from, to, value, Precedence::Min)
    }

    /// Writes `value` over `[from, to)`, keeping the higher value where regions overlap.
    pub fn insert_max(&mut self, from: i64, to: i64, value: Y) -> Result<(), TemporalMetricError> {
        self.insert(from, to, value, Precedence::Max)
    }

    /// Paints `value` over `[from, to)`.
    ///
    /// Every segment intersecting the interval is clipped to it and resolved
    /// against `value` on its own, which covers a write that is nested in one
    /// segment, overlaps the front or the end of existing segments, or wraps
    /// several of them. The entry holding at `to` before the write is restored
    /// at `to` afterwards.
    pub fn insert(
        &mut self,
        from: i64,
        to: i64,
        value: Y,
        precedence: Precedence,
    ) -> Result<(), TemporalMetricError> {
        if from >= to {
            return Err(TemporalMetricError::invalid_range(from, to));
        }
        let tail = self.written_at(to).cloned();
        let mut segments = vec![(from, self.written_at(from).cloned())];
        segments.extend(
            self.data
                .range((Excluded(from), Excluded(to)))
                .map(|(key, existing)| (*key, existing.clone())),
        );
        let stale: Vec<i64> = self.data.range(from..=to).map(|(key, _)| *key).collect();
        for key in stale {
            self.data.remove(&key);
        }
        for (key, existing) in segments {
            let resolved = resolve(existing, &value, precedence);
            self.data.insert(key, Some(resolved));
        }
        self.data.insert(to, tail);
        self.coalesce(from, to);
        Ok(())
    }

    /// Value of the function at `x` (floor-key lookup).
    pub fn at(&self, x: i64) -> &Y {
        self.written_at(x).unwrap_or(&self.default_value)
    }

    /// Breakpoints with keys in `[from, to]`, both ends inclusive.
    pub fn range(&self, from: i64, to: i64) -> BTreeMap<i64, Y> {
        if from > to {
            return BTreeMap::new();
        }
        self.data
            .range(from..=to)
            .map(|(key, entry)| (*key, entry.as_ref().unwrap_or(&self.default_value).clone()))
            .collect()
    }

    /// Breakpoints in key order; unwritten regions report the default value.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &Y)> + '_ {
        self.data.iter().map(|(key, entry)| {
            (*key, entry.as_ref().unwrap_or(&self.default_value))
        })
    }

    /// The `time -> value` map, with the default value at unwritten breakpoints.
    pub fn data(&self) -> BTreeMap<i64, Y> {
        self.iter().map(|(key, value)| (key, value.clone())).collect()
    }

    pub fn default_value(&self) -> &Y {
        &self.default_value
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn written_at(&self, x: i64) -> Option<&Y> {
        self.data
            .range(..=x)
            .next_back()
            .and_then(|(_, entry)| entry.as_ref())
    }

    // Only breakpoints in [from, to] and the first one after `to` can have become redundant.
    fn coalesce(&mut self, from: i64, to: i64) {
        let mut previous = self
            .data
            .range(..from)
            .next_back()
            .and_then(|(_, entry)| entry.as_ref());
        let mut redundant = Vec::new();
        for (key, entry) in self.data.range(from..) {
            if entry.as_ref() == previous {
                redundant.push(*key);
            } else {
                previous = entry.as_ref();
            }
            if *key > to {
                break;
            }
        }
        for key in redundant {
            self.data.remove(&key);
        }
    }
}

fn resolve<Y: Ord + Clone>(existing: Option<Y>, incoming: &Y, precedence: Precedence) -> Y {
    let Some(existing) = existing else {
        return incoming.clone();
    };
    let incoming_wins = match precedence {
        Precedence::Min => *incoming < existing,
        Precedence::Max => *incoming > existing,
    };
    if incoming_wins {
        incoming.clone()
    } else {
        existing
    }
}
