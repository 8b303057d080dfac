use std::fmt;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::errors::TemporalMetricError;

/// Opaque vertex identifier. Only equality and hashing are relied upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexId(pub i64);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Right-open valid-time interval `[from, to)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    pub from: i64,
    pub to: i64,
}

impl TimeWindow {
    pub const UNBOUNDED: TimeWindow = TimeWindow {
        from: i64::MIN,
        to: i64::MAX,
    };

    pub fn new(from: i64, to: i64) -> Result<Self, TemporalMetricError> {
        if from >= to {
            return Err(TemporalMetricError::invalid_range(from, to));
        }
        Ok(Self { from, to })
    }

    pub fn intersect(&self, other: &TimeWindow) -> TimeWindow {
        TimeWindow {
            from: self.from.max(other.from),
            to: self.to.min(other.to),
        }
    }

    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.from < other.to && self.to > other.from
    }

    pub fn contains(&self, x: i64) -> bool {
        self.from <= x && x < self.to
    }

    pub fn is_empty(&self) -> bool {
        self.from >= self.to
    }

    pub fn duration(&self) -> i64 {
        self.to.saturating_sub(self.from)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalEdge {
    pub id: i64,
    pub source: VertexId,
    pub target: VertexId,
    pub valid_from: i64,
    pub valid_to: i64,
}

impl TemporalEdge {
    pub fn new(
        id: i64,
        source: VertexId,
        target: VertexId,
        valid_from: i64,
        valid_to: i64,
    ) -> Result<Self, TemporalMetricError> {
        let edge = Self {
            id,
            source,
            target,
            valid_from,
            valid_to,
        };
        validate_edge(&edge)?;
        Ok(edge)
    }

    pub fn interval(&self) -> TimeWindow {
        TimeWindow {
            from: self.valid_from,
            to: self.valid_to,
        }
    }
}

/// Read-only access to a collection of temporal edges.
pub trait EdgeSource {
    fn temporal_edges(&self) -> &[TemporalEdge];
}

/// Vertex universe with lookup by label.
pub trait VertexLookup {
    fn vertex_by_label(&self, label: &str) -> Option<VertexId>;
    fn contains_vertex(&self, id: VertexId) -> bool;
    fn vertex_ids(&self) -> Vec<VertexId>;
}

impl EdgeSource for [TemporalEdge] {
    fn temporal_edges(&self) -> &[TemporalEdge] {
        self
    }
}

impl EdgeSource for Vec<TemporalEdge> {
    fn temporal_edges(&self) -> &[TemporalEdge] {
        self
    }
}

/// In-memory temporal graph: labelled vertices plus valid-time edges.
#[derive(Debug, Clone, Default)]
pub struct TemporalGraph {
    labels: Vec<String>,
    index: AHashMap<String, VertexId>,
    edges: Vec<TemporalEdge>,
    edge_ids: AHashSet<i64>,
    max_edge_id: i64,
}

impl TemporalGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `label`, registering the vertex when it is new.
    pub fn add_vertex(&mut self, label: &str) -> VertexId {
        if let Some(id) = self.index.get(label) {
            return *id;
        }
        self.labels.push(label.to_string());
        let id = VertexId(self.labels.len() as i64);
        self.index.insert(label.to_string(), id);
        id
    }

    /// Adds an edge between two labelled vertices and returns its id.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        valid_from: i64,
        valid_to: i64,
    ) -> Result<i64, TemporalMetricError> {
        if valid_from >= valid_to {
            return Err(TemporalMetricError::invalid_argument(format!(
                "edge {source}->{target} has empty interval [{valid_from}, {valid_to})"
            )));
        }
        let source = self.add_vertex(source);
        let target = self.add_vertex(target);
        let id = self
            .max_edge_id
            .checked_add(1)
            .ok_or_else(|| TemporalMetricError::invalid_argument("edge ids exhausted"))?;
        self.track_edge_id(id);
        self.edges.push(TemporalEdge {
            id,
            source,
            target,
            valid_from,
            valid_to,
        });
        Ok(id)
    }

    pub fn insert_edge(&mut self, edge: TemporalEdge) -> Result<i64, TemporalMetricError> {
        validate_edge(&edge)?;
        if !self.contains_vertex(edge.source) || !self.contains_vertex(edge.target) {
            return Err(TemporalMetricError::invalid_argument(
                "edge endpoints must reference existing vertices",
            ));
        }
        if self.edge_ids.contains(&edge.id) {
            return Err(TemporalMetricError::invalid_argument(format!(
                "duplicate edge id {}",
                edge.id
            )));
        }
        let id = edge.id;
        self.track_edge_id(id);
        self.edges.push(edge);
        Ok(id)
    }

    fn track_edge_id(&mut self, id: i64) {
        self.edge_ids.insert(id);
        self.max_edge_id = self.max_edge_id.max(id);
    }

    pub fn vertex_id(&self, label: &str) -> Result<VertexId, TemporalMetricError> {
        self.vertex_by_label(label)
            .ok_or_else(|| TemporalMetricError::not_found(format!("label {label}")))
    }

    pub fn label_of(&self, id: VertexId) -> Option<&str> {
        if id.0 < 1 {
            return None;
        }
        self.labels.get((id.0 - 1) as usize).map(String::as_str)
    }

    pub fn edges(&self) -> &[TemporalEdge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl EdgeSource for TemporalGraph {
    fn temporal_edges(&self) -> &[TemporalEdge] {
        &self.edges
    }
}

impl VertexLookup for TemporalGraph {
    fn vertex_by_label(&self, label: &str) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    fn contains_vertex(&self, id: VertexId) -> bool {
        self.label_of(id).is_some()
    }

    fn vertex_ids(&self) -> Vec<VertexId> {
        (1..=self.labels.len() as i64).map(VertexId).collect()
    }
}

pub fn validate_edge(edge: &TemporalEdge) -> Result<(), TemporalMetricError> {
    if edge.valid_from >= edge.valid_to {
        return Err(TemporalMetricError::invalid_argument(format!(
            "edge {} has empty interval [{}, {})",
            edge.id, edge.valid_from, edge.valid_to
        )));
    }
    Ok(())
}

pub fn validate_edges(edges: &[TemporalEdge]) -> Result<(), TemporalMetricError> {
    edges.iter().try_for_each(validate_edge)
}
