use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    diagram::IntervalDiagram,
    errors::TemporalMetricError,
    graph::{TemporalEdge, VertexId, VertexLookup, validate_edges},
    search::{OverlapRule, PathSearch},
};

use super::TemporalMetric;

/// Totally ordered centrality score.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Centrality(pub f64);

impl Centrality {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Centrality {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Centrality {}

impl PartialOrd for Centrality {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Centrality {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Centrality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Share of overlap-connected paths that run through `pivot`.
///
/// For every ordered pair `(s, t)` of distinct vertices other than the pivot
/// with at least one path, the fraction of those paths visiting the pivot is
/// added up. The sum is normalised by `(V - 1)(V - 2)` and written as a single
/// value over the span from the earliest edge start to the latest edge end.
#[derive(Clone, Debug)]
pub struct TemporalBetweennessCentrality {
    pivot: VertexId,
    vertices: Vec<VertexId>,
    diagram: Option<IntervalDiagram<Option<Centrality>>>,
}

impl TemporalBetweennessCentrality {
    pub fn new<L>(lookup: &L, pivot: VertexId) -> Result<Self, TemporalMetricError>
    where
        L: VertexLookup + ?Sized,
    {
        if !lookup.contains_vertex(pivot) {
            return Err(TemporalMetricError::invalid_argument(format!(
                "pivot {pivot} is not a vertex of the graph"
            )));
        }
        let vertices = lookup.vertex_ids();
        if vertices.len() < 3 {
            return Err(TemporalMetricError::invalid_argument(format!(
                "betweenness needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        Ok(Self {
            pivot,
            vertices,
            diagram: None,
        })
    }

    pub fn pivot(&self) -> VertexId {
        self.pivot
    }

    /// Unnormalised sum of per-pair ratios.
    fn ratio_sum(&self, edges: &[TemporalEdge]) -> Result<f64, TemporalMetricError> {
        let search = PathSearch::new(edges, OverlapRule);
        let mut sum = 0.0;
        for &source in &self.vertices {
            if source == self.pivot {
                continue;
            }
            for &target in &self.vertices {
                if target == source || target == self.pivot {
                    continue;
                }
                let mut through = 0usize;
                let summary = search.determine(source, target, |path| {
                    if path.visits(self.pivot) {
                        through += 1;
                    }
                    Ok(())
                })?;
                if summary.paths > 0 {
                    sum += through as f64 / summary.paths as f64;
                }
            }
        }
        Ok(sum)
    }
}

impl TemporalMetric for TemporalBetweennessCentrality {
    type Value = Option<Centrality>;

    fn name(&self) -> &'static str {
        "betweenness"
    }

    fn calculate(&mut self, edges: &[TemporalEdge]) -> Result<(), TemporalMetricError> {
        self.diagram = None;
        validate_edges(edges)?;
        let mut diagram = IntervalDiagram::new(None);
        let span_from = edges.iter().map(|edge| edge.valid_from).min();
        let span_to = edges.iter().map(|edge| edge.valid_to).max();
        if let (Some(from), Some(to)) = (span_from, span_to) {
            let pairs = (self.vertices.len() - 1) * (self.vertices.len() - 2);
            let value = self.ratio_sum(edges)? / pairs as f64;
            log::debug!("betweenness of {} over [{from}, {to}): {value}", self.pivot);
            diagram.insert_min(from, to, Some(Centrality(value)))?;
        }
        self.diagram = Some(diagram);
        Ok(())
    }

    fn calculate_edge(&mut self, _edge: &TemporalEdge) -> Result<(), TemporalMetricError> {
        Err(TemporalMetricError::unsupported(
            "betweenness centrality has no single-edge update",
        ))
    }

    fn data(&self) -> Option<&IntervalDiagram<Option<Centrality>>> {
        self.diagram.as_ref()
    }
}
