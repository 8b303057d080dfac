//! Temporal graph metrics built on [`crate::search::PathSearch`] and
//! [`crate::diagram::IntervalDiagram`].
//!
//! Each metric owns its diagram and a log of the edges it has seen. A batch
//! [`TemporalMetric::calculate`] replaces both; [`TemporalMetric::calculate_edge`]
//! is a best-effort update that re-runs the full path search over the logged
//! edges compatible with the new one. It does not retract anything written
//! earlier and may miss paths whose compatibility is only established through
//! other edges, so it approximates rather than equals a batch recomputation.

mod betweenness;
mod connectedness;
mod hop_count;
mod shortest_path;

pub use betweenness::{Centrality, TemporalBetweennessCentrality};
pub use connectedness::{CONNECTED, DISCONNECTED, TemporalConnectedness};
pub use hop_count::HopCount;
pub use shortest_path::{ShortestPath, TemporalShortestPath};

use crate::{
    diagram::IntervalDiagram,
    errors::TemporalMetricError,
    graph::{TemporalEdge, VertexId, VertexLookup},
};

pub trait TemporalMetric {
    type Value: Ord + Clone;

    fn name(&self) -> &'static str;

    /// Recomputes the metric from scratch over `edges`.
    fn calculate(&mut self, edges: &[TemporalEdge]) -> Result<(), TemporalMetricError>;

    /// Folds a single new edge into the current result (best effort).
    fn calculate_edge(&mut self, edge: &TemporalEdge) -> Result<(), TemporalMetricError>;

    /// The current result, `None` until a calculation has run.
    fn data(&self) -> Option<&IntervalDiagram<Self::Value>>;
}

/// Metric-local record of every edge passed to a metric.
#[derive(Clone, Debug, Default)]
pub(crate) struct EdgeLog {
    edges: Vec<TemporalEdge>,
}

impl EdgeLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn replace(&mut self, edges: &[TemporalEdge]) {
        self.edges.clear();
        self.edges.extend_from_slice(edges);
    }

    pub(crate) fn push(&mut self, edge: TemporalEdge) {
        self.edges.push(edge);
    }

    /// Logged edges that can share an overlap-connected path with `edge`, plus `edge`.
    pub(crate) fn overlapping(&self, edge: &TemporalEdge) -> Vec<TemporalEdge> {
        let interval = edge.interval();
        self.select(edge, |logged| logged.interval().overlaps(&interval))
    }

    /// Logged edges that can precede or follow `edge` on a time-ordered path, plus `edge`.
    pub(crate) fn succeeding(&self, edge: &TemporalEdge) -> Vec<TemporalEdge> {
        self.select(edge, |logged| {
            logged.valid_to <= edge.valid_from || logged.valid_from >= edge.valid_to
        })
    }

    fn select<P>(&self, edge: &TemporalEdge, keep: P) -> Vec<TemporalEdge>
    where
        P: Fn(&TemporalEdge) -> bool,
    {
        let mut selected: Vec<TemporalEdge> = self
            .edges
            .iter()
            .filter(|logged| keep(logged))
            .cloned()
            .collect();
        selected.push(edge.clone());
        selected
    }
}

pub(crate) fn validate_endpoints<L>(
    lookup: &L,
    start: VertexId,
    end: VertexId,
) -> Result<(), TemporalMetricError>
where
    L: VertexLookup + ?Sized,
{
    if start == end {
        return Err(TemporalMetricError::invalid_argument(format!(
            "start and end vertex can't be the same ({start})"
        )));
    }
    for id in [start, end] {
        if !lookup.contains_vertex(id) {
            return Err(TemporalMetricError::invalid_argument(format!(
                "unknown vertex {id}"
            )));
        }
    }
    Ok(())
}
