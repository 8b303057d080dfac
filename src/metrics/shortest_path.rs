use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{
    diagram::IntervalDiagram,
    errors::TemporalMetricError,
    graph::{TemporalEdge, VertexId, VertexLookup, validate_edge, validate_edges},
    search::{OverlapRule, PathSearch},
};

use super::{EdgeLog, TemporalMetric, validate_endpoints};

/// A path ranked by how long all of its edges coexist.
///
/// Equality and ordering look at `duration` only, so adjacent segments whose
/// paths last equally long merge into one breakpoint and, on a tie, the path
/// written first is kept.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShortestPath {
    pub duration: i64,
    pub edge_ids: Vec<i64>,
}

impl PartialEq for ShortestPath {
    fn eq(&self, other: &Self) -> bool {
        self.duration == other.duration
    }
}

impl Eq for ShortestPath {}

impl PartialOrd for ShortestPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ShortestPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.duration.cmp(&other.duration)
    }
}

impl ShortestPath {
    pub fn hops(&self) -> usize {
        self.edge_ids.len()
    }
}

/// Temporal shortest path: among the paths alive at each instant, the one
/// whose common valid-time window is shortest.
#[derive(Clone, Debug)]
pub struct TemporalShortestPath {
    start: VertexId,
    end: VertexId,
    diagram: Option<IntervalDiagram<Option<ShortestPath>>>,
    log: EdgeLog,
}

impl TemporalShortestPath {
    pub fn new<L>(lookup: &L, start: VertexId, end: VertexId) -> Result<Self, TemporalMetricError>
    where
        L: VertexLookup + ?Sized,
    {
        validate_endpoints(lookup, start, end)?;
        Ok(Self {
            start,
            end,
            diagram: None,
            log: EdgeLog::new(),
        })
    }

    fn paint(
        &self,
        edges: &[TemporalEdge],
        diagram: &mut IntervalDiagram<Option<ShortestPath>>,
    ) -> Result<usize, TemporalMetricError> {
        let search = PathSearch::new(edges, OverlapRule);
        let summary = search.determine(self.start, self.end, |path| {
            let window = path.window();
            let value = ShortestPath {
                duration: window.duration(),
                edge_ids: path.edge_ids(),
            };
            diagram.insert_min(window.from, window.to, Some(value))
        })?;
        Ok(summary.paths)
    }
}

impl TemporalMetric for TemporalShortestPath {
    type Value = Option<ShortestPath>;

    fn name(&self) -> &'static str {
        "shortest-path"
    }

    fn calculate(&mut self, edges: &[TemporalEdge]) -> Result<(), TemporalMetricError> {
        self.diagram = None;
        validate_edges(edges)?;
        let mut diagram = IntervalDiagram::new(None);
        let paths = self.paint(edges, &mut diagram)?;
        log::debug!(
            "shortest path {} -> {}: {paths} paths, {} breakpoints",
            self.start,
            self.end,
            diagram.len()
        );
        self.log.replace(edges);
        self.diagram = Some(diagram);
        Ok(())
    }

    fn calculate_edge(&mut self, edge: &TemporalEdge) -> Result<(), TemporalMetricError> {
        validate_edge(edge)?;
        let candidates = self.log.overlapping(edge);
        let mut diagram = self
            .diagram
            .take()
            .unwrap_or_else(|| IntervalDiagram::new(None));
        let outcome = self.paint(&candidates, &mut diagram);
        self.diagram = Some(diagram);
        outcome?;
        self.log.push(edge.clone());
        Ok(())
    }

    fn data(&self) -> Option<&IntervalDiagram<Option<ShortestPath>>> {
        self.diagram.as_ref()
    }
}
