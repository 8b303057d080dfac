use crate::{
    diagram::IntervalDiagram,
    errors::TemporalMetricError,
    graph::{TemporalEdge, VertexId, VertexLookup, validate_edge, validate_edges},
    search::{PathSearch, SuccessionRule},
};

use super::{EdgeLog, TemporalMetric, validate_endpoints};

pub const CONNECTED: u8 = 1;
pub const DISCONNECTED: u8 = 0;

/// Whether `end` can be reached from `start` by a time-respecting journey:
/// every hop starts no earlier than the previous one ends. A journey marks the
/// whole span from its first departure to its last arrival as connected.
#[derive(Clone, Debug)]
pub struct TemporalConnectedness {
    start: VertexId,
    end: VertexId,
    diagram: Option<IntervalDiagram<u8>>,
    log: EdgeLog,
}

impl TemporalConnectedness {
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
        diagram: &mut IntervalDiagram<u8>,
    ) -> Result<usize, TemporalMetricError> {
        let search = PathSearch::new(edges, SuccessionRule);
        let summary = search.determine(self.start, self.end, |path| {
            diagram.insert_max(path.first().valid_from, path.last().valid_to, CONNECTED)
        })?;
        Ok(summary.paths)
    }
}

impl TemporalMetric for TemporalConnectedness {
    type Value = u8;

    fn name(&self) -> &'static str {
        "connectedness"
    }

    fn calculate(&mut self, edges: &[TemporalEdge]) -> Result<(), TemporalMetricError> {
        self.diagram = None;
        validate_edges(edges)?;
        let mut diagram = IntervalDiagram::new(DISCONNECTED);
        let journeys = self.paint(edges, &mut diagram)?;
        log::debug!(
            "connectedness {} -> {}: {journeys} journeys, {} breakpoints",
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
        let candidates = self.log.succeeding(edge);
        let mut diagram = self
            .diagram
            .take()
            .unwrap_or_else(|| IntervalDiagram::new(DISCONNECTED));
        let outcome = self.paint(&candidates, &mut diagram);
        self.diagram = Some(diagram);
        outcome?;
        self.log.push(edge.clone());
        Ok(())
    }

    fn data(&self) -> Option<&IntervalDiagram<u8>> {
        self.diagram.as_ref()
    }
}
