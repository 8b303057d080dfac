use crate::{
    diagram::IntervalDiagram,
    errors::TemporalMetricError,
    graph::{TemporalEdge, VertexId, VertexLookup, validate_edge, validate_edges},
    search::{OverlapRule, PathSearch},
};

use super::{EdgeLog, TemporalMetric, validate_endpoints};

/// Fewest hops from `start` to `end` at every point in time. `None` where the
/// end vertex is unreachable.
#[derive(Clone, Debug)]
pub struct HopCount {
    start: VertexId,
    end: VertexId,
    diagram: Option<IntervalDiagram<Option<usize>>>,
    log: EdgeLog,
}

impl HopCount {
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

    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn end(&self) -> VertexId {
        self.end
    }

    fn paint(
        &self,
        edges: &[TemporalEdge],
        diagram: &mut IntervalDiagram<Option<usize>>,
    ) -> Result<usize, TemporalMetricError> {
        let search = PathSearch::new(edges, OverlapRule);
        let summary = search.determine(self.start, self.end, |path| {
            let window = path.window();
            diagram.insert_min(window.from, window.to, Some(path.len()))
        })?;
        Ok(summary.paths)
    }
}

impl TemporalMetric for HopCount {
    type Value = Option<usize>;

    fn name(&self) -> &'static str {
        "hop-count"
    }

    fn calculate(&mut self, edges: &[TemporalEdge]) -> Result<(), TemporalMetricError> {
        self.diagram = None;
        validate_edges(edges)?;
        let mut diagram = IntervalDiagram::new(None);
        let paths = self.paint(edges, &mut diagram)?;
        log::debug!(
            "hop count {} -> {}: {paths} paths, {} breakpoints",
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

    fn data(&self) -> Option<&IntervalDiagram<Option<usize>>> {
        self.diagram.as_ref()
    }
}
