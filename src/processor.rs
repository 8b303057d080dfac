use crate::{
    diagram::IntervalDiagram,
    graph::{EdgeSource, TemporalEdge},
    metrics::TemporalMetric,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessorStatus {
    Idle,
    Ready,
    Failed,
}

/// Feeds edge collections to one metric and exposes its result.
///
/// A metric error never escapes `process`: it is logged and the processor
/// reports no result until the next successful run.
#[derive(Debug)]
pub struct GraphProcessor<M> {
    metric: M,
    status: ProcessorStatus,
}

impl<M> GraphProcessor<M>
where
    M: TemporalMetric,
{
    pub fn new(metric: M) -> Self {
        Self {
            metric,
            status: ProcessorStatus::Idle,
        }
    }

    /// Runs the metric over `edges`; returns whether a result is available.
    pub fn process(&mut self, edges: &[TemporalEdge]) -> bool {
        match self.metric.calculate(edges) {
            Ok(()) => {
                log::debug!("{} processed {} edges", self.metric.name(), edges.len());
                self.status = ProcessorStatus::Ready;
                true
            }
            Err(err) => {
                log::error!("{} failed: {err}", self.metric.name());
                self.status = ProcessorStatus::Failed;
                false
            }
        }
    }

    pub fn process_source<S>(&mut self, source: &S) -> bool
    where
        S: EdgeSource + ?Sized,
    {
        self.process(source.temporal_edges())
    }

    /// Streams one edge into the metric. Failures are logged, not propagated.
    pub fn process_edge(&mut self, edge: &TemporalEdge) -> bool {
        match self.metric.calculate_edge(edge) {
            Ok(()) => {
                self.status = ProcessorStatus::Ready;
                true
            }
            Err(err) => {
                log::error!("{} failed on edge {}: {err}", self.metric.name(), edge.id);
                self.status = ProcessorStatus::Failed;
                false
            }
        }
    }

    /// The metric's diagram, `None` before the first run or after a failed one.
    pub fn data(&self) -> Option<&IntervalDiagram<M::Value>> {
        match self.status {
            ProcessorStatus::Ready => self.metric.data(),
            ProcessorStatus::Idle | ProcessorStatus::Failed => None,
        }
    }

    pub fn status(&self) -> ProcessorStatus {
        self.status
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    pub fn into_metric(self) -> M {
        self.metric
    }
}
