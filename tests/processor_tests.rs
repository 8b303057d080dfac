use temporal_metrics::{
    GraphProcessor, HopCount, IntervalDiagram, TemporalEdge, TemporalMetric, TemporalMetricError,
    processor::ProcessorStatus, sample::sample_graph,
};

struct FailingMetric {
    diagram: IntervalDiagram<u8>,
}

impl TemporalMetric for FailingMetric {
    type Value = u8;

    fn name(&self) -> &'static str {
        "failing"
    }

    fn calculate(&mut self, _edges: &[TemporalEdge]) -> Result<(), TemporalMetricError> {
        Err(TemporalMetricError::invalid_argument("boom"))
    }

    fn calculate_edge(&mut self, _edge: &TemporalEdge) -> Result<(), TemporalMetricError> {
        Err(TemporalMetricError::unsupported("boom"))
    }

    fn data(&self) -> Option<&IntervalDiagram<u8>> {
        Some(&self.diagram)
    }
}

#[test]
fn test_processor_exposes_metric_result() {
    let graph = sample_graph().unwrap();
    let start = graph.vertex_id("D").unwrap();
    let end = graph.vertex_id("H").unwrap();
    let mut processor = GraphProcessor::new(HopCount::new(&graph, start, end).unwrap());
    assert_eq!(processor.status(), ProcessorStatus::Idle);
    assert!(processor.data().is_none());

    assert!(processor.process_source(&graph));
    assert_eq!(processor.status(), ProcessorStatus::Ready);
    let data = processor.data().expect("result");
    assert_eq!(data.len(), 3);
    assert_eq!(processor.metric().start(), start);
}

#[test]
fn test_processor_swallows_metric_failure() {
    let mut processor = GraphProcessor::new(FailingMetric {
        diagram: IntervalDiagram::new(0),
    });
    let graph = sample_graph().unwrap();
    assert!(!processor.process(graph.edges()));
    assert_eq!(processor.status(), ProcessorStatus::Failed);
    assert!(processor.data().is_none());
    assert!(!processor.process_edge(&graph.edges()[0]));
}

#[test]
fn test_processor_recovers_after_failure() {
    let graph = sample_graph().unwrap();
    let start = graph.vertex_id("D").unwrap();
    let end = graph.vertex_id("H").unwrap();
    let mut processor = GraphProcessor::new(HopCount::new(&graph, start, end).unwrap());
    let broken = vec![TemporalEdge {
        id: 7,
        source: start,
        target: end,
        valid_from: 9,
        valid_to: 3,
    }];
    assert!(!processor.process(&broken));
    assert!(processor.data().is_none());
    assert!(processor.process(graph.edges()));
    assert!(processor.data().is_some());
    let metric = processor.into_metric();
    assert!(metric.data().is_some());
}

#[test]
fn test_processor_streams_edges() {
    let graph = sample_graph().unwrap();
    let start = graph.vertex_id("D").unwrap();
    let end = graph.vertex_id("H").unwrap();
    let mut processor = GraphProcessor::new(HopCount::new(&graph, start, end).unwrap());
    for edge in graph.edges() {
        assert!(processor.process_edge(edge));
    }
    assert!(processor.data().is_some());
}
