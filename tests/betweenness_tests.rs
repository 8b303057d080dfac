use temporal_metrics::{
    TemporalBetweennessCentrality, TemporalGraph, TemporalMetric, TemporalMetricError, VertexId,
    metrics::Centrality,
    sample::sample_graph,
};

fn centrality_on_sample(pivot: &str) -> (f64, Vec<i64>) {
    let graph = sample_graph().unwrap();
    let pivot = graph.vertex_id(pivot).unwrap();
    let mut metric = TemporalBetweennessCentrality::new(&graph, pivot).unwrap();
    metric.calculate(graph.edges()).unwrap();
    let data = metric.data().unwrap();
    let keys: Vec<i64> = data.data().keys().copied().collect();
    let value = data.at(2).expect("value over span").value();
    (value, keys)
}

#[test]
fn test_betweenness_of_a_on_sample_graph() {
    let (value, keys) = centrality_on_sample("A");
    assert!((value - 0.205_011_310_573_296_77).abs() < 1e-4, "got {value}");
    assert_eq!(keys, vec![2, 47]);
}

#[test]
fn test_betweenness_of_e_on_sample_graph() {
    let (value, keys) = centrality_on_sample("E");
    assert!((value - 0.031_124_617_091_344_318).abs() < 1e-4, "got {value}");
    assert_eq!(keys, vec![2, 47]);
}

#[test]
fn test_line_pivot_carries_every_path() {
    let mut graph = TemporalGraph::new();
    graph.add_edge("a", "b", 0, 10).unwrap();
    graph.add_edge("b", "c", 5, 15).unwrap();
    let pivot = graph.vertex_id("b").unwrap();
    let mut metric = TemporalBetweennessCentrality::new(&graph, pivot).unwrap();
    metric.calculate(graph.edges()).unwrap();
    let data = metric.data().unwrap();
    assert_eq!(data.at(0), &Some(Centrality(0.5)));
    assert_eq!(data.at(14), &Some(Centrality(0.5)));
    assert_eq!(data.at(15), &None);
}

#[test]
fn test_empty_edge_set_gives_empty_diagram() {
    let graph = sample_graph().unwrap();
    let pivot = graph.vertex_id("A").unwrap();
    let mut metric = TemporalBetweennessCentrality::new(&graph, pivot).unwrap();
    metric.calculate(&[]).unwrap();
    assert!(metric.data().unwrap().is_empty());
}

#[test]
fn test_constructor_validates_pivot_and_size() {
    let graph = sample_graph().unwrap();
    assert!(TemporalBetweennessCentrality::new(&graph, VertexId(42)).is_err());

    let mut small = TemporalGraph::new();
    small.add_edge("a", "b", 0, 1).unwrap();
    let err = TemporalBetweennessCentrality::new(&small, VertexId(1)).unwrap_err();
    assert!(matches!(err, TemporalMetricError::InvalidArgument(_)));
}

#[test]
fn test_streaming_is_unsupported() {
    let graph = sample_graph().unwrap();
    let pivot = graph.vertex_id("A").unwrap();
    let mut metric = TemporalBetweennessCentrality::new(&graph, pivot).unwrap();
    let err = metric.calculate_edge(&graph.edges()[0]).unwrap_err();
    assert!(matches!(err, TemporalMetricError::Unsupported(_)));
}

#[test]
fn test_centrality_is_totally_ordered() {
    assert!(Centrality(0.1) < Centrality(0.2));
    assert_eq!(Centrality(0.3), Centrality(0.3));
    assert_eq!(Centrality(f64::NAN).cmp(&Centrality(f64::NAN)), std::cmp::Ordering::Equal);
}
