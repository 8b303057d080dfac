use std::collections::BTreeMap;

use temporal_metrics::{
    TemporalConnectedness, TemporalGraph, TemporalMetric, TemporalMetricError,
    sample::sample_graph,
};

fn connectedness(graph: &TemporalGraph, from: &str, to: &str) -> TemporalConnectedness {
    let start = graph.vertex_id(from).unwrap();
    let end = graph.vertex_id(to).unwrap();
    TemporalConnectedness::new(graph, start, end).expect("connectedness")
}

fn flags(entries: &[(i64, u8)]) -> BTreeMap<i64, u8> {
    entries.iter().copied().collect()
}

#[test]
fn test_connectedness_e_to_j_on_sample_graph() {
    let graph = sample_graph().unwrap();
    let mut metric = connectedness(&graph, "E", "J");
    metric.calculate(graph.edges()).unwrap();
    let data = metric.data().unwrap();
    assert_eq!(data.data(), flags(&[(3, 1), (47, 0)]));
    assert_eq!(data.at(2), &0);
    assert_eq!(data.at(46), &1);
}

#[test]
fn test_connectedness_b_to_a_on_sample_graph() {
    let graph = sample_graph().unwrap();
    let mut metric = connectedness(&graph, "B", "A");
    metric.calculate(graph.edges()).unwrap();
    assert_eq!(metric.data().unwrap().data(), flags(&[(12, 1), (38, 0)]));
}

#[test]
fn test_overlapping_hops_do_not_connect() {
    let mut graph = TemporalGraph::new();
    graph.add_edge("a", "b", 0, 10).unwrap();
    graph.add_edge("b", "c", 5, 15).unwrap();
    let mut metric = connectedness(&graph, "a", "c");
    metric.calculate(graph.edges()).unwrap();
    let data = metric.data().unwrap();
    assert!(data.is_empty());
    assert_eq!(data.at(7), &0);
}

#[test]
fn test_journey_spans_departure_to_arrival() {
    let mut graph = TemporalGraph::new();
    graph.add_edge("a", "b", 0, 5).unwrap();
    graph.add_edge("b", "c", 5, 10).unwrap();
    graph.add_edge("b", "c", 3, 8).unwrap();
    graph.add_edge("a", "c", 30, 40).unwrap();
    let mut metric = connectedness(&graph, "a", "c");
    metric.calculate(graph.edges()).unwrap();
    assert_eq!(
        metric.data().unwrap().data(),
        flags(&[(0, 1), (10, 0), (30, 1), (40, 0)])
    );
}

#[test]
fn test_streamed_edges_connect_in_order() {
    let mut graph = TemporalGraph::new();
    graph.add_edge("a", "b", 0, 5).unwrap();
    graph.add_edge("b", "c", 5, 10).unwrap();
    let mut metric = connectedness(&graph, "a", "c");
    metric.calculate_edge(&graph.edges()[0]).unwrap();
    assert!(metric.data().unwrap().is_empty());
    metric.calculate_edge(&graph.edges()[1]).unwrap();
    assert_eq!(metric.data().unwrap().data(), flags(&[(0, 1), (10, 0)]));
}

#[test]
fn test_constructor_rejects_same_endpoints() {
    let graph = sample_graph().unwrap();
    let e = graph.vertex_id("E").unwrap();
    let err = TemporalConnectedness::new(&graph, e, e).unwrap_err();
    assert!(matches!(err, TemporalMetricError::InvalidArgument(_)));
}
