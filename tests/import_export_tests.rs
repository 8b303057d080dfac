use std::{fs, io::Cursor};

use serde_json::Value;
use temporal_metrics::{
    HopCount, TemporalConnectedness, TemporalMetric, TemporalMetricError, TemporalShortestPath,
    export::{save_csv, to_csv, to_json},
    import::{load_csv, read_csv},
    sample::{SAMPLE_EDGES, sample_graph},
};

const MIXED_CSV: &str = "Source;ValidFrom;Target;ValidTo;Label
A;1;B;5;x
B;3;C;9

bad line
C;7;D;x;y
D;9;A;9;z
";

#[test]
fn test_import_skips_malformed_lines() {
    let imported = read_csv(Cursor::new(MIXED_CSV)).unwrap();
    assert_eq!(imported.graph.edge_count(), 2);
    assert_eq!(imported.graph.vertex_count(), 3);
    assert_eq!(imported.skipped_lines, vec![5, 6, 7]);
    let edge = &imported.graph.edges()[1];
    assert_eq!((edge.valid_from, edge.valid_to), (3, 9));
    assert_eq!(imported.graph.label_of(edge.source), Some("B"));
}

#[test]
fn test_import_of_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_csv(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, TemporalMetricError::Import(_)));
}

#[test]
fn test_imported_sample_matches_builtin_sample() {
    let mut text = String::from("Source;ValidFrom;Target;ValidTo;Label\n");
    for (idx, (source, target, from, to)) in SAMPLE_EDGES.iter().enumerate() {
        text.push_str(&format!("{source};{from};{target};{to};e{}\n", idx + 1));
    }
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.csv");
    fs::write(&path, text).unwrap();

    let imported = load_csv(&path).unwrap();
    assert!(imported.skipped_lines.is_empty());
    let graph = imported.graph;
    let builtin = sample_graph().unwrap();
    assert_eq!(graph.edge_count(), builtin.edge_count());

    let mut from_file = HopCount::new(
        &graph,
        graph.vertex_id("D").unwrap(),
        graph.vertex_id("H").unwrap(),
    )
    .unwrap();
    from_file.calculate(graph.edges()).unwrap();
    let mut from_builtin = HopCount::new(
        &builtin,
        builtin.vertex_id("D").unwrap(),
        builtin.vertex_id("H").unwrap(),
    )
    .unwrap();
    from_builtin.calculate(builtin.edges()).unwrap();
    assert_eq!(from_file.data(), from_builtin.data());
}

fn sample_hop_count() -> HopCount {
    let graph = sample_graph().unwrap();
    let mut metric = HopCount::new(
        &graph,
        graph.vertex_id("D").unwrap(),
        graph.vertex_id("H").unwrap(),
    )
    .unwrap();
    metric.calculate(graph.edges()).unwrap();
    metric
}

#[test]
fn test_csv_export_writes_null_for_unreachable() {
    let metric = sample_hop_count();
    let csv = to_csv(metric.data().unwrap()).unwrap();
    assert_eq!(csv, "Time;Metric\n13;2\n18;3\n36;null\n");
}

#[test]
fn test_csv_export_of_other_value_types() {
    let graph = sample_graph().unwrap();
    let e = graph.vertex_id("E").unwrap();
    let j = graph.vertex_id("J").unwrap();

    let mut connected = TemporalConnectedness::new(&graph, e, j).unwrap();
    connected.calculate(graph.edges()).unwrap();
    assert_eq!(
        to_csv(connected.data().unwrap()).unwrap(),
        "Time;Metric\n3;1\n47;0\n"
    );

    let mut shortest = TemporalShortestPath::new(&graph, e, j).unwrap();
    shortest.calculate(graph.edges()).unwrap();
    assert_eq!(
        to_csv(shortest.data().unwrap()).unwrap(),
        "Time;Metric\n14;6\n17;4\n21;10\n27;null\n39;2\n41;null\n"
    );
}

#[test]
fn test_json_export_lists_points_in_order() {
    let metric = sample_hop_count();
    let json = to_json(metric.data().unwrap()).unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();
    let points = parsed.as_array().expect("array");
    assert_eq!(points.len(), 3);
    assert_eq!(points[0]["time"], 13);
    assert_eq!(points[0]["value"], 2);
    assert_eq!(points[1]["time"], 18);
    assert_eq!(points[2]["value"], Value::Null);
}

#[test]
fn test_save_csv_replaces_file() {
    let metric = sample_hop_count();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hop_count.csv");
    fs::write(&path, "stale contents that are longer than the export itself\n".repeat(4)).unwrap();
    save_csv(metric.data().unwrap(), &path).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, to_csv(metric.data().unwrap()).unwrap());
}
