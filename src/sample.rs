//! Ten-vertex, fifty-edge temporal graph used by tests, benches and the CLI.

use crate::{errors::TemporalMetricError, graph::TemporalGraph};

pub const SAMPLE_VERTICES: [&str; 10] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];

/// `(source, target, valid_from, valid_to)`; edge ids follow table order from 1.
pub const SAMPLE_EDGES: [(&str, &str, i64, i64); 50] = [
    ("E", "F", 7, 12),
    ("E", "A", 13, 41),
    ("C", "A", 26, 39),
    ("H", "B", 3, 33),
    ("J", "H", 5, 15),
    ("G", "D", 32, 38),
    ("E", "E", 3, 34),
    ("F", "J", 16, 31),
    ("H", "I", 13, 27),
    ("D", "I", 22, 30),
    ("A", "H", 14, 27),
    ("D", "I", 20, 40),
    ("B", "H", 17, 44),
    ("I", "A", 32, 38),
    ("H", "H", 3, 23),
    ("B", "I", 12, 21),
    ("J", "F", 27, 39),
    ("D", "G", 22, 34),
    ("A", "A", 8, 32),
    ("C", "D", 28, 36),
    ("F", "I", 19, 32),
    ("J", "A", 5, 43),
    ("E", "H", 3, 6),
    ("F", "H", 13, 36),
    ("D", "G", 10, 36),
    ("C", "H", 10, 34),
    ("H", "H", 11, 24),
    ("G", "H", 39, 41),
    ("C", "I", 37, 38),
    ("G", "G", 4, 47),
    ("H", "J", 33, 47),
    ("I", "J", 17, 28),
    ("I", "A", 22, 31),
    ("C", "G", 10, 41),
    ("A", "G", 2, 17),
    ("F", "G", 16, 30),
    ("C", "D", 22, 43),
    ("H", "A", 11, 18),
    ("H", "B", 7, 40),
    ("C", "E", 26, 46),
    ("A", "J", 39, 46),
    ("C", "H", 27, 44),
    ("B", "E", 31, 43),
    ("H", "J", 6, 20),
    ("E", "G", 13, 16),
    ("I", "I", 15, 22),
    ("J", "F", 4, 28),
    ("D", "G", 9, 25),
    ("D", "F", 12, 18),
    ("G", "B", 8, 46),
];

/// Builds the sample graph. Vertices `A..J` get ids `1..=10`.
pub fn sample_graph() -> Result<TemporalGraph, TemporalMetricError> {
    let mut graph = TemporalGraph::new();
    for label in SAMPLE_VERTICES {
        graph.add_vertex(label);
    }
    for (source, target, valid_from, valid_to) in SAMPLE_EDGES {
        graph.add_edge(source, target, valid_from, valid_to)?;
    }
    Ok(graph)
}
