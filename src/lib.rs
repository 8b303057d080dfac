//! Valid-time metrics over temporal graphs.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod bench_utils;
pub mod config;
pub mod diagram;
pub mod errors;
pub mod export;
pub mod graph;
pub mod import;
pub mod metrics;
pub mod processor;
pub mod sample;
pub mod search;

pub use crate::diagram::{IntervalDiagram, Precedence};
pub use crate::errors::TemporalMetricError;
pub use crate::graph::{EdgeSource, TemporalEdge, TemporalGraph, TimeWindow, VertexId, VertexLookup};
pub use crate::metrics::{
    HopCount, TemporalBetweennessCentrality, TemporalConnectedness, TemporalMetric,
    TemporalShortestPath,
};
pub use crate::processor::GraphProcessor;
pub use crate::search::{ExtensionRule, OverlapRule, PathSearch, PathView, SuccessionRule};
