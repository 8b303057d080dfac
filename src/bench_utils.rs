use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{errors::TemporalMetricError, graph::TemporalGraph};

#[derive(Clone, Debug)]
pub enum GraphShape {
    Line,
    Star,
    RandomErdosRenyi { edges: usize },
}

/// Time axis of generated edges: every interval lies in `[0, horizon)` and
/// lasts at most `max_duration`.
#[derive(Clone, Copy, Debug)]
pub struct TimeAxis {
    pub horizon: i64,
    pub max_duration: i64,
}

impl Default for TimeAxis {
    fn default() -> Self {
        Self {
            horizon: 100,
            max_duration: 30,
        }
    }
}

/// Generates a directed temporal graph with vertices labelled `N0..`.
pub fn generate_graph(
    shape: GraphShape,
    node_count: usize,
    axis: TimeAxis,
    seed: u64,
) -> Result<TemporalGraph, TemporalMetricError> {
    if node_count < 2 {
        return Err(TemporalMetricError::invalid_argument(
            "node_count must exceed 1",
        ));
    }
    if axis.horizon < 2 || axis.max_duration < 1 {
        return Err(TemporalMetricError::invalid_argument(format!(
            "degenerate time axis {axis:?}"
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let pairs = match shape {
        GraphShape::Line => (0..node_count - 1).map(|idx| (idx, idx + 1)).collect(),
        GraphShape::Star => (1..node_count).map(|leaf| (0, leaf)).collect(),
        GraphShape::RandomErdosRenyi { edges } => random_pairs(&mut rng, node_count, edges)?,
    };
    let mut graph = TemporalGraph::new();
    for idx in 0..node_count {
        graph.add_vertex(&label(idx));
    }
    for (from, to) in pairs {
        let valid_from = rng.gen_range(0..axis.horizon - 1);
        let longest = axis.max_duration.min(axis.horizon - valid_from);
        let valid_to = valid_from + rng.gen_range(1..=longest);
        graph.add_edge(&label(from), &label(to), valid_from, valid_to)?;
    }
    Ok(graph)
}

pub fn label(idx: usize) -> String {
    format!("N{idx}")
}

// Geometric skips over the n(n-1) ordered pairs, clamped so that exactly
// `edge_count` pairs are picked.
fn random_pairs(
    rng: &mut StdRng,
    node_count: usize,
    edge_count: usize,
) -> Result<Vec<(usize, usize)>, TemporalMetricError> {
    let total_pairs = ordered_pair_count(node_count);
    if edge_count as u128 > total_pairs {
        return Err(TemporalMetricError::invalid_argument(
            "edge_count exceeds possible pairs",
        ));
    }
    let total = total_pairs as u64;
    let mut pairs = Vec::with_capacity(edge_count);
    let mut idx = 0u64;
    let mut remaining = edge_count as u64;
    while remaining > 0 && idx < total {
        let p = remaining as f64 / (total - idx) as f64;
        idx += sample_geometric(rng, p).min(total - idx - remaining);
        pairs.push(pair_from_index(idx, node_count as u64));
        idx += 1;
        remaining -= 1;
    }
    Ok(pairs)
}

fn ordered_pair_count(nodes: usize) -> u128 {
    let n = nodes as u128;
    n * (n - 1)
}

fn sample_geometric(rng: &mut StdRng, p: f64) -> u64 {
    if p >= 1.0 {
        return 0;
    }
    let u: f64 = rng.gen_range(f64::MIN_POSITIVE..1.0);
    (u.ln() / (1.0 - p).ln()).floor().max(0.0) as u64
}

fn pair_from_index(idx: u64, nodes: u64) -> (usize, usize) {
    let source = idx / (nodes - 1);
    let offset = idx % (nodes - 1);
    let target = if offset >= source { offset + 1 } else { offset };
    (source as usize, target as usize)
}
