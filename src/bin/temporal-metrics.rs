use std::{env, process};

use serde::Serialize;
use temporal_metrics::{
    TemporalMetricError,
    config::{CommandLineConfig, MetricKind, OutputFormat},
    export::{self, DiagramValue},
    graph::TemporalGraph,
    import,
    metrics::{
        HopCount, TemporalBetweennessCentrality, TemporalConnectedness, TemporalMetric,
        TemporalShortestPath,
    },
    processor::GraphProcessor,
    sample,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            eprint!("{}", CommandLineConfig::help());
            process::exit(2);
        }
    };

    let graph = match open_graph(&config.graph) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    match run_metric(&config, &graph) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("metric failed: {err}");
            process::exit(1);
        }
    }
}

fn open_graph(source: &str) -> Result<TemporalGraph, TemporalMetricError> {
    if source == "sample" {
        return sample::sample_graph();
    }
    let imported = import::load_csv(source)?;
    if !imported.skipped_lines.is_empty() {
        log::warn!("{} lines of {source} were skipped", imported.skipped_lines.len());
    }
    Ok(imported.graph)
}

fn run_metric(
    config: &CommandLineConfig,
    graph: &TemporalGraph,
) -> Result<String, TemporalMetricError> {
    match config.metric {
        MetricKind::Betweenness => {
            let pivot = graph.vertex_id(required(&config.pivot, "--pivot")?)?;
            let metric = TemporalBetweennessCentrality::new(graph, pivot)?;
            render(metric, graph, config.format)
        }
        kind => {
            let start = graph.vertex_id(required(&config.from, "--from")?)?;
            let end = graph.vertex_id(required(&config.to, "--to")?)?;
            match kind {
                MetricKind::HopCount => {
                    render(HopCount::new(graph, start, end)?, graph, config.format)
                }
                MetricKind::ShortestPath => render(
                    TemporalShortestPath::new(graph, start, end)?,
                    graph,
                    config.format,
                ),
                _ => render(
                    TemporalConnectedness::new(graph, start, end)?,
                    graph,
                    config.format,
                ),
            }
        }
    }
}

fn render<M>(
    metric: M,
    graph: &TemporalGraph,
    format: OutputFormat,
) -> Result<String, TemporalMetricError>
where
    M: TemporalMetric,
    M::Value: DiagramValue + Serialize,
{
    let name = metric.name();
    let mut processor = GraphProcessor::new(metric);
    processor.process_source(graph);
    let diagram = processor
        .data()
        .ok_or_else(|| TemporalMetricError::invalid_argument(format!("{name} produced no result")))?;
    match format {
        OutputFormat::Csv => export::to_csv(diagram),
        OutputFormat::Json => export::to_json(diagram).map(|json| json + "\n"),
    }
}

fn required<'a>(value: &'a Option<String>, flag: &str) -> Result<&'a str, TemporalMetricError> {
    value
        .as_deref()
        .ok_or_else(|| TemporalMetricError::invalid_argument(format!("{flag} is required")))
}
