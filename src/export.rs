use std::{fs::File, io::Write, path::Path};

use serde::Serialize;

use crate::{
    diagram::IntervalDiagram,
    errors::TemporalMetricError,
    metrics::{Centrality, ShortestPath},
};

const CSV_HEADER: &str = "Time;Metric";
const NULL: &str = "null";

/// Text form of a diagram value for CSV rows; `None` prints as `null`.
pub trait DiagramValue {
    fn render(&self) -> Option<String>;
}

impl DiagramValue for u8 {
    fn render(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl DiagramValue for Option<usize> {
    fn render(&self) -> Option<String> {
        self.map(|hops| hops.to_string())
    }
}

impl DiagramValue for Option<ShortestPath> {
    fn render(&self) -> Option<String> {
        self.as_ref().map(|path| path.duration.to_string())
    }
}

impl DiagramValue for Option<Centrality> {
    fn render(&self) -> Option<String> {
        self.map(|centrality| centrality.to_string())
    }
}

#[derive(Serialize)]
struct JsonPoint<'a, Y> {
    time: i64,
    value: &'a Y,
}

pub fn write_csv<Y, W>(diagram: &IntervalDiagram<Y>, mut out: W) -> Result<(), TemporalMetricError>
where
    Y: Ord + Clone + DiagramValue,
    W: Write,
{
    let io = |e: std::io::Error| TemporalMetricError::export(e.to_string());
    writeln!(out, "{CSV_HEADER}").map_err(io)?;
    for (time, value) in diagram.iter() {
        let rendered = value.render();
        writeln!(out, "{time};{}", rendered.as_deref().unwrap_or(NULL)).map_err(io)?;
    }
    out.flush().map_err(io)
}

pub fn to_csv<Y>(diagram: &IntervalDiagram<Y>) -> Result<String, TemporalMetricError>
where
    Y: Ord + Clone + DiagramValue,
{
    let mut buffer = Vec::new();
    write_csv(diagram, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| TemporalMetricError::export(e.to_string()))
}

/// Writes the CSV form to `path`, replacing any existing file.
pub fn save_csv<Y, P>(diagram: &IntervalDiagram<Y>, path: P) -> Result<(), TemporalMetricError>
where
    Y: Ord + Clone + DiagramValue,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| TemporalMetricError::export(format!("{}: {e}", path.display())))?;
    write_csv(diagram, file)?;
    log::debug!("saved {} breakpoints to {}", diagram.len(), path.display());
    Ok(())
}

/// JSON array of `{ "time": .., "value": .. }` in key order.
pub fn to_json<Y>(diagram: &IntervalDiagram<Y>) -> Result<String, TemporalMetricError>
where
    Y: Ord + Clone + Serialize,
{
    let points: Vec<JsonPoint<'_, Y>> = diagram
        .iter()
        .map(|(time, value)| JsonPoint { time, value })
        .collect();
    serde_json::to_string_pretty(&points).map_err(|e| TemporalMetricError::export(e.to_string()))
}
