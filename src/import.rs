//! CSV import of temporal graphs.
//!
//! Layout: one header line, then `Source;ValidFrom;Target;ValidTo;Label` per
//! edge. The label column is optional and not kept. Lines that do not parse
//! are skipped with a warning.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{errors::TemporalMetricError, graph::TemporalGraph};

const DELIMITER: char = ';';

#[derive(Debug)]
pub struct ImportedGraph {
    pub graph: TemporalGraph,
    /// 1-based line numbers that were skipped.
    pub skipped_lines: Vec<usize>,
}

pub fn read_csv<R: BufRead>(reader: R) -> Result<ImportedGraph, TemporalMetricError> {
    let mut graph = TemporalGraph::new();
    let mut skipped_lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| TemporalMetricError::import(e.to_string()))?;
        let number = index + 1;
        if number == 1 || line.trim().is_empty() {
            continue;
        }
        let added = parse_line(&line)
            .and_then(|(source, from, target, to)| graph.add_edge(source, target, from, to));
        if let Err(err) = added {
            log::warn!("skipping line {number}: {err}");
            skipped_lines.push(number);
        }
    }
    log::debug!(
        "imported {} vertices, {} edges ({} lines skipped)",
        graph.vertex_count(),
        graph.edge_count(),
        skipped_lines.len()
    );
    Ok(ImportedGraph {
        graph,
        skipped_lines,
    })
}

pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<ImportedGraph, TemporalMetricError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| TemporalMetricError::import(format!("{}: {e}", path.display())))?;
    read_csv(BufReader::new(file))
}

fn parse_line(line: &str) -> Result<(&str, i64, &str, i64), TemporalMetricError> {
    let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    if !(4..=5).contains(&fields.len()) {
        return Err(TemporalMetricError::import(format!(
            "expected 4 or 5 fields, found {}",
            fields.len()
        )));
    }
    let (source, target) = (fields[0], fields[2]);
    if source.is_empty() || target.is_empty() {
        return Err(TemporalMetricError::import("empty vertex label"));
    }
    Ok((source, parse_time(fields[1])?, target, parse_time(fields[3])?))
}

fn parse_time(field: &str) -> Result<i64, TemporalMetricError> {
    field
        .parse::<i64>()
        .map_err(|e| TemporalMetricError::import(format!("bad timestamp {field:?}: {e}")))
}
