use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricKind {
    HopCount,
    ShortestPath,
    Connectedness,
    Betweenness,
}

impl FromStr for MetricKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "hop-count" => Ok(Self::HopCount),
            "shortest-path" => Ok(Self::ShortestPath),
            "connectedness" => Ok(Self::Connectedness),
            "betweenness" => Ok(Self::Betweenness),
            other => Err(format!("unknown metric {other}")),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HopCount => "hop-count",
            Self::ShortestPath => "shortest-path",
            Self::Connectedness => "connectedness",
            Self::Betweenness => "betweenness",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    /// `sample` or a path to a CSV file.
    pub graph: String,
    pub metric: MetricKind,
    pub from: Option<String>,
    pub to: Option<String>,
    pub pivot: Option<String>,
    pub format: OutputFormat,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut graph = String::from("sample");
        let mut metric = MetricKind::HopCount;
        let mut from = None;
        let mut to = None;
        let mut pivot = None;
        let mut format = OutputFormat::Csv;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            let mut value = |flag: &str| {
                iter.next()
                    .map(|v| v.to_string())
                    .ok_or_else(|| format!("{flag} requires a value"))
            };
            match *arg {
                "--graph" => graph = value("--graph")?,
                "--metric" => metric = value("--metric")?.parse()?,
                "--from" => from = Some(value("--from")?),
                "--to" => to = Some(value("--to")?),
                "--pivot" => pivot = Some(value("--pivot")?),
                "--format" => format = value("--format")?.parse()?,
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                other => return Err(format!("unexpected argument {other}")),
            }
        }
        Ok(Self {
            graph,
            metric,
            from,
            to,
            pivot,
            format,
        })
    }

    pub fn help() -> &'static str {
        "Usage: temporal-metrics [--graph sample|PATH] \
         [--metric hop-count|shortest-path|connectedness|betweenness] \
         [--from LABEL] [--to LABEL] [--pivot LABEL] [--format csv|json]\n"
    }
}
