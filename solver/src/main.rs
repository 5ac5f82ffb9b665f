use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};
use route_inspection::{solve, validate, Graph, LabelStyle, Report};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Find where a walk covering every edge of a graph should start and end.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Adjacency-matrix files to inspect, in order.
    #[arg(default_values = ["data/park_ranger_input_1.txt", "data/park_ranger_input_2.txt", "data/park_ranger_input_3.txt"])]
    inputs: Vec<PathBuf>,
    /// How to print node ids.
    #[arg(long, default_value_t = LabelStyle::Numeric)]
    labels: LabelStyle,
    /// Refuse graphs that are asymmetric or disconnected instead of warning about them.
    #[arg(long)]
    strict: bool,
}

impl Args {
    /// Inspect every input, writing a report for each solved one to `out`.
    ///
    /// Failures are logged and the input skipped. Returns `false` if any of them failed.
    fn run(&self, out: &mut impl Write) -> bool {
        let mut all_ok = true;
        for path in &self.inputs {
            let display = path.display().to_string();
            let text = match fs::read_to_string(path) {
                Ok(text) => text,
                Err(err) => {
                    error!("skipping {}: {}", display, err);
                    all_ok = false;
                    continue;
                }
            };

            let graph = match text.parse::<Graph>() {
                Ok(graph) => graph,
                Err(err) => {
                    error!("failed to parse {}: {}", display, err);
                    all_ok = false;
                    continue;
                }
            };
            info!("read {} with {} nodes and {} edges", display, graph.node_count(), graph.edge_count());

            let defects = validate(&graph);
            for defect in &defects {
                warn!("{}: {}", display, defect);
            }
            if self.strict && !defects.is_empty() {
                error!("skipping {}: {} validation defects", display, defects.len());
                all_ok = false;
                continue;
            }

            let inspection = match solve(&graph) {
                Ok(inspection) => inspection,
                Err(err) => {
                    error!("failed to solve {}: {}", display, err);
                    all_ok = false;
                    continue;
                }
            };

            let report = Report {
                source: &display,
                graph: &graph,
                inspection: &inspection,
                labels: self.labels,
            };
            if let Err(err) = writeln!(out, "{}", report) {
                error!("failed to write report for {}: {}", display, err);
                all_ok = false;
            }
        }

        all_ok
    }
}


fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    if Args::parse().run(&mut io::stdout().lock()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
