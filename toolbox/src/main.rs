use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use plain_report::{PlainReporter, Reporter};
use results_memory::Collector;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{info, warn};

mod config;
mod findings;
mod logging;

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_else(|_| String::new())
}

#[derive(Debug, Parser)]
#[command(name = "toolbox", version, about = "Kubernetes hunt results as a plain-text report")]
struct Cli {
    /// Optional config file (YAML). If omitted, loads ./toolbox.yaml if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print version information
    Version,
    /// Replay a findings file through concurrent hunters and print the report
    Report {
        /// Findings document (YAML, or JSON with a .json extension)
        findings: PathBuf,
        /// Only list discovered nodes
        #[arg(long, default_value_t = false)]
        mapping: bool,
        /// Append per-hunter statistics
        #[arg(long, default_value_t = false)]
        statistics: bool,
        /// Output file (overwrites). Stdout if omitted.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;
    match cli.command {
        Commands::Version => {
            println!("toolbox {} (core {})", env!("CARGO_PKG_VERSION"), hunt_core::version());
        }
        Commands::Report { findings, mapping, statistics, out } => {
            let cfg = config::load_config(cli.config.as_deref())?;
            let report_cfg = cfg.report_config(mapping, statistics);
            let doc = findings::load_findings(&findings)?;

            let collector = Arc::new(Collector::new());
            for hunter in &doc.hunters {
                if let Err(e) = collector.register_hunter(hunter.info()) {
                    warn!(error = %e, "skipping hunter registration");
                }
            }

            let started_at = now_rfc3339();
            let start = Instant::now();
            let rt = tokio::runtime::Runtime::new()?;
            let rejected = rt.block_on(async {
                let mut handles = Vec::with_capacity(doc.hunters.len());
                for hunter in doc.hunters {
                    let c = collector.clone();
                    handles.push(tokio::spawn(async move { findings::publish(&c, hunter) }));
                }
                let mut rejected = 0;
                for h in handles {
                    rejected += h.await.map_err(|e| anyhow!("hunter task failed: {e}"))?;
                }
                Ok::<usize, anyhow::Error>(rejected)
            })?;
            info!(
                started_at = %started_at,
                ended_at = %now_rfc3339(),
                duration_ms = start.elapsed().as_millis() as u64,
                services = collector.count_services(),
                vulnerabilities = collector.count_vulnerabilities(),
                rejected,
                "hunt finished"
            );

            let report = PlainReporter::new(collector).get_report(&report_cfg);
            if let Some(path) = out {
                let file =
                    OpenOptions::new().create(true).truncate(true).write(true).open(&path)?;
                let mut w = BufWriter::new(file);
                writeln!(w, "{}", report)?;
                w.flush()?;
            } else {
                println!("{}", report);
            }
        }
    }
    Ok(())
}
