use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cpu_sched_sim::generator::Dataset;
use cpu_sched_sim::simulation::DisciplineRun;
use cpu_sched_sim::{Simulation, SimulationConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Simulate FCFS, SJF, Round Robin and Priority CPU scheduling")]
struct Cli {
    /// Path to a JSON simulation config.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Dataset each discipline draws its processes from.
    #[arg(long, value_enum)]
    dataset: Option<DatasetArg>,
    /// Processes per discipline (synthetic and random datasets).
    #[arg(long)]
    count: Option<usize>,
    /// Seed for the random dataset.
    #[arg(long)]
    seed: Option<u64>,
    /// Print the full report as JSON instead of text.
    #[arg(long)]
    json: bool,
    /// Width of the text Gantt strips (1-1000).
    #[arg(long, default_value_t = 72, value_parser = clap::value_parser!(u16).range(1..=1000))]
    width: u16,
}

#[derive(Clone, Copy, ValueEnum)]
enum DatasetArg {
    Synthetic,
    Classic,
    Random,
}

impl From<DatasetArg> for Dataset {
    fn from(value: DatasetArg) -> Self {
        match value {
            DatasetArg::Synthetic => Dataset::Synthetic,
            DatasetArg::Classic => Dataset::Classic,
            DatasetArg::Random => Dataset::Random,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let report = Simulation::from_config(&config)
        .run()
        .context("simulation failed")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        println!("{json}");
        return Ok(());
    }

    for run in &report.runs {
        print_run(run, usize::from(cli.width));
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<SimulationConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            SimulationConfig::from_json(&data)
                .with_context(|| format!("{} is not a valid config file", path.display()))?
        }
        None => SimulationConfig::default(),
    };

    if let Some(dataset) = cli.dataset {
        config = config.with_dataset(dataset.into());
    }
    if let Some(count) = cli.count {
        config = config.with_process_count(count);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn print_run(run: &DisciplineRun, width: usize) {
    println!("{}", run.gantt().render_text(width));
    println!("{:<8} {:>8} {:>11}", "process", "waiting", "turnaround");
    for entry in &run.metrics {
        println!(
            "{:<8} {:>8} {:>11}",
            entry.process_id, entry.waiting, entry.turnaround
        );
    }
    let kpi = &run.kpi;
    println!(
        "avg waiting {:.2} | avg turnaround {:.2} | makespan {} | utilization {:.0}% | switches {}",
        kpi.avg_waiting,
        kpi.avg_turnaround,
        kpi.makespan,
        kpi.utilization * 100.0,
        kpi.context_switches
    );
    println!();
}
