use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use membench::{BenchConfig, BenchmarkRunner, RunSummary};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "membench")]
#[command(about = "Time container membership tests and write the results as CSV", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory the statistics_<type>.csv files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Smallest data size, inclusive
    #[arg(long, default_value_t = 1)]
    min_size: usize,

    /// Largest data size, inclusive
    #[arg(long, default_value_t = 10)]
    max_size: usize,

    /// Membership checks per timed sample
    #[arg(short = 'n', long, default_value_t = 1000)]
    runs: usize,

    /// Seed for a reproducible random stream
    #[arg(short, long)]
    seed: Option<u64>,

    /// Do not draw the progress bar
    #[arg(long)]
    no_progress: bool,

    /// Maximum level of diagnostics written to stderr
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

impl Cli {
    fn to_config(&self) -> BenchConfig {
        BenchConfig {
            repeat_count: self.runs,
            min_size: self.min_size,
            max_size: self.max_size,
            output_dir: self.output_dir.clone(),
            seed: self.seed,
            show_progress: !self.no_progress,
            ..BenchConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Color depends on the terminal only, never on NO_COLOR or CLICOLOR
    colored::control::set_override(std::io::stdout().is_terminal());
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let runner = BenchmarkRunner::new(cli.to_config()).context("Invalid benchmark settings")?;
    let summary = runner.run().context("Benchmark run failed")?;

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    for table in &summary.tables {
        let location = table
            .path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<memory>".to_string());
        println!(
            "  {} {} ({} row{})",
            "✓".green(),
            location.cyan(),
            table.rows,
            if table.rows == 1 { "" } else { "s" }
        );
    }
    println!(
        "{}",
        format!("Finished in {:.2}s", summary.elapsed.as_secs_f64()).bright_black()
    );
}
