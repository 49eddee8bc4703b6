//! Sequential driver of a complete benchmark run.
//!
//! The [`RunContext`] bundles everything a run mutates: the single random
//! stream, one open [`OutputTable`] per data type, and the progress sink.
//! [`BenchmarkRunner`] walks the data sizes in increasing order and, for each
//! size and data type, generates a dataset, times the trial matrix and
//! appends one row.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::element::DataTypeKind;
use crate::error::{BenchError, BenchResult};
use crate::generator::{DatasetGenerator, generator_for};
use crate::progress::{ProgressBar, progress_fraction};
use crate::report::OutputTable;
use crate::rng::create_rng;
use crate::trial::{TrialMatrix, select_present};

/// Outcome of one output table
#[derive(Debug, Clone, PartialEq)]
pub struct TableSummary {
    pub data_type: DataTypeKind,
    pub path: Option<PathBuf>,
    pub rows: usize,
}

/// Outcome of a complete run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub tables: Vec<TableSummary>,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|table| table.rows).sum()
    }
}

/// Mutable state threaded through a run
#[derive(Debug)]
pub struct RunContext<R, W: Write, P: Write> {
    rng: R,
    tables: BTreeMap<DataTypeKind, OutputTable<W>>,
    progress: ProgressBar<P>,
}

impl<R: rand::RngCore, W: Write, P: Write> RunContext<R, W, P> {
    /// Build a context from ready tables
    pub fn new(
        rng: R,
        tables: impl IntoIterator<Item = (DataTypeKind, OutputTable<W>)>,
        progress: ProgressBar<P>,
    ) -> Self {
        Self {
            rng,
            tables: tables.into_iter().collect(),
            progress,
        }
    }

    /// Build a context over raw writers, writing each table's header
    pub fn with_writers(
        rng: R,
        writers: impl IntoIterator<Item = (DataTypeKind, W)>,
        progress: ProgressBar<P>,
    ) -> BenchResult<Self> {
        let mut tables = BTreeMap::new();
        for (data_type, writer) in writers {
            tables.insert(data_type, OutputTable::new(writer)?);
        }
        Ok(Self {
            rng,
            tables,
            progress,
        })
    }

    pub fn table(&self, data_type: DataTypeKind) -> Option<&OutputTable<W>> {
        self.tables.get(&data_type)
    }

    /// Close the progress line and flush every table
    pub fn finish(mut self) -> BenchResult<Vec<(TableSummary, W)>> {
        self.progress.finish()?;

        let mut finished = Vec::with_capacity(self.tables.len());
        for (data_type, table) in self.tables {
            let summary = TableSummary {
                data_type,
                path: table.path().map(|path| path.to_path_buf()),
                rows: table.rows_written(),
            };
            finished.push((summary, table.finish()?));
        }
        Ok(finished)
    }
}

/// Context type of a run writing files and drawing on stdout
pub type FileRunContext = RunContext<StdRng, BufWriter<File>, Stdout>;

/// Runs the full (data size x data type x container kind x presence) matrix
pub struct BenchmarkRunner {
    config: BenchConfig,
    matrix: TrialMatrix,
    generators: Vec<Box<dyn DatasetGenerator>>,
}

impl BenchmarkRunner {
    /// Create a runner after validating the configuration
    pub fn new(config: BenchConfig) -> BenchResult<Self> {
        config.validate()?;
        let matrix = TrialMatrix::new(config.repeat_count);
        let generators = DataTypeKind::ALL
            .iter()
            .map(|data_type| generator_for(*data_type, &config))
            .collect();
        Ok(Self {
            config,
            matrix,
            generators,
        })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Create the output files and the stdout progress bar
    pub fn open_context(&self) -> BenchResult<FileRunContext> {
        let mut tables = Vec::with_capacity(DataTypeKind::ALL.len());
        for data_type in DataTypeKind::ALL {
            let path = self.config.output_path(data_type);
            tables.push((data_type, OutputTable::create(&path)?));
        }

        let progress = if self.config.show_progress {
            ProgressBar::new(io::stdout(), self.config.bar_width)
        } else {
            ProgressBar::hidden(io::stdout())
        };

        Ok(RunContext::new(create_rng(self.config.seed), tables, progress))
    }

    /// Run the whole benchmark into files under the configured directory
    pub fn run(&self) -> BenchResult<RunSummary> {
        let start = Instant::now();
        info!(
            min_size = self.config.min_size,
            max_size = self.config.max_size,
            sizes = self.config.size_count(),
            repeat_count = self.config.repeat_count,
            seed = ?self.config.seed,
            output_dir = %self.config.output_dir.display(),
            "starting membership benchmark"
        );

        let mut context = self.open_context()?;
        self.execute(&mut context)?;
        let tables = context
            .finish()?
            .into_iter()
            .map(|(summary, _)| summary)
            .collect();

        let summary = RunSummary {
            tables,
            elapsed: start.elapsed(),
        };
        info!(
            rows = summary.total_rows(),
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "membership benchmark finished"
        );
        Ok(summary)
    }

    /// Walk every data size in increasing order
    pub fn execute<R, W, P>(&self, context: &mut RunContext<R, W, P>) -> BenchResult<()>
    where
        R: rand::RngCore,
        W: Write,
        P: Write,
    {
        for size in self.config.min_size..=self.config.max_size {
            let fraction = progress_fraction(size, self.config.min_size, self.config.max_size);
            context.progress.update(fraction)?;
            self.run_size(context, size)?;
        }
        Ok(())
    }

    /// Generate, time and record every data type at one data size
    pub fn run_size<R, W, P>(
        &self,
        context: &mut RunContext<R, W, P>,
        size: usize,
    ) -> BenchResult<()>
    where
        R: rand::RngCore,
        W: Write,
        P: Write,
    {
        for generator in &self.generators {
            let data_type = generator.data_type();
            let dataset = generator.generate(&mut context.rng, size)?;
            let present = select_present(&dataset, &mut context.rng)?;
            debug!(data_size = size, %data_type, "generated dataset");

            let scores = self.matrix.run(&dataset, &present)?;

            let table = context
                .tables
                .get_mut(&data_type)
                .ok_or(BenchError::MissingTable { data_type })?;
            table.record(size, &scores)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn small_config() -> BenchConfig {
        BenchConfig {
            repeat_count: 10,
            max_size: 4,
            text_length: 8,
            ..BenchConfig::default()
        }
    }

    fn memory_context(bar_width: usize) -> RunContext<StdRng, Vec<u8>, Vec<u8>> {
        RunContext::with_writers(
            StdRng::seed_from_u64(42),
            DataTypeKind::ALL.map(|data_type| (data_type, Vec::new())),
            ProgressBar::new(Vec::new(), bar_width),
        )
        .unwrap()
    }

    #[test]
    fn test_runner_rejects_invalid_config() {
        let config = BenchConfig {
            min_size: 3,
            max_size: 2,
            ..BenchConfig::default()
        };
        assert!(matches!(
            BenchmarkRunner::new(config),
            Err(BenchError::Config(_))
        ));
    }

    #[test]
    fn test_execute_writes_one_row_per_size() {
        let runner = BenchmarkRunner::new(small_config()).unwrap();
        let mut context = memory_context(10);
        runner.execute(&mut context).unwrap();

        for data_type in DataTypeKind::ALL {
            assert_eq!(context.table(data_type).unwrap().rows_written(), 4);
        }

        let finished = context.finish().unwrap();
        assert_eq!(finished.len(), 2);
        for (summary, bytes) in finished {
            assert_eq!(summary.rows, 4);
            assert!(summary.path.is_none());

            let text = String::from_utf8(bytes).unwrap();
            let sizes: Vec<usize> = text
                .lines()
                .skip(1)
                .map(|line| line.split(',').next().unwrap().parse().unwrap())
                .collect();
            assert_eq!(sizes, vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_progress_rendered_once_per_size() {
        let runner = BenchmarkRunner::new(small_config()).unwrap();
        let mut context = memory_context(6);
        runner.execute(&mut context).unwrap();
        let progress = String::from_utf8(context.progress.into_inner()).unwrap();

        assert_eq!(progress.matches('\r').count(), 4);
        assert!(progress.starts_with("\r[      ]"));
        assert!(progress.ends_with("\r[>>>>>>]"));
    }

    #[test]
    fn test_missing_table_is_an_error() {
        let runner = BenchmarkRunner::new(small_config()).unwrap();
        let mut context = RunContext::with_writers(
            StdRng::seed_from_u64(1),
            [(DataTypeKind::Integer, Vec::new())],
            ProgressBar::hidden(Vec::new()),
        )
        .unwrap();

        let result = runner.run_size(&mut context, 1);
        assert!(matches!(
            result,
            Err(BenchError::MissingTable {
                data_type: DataTypeKind::Text
            })
        ));
    }
}
