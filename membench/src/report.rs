//! Comma-separated output tables, one per data type.
//!
//! Each table starts with a header row (`data size`, then
//! `<container> existing time` and `<container> missing time` for every
//! container kind in declared order) followed by one row per data size.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::container::ContainerKind;
use crate::error::{BenchError, BenchResult};
use crate::trial::{Presence, Scores};

/// First column of every table
pub const DATA_SIZE_COLUMN: &str = "data size";

/// Row terminator of the comma-separated dialect
pub const ROW_TERMINATOR: &str = "\r\n";

/// Number of fields in every header and row
pub const COLUMN_COUNT: usize = 1 + ContainerKind::ALL.len() * Presence::ALL.len();

/// Header column names, in row field order
pub fn column_names() -> Vec<String> {
    let mut columns = Vec::with_capacity(COLUMN_COUNT);
    columns.push(DATA_SIZE_COLUMN.to_string());
    for kind in ContainerKind::ALL {
        for presence in Presence::ALL {
            columns.push(format!("{} {} time", kind.name(), presence.name()));
        }
    }
    columns
}

/// One table row: a data size and its timings in column order
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub data_size: usize,
    pub timings: Vec<f64>,
}

impl ResultRow {
    /// Build a row from complete scores
    pub fn from_scores(data_size: usize, scores: &Scores) -> BenchResult<Self> {
        Ok(Self {
            data_size,
            timings: scores.values()?,
        })
    }

    pub fn field_count(&self) -> usize {
        1 + self.timings.len()
    }

    /// Render without the row terminator
    pub fn to_line(&self) -> String {
        std::iter::once(self.data_size.to_string())
            .chain(self.timings.iter().map(ToString::to_string))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// An output table receiving rows in strictly increasing data size order
#[derive(Debug)]
pub struct OutputTable<W: Write> {
    writer: W,
    path: Option<PathBuf>,
    rows_written: usize,
    last_size: Option<usize>,
}

impl OutputTable<BufWriter<File>> {
    /// Create (truncating) the file at `path` and write its header
    pub fn create(path: impl AsRef<Path>) -> BenchResult<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| BenchError::io(format!("Failed to create {}", path.display()), e))?;

        let mut table = Self::new(BufWriter::new(file))?;
        table.path = Some(path.to_path_buf());
        debug!(path = %path.display(), "created output table");
        Ok(table)
    }
}

impl<W: Write> OutputTable<W> {
    /// Wrap a writer and write the header row
    pub fn new(mut writer: W) -> BenchResult<Self> {
        let header = column_names().join(",");
        write!(writer, "{}{}", header, ROW_TERMINATOR)
            .map_err(|e| BenchError::io("Failed to write header", e))?;

        Ok(Self {
            writer,
            path: None,
            rows_written: 0,
            last_size: None,
        })
    }

    /// Append one row for `data_size`.
    ///
    /// `scores` must hold a timing for every container kind and
    /// `data_size` must be larger than the previous row's.
    pub fn record(&mut self, data_size: usize, scores: &Scores) -> BenchResult<()> {
        if let Some(previous) = self.last_size
            && data_size <= previous
        {
            return Err(BenchError::RowOrder {
                previous,
                next: data_size,
            });
        }

        let row = ResultRow::from_scores(data_size, scores)?;
        debug_assert_eq!(row.field_count(), COLUMN_COUNT);

        write!(self.writer, "{}{}", row.to_line(), ROW_TERMINATOR)
            .map_err(|e| BenchError::io(self.describe("write row to"), e))?;

        self.rows_written += 1;
        self.last_size = Some(data_size);
        debug!(data_size, rows = self.rows_written, "recorded row");
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Flush buffered rows and hand back the writer
    pub fn finish(mut self) -> BenchResult<W> {
        self.writer
            .flush()
            .map_err(|e| BenchError::io(self.describe("flush"), e))?;
        Ok(self.writer)
    }

    fn describe(&self, action: &str) -> String {
        match &self.path {
            Some(path) => format!("Failed to {} {}", action, path.display()),
            None => format!("Failed to {} output table", action),
        }
    }
}
