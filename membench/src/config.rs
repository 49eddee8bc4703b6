//! Configuration types for controlling a membership benchmark run.

use std::path::{Path, PathBuf};

use crate::element::DataTypeKind;

/// Placeholder replaced by the data type name in [`BenchConfig::file_template`]
pub const FILE_TEMPLATE_PLACEHOLDER: &str = "{}";

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Invalid number of repeated membership checks per sample (must be > 0)
    InvalidRepeatCount(usize),
    /// Invalid minimum data size (must be > 0)
    InvalidMinSize(usize),
    /// Minimum data size is larger than the maximum
    InvalidSizeRange { min: usize, max: usize },
    /// Invalid integer sampling scale (must be > 0)
    InvalidIntScale(u64),
    /// Invalid generated string length (must be > 0)
    InvalidTextLength(usize),
    /// The text alphabet has no characters
    EmptyAlphabet,
    /// Invalid progress bar width (must be > 0)
    InvalidBarWidth(usize),
    /// The output file template has no `{}` placeholder
    InvalidFileTemplate(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidRepeatCount(n) => {
                write!(f, "Invalid repeat count: {} (must be > 0)", n)
            }
            ConfigError::InvalidMinSize(n) => {
                write!(f, "Invalid minimum data size: {} (must be > 0)", n)
            }
            ConfigError::InvalidSizeRange { min, max } => {
                write!(
                    f,
                    "Invalid data size range: {}..={} (minimum exceeds maximum)",
                    min, max
                )
            }
            ConfigError::InvalidIntScale(n) => {
                write!(f, "Invalid integer scale: {} (must be > 0)", n)
            }
            ConfigError::InvalidTextLength(n) => {
                write!(f, "Invalid text length: {} (must be > 0)", n)
            }
            ConfigError::EmptyAlphabet => write!(f, "Text alphabet is empty"),
            ConfigError::InvalidBarWidth(n) => {
                write!(f, "Invalid progress bar width: {} (must be > 0)", n)
            }
            ConfigError::InvalidFileTemplate(template) => {
                write!(
                    f,
                    "Invalid output file template '{}' (missing '{}' placeholder)",
                    template, FILE_TEMPLATE_PLACEHOLDER
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Printable ASCII characters (32..=126), the default text alphabet
pub fn printable_ascii() -> Vec<char> {
    (32u8..=126).map(char::from).collect()
}

/// Configuration for a complete benchmark run
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of repeated membership checks inside one timed sample
    pub repeat_count: usize,
    /// Smallest data size, inclusive
    pub min_size: usize,
    /// Largest data size, inclusive
    pub max_size: usize,
    /// Integers are sampled from `[0, size * int_scale)`
    pub int_scale: u64,
    /// Length of every generated string
    pub text_length: usize,
    /// Characters generated strings are drawn from
    pub alphabet: Vec<char>,
    /// Width of the progress bar, brackets excluded
    pub bar_width: usize,
    /// Directory the output tables are created in
    pub output_dir: PathBuf,
    /// Output file name template, `{}` is replaced by the data type name
    pub file_template: String,
    /// Optional seed for a reproducible random stream
    pub seed: Option<u64>,
    /// Whether the progress bar is rendered
    pub show_progress: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            repeat_count: 1000,
            min_size: 1,
            max_size: 10,
            int_scale: 1000,
            text_length: 100,
            alphabet: printable_ascii(),
            bar_width: 78,
            output_dir: PathBuf::from("."),
            file_template: String::from("statistics_{}.csv"),
            seed: None,
            show_progress: true,
        }
    }
}

impl BenchConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repeat_count == 0 {
            return Err(ConfigError::InvalidRepeatCount(self.repeat_count));
        }
        if self.min_size == 0 {
            return Err(ConfigError::InvalidMinSize(self.min_size));
        }
        if self.min_size > self.max_size {
            return Err(ConfigError::InvalidSizeRange {
                min: self.min_size,
                max: self.max_size,
            });
        }
        if self.int_scale == 0 {
            return Err(ConfigError::InvalidIntScale(self.int_scale));
        }
        if self.text_length == 0 {
            return Err(ConfigError::InvalidTextLength(self.text_length));
        }
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if self.bar_width == 0 {
            return Err(ConfigError::InvalidBarWidth(self.bar_width));
        }
        if !self.file_template.contains(FILE_TEMPLATE_PLACEHOLDER) {
            return Err(ConfigError::InvalidFileTemplate(self.file_template.clone()));
        }
        Ok(())
    }

    /// Number of data sizes in the configured range
    pub fn size_count(&self) -> usize {
        self.max_size.saturating_sub(self.min_size) + 1
    }

    /// File name of the output table for a data type
    pub fn file_name(&self, data_type: DataTypeKind) -> String {
        self.file_template
            .replacen(FILE_TEMPLATE_PLACEHOLDER, data_type.name(), 1)
    }

    /// Full path of the output table for a data type
    pub fn output_path(&self, data_type: DataTypeKind) -> PathBuf {
        self.output_dir.join(self.file_name(data_type))
    }

    /// Return a copy writing into `dir`
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Return a copy using a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
