//! Error types for benchmark runs.

use std::fmt;
use std::io;

use crate::config::ConfigError;
use crate::container::ContainerKind;
use crate::element::DataTypeKind;

/// Everything that can abort a benchmark run
#[derive(Debug)]
pub enum BenchError {
    /// A generator was asked for an empty dataset
    InvalidDataSize { size: usize },

    /// More unique integers were requested than the sampling range holds
    SampleRangeExhausted { requested: usize, available: u64 },

    /// The sampling range `size * scale` does not fit in a `u64`
    SampleRangeOverflow { size: usize, scale: u64 },

    /// No present probe can be chosen from an empty dataset
    EmptyDataset,

    /// A row was recorded without a timing for one container kind
    MissingScore { container: ContainerKind },

    /// A row's data size does not follow the previous row's
    RowOrder { previous: usize, next: usize },

    /// A data type has no open output table
    MissingTable { data_type: DataTypeKind },

    /// Invalid configuration
    Config(ConfigError),

    /// I/O failure on an output table or the progress sink
    Io { context: String, source: io::Error },
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::InvalidDataSize { size } => {
                write!(f, "Invalid data size: {} (must be > 0)", size)
            }
            BenchError::SampleRangeExhausted {
                requested,
                available,
            } => write!(
                f,
                "Cannot sample {} unique integers from a range of {}",
                requested, available
            ),
            BenchError::SampleRangeOverflow { size, scale } => {
                write!(f, "Sampling range overflows: {} * {}", size, scale)
            }
            BenchError::EmptyDataset => write!(f, "Cannot choose a probe from an empty dataset"),
            BenchError::MissingScore { container } => {
                write!(f, "Missing score for container '{}'", container.name())
            }
            BenchError::RowOrder { previous, next } => write!(
                f,
                "Data size {} does not follow previous row {}",
                next, previous
            ),
            BenchError::MissingTable { data_type } => {
                write!(f, "No output table for data type '{}'", data_type)
            }
            BenchError::Config(err) => write!(f, "Configuration error: {}", err),
            BenchError::Io { context, source } => write!(f, "{}: {}", context, source),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchError::Config(err) => Some(err),
            BenchError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for BenchError {
    fn from(err: ConfigError) -> Self {
        BenchError::Config(err)
    }
}

impl BenchError {
    /// Wrap an I/O error with a description of what was being done
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        BenchError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate
pub type BenchResult<T> = Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_bench_error_display() {
        let error = BenchError::InvalidDataSize { size: 0 };
        assert_eq!(format!("{}", error), "Invalid data size: 0 (must be > 0)");

        let error = BenchError::SampleRangeExhausted {
            requested: 20,
            available: 10,
        };
        assert_eq!(
            format!("{}", error),
            "Cannot sample 20 unique integers from a range of 10"
        );

        let error = BenchError::MissingScore {
            container: ContainerKind::SetImmutable,
        };
        assert_eq!(format!("{}", error), "Missing score for container 'frozenset'");

        let error = BenchError::RowOrder {
            previous: 4,
            next: 4,
        };
        assert_eq!(
            format!("{}", error),
            "Data size 4 does not follow previous row 4"
        );
    }

    #[test]
    fn test_io_error_source() {
        let error = BenchError::io(
            "Failed to create statistics_int.csv",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            format!("{}", error),
            "Failed to create statistics_int.csv: denied"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_config_error_conversion() {
        let error: BenchError = ConfigError::EmptyAlphabet.into();
        assert!(matches!(error, BenchError::Config(ConfigError::EmptyAlphabet)));
        assert!(error.source().is_some());
    }
}
