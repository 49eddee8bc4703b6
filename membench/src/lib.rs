//! # Membench - membership-test benchmarks for Rust containers
//!
//! Membench measures how long a "does this collection contain X" check takes
//! across four container kinds (a `Vec`, a boxed slice, a `HashSet` and a
//! frozen hash set), for growing data sizes and two element types (unique
//! integers and random fixed-length strings). Each probe is timed twice: once
//! for an element known to be present and once for a sentinel that no
//! dataset can contain. Results are written as one comma-separated table per
//! element type.
//!
//! ## Quick Start
//!
//! ```rust
//! use membench::{BenchConfig, ContainerKind, DataTypeKind, TrialMatrix};
//! use membench::{generate, select_present};
//! use rand::SeedableRng;
//!
//! let config = BenchConfig::default();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//!
//! let dataset = generate(DataTypeKind::Integer, 5, &config, &mut rng).unwrap();
//! let present = select_present(&dataset, &mut rng).unwrap();
//!
//! let scores = TrialMatrix::new(100).run(&dataset, &present).unwrap();
//! assert!(scores.get(ContainerKind::SetMutable).is_some());
//! ```

pub mod config;
pub mod container;
pub mod element;
pub mod error;
pub mod generator;
pub mod progress;
pub mod report;
pub mod rng;
pub mod runner;
pub mod trial;

pub use config::{BenchConfig, ConfigError, printable_ascii};
pub use container::{Container, ContainerKind, FrozenSet};
pub use element::{DataTypeKind, Dataset, Element};
pub use error::{BenchError, BenchResult};
pub use generator::{DatasetGenerator, IntegerGenerator, TextGenerator, generate, generator_for};
pub use progress::{ProgressBar, progress_fraction, render_bar};
pub use report::{COLUMN_COUNT, OutputTable, ResultRow, column_names};
pub use rng::{DefaultRngProvider, RngProvider, create_rng};
pub use runner::{BenchmarkRunner, RunContext, RunSummary, TableSummary};
pub use trial::{Presence, Scores, TrialMatrix, TrialTiming, select_present, time_membership};
