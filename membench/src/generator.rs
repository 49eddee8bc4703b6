//! Synthetic dataset generators.
//!
//! - Integers: `size` distinct values sampled without replacement from
//!   `[0, size * scale)`
//! - Text: `size` independent fixed-length strings over an alphabet, so
//!   duplicates are possible

use rand::Rng;
use rand::seq::index;

use crate::config::{BenchConfig, ConfigError};
use crate::element::{DataTypeKind, Dataset, Element};
use crate::error::{BenchError, BenchResult};

/// Core trait for producing a dataset of a requested size
pub trait DatasetGenerator {
    /// The data type of every element this generator produces
    fn data_type(&self) -> DataTypeKind;

    /// Generate a fresh dataset of exactly `size` elements
    fn generate(&self, rng: &mut dyn rand::RngCore, size: usize) -> BenchResult<Dataset>;
}

// ============================================================================
// Integer Generator
// ============================================================================

/// Generator for unique integers
#[derive(Debug, Clone)]
pub struct IntegerGenerator {
    scale: u64,
}

impl IntegerGenerator {
    /// Create a generator sampling from `[0, size * scale)`
    pub fn new(scale: u64) -> Self {
        Self { scale }
    }

    fn range_len(&self, size: usize) -> BenchResult<usize> {
        let overflow = || BenchError::SampleRangeOverflow {
            size,
            scale: self.scale,
        };
        let len = (size as u64).checked_mul(self.scale).ok_or_else(overflow)?;
        usize::try_from(len).map_err(|_| overflow())
    }
}

impl DatasetGenerator for IntegerGenerator {
    fn data_type(&self) -> DataTypeKind {
        DataTypeKind::Integer
    }

    fn generate(&self, rng: &mut dyn rand::RngCore, size: usize) -> BenchResult<Dataset> {
        if size == 0 {
            return Err(BenchError::InvalidDataSize { size });
        }

        let range_len = self.range_len(size)?;
        if size > range_len {
            return Err(BenchError::SampleRangeExhausted {
                requested: size,
                available: range_len as u64,
            });
        }

        let elements = index::sample(rng, range_len, size)
            .into_iter()
            .map(|value| Element::Int(value as u64))
            .collect();

        Ok(Dataset::new(DataTypeKind::Integer, elements))
    }
}

// ============================================================================
// Text Generator
// ============================================================================

/// Generator for fixed-length strings drawn uniformly from an alphabet
#[derive(Debug, Clone)]
pub struct TextGenerator {
    length: usize,
    alphabet: Vec<char>,
}

impl TextGenerator {
    /// Create a new text generator
    pub fn new(length: usize, alphabet: Vec<char>) -> Self {
        Self { length, alphabet }
    }

    fn generate_string(&self, rng: &mut dyn rand::RngCore) -> String {
        (0..self.length)
            .map(|_| self.alphabet[rng.gen_range(0..self.alphabet.len())])
            .collect()
    }
}

impl DatasetGenerator for TextGenerator {
    fn data_type(&self) -> DataTypeKind {
        DataTypeKind::Text
    }

    fn generate(&self, rng: &mut dyn rand::RngCore, size: usize) -> BenchResult<Dataset> {
        if size == 0 {
            return Err(BenchError::InvalidDataSize { size });
        }
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet.into());
        }

        let elements = (0..size)
            .map(|_| Element::Text(self.generate_string(rng)))
            .collect();

        Ok(Dataset::new(DataTypeKind::Text, elements))
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Build the generator for a data type from the run configuration
pub fn generator_for(data_type: DataTypeKind, config: &BenchConfig) -> Box<dyn DatasetGenerator> {
    match data_type {
        DataTypeKind::Integer => Box::new(IntegerGenerator::new(config.int_scale)),
        DataTypeKind::Text => Box::new(TextGenerator::new(
            config.text_length,
            config.alphabet.clone(),
        )),
    }
}

/// Generate a dataset of `size` elements of `data_type`
pub fn generate(
    data_type: DataTypeKind,
    size: usize,
    config: &BenchConfig,
    rng: &mut dyn rand::RngCore,
) -> BenchResult<Dataset> {
    generator_for(data_type, config).generate(rng, size)
}
