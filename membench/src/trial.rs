//! Timed membership trials across every container kind.
//!
//! For one dataset the matrix times `repeat_count` membership checks of a
//! present element and, separately, of the absent sentinel, against each
//! [`ContainerKind`]. Containers are built before the clock starts; only the
//! checks themselves are inside the timed window.

use std::hint::black_box;
use std::time::Instant;

use rand::seq::SliceRandom;

use crate::container::{Container, ContainerKind};
use crate::element::{Dataset, Element};
use crate::error::{BenchError, BenchResult};

/// Whether the probed element is in the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    Existing,
    Missing,
}

impl Presence {
    /// Both presences, in output column order
    pub const ALL: [Presence; 2] = [Presence::Existing, Presence::Missing];

    pub fn name(self) -> &'static str {
        match self {
            Presence::Existing => "existing",
            Presence::Missing => "missing",
        }
    }
}

/// Total elapsed seconds for the existing and the missing probe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialTiming {
    pub existing: f64,
    pub missing: f64,
}

impl TrialTiming {
    pub fn get(&self, presence: Presence) -> f64 {
        match presence {
            Presence::Existing => self.existing,
            Presence::Missing => self.missing,
        }
    }
}

/// Timings of one dataset, keyed by container kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scores {
    timings: [Option<TrialTiming>; ContainerKind::ALL.len()],
}

impl Scores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the timing of one container kind, replacing any previous one
    pub fn insert(&mut self, kind: ContainerKind, timing: TrialTiming) {
        self.timings[kind.index()] = Some(timing);
    }

    pub fn get(&self, kind: ContainerKind) -> Option<TrialTiming> {
        self.timings[kind.index()]
    }

    pub fn is_complete(&self) -> bool {
        self.timings.iter().all(Option::is_some)
    }

    /// Flatten into `[kind][presence]` order.
    ///
    /// Fails on the first container kind without a timing.
    pub fn values(&self) -> BenchResult<Vec<f64>> {
        let mut values = Vec::with_capacity(ContainerKind::ALL.len() * Presence::ALL.len());
        for kind in ContainerKind::ALL {
            let timing = self
                .get(kind)
                .ok_or(BenchError::MissingScore { container: kind })?;
            for presence in Presence::ALL {
                values.push(timing.get(presence));
            }
        }
        Ok(values)
    }
}

/// Pick the present probe uniformly from the dataset
pub fn select_present(dataset: &Dataset, rng: &mut dyn rand::RngCore) -> BenchResult<Element> {
    dataset
        .elements()
        .choose(rng)
        .cloned()
        .ok_or(BenchError::EmptyDataset)
}

/// Time `repeat_count` membership checks of `probe`, in seconds
pub fn time_membership(container: &Container, probe: &Element, repeat_count: usize) -> f64 {
    let start = Instant::now();
    for _ in 0..repeat_count {
        black_box(black_box(container).contains(black_box(probe)));
    }
    start.elapsed().as_secs_f64()
}

/// Drives the (container kind x presence) timings for one dataset
#[derive(Debug, Clone)]
pub struct TrialMatrix {
    repeat_count: usize,
}

impl TrialMatrix {
    /// Create a matrix over every container kind
    pub fn new(repeat_count: usize) -> Self {
        Self { repeat_count }
    }

    pub fn repeat_count(&self) -> usize {
        self.repeat_count
    }

    /// Time one container kind against `present` and the sentinel.
    ///
    /// Each probe gets its own freshly built container.
    pub fn time_kind(
        &self,
        kind: ContainerKind,
        dataset: &Dataset,
        present: &Element,
    ) -> TrialTiming {
        let container = kind.build(dataset.elements());
        let existing = time_membership(&container, present, self.repeat_count);

        let container = kind.build(dataset.elements());
        let missing = time_membership(&container, &Element::Absent, self.repeat_count);

        TrialTiming { existing, missing }
    }

    /// Time every container kind of the matrix for one dataset
    pub fn run(&self, dataset: &Dataset, present: &Element) -> BenchResult<Scores> {
        if dataset.is_empty() {
            return Err(BenchError::EmptyDataset);
        }
        debug_assert!(dataset.contains(present));
        debug_assert!(!dataset.contains(&Element::Absent));

        let mut scores = Scores::new();
        for kind in ContainerKind::ALL {
            scores.insert(kind, self.time_kind(kind, dataset, present));
        }
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BenchConfig;
    use crate::element::DataTypeKind;
    use crate::generator::generate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_select_present_is_member() {
        let config = BenchConfig::default();
        let mut rng = StdRng::seed_from_u64(42);

        for data_type in DataTypeKind::ALL {
            for size in 1..=10 {
                let dataset = generate(data_type, size, &config, &mut rng).unwrap();
                let present = select_present(&dataset, &mut rng).unwrap();
                assert!(dataset.contains(&present));
                assert!(!present.is_absent());
            }
        }
    }

    #[test]
    fn test_time_membership_non_negative() {
        let container = ContainerKind::SetMutable.build(&[Element::Int(1)]);
        let elapsed = time_membership(&container, &Element::Int(1), 1000);
        assert!(elapsed >= 0.0);
        assert!(elapsed.is_finite());

        let elapsed = time_membership(&container, &Element::Absent, 0);
        assert!(elapsed >= 0.0);
    }

    #[test]
    fn test_matrix_fills_every_kind() {
        let config = BenchConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let dataset = generate(DataTypeKind::Integer, 1, &config, &mut rng).unwrap();
        let present = select_present(&dataset, &mut rng).unwrap();
        assert_eq!(&present, &dataset.elements()[0]);

        let scores = TrialMatrix::new(100).run(&dataset, &present).unwrap();
        assert!(scores.is_complete());

        let values = scores.values().unwrap();
        assert_eq!(values.len(), 8);
        assert!(values.iter().all(|value| *value >= 0.0));
    }

    #[test]
    fn test_partial_scores_are_rejected() {
        let mut scores = Scores::new();
        scores.insert(
            ContainerKind::SequenceMutable,
            TrialTiming {
                existing: 0.1,
                missing: 0.2,
            },
        );
        assert!(!scores.is_complete());
        assert!(matches!(
            scores.values(),
            Err(BenchError::MissingScore {
                container: ContainerKind::SequenceImmutable
            })
        ));
    }

    #[test]
    fn test_values_follow_declared_order() {
        let mut scores = Scores::new();
        for (i, kind) in ContainerKind::ALL.iter().rev().enumerate() {
            scores.insert(
                *kind,
                TrialTiming {
                    existing: (10 * (3 - i)) as f64,
                    missing: (10 * (3 - i) + 1) as f64,
                },
            );
        }
        assert_eq!(
            scores.values().unwrap(),
            vec![0.0, 1.0, 10.0, 11.0, 20.0, 21.0, 30.0, 31.0]
        );
    }

    #[test]
    fn test_scores_slot_per_kind() {
        let mut scores = Scores::new();
        assert!(ContainerKind::ALL.iter().all(|kind| scores.get(*kind).is_none()));

        let timing = TrialTiming {
            existing: 1.0,
            missing: 2.0,
        };
        for kind in ContainerKind::ALL {
            assert!(!scores.is_complete());
            scores.insert(kind, timing);
        }
        assert!(scores.is_complete());
        assert_eq!(scores.values().unwrap().len(), 2 * ContainerKind::ALL.len());
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::new(DataTypeKind::Text, Vec::new());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            select_present(&dataset, &mut rng),
            Err(BenchError::EmptyDataset)
        ));
        assert!(matches!(
            TrialMatrix::new(1).run(&dataset, &Element::Absent),
            Err(BenchError::EmptyDataset)
        ));
    }
}
