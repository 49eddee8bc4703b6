//! Container kinds under test and their membership checks.

use std::collections::HashSet;
use std::fmt;

use crate::element::Element;

/// The four container kinds whose membership test is timed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContainerKind {
    /// Growable ordered sequence, duplicates kept (`Vec`)
    SequenceMutable,
    /// Fixed ordered sequence, duplicates kept (`Box<[T]>`)
    SequenceImmutable,
    /// Hash set with unique elements (`HashSet`)
    SetMutable,
    /// Hash set frozen after construction ([`FrozenSet`])
    SetImmutable,
}

impl ContainerKind {
    /// All container kinds, in output column order
    pub const ALL: [ContainerKind; 4] = [
        ContainerKind::SequenceMutable,
        ContainerKind::SequenceImmutable,
        ContainerKind::SetMutable,
        ContainerKind::SetImmutable,
    ];

    /// Column label used in output headers
    pub fn name(self) -> &'static str {
        match self {
            ContainerKind::SequenceMutable => "list",
            ContainerKind::SequenceImmutable => "tuple",
            ContainerKind::SetMutable => "set",
            ContainerKind::SetImmutable => "frozenset",
        }
    }

    /// Position of this kind in [`ContainerKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            ContainerKind::SequenceMutable => 0,
            ContainerKind::SequenceImmutable => 1,
            ContainerKind::SetMutable => 2,
            ContainerKind::SetImmutable => 3,
        }
    }

    /// Build a container of this kind from `elements`
    pub fn build(self, elements: &[Element]) -> Container {
        Container::build(self, elements)
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hash set that cannot be modified once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrozenSet<T: Eq + std::hash::Hash> {
    inner: HashSet<T>,
}

impl<T: Eq + std::hash::Hash> FrozenSet<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.inner.contains(value)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<T: Eq + std::hash::Hash> FromIterator<T> for FrozenSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

/// A container instance of one [`ContainerKind`]
#[derive(Debug, Clone)]
pub enum Container {
    SequenceMutable(Vec<Element>),
    SequenceImmutable(Box<[Element]>),
    SetMutable(HashSet<Element>),
    SetImmutable(FrozenSet<Element>),
}

impl Container {
    /// Build a container of `kind`, keeping insertion order for sequences
    pub fn build(kind: ContainerKind, elements: &[Element]) -> Self {
        match kind {
            ContainerKind::SequenceMutable => Container::SequenceMutable(elements.to_vec()),
            ContainerKind::SequenceImmutable => {
                Container::SequenceImmutable(elements.to_vec().into_boxed_slice())
            }
            ContainerKind::SetMutable => {
                Container::SetMutable(elements.iter().cloned().collect())
            }
            ContainerKind::SetImmutable => {
                Container::SetImmutable(elements.iter().cloned().collect())
            }
        }
    }

    pub fn kind(&self) -> ContainerKind {
        match self {
            Container::SequenceMutable(_) => ContainerKind::SequenceMutable,
            Container::SequenceImmutable(_) => ContainerKind::SequenceImmutable,
            Container::SetMutable(_) => ContainerKind::SetMutable,
            Container::SetImmutable(_) => ContainerKind::SetImmutable,
        }
    }

    /// Membership test. Has no side effects.
    #[inline]
    pub fn contains(&self, element: &Element) -> bool {
        match self {
            Container::SequenceMutable(items) => items.contains(element),
            Container::SequenceImmutable(items) => items.contains(element),
            Container::SetMutable(items) => items.contains(element),
            Container::SetImmutable(items) => items.contains(element),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Container::SequenceMutable(items) => items.len(),
            Container::SequenceImmutable(items) => items.len(),
            Container::SetMutable(items) => items.len(),
            Container::SetImmutable(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(values: &[&str]) -> Vec<Element> {
        values
            .iter()
            .map(|value| Element::Text(value.to_string()))
            .collect()
    }

    #[test]
    fn test_kind_order_and_names() {
        let names: Vec<&str> = ContainerKind::ALL.iter().map(|kind| kind.name()).collect();
        assert_eq!(names, vec!["list", "tuple", "set", "frozenset"]);

        for (position, kind) in ContainerKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), position);
        }
    }

    #[test]
    fn test_build_preserves_kind() {
        let elements = vec![Element::Int(1), Element::Int(2)];
        for kind in ContainerKind::ALL {
            assert_eq!(kind.build(&elements).kind(), kind);
        }
    }

    #[test]
    fn test_sequences_keep_order_and_duplicates() {
        let elements = texts(&["b", "a", "b"]);

        match Container::build(ContainerKind::SequenceMutable, &elements) {
            Container::SequenceMutable(items) => assert_eq!(items, elements),
            other => panic!("unexpected container {:?}", other),
        }
        match Container::build(ContainerKind::SequenceImmutable, &elements) {
            Container::SequenceImmutable(items) => assert_eq!(&items[..], &elements[..]),
            other => panic!("unexpected container {:?}", other),
        }
    }

    #[test]
    fn test_sets_deduplicate() {
        let elements = texts(&["b", "a", "b"]);
        assert_eq!(Container::build(ContainerKind::SetMutable, &elements).len(), 2);
        assert_eq!(Container::build(ContainerKind::SetImmutable, &elements).len(), 2);
        assert_eq!(
            Container::build(ContainerKind::SequenceMutable, &elements).len(),
            3
        );
    }

    #[test]
    fn test_contains_present_and_sentinel() {
        let elements = vec![Element::Int(10), Element::Int(20), Element::Int(30)];
        for kind in ContainerKind::ALL {
            let container = kind.build(&elements);
            assert!(container.contains(&Element::Int(20)), "{}", kind);
            assert!(!container.contains(&Element::Int(25)), "{}", kind);
            assert!(!container.contains(&Element::Absent), "{}", kind);
        }
    }

    #[test]
    fn test_contains_is_repeatable() {
        let elements = texts(&["x", "y"]);
        for kind in ContainerKind::ALL {
            let container = kind.build(&elements);
            let probe = Element::Text("y".to_string());
            let first = container.contains(&probe);
            let second = container.contains(&probe);
            assert_eq!(first, second);
            assert!(!container.contains(&Element::Absent));
            assert!(!container.contains(&Element::Absent));
        }
    }
}
