//! Elements, data type kinds and generated datasets.

use std::fmt;

/// Kind of data a dataset is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataTypeKind {
    /// Unique integers
    Integer,
    /// Fixed-length random strings
    Text,
}

impl DataTypeKind {
    /// All data type kinds, in output order
    pub const ALL: [DataTypeKind; 2] = [DataTypeKind::Integer, DataTypeKind::Text];

    /// Short name used in output file names
    pub fn name(self) -> &'static str {
        match self {
            DataTypeKind::Integer => "int",
            DataTypeKind::Text => "str",
        }
    }
}

impl fmt::Display for DataTypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value stored in, or probed against, a container.
///
/// `Absent` is never produced by a generator, so it is missing from every
/// dataset regardless of its data type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    Int(u64),
    Text(String),
    Absent,
}

impl Element {
    /// The data type this element belongs to, `None` for the sentinel
    pub fn data_type(&self) -> Option<DataTypeKind> {
        match self {
            Element::Int(_) => Some(DataTypeKind::Integer),
            Element::Text(_) => Some(DataTypeKind::Text),
            Element::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Element::Absent)
    }
}

/// An ordered, freshly generated sequence of elements of one data type
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    data_type: DataTypeKind,
    elements: Vec<Element>,
}

impl Dataset {
    pub(crate) fn new(data_type: DataTypeKind, elements: Vec<Element>) -> Self {
        debug_assert!(
            elements
                .iter()
                .all(|element| element.data_type() == Some(data_type))
        );
        Self {
            data_type,
            elements,
        }
    }

    pub fn data_type(&self) -> DataTypeKind {
        self.data_type
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Linear membership check, independent of any container kind
    pub fn contains(&self, element: &Element) -> bool {
        self.elements.contains(element)
    }
}
