//! Road — an undirected, weighted, labeled connection between two towns.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::{Town, DEFAULT_WEIGHT};

/// An undirected road between two towns.
///
/// `source` and `destination` are positional names only. Two roads are equal
/// when they join the same unordered pair of towns with the same label and
/// the same weight.
#[derive(Debug, Clone, Serialize)]
pub struct Road {
    /// First endpoint, as given at construction.
    source: Town,
    /// Second endpoint, as given at construction.
    destination: Town,
    /// Length of the road. Never negative.
    weight: u32,
    /// Road name.
    label: String,
}

impl Road {
    /// Create a new road.
    pub fn new(source: Town, destination: Town, weight: u32, label: impl Into<String>) -> Self {
        Self {
            source,
            destination,
            weight,
            label: label.into(),
        }
    }

    /// Create a new road with [`DEFAULT_WEIGHT`].
    pub fn with_default_weight(source: Town, destination: Town, label: impl Into<String>) -> Self {
        Self::new(source, destination, DEFAULT_WEIGHT, label)
    }

    pub fn source(&self) -> &Town {
        &self.source
    }

    pub fn destination(&self) -> &Town {
        &self.destination
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether `town` is either endpoint.
    pub fn contains(&self, town: &Town) -> bool {
        self.source == *town || self.destination == *town
    }

    /// Whether this road joins `a` and `b`, in either order. Weight and label
    /// are not considered.
    pub fn connects(&self, a: &Town, b: &Town) -> bool {
        (self.source == *a && self.destination == *b)
            || (self.source == *b && self.destination == *a)
    }

    /// The endpoint opposite `town`, or `None` if `town` is not on this road.
    /// A self-loop returns `town` itself.
    pub fn other_end(&self, town: &Town) -> Option<&Town> {
        if self.source == *town {
            Some(&self.destination)
        } else if self.destination == *town {
            Some(&self.source)
        } else {
            None
        }
    }

    /// Endpoints as (smaller, larger) so that equality ignores direction.
    fn endpoints(&self) -> (&Town, &Town) {
        if self.source <= self.destination {
            (&self.source, &self.destination)
        } else {
            (&self.destination, &self.source)
        }
    }
}

impl PartialEq for Road {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.weight == other.weight
            && self.endpoints() == other.endpoints()
    }
}

impl Eq for Road {}

impl Hash for Road {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
        self.weight.hash(state);
        self.endpoints().hash(state);
    }
}

impl PartialOrd for Road {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Road {
    /// Label descending, then weight ascending, then endpoint pair.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .label
            .cmp(&self.label)
            .then(self.weight.cmp(&other.weight))
            .then_with(|| self.endpoints().cmp(&other.endpoints()))
    }
}

impl std::fmt::Display for Road {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}; {}; {}",
            self.label, self.weight, self.source, self.destination
        )
    }
}
