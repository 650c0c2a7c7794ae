//! Town — a named vertex of the road network.

use serde::Serialize;

/// A named location. Identity is the name alone, compared exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Town {
    name: String,
}

impl Town {
    /// Create a town with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The town's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the name is empty or whitespace only. Graph operations treat
    /// a blank town as a missing argument.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

impl std::fmt::Display for Town {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Town {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Town {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
