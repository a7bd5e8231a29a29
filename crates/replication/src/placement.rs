//! Replica placement results.

/// Members chosen to hold a key, in ring-walk order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicaPlacement {
    /// Member that owns the key.
    pub primary: String,
    /// Distinct successors of the primary, nearest first.
    pub secondaries: Vec<String>,
}

impl ReplicaPlacement {
    /// Split ordered owners into primary and secondaries. `None` if empty.
    pub fn from_owners(owners: Vec<String>) -> Option<Self> {
        let mut owners = owners.into_iter();
        let primary = owners.next()?;
        Some(Self {
            primary,
            secondaries: owners.collect(),
        })
    }

    /// Every owner, primary first.
    pub fn all(&self) -> Vec<&str> {
        std::iter::once(self.primary.as_str())
            .chain(self.secondaries.iter().map(String::as_str))
            .collect()
    }

    /// Whether `member` holds a copy.
    pub fn is_owner(&self, member: &str) -> bool {
        self.primary == member || self.secondaries.iter().any(|m| m == member)
    }

    /// Number of owners, primary included.
    pub fn len(&self) -> usize {
        1 + self.secondaries.len()
    }

    /// Always false: a placement has a primary.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// True when fewer than `factor` members could be found.
    pub fn is_degraded(&self, factor: usize) -> bool {
        self.len() < factor
    }
}
