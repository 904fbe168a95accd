use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::category::Category;

/// Per-category file counts accumulated during a run.
///
/// Iteration is ordered by category name, so summaries are stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationResult {
    counts: BTreeMap<Category, usize>,
}

impl ClassificationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: Category) {
        *self.counts.entry(category).or_default() += 1;
    }

    pub fn get(&self, category: &Category) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, usize)> {
        self.counts.iter().map(|(category, &count)| (category, count))
    }
}

impl FromIterator<Category> for ClassificationResult {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |mut acc, category| {
            acc.record(category);
            acc
        })
    }
}
