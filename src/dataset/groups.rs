use std::collections::BTreeSet;

use crate::error::{DgeError, Result};

/// Sample group labels with an ordered set of levels (a factor)
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGroups {
    labels: Vec<String>,
    levels: Vec<String>,
}

impl SampleGroups {
    /// Levels are the sorted unique labels
    pub fn new(labels: Vec<String>) -> Self {
        let levels: BTreeSet<&String> = labels.iter().collect();
        let levels = levels.into_iter().cloned().collect();
        Self { labels, levels }
    }

    /// Keep an explicit level order, e.g. control before treatment
    pub fn with_levels(labels: Vec<String>, levels: Vec<String>) -> Result<Self> {
        let unique: BTreeSet<&String> = levels.iter().collect();
        if unique.len() != levels.len() {
            return Err(DgeError::InvalidDataset {
                reason: "group levels must be unique".to_string(),
            });
        }
        if let Some(label) = labels.iter().find(|l| !levels.contains(l)) {
            return Err(DgeError::InvalidDataset {
                reason: format!("group label '{}' is not one of the levels", label),
            });
        }
        Ok(Self { labels, levels })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
