//! Option lists for the fifteen dropdown categories
//!
//! Each category is fetched separately. `DropdownOptionSet` keeps the
//! outcome per category so a failed list can be told apart from one that
//! simply has no values.

use crate::enums::dropdown_category::DropdownCategory;
use std::collections::{BTreeMap, HashSet};

/// Load outcome for a single category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OptionListState {
    #[default]
    Pending,
    Loaded(Vec<String>),
    Failed(String),
}

/// How one failing category affects the others
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Only the failing category is degraded
    #[default]
    Isolated,
    /// Any failure leaves every category unpopulated
    AllOrNothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOptionSet {
    lists: BTreeMap<DropdownCategory, OptionListState>,
}

impl DropdownOptionSet {
    /// Every category starts as `Pending`
    pub fn new() -> Self {
        Self {
            lists: DropdownCategory::ALL
                .into_iter()
                .map(|c| (c, OptionListState::Pending))
                .collect(),
        }
    }

    /// Build the set from per-category fetch results.
    /// Categories missing from `results` stay `Pending`. Repeated values in
    /// a list are dropped after their first occurrence.
    pub fn from_results<I>(results: I, policy: FetchPolicy) -> Self
    where
        I: IntoIterator<Item = (DropdownCategory, Result<Vec<String>, String>)>,
    {
        let results: Vec<_> = results.into_iter().collect();
        let mut set = Self::new();

        if policy == FetchPolicy::AllOrNothing {
            if let Some((category, Err(e))) = results.iter().find(|(_, r)| r.is_err()) {
                let message = format!("{}: {}", category.key(), e);
                for state in set.lists.values_mut() {
                    *state = OptionListState::Failed(message.clone());
                }
                return set;
            }
        }

        for (category, result) in results {
            let state = match result {
                Ok(values) => OptionListState::Loaded(dedup_keep_first(values)),
                Err(e) => OptionListState::Failed(e),
            };
            set.lists.insert(category, state);
        }
        set
    }

    pub fn state(&self, category: DropdownCategory) -> &OptionListState {
        // every category is inserted by `new`
        static PENDING: OptionListState = OptionListState::Pending;
        self.lists.get(&category).unwrap_or(&PENDING)
    }

    /// Loaded values, or an empty slice when pending or failed
    pub fn options(&self, category: DropdownCategory) -> &[String] {
        match self.state(category) {
            OptionListState::Loaded(values) => values,
            _ => &[],
        }
    }

    pub fn error(&self, category: DropdownCategory) -> Option<&str> {
        match self.state(category) {
            OptionListState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn failed_categories(&self) -> Vec<DropdownCategory> {
        self.lists
            .iter()
            .filter(|(_, s)| matches!(s, OptionListState::Failed(_)))
            .map(|(c, _)| *c)
            .collect()
    }
}

fn dedup_keep_first(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

impl Default for DropdownOptionSet {
    fn default() -> Self {
        Self::new()
    }
}
