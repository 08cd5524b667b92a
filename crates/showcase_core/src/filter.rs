//! Query and facet filtering over an immutable source.

use std::collections::{BTreeMap, BTreeSet};

use crate::{FacetDimension, Item};

/// Sentinel facet value meaning "no filter on this dimension".
pub const ALL: &str = "All";

/// True for the sentinel in any letter case.
pub fn is_all(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(ALL)
}

/// Active values per facet dimension.
///
/// A dimension that is absent, empty, or holds [`ALL`] imposes no
/// constraint. Concrete values and the sentinel never coexist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacetSelection {
    active: BTreeMap<FacetDimension, BTreeSet<String>>,
}

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles `value` on `dimension`.
    ///
    /// Selecting [`ALL`] clears the dimension. Selecting a concrete value
    /// adds it (dropping the sentinel); selecting it again removes it.
    pub fn toggle(&mut self, dimension: FacetDimension, value: &str) {
        let values = self.active.entry(dimension).or_default();
        if is_all(value) {
            values.clear();
            values.insert(ALL.to_string());
            return;
        }
        values.remove(ALL);
        if !values.remove(value) {
            values.insert(value.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Values currently constraining `dimension`, or `None` when unconstrained.
    pub fn constraint(&self, dimension: FacetDimension) -> Option<&BTreeSet<String>> {
        self.active
            .get(&dimension)
            .filter(|values| !values.is_empty() && !values.contains(ALL))
    }

    pub fn is_selected(&self, dimension: FacetDimension, value: &str) -> bool {
        match self.active.get(&dimension) {
            Some(values) if is_all(value) => values.is_empty() || values.contains(ALL),
            Some(values) => values.contains(value),
            None => is_all(value),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        FacetDimension::ALL
            .iter()
            .all(|dimension| self.constraint(*dimension).is_none())
    }

    fn admits(&self, item: &Item) -> bool {
        FacetDimension::ALL.iter().all(|dimension| {
            match self.constraint(*dimension) {
                None => true,
                Some(values) => item
                    .facet_value(*dimension)
                    .is_some_and(|value| values.contains(value)),
            }
        })
    }
}

/// True when `item` contains `needle` (already lowercased) in its title,
/// description or space-joined tags.
pub fn matches_query(item: &Item, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.title.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item.tags.join(" ").to_lowercase().contains(needle)
}

/// Ordered subsequence of `source` admitted by `query` and `facets`.
pub fn filter_items<'a>(source: &'a [Item], query: &str, facets: &FacetSelection) -> Vec<&'a Item> {
    let needle = query.trim().to_lowercase();
    source
        .iter()
        .filter(|item| matches_query(item, &needle))
        .filter(|item| facets.admits(item))
        .collect()
}

/// `"All"` followed by the distinct values of `dimension`, in first-seen order.
pub fn facet_options(source: &[Item], dimension: FacetDimension) -> Vec<String> {
    let mut options = vec![ALL.to_string()];
    for value in source.iter().filter_map(|item| item.facet_value(dimension)) {
        if !options.iter().any(|existing| existing == value) {
            options.push(value.to_string());
        }
    }
    options
}

/// Distinct tags across the source, in first-seen order.
pub fn tag_cloud(source: &[Item]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in source.iter().flat_map(|item| item.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}
