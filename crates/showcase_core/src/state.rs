use std::sync::Arc;
use std::time::Duration;

use crate::filter::{facet_options, filter_items, tag_cloud, FacetSelection};
use crate::paginate::{paginate, Page, PageWindow, DEFAULT_LOAD_MORE_STEP, DEFAULT_PAGE_SIZE};
use crate::sort::{sort_items, SortKey};
use crate::view_model::{BrowserViewModel, FacetOption, FacetView, ItemCard};
use crate::{FacetDimension, Item, ListKind, SavedSet};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserSettings {
    pub page_size: usize,
    pub load_more_step: usize,
    pub debounce: Duration,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            load_more_step: DEFAULT_LOAD_MORE_STEP,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// Control state of one list browser. The source is fixed at construction;
/// everything else changes only through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserState {
    kind: ListKind,
    source: Arc<[Item]>,
    query_input: String,
    applied_query: String,
    query_generation: u64,
    facets: FacetSelection,
    sort: SortKey,
    window: PageWindow,
    saved: SavedSet,
    debounce: Duration,
    dirty: bool,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new(ListKind::Jobs, ListKind::Jobs.fixture(), BrowserSettings::default())
    }
}

impl BrowserState {
    pub fn new(kind: ListKind, source: Vec<Item>, settings: BrowserSettings) -> Self {
        Self {
            kind,
            source: source.into(),
            query_input: String::new(),
            applied_query: String::new(),
            query_generation: 0,
            facets: FacetSelection::new(),
            sort: SortKey::default(),
            window: PageWindow::new(settings.page_size, settings.load_more_step),
            saved: SavedSet::new(),
            debounce: settings.debounce,
            dirty: false,
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn source(&self) -> &[Item] {
        &self.source
    }

    pub fn query_input(&self) -> &str {
        &self.query_input
    }

    /// Query the current result reflects (trimmed, settled input).
    pub fn applied_query(&self) -> &str {
        &self.applied_query
    }

    pub fn query_generation(&self) -> u64 {
        self.query_generation
    }

    pub fn facets(&self) -> &FacetSelection {
        &self.facets
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    pub fn saved(&self) -> &SavedSet {
        &self.saved
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Filtered and sorted result, recomputed from the current state.
    pub fn matches(&self) -> Vec<&Item> {
        let filtered = filter_items(&self.source, &self.applied_query, &self.facets);
        sort_items(&filtered, self.sort)
    }

    pub fn page(&self) -> Page<'_> {
        paginate(&self.matches(), &self.window)
    }

    pub fn view(&self) -> BrowserViewModel {
        let page = self.page();
        let items = page
            .items
            .iter()
            .map(|item| ItemCard::from_item(item, self.saved.contains(&item.id)))
            .collect();

        BrowserViewModel {
            kind: self.kind,
            query_input: self.query_input.clone(),
            applied_query: self.applied_query.clone(),
            sort: self.sort,
            page_size: self.window.page_size(),
            items,
            has_more: page.has_more,
            total_matches: page.total,
            source_len: self.source.len(),
            no_results: page.total == 0,
            facets: self.facet_views(),
            tags: tag_cloud(&self.source),
            saved_ids: self.saved.ids().to_vec(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the state changed since the last call, then clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn facet_views(&self) -> Vec<FacetView> {
        FacetDimension::ALL
            .iter()
            .filter_map(|dimension| {
                let values = facet_options(&self.source, *dimension);
                if values.len() < 2 {
                    return None;
                }
                let options = values
                    .into_iter()
                    .map(|value| FacetOption {
                        selected: self.facets.is_selected(*dimension, &value),
                        value,
                    })
                    .collect();
                Some(FacetView {
                    dimension: *dimension,
                    label: self.dimension_label(*dimension).to_string(),
                    options,
                })
            })
            .collect()
    }

    fn dimension_label(&self, dimension: FacetDimension) -> &'static str {
        match dimension {
            FacetDimension::Category => self.kind.category_label(),
            FacetDimension::Location => "location",
            FacetDimension::Kind => "type",
        }
    }

    /// Records a raw edit and returns the generation that must fire to apply it.
    pub(crate) fn edit_query(&mut self, raw: String) -> u64 {
        self.query_input = raw;
        self.query_generation += 1;
        self.dirty = true;
        self.query_generation
    }

    /// Applies the settled input. Returns false when the generation is stale
    /// or the applied query would not change.
    pub(crate) fn commit_query(&mut self, generation: u64) -> bool {
        if generation != self.query_generation {
            return false;
        }
        let settled = self.query_input.trim();
        if settled == self.applied_query {
            return false;
        }
        self.applied_query = settled.to_string();
        self.window.reset();
        self.dirty = true;
        true
    }

    pub(crate) fn toggle_facet(&mut self, dimension: FacetDimension, value: &str) {
        self.facets.toggle(dimension, value);
        self.window.reset();
        self.dirty = true;
    }

    pub(crate) fn set_sort(&mut self, sort: SortKey) -> bool {
        if self.sort == sort {
            return false;
        }
        self.sort = sort;
        self.window.reset();
        self.dirty = true;
        true
    }

    pub(crate) fn set_page_size(&mut self, page_size: usize) -> bool {
        if self.window.page_size() == page_size {
            return false;
        }
        self.window.set_page_size(page_size);
        self.dirty = true;
        true
    }

    pub(crate) fn load_more(&mut self) -> bool {
        let total = self.matches().len();
        let grew = self.window.load_more(total);
        self.dirty |= grew;
        grew
    }

    pub(crate) fn toggle_saved(&mut self, id: crate::ItemId) {
        self.saved.toggle(id);
        self.dirty = true;
    }

    pub(crate) fn restore_saved(&mut self, saved: SavedSet) {
        self.saved = saved;
        self.dirty = true;
    }

    /// Resets query, facets and window; pending query commits become stale.
    pub(crate) fn clear(&mut self) {
        self.query_input.clear();
        self.applied_query.clear();
        self.query_generation += 1;
        self.facets.clear();
        self.window.reset();
        self.dirty = true;
    }
}
