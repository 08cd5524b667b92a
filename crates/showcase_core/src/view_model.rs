use chrono::NaiveDate;

use crate::{FacetDimension, Item, ItemId, ListKind, SortKey};

/// Everything presentation needs to draw one frame of a list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserViewModel {
    pub kind: ListKind,
    pub query_input: String,
    pub applied_query: String,
    pub sort: SortKey,
    pub page_size: usize,
    pub items: Vec<ItemCard>,
    pub has_more: bool,
    pub total_matches: usize,
    pub source_len: usize,
    pub no_results: bool,
    pub facets: Vec<FacetView>,
    pub tags: Vec<String>,
    pub saved_ids: Vec<ItemId>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub id: ItemId,
    pub title: String,
    pub category: String,
    pub location: Option<String>,
    pub kind: Option<String>,
    pub date: Option<NaiveDate>,
    pub figure: Option<String>,
    pub byline: Option<String>,
    pub tags: Vec<String>,
    pub saved: bool,
}

impl ItemCard {
    pub(crate) fn from_item(item: &Item, saved: bool) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            category: item.category.clone(),
            location: item.location.clone(),
            kind: item.kind.clone(),
            date: item.date,
            figure: item.figure.clone(),
            byline: item.byline.clone(),
            tags: item.tags.clone(),
            saved,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetView {
    pub dimension: FacetDimension,
    pub label: String,
    pub options: Vec<FacetOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    pub value: String,
    pub selected: bool,
}
