//! Showcase core: list item model, filter/sort/paginate pipeline, the pure
//! browser state machine, and contact-form validation.
mod catalog;
pub mod contact;
mod effect;
mod export;
mod filter;
pub mod form;
mod item;
mod msg;
mod paginate;
mod saved;
mod sort;
mod state;
mod update;
mod view_model;

pub use catalog::{sample_jobs, sample_portfolio, sample_posts, ListKind};
pub use effect::Effect;
pub use export::export_csv;
pub use filter::{
    facet_options, filter_items, is_all, matches_query, tag_cloud, FacetSelection, ALL,
};
pub use item::{parse_item_date, FacetDimension, Item, ItemId};
pub use msg::Msg;
pub use paginate::{
    paginate, Page, PageWindow, DEFAULT_LOAD_MORE_STEP, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};
pub use saved::SavedSet;
pub use sort::{leading_number, sort_items, SortKey};
pub use state::{BrowserSettings, BrowserState, DEFAULT_DEBOUNCE};
pub use update::update;
pub use view_model::{BrowserViewModel, FacetOption, FacetView, ItemCard};
