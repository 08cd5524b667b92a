#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search box (raw, not yet applied).
    QueryEdited(String),
    /// A scheduled query commit fired.
    QueryDebounceElapsed { generation: u64 },
    /// User clicked a tag chip; appends it to the search box.
    TagClicked(String),
    /// User clicked a facet chip.
    FacetToggled {
        dimension: crate::FacetDimension,
        value: String,
    },
    SortChanged(crate::SortKey),
    /// User picked a page size from the options list.
    PageSizeChanged(usize),
    LoadMoreClicked,
    /// User clicked the bookmark on an item.
    SaveToggled(crate::ItemId),
    /// User clicked Clear.
    ClearClicked,
    /// Restore the saved set hydrated from durable storage.
    SavedRestored(crate::SavedSet),
    /// User asked for a CSV of the whole source.
    ExportRequested,
    /// Fallback for placeholder wiring.
    NoOp,
}
