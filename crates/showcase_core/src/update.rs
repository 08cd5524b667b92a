use crate::export::export_csv;
use crate::paginate::PAGE_SIZE_OPTIONS;
use crate::{BrowserState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: BrowserState, msg: Msg) -> (BrowserState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryEdited(raw) => schedule_commit(&mut state, raw),
        Msg::TagClicked(tag) => {
            let tag = tag.trim();
            if tag.is_empty() {
                return (state, Vec::new());
            }
            let current = state.query_input();
            let raw = if current.is_empty() {
                tag.to_string()
            } else {
                format!("{current} {tag}")
            };
            schedule_commit(&mut state, raw)
        }
        Msg::QueryDebounceElapsed { generation } => {
            // Stale generations are superseded edits; they never apply.
            state.commit_query(generation);
            Vec::new()
        }
        Msg::FacetToggled { dimension, value } => {
            state.toggle_facet(dimension, &value);
            Vec::new()
        }
        Msg::SortChanged(sort) => {
            state.set_sort(sort);
            Vec::new()
        }
        Msg::PageSizeChanged(page_size) => {
            if PAGE_SIZE_OPTIONS.contains(&page_size) {
                state.set_page_size(page_size);
            }
            Vec::new()
        }
        Msg::LoadMoreClicked => {
            state.load_more();
            Vec::new()
        }
        Msg::SaveToggled(id) => {
            state.toggle_saved(id);
            vec![Effect::PersistSaved {
                key: state.kind().storage_key(),
                saved: state.saved().clone(),
            }]
        }
        Msg::ClearClicked => {
            state.clear();
            Vec::new()
        }
        Msg::SavedRestored(saved) => {
            state.restore_saved(saved);
            Vec::new()
        }
        Msg::ExportRequested => vec![Effect::WriteExport {
            file_name: state.kind().export_file_name(),
            contents: export_csv(state.source()),
        }],
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn schedule_commit(state: &mut BrowserState, raw: String) -> Vec<Effect> {
    let generation = state.edit_query(raw);
    vec![Effect::ScheduleQueryCommit {
        generation,
        delay: state.debounce(),
    }]
}
