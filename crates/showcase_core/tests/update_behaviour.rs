use std::sync::Once;

use pretty_assertions::assert_eq;
use showcase_core::{
    update, BrowserSettings, BrowserState, Effect, FacetDimension, Item, ItemId, ListKind, Msg,
    SortKey, ALL,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(showcase_logging::initialize_for_tests);
}

fn jobs_state() -> BrowserState {
    BrowserState::new(ListKind::Jobs, ListKind::Jobs.fixture(), BrowserSettings::default())
}

/// Edits the query and fires the commit the update asked for.
fn search(state: BrowserState, raw: &str) -> BrowserState {
    let (state, effects) = update(state, Msg::QueryEdited(raw.to_string()));
    let generation = match effects.as_slice() {
        [Effect::ScheduleQueryCommit { generation, .. }] => *generation,
        other => panic!("expected one commit effect, got {other:?}"),
    };
    let (state, _) = update(state, Msg::QueryDebounceElapsed { generation });
    state
}

fn visible_ids(state: &BrowserState) -> Vec<String> {
    state
        .view()
        .items
        .iter()
        .map(|card| card.id.to_string())
        .collect()
}

fn toggle(state: BrowserState, dimension: FacetDimension, value: &str) -> BrowserState {
    update(
        state,
        Msg::FacetToggled {
            dimension,
            value: value.to_string(),
        },
    )
    .0
}

fn many_items(count: u64) -> Vec<Item> {
    (1..=count)
        .map(|i| {
            Item::new(i, format!("Role {i}"), if i % 2 == 0 { "Design" } else { "Engineering" })
                .with_date(&format!("2025-09-{:02}", i))
        })
        .collect()
}

#[test]
fn department_filter_then_newest_keeps_engineering_in_date_order() {
    init_logging();
    let state = toggle(jobs_state(), FacetDimension::Category, "Engineering");
    assert_eq!(visible_ids(&state), vec!["1", "4"]);

    let (state, _) = update(state, Msg::SortChanged(SortKey::Oldest));
    assert_eq!(visible_ids(&state), vec!["4", "1"]);

    let (state, _) = update(state, Msg::SortChanged(SortKey::Newest));
    let view = state.view();
    assert_eq!(visible_ids(&state), vec!["1", "4"]);
    assert_eq!(view.items[0].date.unwrap().to_string(), "2025-09-25");
    assert_eq!(view.items[1].date.unwrap().to_string(), "2025-09-15");
}

#[test]
fn salary_sort_orders_by_leading_integer() {
    init_logging();
    let state = toggle(jobs_state(), FacetDimension::Category, "Design");
    let state = toggle(state, FacetDimension::Category, "Marketing");
    let state = toggle(state, FacetDimension::Category, "Engineering");
    let (state, _) = update(state, Msg::SortChanged(SortKey::FigureDescending));

    let figures: Vec<String> = state
        .view()
        .items
        .iter()
        .map(|card| card.figure.clone().unwrap())
        .collect();
    assert_eq!(figures, vec!["₹7-12 LPA", "₹6-10 LPA", "₹4-8 LPA", "₹2-4 LPA"]);
}

#[test]
fn selecting_all_clears_concrete_values_and_is_idempotent() {
    init_logging();
    let state = toggle(jobs_state(), FacetDimension::Location, "Remote");
    assert_eq!(visible_ids(&state), vec!["1", "3"]);

    let once = toggle(state, FacetDimension::Location, ALL);
    assert_eq!(visible_ids(&once), vec!["1", "2", "3", "4"]);
    let twice = toggle(once.clone(), FacetDimension::Location, ALL);
    assert_eq!(once.view().items, twice.view().items);
    assert_eq!(once.facets(), twice.facets());
}

#[test]
fn facets_and_across_dimensions_or_within() {
    init_logging();
    let state = toggle(jobs_state(), FacetDimension::Location, "Remote");
    let state = toggle(state, FacetDimension::Location, "Noida");
    assert_eq!(visible_ids(&state), vec!["1", "3", "4"]);

    let state = toggle(state, FacetDimension::Kind, "Full-Time");
    assert_eq!(visible_ids(&state), vec!["1", "4"]);
}

#[test]
fn query_matches_tags_case_insensitively() {
    init_logging();
    let state = search(jobs_state(), "  mongodb ");
    assert_eq!(visible_ids(&state), vec!["4"]);
    assert_eq!(state.applied_query(), "mongodb");

    let state = search(state, "zzz-no-match");
    let view = state.view();
    assert!(view.no_results);
    assert!(view.items.is_empty());
    assert!(!view.has_more);
}

#[test]
fn load_more_clamps_and_query_resets_window() {
    init_logging();
    let state = BrowserState::new(ListKind::Jobs, many_items(10), BrowserSettings::default());
    let view = state.view();
    assert_eq!(view.items.len(), 6);
    assert!(view.has_more);

    let (state, _) = update(state, Msg::LoadMoreClicked);
    let view = state.view();
    assert_eq!(view.items.len(), 10);
    assert!(!view.has_more);

    // Disabled once everything is visible.
    let (mut state, _) = update(state, Msg::LoadMoreClicked);
    assert_eq!(state.window().visible(), 10);
    state.consume_dirty();
    let (mut state, _) = update(state, Msg::LoadMoreClicked);
    assert_eq!(state.window().visible(), 10);
    assert!(!state.consume_dirty());

    let state = search(state, "role");
    assert_eq!(state.window().visible(), 6);
    assert_eq!(state.view().items.len(), 6);
}

#[test]
fn facet_and_sort_changes_reset_expanded_window() {
    init_logging();
    let state = BrowserState::new(ListKind::Jobs, many_items(20), BrowserSettings::default());
    let (state, _) = update(state, Msg::LoadMoreClicked);
    assert_eq!(state.window().visible(), 12);

    let state = toggle(state, FacetDimension::Category, "Design");
    assert_eq!(state.window().visible(), 6);

    let (state, _) = update(state, Msg::LoadMoreClicked);
    let (state, _) = update(state, Msg::SortChanged(SortKey::Oldest));
    assert_eq!(state.window().visible(), 6);
    assert_eq!(visible_ids(&state), vec!["2", "4", "6", "8", "10", "12"]);
}

#[test]
fn page_size_options_only() {
    init_logging();
    let state = BrowserState::new(ListKind::Jobs, many_items(20), BrowserSettings::default());
    let (state, _) = update(state, Msg::PageSizeChanged(7));
    assert_eq!(state.window().page_size(), 6);

    let (state, _) = update(state, Msg::PageSizeChanged(9));
    assert_eq!(state.view().items.len(), 9);
    assert_eq!(state.view().page_size, 9);

    let (state, _) = update(state, Msg::PageSizeChanged(4));
    assert_eq!(state.view().items.len(), 4);
    assert!(state.view().has_more);

    let (state, _) = update(state, Msg::LoadMoreClicked);
    assert_eq!(state.view().items.len(), 10);
    let state = toggle(state, FacetDimension::Category, "Engineering");
    assert_eq!(state.view().items.len(), 4);
}

#[test]
fn save_toggle_is_its_own_inverse_and_persists_each_time() {
    init_logging();
    let state = jobs_state();
    let before = state.saved().clone();

    let (state, effects) = update(state, Msg::SaveToggled(ItemId::from("2")));
    assert!(state.view().items.iter().any(|card| card.id.as_str() == "2" && card.saved));
    assert!(matches!(
        effects.as_slice(),
        [Effect::PersistSaved { key: "savedJobs_v1", saved }] if saved.contains(&ItemId::from("2"))
    ));

    let (state, effects) = update(state, Msg::SaveToggled(ItemId::from("2")));
    assert_eq!(state.saved(), &before);
    assert_eq!(
        effects,
        vec![Effect::PersistSaved {
            key: "savedJobs_v1",
            saved: before,
        }]
    );
}

#[test]
fn saved_set_survives_filters_and_clear() {
    init_logging();
    let (state, _) = update(jobs_state(), Msg::SaveToggled(ItemId::from("3")));
    let state = toggle(state, FacetDimension::Category, "Engineering");
    let state = search(state, "react");
    let (state, _) = update(state, Msg::ClearClicked);

    assert_eq!(state.view().saved_ids, vec![ItemId::from("3")]);
    assert_eq!(state.view().items.len(), 4);
}

#[test]
fn clear_resets_query_facets_and_window_but_keeps_sort() {
    init_logging();
    let state = BrowserState::new(ListKind::Jobs, many_items(20), BrowserSettings::default());
    let state = toggle(state, FacetDimension::Category, "Design");
    let (state, _) = update(state, Msg::SortChanged(SortKey::Oldest));
    let (state, _) = update(state, Msg::LoadMoreClicked);
    let state = search(state, "role 1");

    let (state, effects) = update(state, Msg::ClearClicked);
    assert!(effects.is_empty());
    assert_eq!(state.query_input(), "");
    assert_eq!(state.applied_query(), "");
    assert!(state.facets().is_unconstrained());
    assert_eq!(state.window().visible(), 6);
    assert_eq!(state.sort(), SortKey::Oldest);
    let category = &state.view().facets[0];
    assert!(category.options[0].selected);
    assert_eq!(category.options[0].value, ALL);
}

#[test]
fn export_emits_csv_of_whole_source() {
    init_logging();
    let state = toggle(jobs_state(), FacetDimension::Category, "Design");
    let (_state, effects) = update(state, Msg::ExportRequested);
    let [Effect::WriteExport {
        file_name,
        contents,
    }] = effects.as_slice()
    else {
        panic!("expected export effect");
    };
    assert_eq!(*file_name, "jobs.csv");
    assert_eq!(contents.lines().count(), 4);
    assert_eq!(
        contents.lines().next().unwrap(),
        "1,\"Frontend Developer\",Engineering,Remote,Full-Time,2025-09-25"
    );
}

#[test]
fn view_lists_facets_and_tags_for_jobs() {
    init_logging();
    let view = jobs_state().view();
    let labels: Vec<&str> = view.facets.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(labels, vec!["department", "location", "type"]);
    let departments: Vec<&str> = view.facets[0]
        .options
        .iter()
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(departments, vec!["All", "Engineering", "Design", "Marketing"]);
    assert_eq!(view.tags.len(), 9);
    assert_eq!(view.source_len, 4);
}

#[test]
fn posts_have_only_category_facet_and_sort_by_human_dates() {
    init_logging();
    let state = BrowserState::new(ListKind::Posts, ListKind::Posts.fixture(), BrowserSettings::default());
    let view = state.view();
    assert_eq!(view.facets.len(), 1);
    assert_eq!(visible_ids(&state), vec!["ai-trends", "nextjs-wordpress", "short-videos", "design-systems"]);

    let (state, _) = update(state, Msg::SortChanged(SortKey::Oldest));
    assert_eq!(visible_ids(&state)[0], "design-systems");
}
