use showcase_core::{BrowserViewModel, FacetView, ItemCard};

const DATE_FORMAT: &str = "%b %d, %Y";

/// Text frame for one view: header, filters, the visible page, footer.
pub fn render(view: &BrowserViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "== {} | showing {} of {} (source {}) | sort: {} | page size: {} ==",
        view.kind,
        view.items.len(),
        view.total_matches,
        view.source_len,
        view.sort,
        view.page_size
    ));

    if !view.applied_query.is_empty() || !view.query_input.is_empty() {
        let mut search = format!("search: {:?}", view.applied_query);
        if view.query_input != view.applied_query {
            search.push_str(&format!(" (typing {:?})", view.query_input));
        }
        lines.push(search);
    }

    lines.extend(view.facets.iter().map(render_facet));

    if !view.tags.is_empty() {
        lines.push(format!("tags: {}", view.tags.join(", ")));
    }

    if view.no_results {
        lines.push("No results. Try clearing filters.".to_string());
    }
    for (index, card) in view.items.iter().enumerate() {
        lines.push(render_card(index + 1, card));
    }
    if view.has_more {
        lines.push(format!(
            "... {} more (type `more`)",
            view.total_matches - view.items.len()
        ));
    }

    if !view.saved_ids.is_empty() {
        let ids: Vec<&str> = view.saved_ids.iter().map(|id| id.as_str()).collect();
        lines.push(format!("saved: {}", ids.join(", ")));
    }
    lines
}

fn render_facet(facet: &FacetView) -> String {
    let chips: Vec<String> = facet
        .options
        .iter()
        .map(|option| {
            if option.selected {
                format!("[{}]", option.value)
            } else {
                option.value.clone()
            }
        })
        .collect();
    format!("{}: {}", facet.label, chips.join(" "))
}

fn render_card(position: usize, card: &ItemCard) -> String {
    let marker = if card.saved { "*" } else { " " };
    let mut parts = vec![card.title.clone(), card.category.clone()];
    parts.extend(card.location.clone());
    parts.extend(card.kind.clone());
    parts.extend(card.date.map(|date| date.format(DATE_FORMAT).to_string()));
    parts.extend(card.figure.clone());
    parts.extend(card.byline.clone());

    let mut line = format!("{position:>2}. [{marker}] {} | {}", card.id, parts.join(" | "));
    if !card.tags.is_empty() {
        line.push_str(&format!(" #{}", card.tags.join(" #")));
    }
    line
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use showcase_core::{update, BrowserSettings, BrowserState, FacetDimension, Item, ListKind, Msg};

    use super::*;

    fn state() -> BrowserState {
        let items = vec![
            Item::new("a", "Brand Refresh", "Branding")
                .with_date("2025-03-01")
                .with_tags(["Logo"]),
            Item::new("b", "Shop Site", "Web").with_date("2025-05-01"),
        ];
        BrowserState::new(ListKind::Portfolio, items, BrowserSettings::default())
    }

    #[test]
    fn frame_lists_newest_first_with_chips() {
        let lines = render(&state().view());
        assert_eq!(
            lines,
            vec![
                "== portfolio | showing 2 of 2 (source 2) | sort: newest | page size: 6 ==",
                "category: [All] Branding Web",
                "tags: Logo",
                " 1. [ ] b | Shop Site | Web | May 01, 2025",
                " 2. [ ] a | Brand Refresh | Branding | Mar 01, 2025 #Logo",
            ]
        );
    }

    #[test]
    fn empty_result_and_saved_marker() {
        let (state, _) = update(state(), Msg::SaveToggled("a".into()));
        let (state, _) = update(
            state,
            Msg::FacetToggled {
                dimension: FacetDimension::Category,
                value: "Branding".to_string(),
            },
        );
        let lines = render(&state.view());
        assert!(lines.contains(&" 1. [*] a | Brand Refresh | Branding | Mar 01, 2025 #Logo".to_string()));
        assert!(lines.contains(&"saved: a".to_string()));

        let (state, _) = update(state, Msg::TagClicked("nothing-matches".to_string()));
        let (state, _) = update(
            state.clone(),
            Msg::QueryDebounceElapsed {
                generation: state.query_generation(),
            },
        );
        let lines = render(&state.view());
        assert!(lines.contains(&"No results. Try clearing filters.".to_string()));
    }
}
