use showcase_core::{is_all, FacetDimension, ItemId, Msg, SortKey, ALL, PAGE_SIZE_OPTIONS};
use showcase_logging::showcase_warn;

pub const HELP: &str = "\
commands:
  search <text>          edit the search box (applied after a short pause)
  tag <name>             append a tag to the search box
  facet <dim> <value>    toggle a facet chip (dim: category|department|location|type)
  sort newest|oldest|salary
  size 4|6|9             page size
  more                   load more results
  save <id>              bookmark or unbookmark an item
  clear                  reset search and facets
  export                 write the full list as CSV
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Dispatch(Msg),
    Refresh,
    Help,
    Quit,
}

/// Turns one typed line into a message for the browser.
pub fn parse_input(line: &str) -> Result<Input, String> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let msg = match command.to_ascii_lowercase().as_str() {
        "" => return Ok(Input::Refresh),
        "help" | "?" => return Ok(Input::Help),
        "quit" | "exit" | "q" => return Ok(Input::Quit),
        "search" | "/" => Msg::QueryEdited(rest.to_string()),
        "tag" => Msg::TagClicked(required(rest, "tag name")?.to_string()),
        "facet" => {
            let (dimension, value) = required(rest, "facet dimension and value")?
                .split_once(char::is_whitespace)
                .ok_or("usage: facet <dim> <value>")?;
            let dimension = FacetDimension::parse(dimension)
                .ok_or_else(|| format!("unknown facet dimension: {dimension}"))?;
            let value = value.trim();
            Msg::FacetToggled {
                dimension,
                value: if is_all(value) { ALL } else { value }.to_string(),
            }
        }
        "sort" => Msg::SortChanged(required(rest, "sort key")?.parse::<SortKey>()?),
        "size" => {
            let size = required(rest, "page size")?
                .parse::<usize>()
                .map_err(|err| format!("invalid page size: {err}"))?;
            if !PAGE_SIZE_OPTIONS.contains(&size) {
                showcase_warn!("Ignoring unsupported page size {}", size);
                return Err(format!("page size must be one of {PAGE_SIZE_OPTIONS:?}"));
            }
            Msg::PageSizeChanged(size)
        }
        "more" => Msg::LoadMoreClicked,
        "save" | "unsave" => Msg::SaveToggled(ItemId::new(required(rest, "item id")?)),
        "clear" => Msg::ClearClicked,
        "export" => Msg::ExportRequested,
        other => return Err(format!("unknown command: {other} (try `help`)")),
    };
    Ok(Input::Dispatch(msg))
}

fn required<'a>(rest: &'a str, what: &str) -> Result<&'a str, String> {
    if rest.is_empty() {
        Err(format!("missing {what}"))
    } else {
        Ok(rest)
    }
}
