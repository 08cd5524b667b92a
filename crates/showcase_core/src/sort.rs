use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    /// Leading integer of the display figure, highest first.
    FigureDescending,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::FigureDescending => "salary",
        };
        f.write_str(name)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "salary" | "figure" => Ok(SortKey::FigureDescending),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// First run of ASCII digits in `display`, or 0.
pub fn leading_number(display: Option<&str>) -> u64 {
    let Some(display) = display else {
        return 0;
    };
    display
        .split(|c: char| !c.is_ascii_digit())
        .find(|run| !run.is_empty())
        .and_then(|run| run.parse().ok())
        .unwrap_or(0)
}

/// Returns a sorted copy of `items`. Equal keys keep their input order.
pub fn sort_items<'a>(items: &[&'a Item], key: SortKey) -> Vec<&'a Item> {
    let mut sorted = items.to_vec();
    match key {
        SortKey::Newest => sorted.sort_by(|a, b| by_date(a, b, true)),
        SortKey::Oldest => sorted.sort_by(|a, b| by_date(a, b, false)),
        SortKey::FigureDescending => sorted.sort_by(|a, b| {
            leading_number(b.figure.as_deref()).cmp(&leading_number(a.figure.as_deref()))
        }),
    }
    sorted
}

// Undated items go last in both directions.
fn by_date(a: &Item, b: &Item, descending: bool) -> Ordering {
    match (a.date, b.date) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
