use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier of a listed item.
///
/// Job fixtures use numeric ids and portfolio pieces use strings such as
/// `"p1"`; both are kept as text so a saved set can mix them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Accepts a JSON string or a non-negative integer.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(Self(s.clone())),
            serde_json::Value::Number(n) => n.as_u64().map(|n| Self(n.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_json(&value)
            .ok_or_else(|| serde::de::Error::custom("item id must be a string or an integer"))
    }
}

/// Categorical filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FacetDimension {
    Category,
    Location,
    Kind,
}

impl FacetDimension {
    pub const ALL: [FacetDimension; 3] = [
        FacetDimension::Category,
        FacetDimension::Location,
        FacetDimension::Kind,
    ];

    /// Parses a dimension name as typed by a user. `department` is the jobs
    /// list's name for the category dimension.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "category" | "department" | "dept" => Some(Self::Category),
            "location" | "loc" => Some(Self::Location),
            "type" | "kind" => Some(Self::Kind),
            _ => None,
        }
    }
}

/// A single record in a list. Created once from a fixed source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    #[serde(alias = "department")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<NaiveDate>,
    #[serde(default, alias = "excerpt", alias = "desc")]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Display-formatted numeric field, e.g. `"₹6-10 LPA"`.
    #[serde(default, alias = "salary", skip_serializing_if = "Option::is_none")]
    pub figure: Option<String>,
    /// Seniority, author or outcome line; shown but never filtered on.
    #[serde(
        default,
        alias = "seniority",
        alias = "author",
        alias = "result",
        skip_serializing_if = "Option::is_none"
    )]
    pub byline: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            location: None,
            kind: None,
            date: None,
            description: String::new(),
            tags: Vec::new(),
            figure: None,
            byline: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Sets the date from `YYYY-MM-DD` or `Mon DD, YYYY`; unparseable text
    /// leaves the item undated.
    pub fn with_date(mut self, raw: &str) -> Self {
        self.date = parse_item_date(raw);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self.dedupe_tags();
        self
    }

    pub fn with_figure(mut self, figure: impl Into<String>) -> Self {
        self.figure = Some(figure.into());
        self
    }

    pub fn with_byline(mut self, byline: impl Into<String>) -> Self {
        self.byline = Some(byline.into());
        self
    }

    /// Value of this item on a facet dimension, if it has one.
    pub fn facet_value(&self, dimension: FacetDimension) -> Option<&str> {
        match dimension {
            FacetDimension::Category => Some(self.category.as_str()),
            FacetDimension::Location => self.location.as_deref(),
            FacetDimension::Kind => self.kind.as_deref(),
        }
    }

    /// Removes repeated tags, keeping the first occurrence.
    pub fn dedupe_tags(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.tags.retain(|tag| seen.insert(tag.clone()));
    }
}

/// Parses `2025-09-25` or `Sep 25, 2025`.
pub fn parse_item_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%b %d, %Y"))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%B %d, %Y"))
        .ok()
}

fn deserialize_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_item_date))
}
