use crate::ItemId;

/// Identifiers the user marked, most recently saved first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SavedSet {
    ids: Vec<ItemId>,
}

impl SavedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from stored ids, dropping repeats.
    pub fn from_ids(ids: impl IntoIterator<Item = ItemId>) -> Self {
        let mut set = Self::new();
        for id in ids {
            if !set.contains(&id) {
                set.ids.push(id);
            }
        }
        set
    }

    /// Parses a stored JSON array of string or integer ids.
    ///
    /// Anything else (invalid JSON, a non-array, an array holding other
    /// values) yields an empty set.
    pub fn from_json(blob: &str) -> Self {
        let Ok(serde_json::Value::Array(values)) = serde_json::from_str(blob) else {
            return Self::new();
        };
        let ids: Option<Vec<ItemId>> = values.iter().map(ItemId::from_json).collect();
        ids.map(Self::from_ids).unwrap_or_default()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.ids.contains(id)
    }

    /// Flips membership of `id`. Returns true when the id is now saved.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        if let Some(pos) = self.ids.iter().position(|existing| *existing == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.insert(0, id);
            true
        }
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
