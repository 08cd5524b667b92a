use crate::Item;

/// One line per item: `id,"title",category,location,type,date`.
pub fn export_csv(items: &[Item]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "{},\"{}\",{},{},{},{}",
                item.id,
                item.title.replace('"', "\"\""),
                item.category,
                item.location.as_deref().unwrap_or(""),
                item.kind.as_deref().unwrap_or(""),
                item.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
