use super::CatalogEntity;
use std::collections::HashMap;

/// id → display name map used to render foreign keys in tables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameLookup {
    names: HashMap<i64, String>,
}

impl NameLookup {
    pub fn from_entities<T: CatalogEntity>(items: &[T]) -> Self {
        let names = items
            .iter()
            .filter_map(|item| item.id().map(|id| (id, item.display_name())))
            .collect();
        Self { names }
    }

    /// Name for `id`, or `"#id"` when the referenced record is unknown
    pub fn name(&self, id: i64) -> String {
        self.names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("#{}", id))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
