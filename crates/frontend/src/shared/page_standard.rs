//! Page category constants for tab page standardization.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a004_zonas--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity key searchable: the part before it is
//! the tab key and the module directory name.

/// List of records: table with filters and row actions.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Build the `{entity}--{category}` id
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{}--{}", entity, category)
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id() {
        let id = page_id("a007_tarifas", PAGE_CAT_LIST);
        assert_eq!(id, "a007_tarifas--list");
        assert!(is_valid_page_id(&id));
        assert!(!is_valid_page_id("a007_tarifas"));
        assert!(!is_valid_page_id("--list"));
    }
}
