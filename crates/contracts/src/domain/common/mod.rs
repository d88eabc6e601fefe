//! Common types and traits for all catalog entities

pub mod catalog_entity;
pub mod lookup;
pub mod validation;

// Re-exports
pub use catalog_entity::CatalogEntity;
pub use lookup::NameLookup;

/// serde default for `activo`: records created before the flag existed are active
pub(crate) fn default_active() -> bool {
    true
}
