use serde::{de::DeserializeOwned, Serialize};

/// Trait implemented by every record managed through the admin screens.
///
/// Defines the per-record accessors used by the generic CRUD hook and data
/// table, plus static metadata used for REST paths and UI labels.
pub trait CatalogEntity: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    // ============================================================================
    // Instance methods
    // ============================================================================

    /// Backend id, `None` until the record has been created
    fn id(&self) -> Option<i64>;

    /// Human readable name used in selects, banners and confirm dialogs
    fn display_name(&self) -> String;

    /// `false` once the record was given a baja lógica
    fn is_active(&self) -> bool;

    fn set_active(&mut self, active: bool);

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Entity index in the system (e.g. "a001")
    fn entity_index() -> &'static str;

    /// REST collection segment (e.g. "transportistas")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Transportista")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Transportistas")
    fn list_name() -> &'static str;

    /// Full system name (e.g. "a002_tipos_vehiculo"), used as the tab key
    fn full_name() -> String {
        format!(
            "{}_{}",
            Self::entity_index(),
            Self::collection_name().replace('-', "_")
        )
    }
}
