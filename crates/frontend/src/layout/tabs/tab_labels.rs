//! Tab titles. Catalog tabs take the list name from the entity itself.

use contracts::domain::a001_transportista::Transportista;
use contracts::domain::a002_tipo_vehiculo::TipoVehiculo;
use contracts::domain::a003_tipo_carga::TipoCarga;
use contracts::domain::a004_zona::Zona;
use contracts::domain::a005_adicional::Adicional;
use contracts::domain::a006_carga_combustible::CargaCombustible;
use contracts::domain::a007_tarifa::Tarifa;
use contracts::domain::common::CatalogEntity;

/// Readable title for a tab key. Fallback: empty string.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Catalogs ──────────────────────────────────────────────────────
        "a001_transportistas" => Transportista::list_name(),
        "a002_tipos_vehiculo" => TipoVehiculo::list_name(),
        "a003_tipos_carga" => TipoCarga::list_name(),
        "a004_zonas" => Zona::list_name(),
        "a005_adicionales" => Adicional::list_name(),
        "a006_cargas_combustible" => CargaCombustible::list_name(),
        "a007_tarifas" => Tarifa::list_name(),

        // ── Reports ───────────────────────────────────────────────────────
        "d400_comparativa_costos" => "Comparativa de costos",
        "d401_frecuencia_uso" => "Frecuencia de uso",
        "d402_rendimiento_combustible" => "Rendimiento de combustible",

        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_keys() {
        assert_eq!(tab_label_for_key("a004_zonas"), "Zonas");
        assert_eq!(tab_label_for_key("d401_frecuencia_uso"), "Frecuencia de uso");
        assert_eq!(tab_label_for_key("p900_sales_register"), "");
    }
}
