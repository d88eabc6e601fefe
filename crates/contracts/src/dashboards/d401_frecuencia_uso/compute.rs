use super::dto::{Dimension, Frecuencia};
use crate::dashboards::d400_comparativa_costos::TarifaDetalle;
use std::collections::HashMap;

fn names_of(row: &TarifaDetalle, dimension: Dimension) -> Vec<String> {
    match dimension {
        Dimension::Transportista => vec![row.transportista.clone()],
        Dimension::TipoVehiculo => vec![row.tipo_vehiculo.clone()],
        Dimension::Zona => vec![row.zona.clone()],
        Dimension::TipoCarga => vec![row.tipo_carga.clone()],
        Dimension::Adicional => row
            .adicionales
            .iter()
            .map(|a| a.nombre.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect(),
    }
}

/// Usage count per value, most used first (ties by name)
pub fn frequency(rows: &[TarifaDetalle], dimension: Dimension) -> Vec<Frecuencia> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in rows.iter().filter(|r| r.activo) {
        for nombre in names_of(row, dimension) {
            *counts.entry(nombre).or_insert(0) += 1;
        }
    }

    let total: usize = counts.values().sum();
    let mut result: Vec<Frecuencia> = counts
        .into_iter()
        .map(|(nombre, cantidad)| Frecuencia {
            nombre,
            cantidad,
            porcentaje: cantidad as f64 * 100.0 / total as f64,
        })
        .collect();
    result.sort_by(|a, b| b.cantidad.cmp(&a.cantidad).then_with(|| a.nombre.cmp(&b.nombre)));
    result
}

/// Number of counted usages, the denominator of `porcentaje`
pub fn total_count(items: &[Frecuencia]) -> usize {
    items.iter().map(|f| f.cantidad).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_tarifa::TarifaAdicional;

    fn row(id: i64, transportista: &str, zona: &str, adicionales: &[&str]) -> TarifaDetalle {
        TarifaDetalle {
            id,
            transportista_id: 1,
            transportista: transportista.into(),
            tipo_vehiculo_id: 1,
            tipo_vehiculo: "Chasis".into(),
            zona_id: 1,
            zona: zona.into(),
            tipo_carga_id: 1,
            tipo_carga: "Paletizada".into(),
            costo_base: 100.0,
            adicionales: adicionales
                .iter()
                .map(|n| TarifaAdicional::ad_hoc(*n, 10.0))
                .collect(),
            activo: true,
        }
    }

    #[test]
    fn test_frequency_by_carrier() {
        let rows = vec![
            row(1, "Beta", "Norte", &[]),
            row(2, "Alfa", "Norte", &[]),
            row(3, "Beta", "Sur", &[]),
            row(4, "Gamma", "Sur", &[]),
        ];
        let result = frequency(&rows, Dimension::Transportista);
        let names: Vec<&str> = result.iter().map(|f| f.nombre.as_str()).collect();
        assert_eq!(names, vec!["Beta", "Alfa", "Gamma"]);
        assert_eq!(result[0].cantidad, 2);
        assert_eq!(result[0].porcentaje, 50.0);
        assert_eq!(result[1].porcentaje, 25.0);
        assert_eq!(total_count(&result), 4);
    }

    #[test]
    fn test_frequency_by_surcharge() {
        let rows = vec![
            row(1, "Alfa", "Norte", &["Peaje", "Seguro"]),
            row(2, "Alfa", "Norte", &["Peaje"]),
            row(3, "Alfa", "Norte", &[]),
        ];
        let result = frequency(&rows, Dimension::Adicional);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].nombre, "Peaje");
        assert_eq!(result[0].cantidad, 2);
        assert!((result[1].porcentaje - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_inactive_rows_and_empty_input() {
        let mut baja = row(1, "Alfa", "Norte", &[]);
        baja.activo = false;
        assert!(frequency(&[baja], Dimension::Zona).is_empty());
        assert!(frequency(&[], Dimension::Adicional).is_empty());
    }

    #[test]
    fn test_dimension_keys() {
        for d in Dimension::all() {
            assert_eq!(Dimension::from_key(d.key()), Some(d));
        }
        assert_eq!(Dimension::from_key("otra"), None);
    }
}
