use super::dto::{Agrupacion, CargaCombustibleDetalle, Rendimiento, ResumenCombustible};
use chrono::NaiveDate;
use std::collections::BTreeMap;

fn ratio(num: f64, den: f64) -> Option<f64> {
    if den > 0.0 {
        Some(num / den)
    } else {
        None
    }
}

/// Active loads within `[desde, hasta]`; open bounds when `None`
pub fn in_range(
    rows: &[CargaCombustibleDetalle],
    desde: Option<NaiveDate>,
    hasta: Option<NaiveDate>,
) -> Vec<CargaCombustibleDetalle> {
    rows.iter()
        .filter(|r| r.activo)
        .filter(|r| desde.map_or(true, |d| r.fecha >= d))
        .filter(|r| hasta.map_or(true, |h| r.fecha <= h))
        .cloned()
        .collect()
}

/// Consumption per vehicle type or carrier, best km/l first
pub fn efficiency(rows: &[CargaCombustibleDetalle], group: Agrupacion) -> Vec<Rendimiento> {
    let mut groups: BTreeMap<i64, Rendimiento> = BTreeMap::new();
    for row in rows.iter().filter(|r| r.activo) {
        let (id, nombre) = match group {
            Agrupacion::TipoVehiculo => (row.tipo_vehiculo_id, &row.tipo_vehiculo),
            Agrupacion::Transportista => (row.transportista_id, &row.transportista),
        };
        let entry = groups.entry(id).or_insert_with(|| Rendimiento {
            id,
            nombre: nombre.clone(),
            cargas: 0,
            litros: 0.0,
            kilometros: 0.0,
            costo: 0.0,
            km_por_litro: None,
            costo_por_km: None,
        });
        entry.cargas += 1;
        entry.litros += row.litros;
        entry.kilometros += row.kilometros;
        entry.costo += row.costo_total();
    }

    let mut result: Vec<Rendimiento> = groups
        .into_values()
        .map(|mut r| {
            r.km_por_litro = ratio(r.kilometros, r.litros);
            r.costo_por_km = ratio(r.costo, r.kilometros);
            r
        })
        .collect();
    result.sort_by(|a, b| {
        b.km_por_litro
            .unwrap_or(0.0)
            .total_cmp(&a.km_por_litro.unwrap_or(0.0))
            .then_with(|| a.nombre.cmp(&b.nombre))
    });
    result
}

pub fn fuel_summary(rows: &[CargaCombustibleDetalle], group: Agrupacion) -> ResumenCombustible {
    let activos: Vec<&CargaCombustibleDetalle> = rows.iter().filter(|r| r.activo).collect();
    if activos.is_empty() {
        return ResumenCombustible::default();
    }
    let litros: f64 = activos.iter().map(|r| r.litros).sum();
    let kilometros: f64 = activos.iter().map(|r| r.kilometros).sum();
    let costo: f64 = activos.iter().map(|r| r.costo_total()).sum();

    let grupos: Vec<Rendimiento> = efficiency(rows, group)
        .into_iter()
        .filter(|r| r.km_por_litro.is_some())
        .collect();

    ResumenCombustible {
        cargas: activos.len(),
        litros,
        kilometros,
        costo,
        km_por_litro: ratio(kilometros, litros),
        mejor: grupos.first().cloned(),
        peor: if grupos.len() > 1 { grupos.last().cloned() } else { None },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carga(id: i64, vehiculo_id: i64, vehiculo: &str, dia: u32, litros: f64, km: f64) -> CargaCombustibleDetalle {
        CargaCombustibleDetalle {
            id,
            fecha: NaiveDate::from_ymd_opt(2024, 5, dia).unwrap(),
            transportista_id: 1,
            transportista: "Rápido Sur".into(),
            tipo_vehiculo_id: vehiculo_id,
            tipo_vehiculo: vehiculo.into(),
            litros,
            kilometros: km,
            precio_litro: 1000.0,
            activo: true,
        }
    }

    fn sample() -> Vec<CargaCombustibleDetalle> {
        vec![
            carga(1, 1, "Semi", 1, 100.0, 250.0),
            carga(2, 1, "Semi", 10, 100.0, 350.0),
            carga(3, 2, "Utilitario", 15, 50.0, 400.0),
        ]
    }

    #[test]
    fn test_efficiency_by_vehicle() {
        let result = efficiency(&sample(), Agrupacion::TipoVehiculo);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].nombre, "Utilitario");
        assert_eq!(result[0].km_por_litro, Some(8.0));
        assert_eq!(result[1].nombre, "Semi");
        assert_eq!(result[1].cargas, 2);
        assert_eq!(result[1].litros, 200.0);
        assert_eq!(result[1].km_por_litro, Some(3.0));
        assert_eq!(result[1].costo, 200000.0);
        assert!((result[1].costo_por_km.unwrap() - 200000.0 / 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_efficiency_by_carrier() {
        let result = efficiency(&sample(), Agrupacion::Transportista);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].cargas, 3);
        assert_eq!(result[0].km_por_litro, Some(4.0));
    }

    #[test]
    fn test_summary() {
        let resumen = fuel_summary(&sample(), Agrupacion::TipoVehiculo);
        assert_eq!(resumen.cargas, 3);
        assert_eq!(resumen.litros, 250.0);
        assert_eq!(resumen.kilometros, 1000.0);
        assert_eq!(resumen.costo, 250000.0);
        assert_eq!(resumen.km_por_litro, Some(4.0));
        assert_eq!(resumen.mejor.map(|r| r.nombre), Some("Utilitario".to_string()));
        assert_eq!(resumen.peor.map(|r| r.nombre), Some("Semi".to_string()));
    }

    #[test]
    fn test_zero_litres_never_nan() {
        let rows = vec![carga(1, 1, "Semi", 1, 0.0, 0.0)];
        let result = efficiency(&rows, Agrupacion::TipoVehiculo);
        assert_eq!(result[0].km_por_litro, None);
        assert_eq!(result[0].costo_por_km, None);
        let resumen = fuel_summary(&rows, Agrupacion::TipoVehiculo);
        assert_eq!(resumen.km_por_litro, None);
        assert!(resumen.mejor.is_none());
    }

    #[test]
    fn test_in_range_and_empty() {
        let rows = sample();
        let desde = NaiveDate::from_ymd_opt(2024, 5, 5);
        let hasta = NaiveDate::from_ymd_opt(2024, 5, 10);
        let filtered = in_range(&rows, desde, hasta);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
        assert_eq!(in_range(&rows, None, None).len(), 3);

        assert!(efficiency(&[], Agrupacion::Transportista).is_empty());
        assert_eq!(fuel_summary(&[], Agrupacion::Transportista), ResumenCombustible::default());
    }
}
