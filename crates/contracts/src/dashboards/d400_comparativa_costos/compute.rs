use super::dto::{ComparativaFilter, ResumenTarifas, TarifaDetalle, ZonaComparativa};
use std::collections::{BTreeMap, HashSet};

/// Per-zone min / max / average of the tariff totals, sorted by zone name
pub fn compare_by_zone(rows: &[TarifaDetalle], filter: &ComparativaFilter) -> Vec<ZonaComparativa> {
    let mut by_zone: BTreeMap<i64, Vec<&TarifaDetalle>> = BTreeMap::new();
    for row in rows.iter().filter(|r| filter.matches(r)) {
        by_zone.entry(row.zona_id).or_default().push(row);
    }

    let mut result: Vec<ZonaComparativa> = by_zone
        .into_iter()
        .filter_map(|(zona_id, tarifas)| {
            let cheapest = tarifas
                .iter()
                .min_by(|a, b| a.total().total_cmp(&b.total()))?;
            let maximo = tarifas
                .iter()
                .map(|t| t.total())
                .fold(f64::MIN, f64::max);
            let suma: f64 = tarifas.iter().map(|t| t.total()).sum();
            Some(ZonaComparativa {
                zona_id,
                zona: cheapest.zona.clone(),
                cantidad: tarifas.len(),
                minimo: cheapest.total(),
                maximo,
                promedio: suma / tarifas.len() as f64,
                mas_barato: cheapest.transportista.clone(),
            })
        })
        .collect();

    result.sort_by(|a, b| a.zona.to_lowercase().cmp(&b.zona.to_lowercase()));
    result
}

/// Tariffs of one zone, cheapest first
pub fn ranking_for_zone<'a>(
    rows: &'a [TarifaDetalle],
    zona_id: i64,
    filter: &ComparativaFilter,
) -> Vec<&'a TarifaDetalle> {
    let mut ranking: Vec<&TarifaDetalle> = rows
        .iter()
        .filter(|r| r.zona_id == zona_id && filter.matches(r))
        .collect();
    ranking.sort_by(|a, b| {
        a.total()
            .total_cmp(&b.total())
            .then_with(|| a.transportista.cmp(&b.transportista))
    });
    ranking
}

pub fn summary(rows: &[TarifaDetalle], filter: &ComparativaFilter) -> ResumenTarifas {
    let totals: Vec<f64> = rows
        .iter()
        .filter(|r| filter.matches(r))
        .map(|r| r.total())
        .collect();
    if totals.is_empty() {
        return ResumenTarifas::default();
    }
    let zonas: HashSet<i64> = rows
        .iter()
        .filter(|r| filter.matches(r))
        .map(|r| r.zona_id)
        .collect();
    ResumenTarifas {
        cantidad: totals.len(),
        zonas: zonas.len(),
        minimo: totals.iter().copied().reduce(f64::min),
        maximo: totals.iter().copied().reduce(f64::max),
        promedio: Some(totals.iter().sum::<f64>() / totals.len() as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_tarifa::TarifaAdicional;

    fn row(id: i64, transportista: &str, zona_id: i64, zona: &str, costo: f64) -> TarifaDetalle {
        TarifaDetalle {
            id,
            transportista_id: id * 10,
            transportista: transportista.into(),
            tipo_vehiculo_id: 1,
            tipo_vehiculo: "Semi".into(),
            zona_id,
            zona: zona.into(),
            tipo_carga_id: 1,
            tipo_carga: "General".into(),
            costo_base: costo,
            adicionales: vec![],
            activo: true,
        }
    }

    fn sample() -> Vec<TarifaDetalle> {
        let mut con_peaje = row(3, "Andes Cargas", 1, "Norte", 900.0);
        con_peaje.adicionales.push(TarifaAdicional::ad_hoc("Peaje", 300.0));
        vec![
            row(1, "Rápido Sur", 2, "Cuyo", 500.0),
            row(2, "Expreso Norte", 1, "Norte", 1000.0),
            con_peaje,
            row(4, "Rápido Sur", 2, "Cuyo", 700.0),
        ]
    }

    #[test]
    fn test_compare_by_zone() {
        let result = compare_by_zone(&sample(), &ComparativaFilter::default());
        assert_eq!(result.len(), 2);

        assert_eq!(result[0].zona, "Cuyo");
        assert_eq!(result[0].cantidad, 2);
        assert_eq!(result[0].minimo, 500.0);
        assert_eq!(result[0].maximo, 700.0);
        assert_eq!(result[0].promedio, 600.0);

        assert_eq!(result[1].zona, "Norte");
        assert_eq!(result[1].minimo, 1000.0);
        assert_eq!(result[1].maximo, 1200.0);
        assert_eq!(result[1].mas_barato, "Expreso Norte");
        assert_eq!(result[1].diferencia(), 200.0);
    }

    #[test]
    fn test_inactive_and_filtered_rows_ignored() {
        let mut rows = sample();
        rows[1].activo = false;
        rows[0].tipo_vehiculo_id = 2;

        let result = compare_by_zone(&rows, &ComparativaFilter::default());
        let norte = result.iter().find(|z| z.zona == "Norte").unwrap();
        assert_eq!(norte.cantidad, 1);
        assert_eq!(norte.mas_barato, "Andes Cargas");

        let filter = ComparativaFilter {
            tipo_vehiculo_id: Some(2),
            tipo_carga_id: None,
        };
        let result = compare_by_zone(&rows, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].cantidad, 1);
        assert_eq!(result[0].minimo, 500.0);
    }

    #[test]
    fn test_ranking() {
        let rows = sample();
        let ranking = ranking_for_zone(&rows, 1, &ComparativaFilter::default());
        let ids: Vec<i64> = ranking.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(ranking_for_zone(&rows, 99, &ComparativaFilter::default()).is_empty());
    }

    #[test]
    fn test_summary() {
        let resumen = summary(&sample(), &ComparativaFilter::default());
        assert_eq!(resumen.cantidad, 4);
        assert_eq!(resumen.zonas, 2);
        assert_eq!(resumen.minimo, Some(500.0));
        assert_eq!(resumen.maximo, Some(1200.0));
        assert_eq!(resumen.promedio, Some(850.0));
    }

    #[test]
    fn test_empty() {
        assert!(compare_by_zone(&[], &ComparativaFilter::default()).is_empty());
        let resumen = summary(&[], &ComparativaFilter::default());
        assert_eq!(resumen.cantidad, 0);
        assert_eq!(resumen.promedio, None);
    }
}
