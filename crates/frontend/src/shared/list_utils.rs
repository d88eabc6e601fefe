//! Column filters and sorting shared by every list
use std::cmp::Ordering;
use std::collections::HashMap;

/// Row that can be shown by [`crate::shared::components::data_table::DataTable`]
pub trait DataRow {
    fn row_id(&self) -> i64;

    /// Display text of column `key`; also what filters compare against
    fn cell(&self, key: &str) -> String;

    /// Numeric value of column `key` for sorting, `None` for text columns
    fn number(&self, _key: &str) -> Option<f64> {
        None
    }

    fn is_active(&self) -> bool {
        true
    }
}

/// Distinct non-empty values of a column, sorted case-insensitively
pub fn distinct_values<R: DataRow>(rows: &[R], key: &str) -> Vec<String> {
    let mut values: Vec<String> = rows
        .iter()
        .map(|r| r.cell(key))
        .filter(|v| !v.trim().is_empty())
        .collect();
    values.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
    values.dedup();
    values
}

/// Keep rows matching every selected filter; an empty value means "Todos"
pub fn apply_filters<R: DataRow + Clone>(rows: &[R], filters: &HashMap<String, String>) -> Vec<R> {
    rows.iter()
        .filter(|row| {
            filters
                .iter()
                .all(|(key, value)| value.is_empty() || row.cell(key) == *value)
        })
        .cloned()
        .collect()
}

fn compare_rows<R: DataRow>(a: &R, b: &R, key: &str) -> Ordering {
    match (a.number(key), b.number(key)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => a.cell(key).to_lowercase().cmp(&b.cell(key).to_lowercase()),
    }
}

/// Sort rows in place by a column key
pub fn sort_rows<R: DataRow>(rows: &mut [R], key: &str, ascending: bool) {
    rows.sort_by(|a, b| {
        let cmp = compare_rows(a, b, key);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Arrow shown next to the sorted column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Fila {
        id: i64,
        zona: &'static str,
        transportista: &'static str,
        costo: f64,
    }

    impl DataRow for Fila {
        fn row_id(&self) -> i64 {
            self.id
        }

        fn cell(&self, key: &str) -> String {
            match key {
                "zona" => self.zona.to_string(),
                "transportista" => self.transportista.to_string(),
                "costo" => format!("{:.2}", self.costo),
                _ => String::new(),
            }
        }

        fn number(&self, key: &str) -> Option<f64> {
            (key == "costo").then_some(self.costo)
        }
    }

    fn filas() -> Vec<Fila> {
        vec![
            Fila { id: 1, zona: "Norte", transportista: "Beta", costo: 900.0 },
            Fila { id: 2, zona: "Sur", transportista: "Alfa", costo: 100.0 },
            Fila { id: 3, zona: "Norte", transportista: "Alfa", costo: 50.0 },
            Fila { id: 4, zona: "cuyo", transportista: "", costo: 1000.0 },
        ]
    }

    #[test]
    fn test_distinct_values() {
        assert_eq!(distinct_values(&filas(), "zona"), vec!["cuyo", "Norte", "Sur"]);
        assert_eq!(distinct_values(&filas(), "transportista"), vec!["Alfa", "Beta"]);
    }

    #[test]
    fn test_apply_filters_and() {
        let mut filters = HashMap::new();
        assert_eq!(apply_filters(&filas(), &filters).len(), 4);

        filters.insert("zona".to_string(), "Norte".to_string());
        assert_eq!(apply_filters(&filas(), &filters).len(), 2);

        filters.insert("transportista".to_string(), "Alfa".to_string());
        let result = apply_filters(&filas(), &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 3);

        filters.insert("zona".to_string(), String::new());
        assert_eq!(apply_filters(&filas(), &filters).len(), 2);
    }

    #[test]
    fn test_sort_numeric_and_text() {
        let mut rows = filas();
        sort_rows(&mut rows, "costo", true);
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1, 4]);

        sort_rows(&mut rows, "zona", false);
        assert_eq!(rows[0].zona, "Sur");
        assert_eq!(rows[3].zona, "cuyo");
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("zona", "zona", true), " ▲");
        assert_eq!(get_sort_indicator("zona", "zona", false), " ▼");
        assert_eq!(get_sort_indicator("zona", "costo", true), " ⇅");
    }
}
