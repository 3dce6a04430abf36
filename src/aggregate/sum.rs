//! Numeric folds: revenue and price totals

use std::collections::BTreeMap;

/// A value that is missing, NaN or infinite counts as zero
pub fn finite_or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Group entities by `key_fn` and add up `value_fn` per group.
///
/// Missing or non-finite values contribute 0. An empty input gives an
/// empty map.
pub fn sum_by_key<T, K, KF, VF>(entities: &[T], key_fn: KF, value_fn: VF) -> BTreeMap<K, f64>
where
    K: Ord,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> Option<f64>,
{
    let mut totals = BTreeMap::new();
    for entity in entities {
        *totals.entry(key_fn(entity)).or_insert(0.0) += finite_or_zero(value_fn(entity));
    }
    totals
}

/// Add up `value_fn` over every entity; 0 for an empty input
pub fn sum_values<T, VF>(entities: &[T], value_fn: VF) -> f64
where
    VF: Fn(&T) -> Option<f64>,
{
    entities
        .iter()
        .map(|e| finite_or_zero(value_fn(e)))
        .fold(0.0, |acc, v| acc + v)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sale {
        farm: &'static str,
        amount: Option<f64>,
    }

    fn sale(farm: &'static str, amount: Option<f64>) -> Sale {
        Sale { farm, amount }
    }

    #[test]
    fn test_sum_by_key() {
        let sales = vec![
            sale("Sakai", Some(100.0)),
            sale("Dainichi", Some(50.0)),
            sale("Sakai", Some(25.5)),
        ];
        let totals = sum_by_key(&sales, |s| s.farm, |s| s.amount);
        assert_eq!(totals["Sakai"], 125.5);
        assert_eq!(totals["Dainichi"], 50.0);
    }

    #[test]
    fn test_sum_by_key_treats_bad_values_as_zero() {
        let sales = vec![
            sale("Sakai", None),
            sale("Sakai", Some(f64::NAN)),
            sale("Sakai", Some(f64::INFINITY)),
            sale("Marudo", Some(10.0)),
        ];
        let totals = sum_by_key(&sales, |s| s.farm, |s| s.amount);
        assert_eq!(totals["Sakai"], 0.0);
        assert_eq!(totals["Marudo"], 10.0);
        assert!(totals.values().all(|v| v.is_finite()));
    }

    #[test]
    fn test_empty_inputs() {
        let sales: Vec<Sale> = vec![];
        assert!(sum_by_key(&sales, |s| s.farm, |s| s.amount).is_empty());
        assert_eq!(sum_values(&sales, |s| s.amount), 0.0);
    }

    #[test]
    fn test_empty_sum_is_positive_zero() {
        let sales: Vec<Sale> = vec![];
        let total = sum_values(&sales, |s| s.amount);
        assert!(total.is_sign_positive());
        assert_eq!(serde_json::to_string(&total).unwrap(), "0.0");
        assert_eq!(format!("{:.2}", total), "0.00");
    }

    #[test]
    fn test_sum_values() {
        let sales = vec![sale("a", Some(1.5)), sale("b", None), sale("c", Some(2.0))];
        assert_eq!(sum_values(&sales, |s| s.amount), 3.5);
    }
}
