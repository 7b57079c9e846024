use demand_insight::{aggregate_demand, DataLoader, DateSeries, TransactionTable};
use polars::prelude::*;
use pretty_assertions::assert_eq;

fn table_from(columns: Vec<Series>) -> TransactionTable {
    DataLoader::from_dataframe(DataFrame::new(columns).unwrap()).unwrap()
}

fn sample_table() -> TransactionTable {
    table_from(vec![
        Series::new("StockCode", &["A", "A", "A", "B"]),
        Series::new(
            "InvoiceDate",
            &["2024-01-01", "2024-01-01", "2024-01-02", "2024-01-01"],
        ),
        Series::new("Quantity", &[3i64, 2, 5, 9]),
    ])
}

#[test]
fn test_aggregate_groups_and_sums_by_date() {
    let table = sample_table();
    let series = aggregate_demand(&table, "A").unwrap();

    assert_eq!(series.dates(), ["2024-01-01", "2024-01-02"]);
    assert_eq!(series.values(), [5.0, 5.0]);
    assert_eq!(series.get("2024-01-01"), Some(5.0));
    assert_eq!(series.get("2024-01-03"), None);
}

#[test]
fn test_aggregate_is_idempotent() {
    let table = sample_table();
    let first = aggregate_demand(&table, "A").unwrap();
    let second = aggregate_demand(&table, "A").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_aggregate_partitions_filtered_rows() {
    let table = sample_table();
    let series = aggregate_demand(&table, "A").unwrap();

    // Every filtered row lands in exactly one bucket: bucket totals add
    // up to the sum of quantities over rows with StockCode A.
    assert_eq!(series.total(), 3.0 + 2.0 + 5.0);
}

#[test]
fn test_aggregate_unknown_stock_code_is_empty() {
    let table = sample_table();
    let series = aggregate_demand(&table, "Z").unwrap();

    assert!(series.is_empty());
    assert_eq!(series.len(), 0);
    assert_eq!(series.total(), 0.0);
}

#[test]
fn test_aggregate_orders_keys_lexicographically() {
    // Slash-style dates are not zero padded, so text order differs from
    // calendar order. The raw keys are never parsed; this is the
    // documented behavior.
    let table = table_from(vec![
        Series::new("StockCode", &["A", "A", "A"]),
        Series::new("InvoiceDate", &["1/9/2024", "1/10/2024", "1/2/2024"]),
        Series::new("Quantity", &[1i64, 2, 3]),
    ]);

    let series = aggregate_demand(&table, "A").unwrap();
    assert_eq!(series.dates(), ["1/10/2024", "1/2/2024", "1/9/2024"]);
}

#[test]
fn test_aggregate_numeric_stock_codes() {
    // Retail exports often carry purely numeric stock codes, which the
    // CSV reader infers as integers. Selection still works by text.
    let table = table_from(vec![
        Series::new("StockCode", &[85123i64, 85123, 22197]),
        Series::new("InvoiceDate", &["2024-01-01", "2024-01-02", "2024-01-01"]),
        Series::new("Quantity", &[4i64, 6, 1]),
    ]);

    let series = aggregate_demand(&table, "85123").unwrap();
    assert_eq!(series.values(), [4.0, 6.0]);
}

#[test]
fn test_date_series_length_mismatch() {
    let result = DateSeries::new(vec!["2024-01-01".to_string()], vec![1.0, 2.0]);
    assert!(result.is_err());
}

#[test]
fn test_date_series_rejects_mismatched_json() {
    // The wire form must satisfy the same alignment invariant the
    // constructor enforces; otherwise lookups past the shorter vector
    // would index out of bounds.
    let json = r#"{"dates":["2024-01-01","2024-01-02"],"values":[5.0]}"#;
    let result = serde_json::from_str::<DateSeries>(json);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("mismatch"));

    let json = r#"{"dates":["2024-01-01"],"values":[5.0]}"#;
    let series = serde_json::from_str::<DateSeries>(json).unwrap();
    assert_eq!(series.get("2024-01-02"), None);
    assert_eq!(series.get("2024-01-01"), Some(5.0));
}

#[test]
fn test_date_series_points() {
    let series = DateSeries::new(
        vec!["2024-01-01".to_string(), "2024-01-02".to_string()],
        vec![5.0, 7.0],
    )
    .unwrap();

    assert_eq!(series.points(), vec![(0.0, 5.0), (1.0, 7.0)]);
    let pairs: Vec<(&str, f64)> = series.iter().collect();
    assert_eq!(pairs, vec![("2024-01-01", 5.0), ("2024-01-02", 7.0)]);
}
