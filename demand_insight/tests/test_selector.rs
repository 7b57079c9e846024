use demand_insight::{DataLoader, StockCodeSelector};
use polars::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_choices_keep_first_encountered_order() {
    let df = DataFrame::new(vec![
        Series::new("StockCode", &["B", "A", "B", "C", "A"]),
        Series::new("InvoiceDate", &["d1", "d2", "d3", "d4", "d5"]),
        Series::new("Quantity", &[1i64, 1, 1, 1, 1]),
    ])
    .unwrap();
    let table = DataLoader::from_dataframe(df).unwrap();

    let selector = StockCodeSelector::from_table(&table).unwrap();
    assert_eq!(selector.choices(), ["B", "A", "C"]);
    assert_eq!(selector.default_choice(), Some("B"));
    assert_eq!(selector.len(), 3);
    assert!(selector.contains("C"));
    assert!(!selector.contains("Z"));
}

#[test]
fn test_empty_table_gives_empty_choices() {
    let df = DataFrame::new(vec![
        Series::new("StockCode", Vec::<&str>::new()),
        Series::new("InvoiceDate", Vec::<&str>::new()),
        Series::new("Quantity", Vec::<i64>::new()),
    ])
    .unwrap();
    let table = DataLoader::from_dataframe(df).unwrap();

    let selector = StockCodeSelector::from_table(&table).unwrap();
    assert!(selector.is_empty());
    assert_eq!(selector.default_choice(), None);
}
