use demand_insight::{DashboardError, DataLoader, TransactionTable, REQUIRED_COLUMNS};
use polars::prelude::*;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn table_from(columns: Vec<Series>) -> TransactionTable {
    DataLoader::from_dataframe(DataFrame::new(columns).unwrap()).unwrap()
}

#[test]
fn test_from_csv_trims_column_names() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, " StockCode ,InvoiceDate,  Quantity ,Country").unwrap();
    writeln!(file, "A,2024-01-01,3,France").unwrap();
    writeln!(file, "B,2024-01-02,5,Germany").unwrap();

    let table = DataLoader::from_csv(file.path()).unwrap();

    assert_eq!(
        table.column_names(),
        vec!["StockCode", "InvoiceDate", "Quantity", "Country"]
    );
    assert_eq!(table.height(), 2);
    assert!(table.missing_required_columns().is_empty());
    table.validate().unwrap();
}

#[test]
fn test_from_csv_missing_file() {
    let result = DataLoader::from_csv("no_such_transactions.csv");
    assert!(matches!(result, Err(DashboardError::Io(_))));
}

#[test]
fn test_preview_stringifies_rows() {
    let table = table_from(vec![
        Series::new("StockCode", &["A", "B", "C"]),
        Series::new("InvoiceDate", &["2024-01-01", "2024-01-02", "2024-01-03"]),
        Series::new("Quantity", &[3i64, 5, 7]),
    ]);

    let preview = table.preview(2).unwrap();
    assert_eq!(preview.len(), 2);
    assert_eq!(preview[0], vec!["A", "2024-01-01", "3"]);
    assert_eq!(preview[1], vec!["B", "2024-01-02", "5"]);

    // Asking for more rows than exist returns them all
    assert_eq!(table.preview(10).unwrap().len(), 3);
}

#[test]
fn test_validate_empty_table() {
    let table = table_from(vec![
        Series::new("StockCode", Vec::<&str>::new()),
        Series::new("InvoiceDate", Vec::<&str>::new()),
        Series::new("Quantity", Vec::<i64>::new()),
    ]);

    let err = table.validate().unwrap_err();
    assert!(matches!(err, DashboardError::EmptyDataset));
    assert_eq!(
        err.to_string(),
        "The DataFrame is empty. Please check the CSV file."
    );
}

#[test]
fn test_validate_missing_columns_lists_names() {
    let table = table_from(vec![
        Series::new("StockCode", &["A"]),
        Series::new("Country", &["France"]),
    ]);

    assert_eq!(
        table.missing_required_columns(),
        vec!["InvoiceDate", "Quantity"]
    );

    let err = table.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing columns in the data: InvoiceDate, Quantity. Please check the CSV file."
    );
}

#[test]
fn test_required_columns_order() {
    // The error message enumerates names in this order
    assert_eq!(REQUIRED_COLUMNS, ["StockCode", "InvoiceDate", "Quantity"]);
}
