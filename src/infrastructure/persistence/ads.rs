use crate::domain::ports::AdsRepository;
use crate::domain::{AdRecord, StoreError};
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::any::AnyRow;
use sqlx::{Column, Row};

#[async_trait]
impl AdsRepository for Database {
    async fn fetch_all(&self) -> Result<Vec<AdRecord>, StoreError> {
        let rows = sqlx::query("SELECT * FROM ads")
            .fetch_all(&self.pool)
            .await?;

        // Fully materialized, backend row order kept.
        Ok(rows.iter().map(row_to_record).collect())
    }
}

/// Mirror one row as a column-name to value mapping. Columns are passed
/// through exactly as the backend reports them.
fn row_to_record(row: &AnyRow) -> AdRecord {
    let mut record = AdRecord::new();
    for (index, column) in row.columns().iter().enumerate() {
        record.insert(column.name().to_string(), decode_column(row, index));
    }
    record
}

/// The Any driver narrows column values to a small scalar set; try each in
/// turn and fall back to null for anything undecodable.
fn decode_column(row: &AnyRow, index: usize) -> Value {
    if let Ok(v) = row.try_get::<Option<i64>, _>(index) {
        return v.map(Value::from).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<f64>, _>(index) {
        return v.map(Value::from).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<bool>, _>(index) {
        return v.map(Value::from).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<String>, _>(index) {
        return v.map(Value::from).unwrap_or(Value::Null);
    }
    Value::Null
}
