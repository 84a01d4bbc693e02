use crate::domain::model::Record;

/// Builds a new record holding every entry of `record` except `field`.
/// Remaining keys keep their order; a record without `field` comes back equal.
pub fn omit_field(record: &Record, field: &str) -> Record {
    let data = record
        .data
        .iter()
        .filter(|(key, _)| key.as_str() != field)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    Record { data }
}

pub fn omit_field_all(records: &[Record], field: &str) -> Vec<Record> {
    records.iter().map(|record| omit_field(record, field)).collect()
}
