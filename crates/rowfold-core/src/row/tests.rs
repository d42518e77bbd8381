use super::{Column, FromCell, Row, RowStream, Value, ValueRow, header};
use std::collections::BTreeMap;

fn person_row(id: i64, name: Option<&str>) -> ValueRow {
    ValueRow::named(
        header(["id", "name"]),
        vec![Value::Int(id), Value::from(name)],
    )
}

#[test]
fn value_row_reads_by_position_and_name() {
    let row = person_row(7, Some("ada"));
    let row: &dyn Row = &row;

    assert_eq!(row.read::<i64>(&Column::Position(0)), Some(7));
    assert_eq!(row.read::<String>(&Column::name("name")), Some("ada".to_string()));
}

#[test]
fn null_missing_and_mismatched_reads_are_absent() {
    let row = person_row(7, None);
    let row: &dyn Row = &row;

    assert_eq!(row.read::<String>(&Column::name("name")), None);
    assert_eq!(row.read::<String>(&Column::name("email")), None);
    assert_eq!(row.read::<String>(&Column::Position(9)), None);
    assert_eq!(row.read::<bool>(&Column::name("id")), None);
}

#[test]
fn positional_rows_ignore_names() {
    let row = vec![Value::Int(1), Value::Text("x".into())];

    assert_eq!(row.cell(&Column::Position(1)), Some(&Value::Text("x".into())));
    assert_eq!(row.cell(&Column::name("x")), None);
}

#[test]
fn map_rows_ignore_positions() {
    let row = BTreeMap::from([("id".to_string(), Value::Uint(3))]);

    assert_eq!(row.cell(&Column::name("id")), Some(&Value::Uint(3)));
    assert_eq!(row.cell(&Column::Position(0)), None);
}

#[test]
fn integer_reads_cross_signedness_within_range() {
    assert_eq!(i64::from_cell(&Value::Uint(5)), Some(5));
    assert_eq!(i64::from_cell(&Value::Uint(u64::MAX)), None);
    assert_eq!(u64::from_cell(&Value::Int(-1)), None);
    assert_eq!(i32::from_cell(&Value::Int(i64::MAX)), None);
}

#[test]
fn value_reads_reject_null() {
    assert_eq!(Value::from_cell(&Value::Null), None);
    assert_eq!(Value::from_cell(&Value::Bool(true)), Some(Value::Bool(true)));
}

#[test]
fn column_display_marks_positions() {
    assert_eq!(Column::Position(2).to_string(), "#2");
    assert_eq!(Column::name("id").to_string(), "id");
}

#[test]
fn row_stream_pushback_replays_one_row() {
    let mut stream = RowStream::new(vec![1, 2, 3]);

    assert_eq!(stream.next_row(), Some(1));
    let second = stream.next_row().expect("second row");
    stream.push_back(second);

    assert_eq!(stream.rows_read(), 1);
    assert_eq!(stream.next_row(), Some(2));
    assert_eq!(stream.next_row(), Some(3));
    assert!(stream.is_exhausted());
    assert_eq!(stream.rows_read(), 3);
}

#[test]
fn row_stream_exhaustion_probe_keeps_the_row() {
    let mut stream = RowStream::new(vec![10]);

    assert!(!stream.is_exhausted());
    assert_eq!(stream.rows_read(), 0);
    assert_eq!(stream.collect::<Vec<_>>(), vec![10]);
}

#[test]
fn row_stream_pushback_after_exhaustion_check_keeps_both_rows() {
    let mut stream = RowStream::new(vec![1, 2, 3]);

    let first = stream.next_row().expect("first row");
    assert!(!stream.is_exhausted());
    stream.push_back(first);

    assert_eq!(stream.rows_read(), 0);
    assert_eq!(stream.collect::<Vec<_>>(), vec![1, 2, 3]);
}
