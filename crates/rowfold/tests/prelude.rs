use rowfold::prelude::*;

#[derive(Debug, PartialEq)]
struct Order {
    id: u64,
    lines: Vec<(String, u32)>,
}

#[test]
fn prelude_covers_a_one_to_many_extraction() {
    let rows = vec![
        vec![Value::Uint(1), Value::from("tea"), Value::Int(2)],
        vec![Value::Uint(1), Value::from("milk"), Value::Int(1)],
        vec![Value::Uint(2), Value::from("bread"), Value::Int(3)],
    ];
    let extractor = GroupedMulti::new(
        Product::new(
            (
                cell::<u64>(0),
                ListMulti::new(Product::new((cell::<String>(1), cell::<u32>(2)), |line| line)),
            ),
            |(id, lines)| Order { id, lines },
        ),
        cell::<u64>(0),
    );

    let orders = Extraction::new(&extractor)
        .trace(&LogTraceSink)
        .all(rows)
        .unwrap();

    assert_eq!(orders.len(), 2);
    assert_eq!(
        orders[0],
        Order {
            id: 1,
            lines: vec![("tea".to_string(), 2), ("milk".to_string(), 1)],
        }
    );
    assert_eq!(orders[1].lines, vec![("bread".to_string(), 3)]);
}

#[test]
fn prelude_drivers_are_in_scope() {
    let mut rows = RowStream::new(vec![vec![Value::Null]]);

    assert_eq!(
        cell::<i64>(0).optional().extract_head(&mut rows),
        Ok(Some(None))
    );
    assert!(!rowfold::VERSION.is_empty());
}
