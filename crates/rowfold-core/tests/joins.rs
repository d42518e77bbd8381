//! End-to-end extraction of nested object graphs from flattened join result sets.

use rowfold_core::{
    driver::{Extract, ExtractConfig, Extraction, HeadBoundary},
    error::ExtractError,
    extract::{Extractor, ExtractorKind, GroupedMulti, ListMulti, Product, cell},
    row::{RowStream, Value, ValueRow, header},
};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
struct Author {
    id: i64,
    name: String,
    books: Vec<Book>,
}

#[derive(Clone, Debug, PartialEq)]
struct Book {
    id: i64,
    title: String,
    tags: Vec<String>,
}

fn columns() -> Arc<[String]> {
    header(["author_id", "author_name", "book_id", "book_title", "tag"])
}

fn row(
    header: &Arc<[String]>,
    author: (i64, &str),
    book: Option<(i64, &str)>,
    tag: Option<&str>,
) -> ValueRow {
    ValueRow::named(
        header.clone(),
        vec![
            Value::Int(author.0),
            Value::from(author.1),
            Value::from(book.map(|b| b.0)),
            Value::from(book.map(|b| b.1)),
            Value::from(tag),
        ],
    )
}

fn book_extractor() -> impl Extractor<Output = Book> {
    Product::new(
        (
            cell::<i64>("book_id"),
            cell::<String>("book_title"),
            ListMulti::new(cell::<String>("tag")),
        ),
        |(id, title, tags)| Book { id, title, tags },
    )
}

fn authors_extractor() -> impl Extractor<Output = Vec<Author>, Item = Author> {
    GroupedMulti::new(
        Product::new(
            (
                cell::<i64>("author_id"),
                cell::<String>("author_name"),
                GroupedMulti::new(book_extractor(), cell::<i64>("book_id")),
            ),
            |(id, name, books)| Author { id, name, books },
        ),
        cell::<i64>("author_id"),
    )
}

#[test]
fn two_level_join_rebuilds_the_graph() {
    let h = columns();
    let rows = vec![
        row(&h, (1, "le guin"), Some((10, "earthsea")), Some("fantasy")),
        row(&h, (1, "le guin"), Some((10, "earthsea")), Some("classic")),
        row(&h, (2, "banks"), Some((20, "excession")), None),
        row(&h, (1, "le guin"), Some((11, "dispossessed")), Some("utopia")),
    ];

    let authors = authors_extractor().extract_all(rows).unwrap();

    assert_eq!(
        authors,
        vec![
            Author {
                id: 1,
                name: "le guin".into(),
                books: vec![
                    Book {
                        id: 10,
                        title: "earthsea".into(),
                        tags: vec!["fantasy".into(), "classic".into()],
                    },
                    Book {
                        id: 11,
                        title: "dispossessed".into(),
                        tags: vec!["utopia".into()],
                    },
                ],
            },
            Author {
                id: 2,
                name: "banks".into(),
                books: vec![Book {
                    id: 20,
                    title: "excession".into(),
                    tags: vec![],
                }],
            },
        ]
    );
}

#[test]
fn outer_join_miss_yields_empty_child_list() {
    let h = columns();
    let extractor = GroupedMulti::new(
        Product::new(
            (
                cell::<i64>("author_id"),
                ListMulti::new(cell::<String>("book_title")),
            ),
            |(id, titles)| (id, titles),
        ),
        cell::<i64>("author_id"),
    );
    let rows = vec![
        row(&h, (1, "le guin"), Some((10, "earthsea")), None),
        row(&h, (2, "banks"), None, None),
    ];

    assert_eq!(
        extractor.extract_all(rows).unwrap(),
        vec![(1, vec!["earthsea".to_string()]), (2, vec![])]
    );
}

#[test]
fn malformed_outer_join_aborts_the_whole_extraction() {
    let h = columns();
    let extractor = GroupedMulti::new(
        ListMulti::new(cell::<String>("book_title")),
        cell::<i64>("author_id"),
    );
    let rows = vec![
        row(&h, (1, "le guin"), Some((10, "earthsea")), None),
        row(&h, (1, "le guin"), None, None),
    ];

    assert_eq!(
        extractor.extract_all(rows),
        Err(ExtractError::NullWithoutOptional {
            kind: ExtractorKind::ListMulti
        })
    );
}

#[test]
fn optional_child_object_models_a_nullable_join() {
    let h = columns();
    let extractor = Product::new(
        (
            cell::<String>("author_name"),
            Product::new(
                (cell::<i64>("book_id"), cell::<String>("book_title")),
                |(id, title)| (id, title),
            )
            .optional(),
        ),
        |(name, book)| (name, book),
    );
    let rows = vec![
        row(&h, (1, "le guin"), Some((10, "earthsea")), None),
        row(&h, (2, "banks"), None, None),
    ];

    assert_eq!(
        extractor.extract_all(rows).unwrap(),
        vec![
            ("le guin".to_string(), Some((10, "earthsea".to_string()))),
            ("banks".to_string(), None),
        ]
    );
}

#[test]
fn lookahead_heads_stream_one_author_at_a_time() {
    let h = columns();
    let rows = vec![
        row(&h, (1, "le guin"), Some((10, "earthsea")), Some("fantasy")),
        row(&h, (1, "le guin"), Some((11, "dispossessed")), None),
        row(&h, (2, "banks"), Some((20, "excession")), None),
    ];
    let extractor = authors_extractor();
    let extraction = Extraction::new(&extractor)
        .config(ExtractConfig::new().with_head_boundary(HeadBoundary::Lookahead));
    let mut stream = RowStream::new(rows);

    let first = extraction.head(&mut stream).unwrap().unwrap();
    let second = extraction.head(&mut stream).unwrap().unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(first.books.len(), 2);
    assert_eq!(second.id, 2);
    assert_eq!(second.books[0].title, "excession");
    assert_eq!(extraction.head(&mut stream).unwrap(), None);
}

#[test]
fn shape_describes_the_whole_tree() {
    let shape = authors_extractor().shape();
    let columns = shape
        .columns()
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();

    assert_eq!(shape.kind.to_string(), "grouped_multi");
    assert_eq!(
        columns,
        vec![
            "author_id",
            "author_name",
            "book_id",
            "book_title",
            "tag",
            "book_id",
            "author_id"
        ]
    );
}
