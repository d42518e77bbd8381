//! Module: row
//! Responsibility: the positional/named cell-reader contract consumed by extractors.
//! Does not own: how rows are produced (driver, cursor, batching).
//! Boundary: `Row::cell` is the only touchpoint between extraction and row storage.

mod stream;
mod value;

#[cfg(test)]
mod tests;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::Arc};

// re-exports
pub use stream::RowStream;
pub use value::{FromCell, Value};

///
/// Column
///
/// Identifies one column of a row, either by position or by name.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum Column {
    #[display("#{_0}")]
    Position(usize),

    #[display("{_0}")]
    Name(String),
}

impl Column {
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

///
/// IntoColumn
///
/// Conversion used by extractor constructors, so positions can be written as
/// bare integer literals.
///

pub trait IntoColumn {
    fn into_column(self) -> Column;
}

impl IntoColumn for Column {
    fn into_column(self) -> Column {
        self
    }
}

impl IntoColumn for usize {
    fn into_column(self) -> Column {
        Column::Position(self)
    }
}

impl IntoColumn for &str {
    fn into_column(self) -> Column {
        Column::name(self)
    }
}

impl IntoColumn for String {
    fn into_column(self) -> Column {
        Column::Name(self)
    }
}

impl From<usize> for Column {
    fn from(position: usize) -> Self {
        Self::Position(position)
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Column {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

///
/// Row
///
/// Abstraction over one tuple of a tabular result set.
/// A missing column and a SQL NULL both surface as "no definite value";
/// implementations must never fail on lookup.
///

pub trait Row {
    fn cell(&self, column: &Column) -> Option<&Value>;
}

impl dyn Row + '_ {
    /// Read one column as `T`.
    ///
    /// Absent when the column is missing, NULL, or not representable as `T`.
    #[must_use]
    pub fn read<T: FromCell>(&self, column: &Column) -> Option<T> {
        self.cell(column).and_then(T::from_cell)
    }
}

impl<R: Row + ?Sized> Row for &R {
    fn cell(&self, column: &Column) -> Option<&Value> {
        (**self).cell(column)
    }
}

impl Row for [Value] {
    fn cell(&self, column: &Column) -> Option<&Value> {
        match column {
            Column::Position(index) => self.get(*index),
            Column::Name(_) => None,
        }
    }
}

impl Row for Vec<Value> {
    fn cell(&self, column: &Column) -> Option<&Value> {
        self.as_slice().cell(column)
    }
}

impl Row for BTreeMap<String, Value> {
    fn cell(&self, column: &Column) -> Option<&Value> {
        match column {
            Column::Name(name) => self.get(name),
            Column::Position(_) => None,
        }
    }
}

///
/// ValueRow
///
/// Owned in-memory row. Positional values plus an optional shared header so
/// columns can also be addressed by name.
///

#[derive(Clone, Debug, PartialEq)]
pub struct ValueRow {
    header: Option<Arc<[String]>>,
    values: Vec<Value>,
}

impl ValueRow {
    /// Build a positional-only row.
    #[must_use]
    pub const fn new(values: Vec<Value>) -> Self {
        Self {
            header: None,
            values,
        }
    }

    /// Build a row addressable by position and by header name.
    #[must_use]
    pub const fn named(header: Arc<[String]>, values: Vec<Value>) -> Self {
        Self {
            header: Some(header),
            values,
        }
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[must_use]
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.header
            .as_deref()?
            .iter()
            .position(|column| column == name)
    }
}

impl Row for ValueRow {
    fn cell(&self, column: &Column) -> Option<&Value> {
        let index = match column {
            Column::Position(index) => *index,
            Column::Name(name) => self.position_of(name)?,
        };

        self.values.get(index)
    }
}

/// Build a shared header for `ValueRow::named`.
#[must_use]
pub fn header<I, S>(names: I) -> Arc<[String]>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}
