use crate::{
    error::ExtractError,
    extract::{Extractor, ExtractorKind, ExtractorShape},
    row::{Column, FromCell, IntoColumn, Row},
};
use std::marker::PhantomData;

///
/// Constant
///
/// Ignores rows and always emits the same value. Used for literal and
/// default fields.
///

#[derive(Clone, Debug)]
pub struct Constant<T> {
    value: T,
}

impl<T> Constant<T> {
    pub const fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone> Extractor for Constant<T> {
    type Acc = T;
    type Output = T;
    type Item = T;

    fn initialize(&self, _row: &dyn Row) -> Result<Self::Acc, ExtractError> {
        Ok(self.value.clone())
    }

    fn accumulate(&self, _acc: &mut Self::Acc, _row: &dyn Row) -> Result<(), ExtractError> {
        Ok(())
    }

    fn emit(&self, acc: &Self::Acc) -> Result<Option<Self::Output>, ExtractError> {
        Ok(Some(acc.clone()))
    }

    fn into_items(&self, output: Self::Output) -> Vec<Self::Item> {
        vec![output]
    }

    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Constant
    }
}

///
/// Cell
///
/// Reads one column. A column read is stateless across rows, so the fold
/// state is simply the latest read.
///

pub struct Cell<T> {
    column: Column,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Cell<T> {
    pub const fn new(column: Column) -> Self {
        Self {
            column,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn column(&self) -> &Column {
        &self.column
    }
}

impl<T> Clone for Cell<T> {
    fn clone(&self) -> Self {
        Self::new(self.column.clone())
    }
}

impl<T> std::fmt::Debug for Cell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("column", &self.column)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: FromCell + Clone> Extractor for Cell<T> {
    type Acc = Option<T>;
    type Output = T;
    type Item = T;

    fn initialize(&self, row: &dyn Row) -> Result<Self::Acc, ExtractError> {
        Ok(row.read(&self.column))
    }

    fn accumulate(&self, acc: &mut Self::Acc, row: &dyn Row) -> Result<(), ExtractError> {
        *acc = row.read(&self.column);

        Ok(())
    }

    fn emit(&self, acc: &Self::Acc) -> Result<Option<Self::Output>, ExtractError> {
        Ok(acc.clone())
    }

    fn into_items(&self, output: Self::Output) -> Vec<Self::Item> {
        vec![output]
    }

    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Cell
    }

    fn shape(&self) -> ExtractorShape {
        ExtractorShape {
            column: Some(self.column.clone()),
            ..ExtractorShape::leaf(ExtractorKind::Cell)
        }
    }
}

/// Read column `column` as `T`.
pub fn cell<T>(column: impl IntoColumn) -> Cell<T> {
    Cell::new(column.into_column())
}

/// Emit `value` for every row.
pub const fn constant<T>(value: T) -> Constant<T> {
    Constant::new(value)
}
