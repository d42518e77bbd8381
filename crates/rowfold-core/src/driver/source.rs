use crate::{
    error::ExtractError,
    row::{Row, RowStream},
};
use std::fmt::Display;

///
/// RowSource
///
/// Pull interface the fold loops run against, so infallible and fallible row
/// streams share one implementation.
///

pub(super) trait RowSource {
    type Row: Row;

    fn pull(&mut self) -> Result<Option<Self::Row>, ExtractError>;

    fn unpull(&mut self, row: Self::Row);
}

///
/// Infallible
///

pub(super) struct Infallible<'s, I: Iterator>(pub(super) &'s mut RowStream<I>);

impl<I> RowSource for Infallible<'_, I>
where
    I: Iterator,
    I::Item: Row,
{
    type Row = I::Item;

    fn pull(&mut self) -> Result<Option<Self::Row>, ExtractError> {
        Ok(self.0.next_row())
    }

    fn unpull(&mut self, row: Self::Row) {
        self.0.push_back(row);
    }
}

///
/// Fallible
///
/// Source failures abort the extraction as `ExtractError::Source`.
///

pub(super) struct Fallible<'s, I: Iterator>(pub(super) &'s mut RowStream<I>);

impl<I, R, Er> RowSource for Fallible<'_, I>
where
    I: Iterator<Item = Result<R, Er>>,
    R: Row,
    Er: Display,
{
    type Row = R;

    fn pull(&mut self) -> Result<Option<Self::Row>, ExtractError> {
        self.0.next_row().transpose().map_err(ExtractError::source)
    }

    fn unpull(&mut self, row: Self::Row) {
        self.0.push_back(Ok(row));
    }
}
