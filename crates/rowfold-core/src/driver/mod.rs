//! Module: driver
//! Responsibility: head and all folds that turn a row stream into logical results.
//! Does not own: extractor semantics; drivers only call the fold contract.
//! Boundary: every absent emission reaching a driver is fatal.

mod config;
mod source;
mod trace;


use crate::{
    error::{ExtractError, require},
    extract::{Cardinality, Extractor},
    obs::{DriverMode, ExtractTraceSink},
    row::{Row, RowStream},
};
use source::{Fallible, Infallible, RowSource};
use std::fmt::Display;
use trace::TraceScope;

// re-exports
pub use config::{ExtractConfig, HeadBoundary};

///
/// Extraction
///
/// One configured driver over a borrowed extractor.
///

pub struct Extraction<'a, E> {
    extractor: &'a E,
    config: ExtractConfig,
    sink: Option<&'a dyn ExtractTraceSink>,
}

impl<'a, E: Extractor> Extraction<'a, E> {
    #[must_use]
    pub const fn new(extractor: &'a E) -> Self {
        Self {
            extractor,
            config: ExtractConfig::new(),
            sink: None,
        }
    }

    #[must_use]
    pub const fn config(mut self, config: ExtractConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn trace(mut self, sink: &'a dyn ExtractTraceSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Extract the first logical result, consuming as many rows as it spans.
    pub fn head<I>(&self, rows: &mut RowStream<I>) -> Result<Option<E::Item>, ExtractError>
    where
        I: Iterator,
        I::Item: Row,
    {
        let scope = TraceScope::start(self.sink, DriverMode::Head, self.extractor);
        let before = rows.rows_read();
        let result = self.fold_head(&mut Infallible(&mut *rows));
        scope.close(&result, rows.rows_read() - before, |head| {
            usize::from(head.is_some())
        });

        result
    }

    /// Extract every logical result in the stream.
    pub fn all<I>(&self, rows: I) -> Result<Vec<E::Item>, ExtractError>
    where
        I: IntoIterator,
        I::Item: Row,
    {
        let mut rows = RowStream::new(rows);
        let scope = TraceScope::start(self.sink, DriverMode::All, self.extractor);
        let result = self.fold_all(&mut Infallible(&mut rows));
        scope.close(&result, rows.rows_read(), Vec::len);

        result
    }

    /// `head` over a source whose rows may fail to load.
    pub fn try_head<I, R, Er>(
        &self,
        rows: &mut RowStream<I>,
    ) -> Result<Option<E::Item>, ExtractError>
    where
        I: Iterator<Item = Result<R, Er>>,
        R: Row,
        Er: Display,
    {
        let scope = TraceScope::start(self.sink, DriverMode::Head, self.extractor);
        let before = rows.rows_read();
        let result = self.fold_head(&mut Fallible(&mut *rows));
        scope.close(&result, rows.rows_read() - before, |head| {
            usize::from(head.is_some())
        });

        result
    }

    /// `all` over a source whose rows may fail to load.
    pub fn try_all<I, R, Er>(&self, rows: I) -> Result<Vec<E::Item>, ExtractError>
    where
        I: IntoIterator<Item = Result<R, Er>>,
        R: Row,
        Er: Display,
    {
        let mut rows = RowStream::new(rows);
        let scope = TraceScope::start(self.sink, DriverMode::All, self.extractor);
        let result = self.fold_all(&mut Fallible(&mut rows));
        scope.close(&result, rows.rows_read(), Vec::len);

        result
    }

    // Fatally unwrap one emission and split it into logical results.
    fn items(&self, emitted: Option<E::Output>) -> Result<Vec<E::Item>, ExtractError> {
        let output = require(emitted, self.extractor.kind())?;

        Ok(self.extractor.into_items(output))
    }

    fn fold_head<S: RowSource>(&self, source: &mut S) -> Result<Option<E::Item>, ExtractError> {
        let extractor = self.extractor;
        let Some(first) = source.pull()? else {
            return Ok(None);
        };

        let emitted = match E::CARDINALITY {
            Cardinality::Single => extractor.evaluate(&first)?,
            Cardinality::Multi => {
                let mut acc = extractor.initialize(&first)?;
                while extractor.group_count(&acc) == 1 {
                    let Some(row) = source.pull()? else {
                        break;
                    };
                    if self.config.head_boundary() == HeadBoundary::Lookahead
                        && extractor.opens_group(&acc, &row)?
                    {
                        source.unpull(row);
                        break;
                    }
                    extractor.accumulate(&mut acc, &row)?;
                }

                extractor.emit(&acc)?
            }
        };

        Ok(self.items(emitted)?.into_iter().next())
    }

    fn fold_all<S: RowSource>(&self, source: &mut S) -> Result<Vec<E::Item>, ExtractError> {
        let extractor = self.extractor;

        match E::CARDINALITY {
            Cardinality::Single => {
                let mut items = Vec::new();
                while let Some(row) = source.pull()? {
                    items.extend(self.items(extractor.evaluate(&row)?)?);
                }

                Ok(items)
            }
            Cardinality::Multi => {
                let Some(first) = source.pull()? else {
                    return Ok(Vec::new());
                };
                let mut acc = extractor.initialize(&first)?;
                while let Some(row) = source.pull()? {
                    extractor.accumulate(&mut acc, &row)?;
                }

                self.items(extractor.emit(&acc)?)
            }
        }
    }
}

///
/// Extract
///
/// Driver entry points on every extractor, using the default configuration
/// and no trace sink.
///

pub trait Extract: Extractor + Sized {
    fn extract_head<I>(&self, rows: &mut RowStream<I>) -> Result<Option<Self::Item>, ExtractError>
    where
        I: Iterator,
        I::Item: Row,
    {
        Extraction::new(self).head(rows)
    }

    fn extract_all<I>(&self, rows: I) -> Result<Vec<Self::Item>, ExtractError>
    where
        I: IntoIterator,
        I::Item: Row,
    {
        Extraction::new(self).all(rows)
    }
}

impl<E: Extractor> Extract for E {}
