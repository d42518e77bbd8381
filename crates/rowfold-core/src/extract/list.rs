use crate::{
    error::ExtractError,
    extract::{Cardinality, Extractor, ExtractorKind, ExtractorShape},
    row::Row,
};

///
/// ListMulti
///
/// Collects one inner value per row into a list, modelling the child side of
/// a left/outer join. The inner extractor is evaluated in a fresh scope for
/// every row; its state is never threaded across rows.
///
/// Null pattern is all-or-nothing:
///   every row present → the values, in row order
///   every row absent  → an empty list (no matching child rows)
///   anything else     → absent (malformed result set)
///

#[derive(Clone, Debug)]
pub struct ListMulti<E> {
    inner: E,
}

impl<E> ListMulti<E> {
    pub const fn new(inner: E) -> Self {
        Self { inner }
    }
}

impl<E> Extractor for ListMulti<E>
where
    E: Extractor,
    E::Output: Clone,
{
    type Acc = Vec<Option<E::Output>>;
    type Output = Vec<E::Output>;
    type Item = Vec<E::Output>;

    const CARDINALITY: Cardinality = Cardinality::Multi;

    fn initialize(&self, row: &dyn Row) -> Result<Self::Acc, ExtractError> {
        Ok(vec![self.inner.evaluate(row)?])
    }

    fn accumulate(&self, acc: &mut Self::Acc, row: &dyn Row) -> Result<(), ExtractError> {
        acc.push(self.inner.evaluate(row)?);

        Ok(())
    }

    fn emit(&self, acc: &Self::Acc) -> Result<Option<Self::Output>, ExtractError> {
        if acc.iter().all(Option::is_none) {
            return Ok(Some(Vec::new()));
        }

        // mixed pattern collapses to absent
        Ok(acc.iter().cloned().collect())
    }

    // the whole list is one logical result
    fn into_items(&self, output: Self::Output) -> Vec<Self::Item> {
        vec![output]
    }

    fn kind(&self) -> ExtractorKind {
        ExtractorKind::ListMulti
    }

    fn shape(&self) -> ExtractorShape {
        ExtractorShape::with_children(ExtractorKind::ListMulti, vec![self.inner.shape()])
    }
}
