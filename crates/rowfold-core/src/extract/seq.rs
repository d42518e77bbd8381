use crate::{
    error::ExtractError,
    extract::{Extractor, ExtractorKind, ExtractorShape},
    row::Row,
};

///
/// Seq
///
/// Fixed-arity fan-out. Each sub-extractor is evaluated against the row in a
/// fresh scope; `accumulate` appends another evaluated batch instead of
/// folding per element. Emits the whole list only if every element of every
/// batch is present.
///

#[derive(Clone, Debug)]
pub struct Seq<E> {
    items: Vec<E>,
}

impl<E> Seq<E> {
    pub const fn new(items: Vec<E>) -> Self {
        Self { items }
    }

    #[must_use]
    pub const fn arity(&self) -> usize {
        self.items.len()
    }
}

impl<E: Extractor> Seq<E> {
    fn batch(&self, row: &dyn Row) -> Result<Vec<Option<E::Output>>, ExtractError> {
        self.items.iter().map(|item| item.evaluate(row)).collect()
    }
}

impl<E> FromIterator<E> for Seq<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<E> Extractor for Seq<E>
where
    E: Extractor,
    E::Output: Clone,
{
    type Acc = Vec<Option<E::Output>>;
    type Output = Vec<E::Output>;
    type Item = Vec<E::Output>;

    fn initialize(&self, row: &dyn Row) -> Result<Self::Acc, ExtractError> {
        self.batch(row)
    }

    fn accumulate(&self, acc: &mut Self::Acc, row: &dyn Row) -> Result<(), ExtractError> {
        acc.extend(self.batch(row)?);

        Ok(())
    }

    fn emit(&self, acc: &Self::Acc) -> Result<Option<Self::Output>, ExtractError> {
        Ok(acc.iter().cloned().collect())
    }

    fn into_items(&self, output: Self::Output) -> Vec<Self::Item> {
        vec![output]
    }

    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Seq
    }

    fn shape(&self) -> ExtractorShape {
        ExtractorShape::with_children(
            ExtractorKind::Seq,
            self.items.iter().map(Extractor::shape).collect(),
        )
    }
}
