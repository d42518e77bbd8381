use crate::{
    error::ExtractError,
    extract::{Cardinality, Extractor, ExtractorKind, ExtractorShape},
    row::Row,
};

///
/// Mapped
///
/// Functor transform over an inner extractor. Folding is delegated unchanged;
/// `emit` applies `f` to a present value and propagates absence.
///

#[derive(Clone)]
pub struct Mapped<E, F> {
    inner: E,
    f: F,
}

impl<E: std::fmt::Debug, F> std::fmt::Debug for Mapped<E, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapped")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<E, F> Mapped<E, F> {
    pub const fn new(inner: E, f: F) -> Self {
        Self { inner, f }
    }
}

impl<E, F, B> Extractor for Mapped<E, F>
where
    E: Extractor,
    F: Fn(E::Output) -> B,
{
    type Acc = E::Acc;
    type Output = B;
    type Item = B;

    const CARDINALITY: Cardinality = E::CARDINALITY;

    fn initialize(&self, row: &dyn Row) -> Result<Self::Acc, ExtractError> {
        self.inner.initialize(row)
    }

    fn accumulate(&self, acc: &mut Self::Acc, row: &dyn Row) -> Result<(), ExtractError> {
        self.inner.accumulate(acc, row)
    }

    fn group_count(&self, acc: &Self::Acc) -> usize {
        self.inner.group_count(acc)
    }

    fn opens_group(&self, acc: &Self::Acc, row: &dyn Row) -> Result<bool, ExtractError> {
        self.inner.opens_group(acc, row)
    }

    fn emit(&self, acc: &Self::Acc) -> Result<Option<Self::Output>, ExtractError> {
        Ok(self.inner.emit(acc)?.map(&self.f))
    }

    fn into_items(&self, output: Self::Output) -> Vec<Self::Item> {
        vec![output]
    }

    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Mapped
    }

    fn shape(&self) -> ExtractorShape {
        ExtractorShape::with_children(ExtractorKind::Mapped, vec![self.inner.shape()])
    }
}

///
/// Optional
///
/// Null-tolerant wrapper. `emit` always succeeds and carries the inner
/// emission as its payload, so "every underlying cell was NULL" becomes a
/// declared outcome instead of a fatal one.
///

#[derive(Clone, Debug)]
pub struct Optional<E> {
    inner: E,
}

impl<E> Optional<E> {
    pub const fn new(inner: E) -> Self {
        Self { inner }
    }
}

impl<E: Extractor> Extractor for Optional<E> {
    type Acc = E::Acc;
    type Output = Option<E::Output>;
    type Item = Option<E::Output>;

    const CARDINALITY: Cardinality = E::CARDINALITY;

    fn initialize(&self, row: &dyn Row) -> Result<Self::Acc, ExtractError> {
        self.inner.initialize(row)
    }

    fn accumulate(&self, acc: &mut Self::Acc, row: &dyn Row) -> Result<(), ExtractError> {
        self.inner.accumulate(acc, row)
    }

    fn group_count(&self, acc: &Self::Acc) -> usize {
        self.inner.group_count(acc)
    }

    fn opens_group(&self, acc: &Self::Acc, row: &dyn Row) -> Result<bool, ExtractError> {
        self.inner.opens_group(acc, row)
    }

    fn emit(&self, acc: &Self::Acc) -> Result<Option<Self::Output>, ExtractError> {
        Ok(Some(self.inner.emit(acc)?))
    }

    fn into_items(&self, output: Self::Output) -> Vec<Self::Item> {
        vec![output]
    }

    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Option
    }

    fn shape(&self) -> ExtractorShape {
        ExtractorShape::with_children(ExtractorKind::Option, vec![self.inner.shape()])
    }
}
