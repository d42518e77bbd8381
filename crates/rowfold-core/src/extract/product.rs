use crate::{
    error::ExtractError,
    extract::{Extractor, ExtractorKind, ExtractorShape},
    row::Row,
};

///
/// Fields
///
/// A fixed tuple of sub-extractors folded side by side. Implemented for
/// tuples of arity 1 through 8.
///

pub trait Fields {
    type Acc;
    type Values;

    fn initialize(&self, row: &dyn Row) -> Result<Self::Acc, ExtractError>;

    fn accumulate(&self, acc: &mut Self::Acc, row: &dyn Row) -> Result<(), ExtractError>;

    /// Emit every field; absent as soon as one field is absent.
    fn emit(&self, acc: &Self::Acc) -> Result<Option<Self::Values>, ExtractError>;

    fn shapes(&self) -> Vec<ExtractorShape>;
}

macro_rules! impl_fields {
    ($($field:ident $index:tt),+) => {
        impl<$($field: Extractor),+> Fields for ($($field,)+) {
            type Acc = ($($field::Acc,)+);
            type Values = ($($field::Output,)+);

            fn initialize(&self, row: &dyn Row) -> Result<Self::Acc, ExtractError> {
                Ok(($(self.$index.initialize(row)?,)+))
            }

            fn accumulate(&self, acc: &mut Self::Acc, row: &dyn Row) -> Result<(), ExtractError> {
                $(self.$index.accumulate(&mut acc.$index, row)?;)+

                Ok(())
            }

            fn emit(&self, acc: &Self::Acc) -> Result<Option<Self::Values>, ExtractError> {
                Ok(Some(($(
                    match self.$index.emit(&acc.$index)? {
                        Some(value) => value,
                        None => return Ok(None),
                    },
                )+)))
            }

            fn shapes(&self) -> Vec<ExtractorShape> {
                vec![$(self.$index.shape()),+]
            }
        }
    };
}

impl_fields!(A 0);
impl_fields!(A 0, B 1);
impl_fields!(A 0, B 1, C 2);
impl_fields!(A 0, B 1, C 2, D 3);
impl_fields!(A 0, B 1, C 2, D 3, E 4);
impl_fields!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_fields!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_fields!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

///
/// Product
///
/// Builds one composite value from a tuple of named or positional
/// sub-extractors. Folding is delegated field by field, so a field may itself
/// be a multi-row combinator (a nested one-to-many child).
///
/// The sub-extractors are exposed for tree-construction tooling; declaring
/// products from record types happens outside this crate.
///

#[derive(Clone)]
pub struct Product<S, F> {
    fields: S,
    build: F,
}

impl<S: Fields, F> Product<S, F> {
    pub fn new<T>(fields: S, build: F) -> Self
    where
        F: Fn(S::Values) -> T,
    {
        Self { fields, build }
    }

    /// Shapes of the direct sub-extractors, in declaration order.
    #[must_use]
    pub fn fields(&self) -> Vec<ExtractorShape> {
        self.fields.shapes()
    }
}

impl<S, F, T> Extractor for Product<S, F>
where
    S: Fields,
    F: Fn(S::Values) -> T,
{
    type Acc = S::Acc;
    type Output = T;
    type Item = T;

    fn initialize(&self, row: &dyn Row) -> Result<Self::Acc, ExtractError> {
        self.fields.initialize(row)
    }

    fn accumulate(&self, acc: &mut Self::Acc, row: &dyn Row) -> Result<(), ExtractError> {
        self.fields.accumulate(acc, row)
    }

    fn emit(&self, acc: &Self::Acc) -> Result<Option<Self::Output>, ExtractError> {
        Ok(self.fields.emit(acc)?.map(&self.build))
    }

    fn into_items(&self, output: Self::Output) -> Vec<Self::Item> {
        vec![output]
    }

    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Product
    }

    fn shape(&self) -> ExtractorShape {
        ExtractorShape::with_children(ExtractorKind::Product, self.fields())
    }
}
