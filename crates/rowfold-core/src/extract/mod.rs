//! Module: extract
//! Responsibility: the initialize/accumulate/emit fold contract and its closed set of variants.
//! Does not own: row production, driver loops, or declaring extraction trees from record types.
//! Boundary: every variant is a value implementing `Extractor`; drivers only see that trait.

mod grouped;
mod leaf;
mod list;
mod mapped;
mod product;
mod seq;


use crate::{error::ExtractError, row::Column, row::Row};
use derive_more::Display;
use serde::{Deserialize, Serialize};

// re-exports
pub use grouped::{Groups, GroupedMulti};
pub use leaf::{Cell, Constant, cell, constant};
pub use list::ListMulti;
pub use mapped::{Mapped, Optional};
pub use product::{Fields, Product};
pub use seq::Seq;

///
/// Cardinality
///
/// How the drivers fold a row stream for one extractor.
///
/// Single → one logical result per physical row; rows are never folded together.
/// Multi  → one extraction scope spans many rows (one-to-many join flattening).
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Cardinality {
    #[display("single")]
    Single,

    #[display("multi")]
    Multi,
}

///
/// ExtractorKind
///
/// The closed set of extractor variants.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum ExtractorKind {
    #[display("constant")]
    Constant,

    #[display("cell")]
    Cell,

    #[display("mapped")]
    Mapped,

    #[display("option")]
    Option,

    #[display("seq")]
    Seq,

    #[display("product")]
    Product,

    #[display("list_multi")]
    ListMulti,

    #[display("grouped_multi")]
    GroupedMulti,
}

///
/// ExtractorShape
///
/// Introspection tree of a composed extractor, for tooling that needs to know
/// which columns an extraction tree reads.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ExtractorShape {
    pub kind: ExtractorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<Column>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Self>,
}

impl ExtractorShape {
    #[must_use]
    pub const fn leaf(kind: ExtractorKind) -> Self {
        Self {
            kind,
            column: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_children(kind: ExtractorKind, children: Vec<Self>) -> Self {
        Self {
            kind,
            column: None,
            children,
        }
    }

    /// Every column read anywhere in this tree, depth-first.
    #[must_use]
    pub fn columns(&self) -> Vec<&Column> {
        let mut out = Vec::new();
        self.collect_columns(&mut out);

        out
    }

    fn collect_columns<'a>(&'a self, out: &mut Vec<&'a Column>) {
        if let Some(column) = &self.column {
            out.push(column);
        }
        for child in &self.children {
            child.collect_columns(out);
        }
    }
}

///
/// Extractor
///
/// Stream-folding extractor. `initialize` seeds the fold state from the first
/// row of a scope, `accumulate` folds each further row into it, and `emit`
/// finalizes it. `emit` borrows the state and may be called repeatedly with
/// identical results.
///
/// An absent emission means a genuine NULL, or an invalid fold state for
/// multi-row variants. Callers that need a definite value treat it as fatal.
///

pub trait Extractor {
    /// Per-scope fold state.
    type Acc;

    /// Emitted value when this extractor is nested inside another.
    type Output;

    /// Logical result produced by the drivers.
    type Item;

    const CARDINALITY: Cardinality = Cardinality::Single;

    fn initialize(&self, row: &dyn Row) -> Result<Self::Acc, ExtractError>;

    fn accumulate(&self, acc: &mut Self::Acc, row: &dyn Row) -> Result<(), ExtractError>;

    fn emit(&self, acc: &Self::Acc) -> Result<Option<Self::Output>, ExtractError>;

    /// Split one emitted output into the logical results a driver returns.
    fn into_items(&self, output: Self::Output) -> Vec<Self::Item>;

    fn kind(&self) -> ExtractorKind;

    /// Number of logical groups the fold state currently spans.
    fn group_count(&self, _acc: &Self::Acc) -> usize {
        1
    }

    /// Return true if folding `row` would open a group not yet in `acc`.
    fn opens_group(&self, _acc: &Self::Acc, _row: &dyn Row) -> Result<bool, ExtractError> {
        Ok(false)
    }

    fn shape(&self) -> ExtractorShape {
        ExtractorShape::leaf(self.kind())
    }

    /// Post-compose `f` onto every present emission.
    fn map<B, F>(self, f: F) -> Mapped<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> B,
    {
        Mapped::new(self, f)
    }

    /// Declare absence as an expected outcome.
    fn optional(self) -> Optional<Self>
    where
        Self: Sized,
    {
        Optional::new(self)
    }

    /// Fold `row` through a fresh scope and emit immediately.
    fn evaluate(&self, row: &dyn Row) -> Result<Option<Self::Output>, ExtractError> {
        let acc = self.initialize(row)?;

        self.emit(&acc)
    }
}
