//! Core runtime for rowfold: the row contract, the extraction algebra, the
//! drivers that fold denormalized join result sets into typed values, and the
//! trace boundary.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod driver;
pub mod error;
pub mod extract;
pub mod obs;
pub mod row;

///
/// Prelude
///
/// Prelude contains only extraction vocabulary and the driver entry points.
/// No errors, sinks, or configuration types are re-exported here.
///

pub mod prelude {
    pub use crate::{
        driver::Extract as _,
        extract::{
            Cell, Constant, Extractor, GroupedMulti, ListMulti, Mapped, Optional, Product, Seq,
            cell, constant,
        },
        row::{Column, Row, RowStream, Value, ValueRow},
    };
}
