//! ## Crate layout
//! - `core`: row contract, extraction algebra, drivers, errors, and tracing.
//!
//! The `prelude` module mirrors the surface used when declaring extraction
//! trees by hand: extractor constructors, the row types, and the driver
//! entry points brought into scope anonymously.

pub use rowfold_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use rowfold_core::{
    driver::{ExtractConfig, Extraction, HeadBoundary},
    error::{ErrorClass, ExtractError},
};

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::prelude::*;
    pub use crate::core::{
        driver::{ExtractConfig, Extraction, HeadBoundary},
        error::ExtractError,
        obs::LogTraceSink,
    };
}
