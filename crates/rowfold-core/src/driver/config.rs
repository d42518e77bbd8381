use serde::{Deserialize, Serialize};

///
/// HeadBoundary
///
/// How the head driver of a multi-row extractor stops at the end of the first
/// logical group.
///
/// Compatible → the row that opens the second group is consumed and folded
///              before the loop notices; that row is lost to later calls.
/// Lookahead  → the boundary row is detected before folding and pushed back
///              onto the stream, so the next head call starts on it.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadBoundary {
    #[default]
    Compatible,
    Lookahead,
}

///
/// ExtractConfig
///
/// Driver configuration for one extraction call.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ExtractConfig {
    head_boundary: HeadBoundary,
}

impl ExtractConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head_boundary: HeadBoundary::Compatible,
        }
    }

    #[must_use]
    pub const fn with_head_boundary(mut self, head_boundary: HeadBoundary) -> Self {
        self.head_boundary = head_boundary;
        self
    }

    #[must_use]
    pub const fn head_boundary(self) -> HeadBoundary {
        self.head_boundary
    }
}
