//! Errors raised at the outer surfaces of the crate.
//!
//! The coverage engine itself is infallible; these cover text parsing of
//! rectangles and percentage reporting.

use thiserror::Error;

/// Errors that can occur while parsing rectangles or building reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverageError {
    /// Text was not four comma-separated `i32` values.
    #[error("invalid rectangle `{input}`: expected `left,top,right,bottom`")]
    InvalidRect { input: String },

    /// A percentage was requested against a screen with zero area.
    #[error("screen rectangle has zero area")]
    EmptyScreen,
}
