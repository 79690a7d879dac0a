//! Contains the types and functions for the high level pipeline builder API.

mod sort_pipeline;

pub use sort_pipeline::SortPipeline;

use crate::ErrorRange;

/// How an [`ErrorRange`] of `0` is interpreted by a [`SortPipeline`].
///
/// An error range of `0` is a perfectly valid request to only group exactly equal colors.
/// Some front ends use `0` to mean "not configured" instead,
/// so the interpretation is left as an explicit option.
///
/// # Examples
/// ```
/// # use pixsort::{ErrorRange, ZeroRange};
/// assert_eq!(ZeroRange::Exact.resolve(ErrorRange::EXACT), ErrorRange::EXACT);
/// assert_eq!(ZeroRange::Default.resolve(ErrorRange::EXACT), ErrorRange::DEFAULT);
/// assert_eq!(ZeroRange::Default.resolve(ErrorRange::new(3)), ErrorRange::new(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroRange {
    /// Treat `0` literally: only pixels with identical RGB values are grouped.
    #[default]
    Exact,
    /// Treat `0` as unset and use [`ErrorRange::DEFAULT`] instead.
    Default,
}

impl ZeroRange {
    /// Returns the error range to actually cluster with under this policy.
    #[must_use]
    pub const fn resolve(self, error_range: ErrorRange) -> ErrorRange {
        match self {
            ZeroRange::Default if error_range.is_exact() => ErrorRange::DEFAULT,
            _ => error_range,
        }
    }
}
