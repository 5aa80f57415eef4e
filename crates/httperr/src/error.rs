//! Construction failures.

/// Errors that can occur when constructing an [`HttpError`](crate::HttpError).
///
/// Both variants indicate a caller bug (an invalid status constant), not a
/// runtime condition worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The code has no entry in the status registry.
    #[error("unknown HTTP status code `{0}`")]
    UnknownStatus(u16),

    /// The code is registered but outside the 4xx/5xx error range.
    #[error("only 4xx or 5xx status codes allowed, but got `{0}`")]
    NonErrorStatus(u16),
}
