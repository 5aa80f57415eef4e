//! Classified HTTP error values for request-handling code.
//!
//! An [`HttpError`] is built from a 4xx/5xx status code and carries the
//! canonical error name, a message, an exposure flag, and an open property
//! bag. Handlers branch on [`HttpError::expose`] to decide whether the
//! serialized `{status, name, message}` body is safe to return to the
//! client or must be replaced by a generic 500 and logged internally.
//!
//! # Example
//!
//! ```rust
//! use httperr::HttpError;
//!
//! fn lookup_user(id: &str) -> Result<(), HttpError> {
//!     Err(HttpError::builder(404)
//!         .message("no such user")
//!         .property("user_id", id)
//!         .build()
//!         .expect("404 is a registered error status"))
//! }
//!
//! let err = lookup_user("usr_123").unwrap_err();
//! assert_eq!(err.name(), "NotFoundError");
//! assert!(err.expose()); // 4xx: safe to show the client
//! ```
//!
//! Status codes outside the registry or outside the 4xx/5xx range are
//! rejected at construction:
//!
//! ```rust
//! use httperr::{Error, HttpError};
//!
//! assert_eq!(HttpError::new(3000).unwrap_err(), Error::UnknownStatus(3000));
//! assert_eq!(HttpError::new(200).unwrap_err(), Error::NonErrorStatus(200));
//! ```

mod builders;
mod error;
mod types;

pub mod registry;

pub use builders::HttpErrorBuilder;
pub use error::Error;
pub use types::HttpError;
