//! Fluent builder for `HttpError`.

use crate::{Error, HttpError};
use serde_json::Value;
use std::collections::HashMap;

/// Builder for [`HttpError`] covering the full constructor surface: an
/// optional message plus any number of extra properties.
///
/// # Example
///
/// ```rust
/// use httperr::HttpError;
///
/// let err = HttpError::builder(404)
///     .message("no such user")
///     .property("user_id", "usr_123")
///     .build()?;
///
/// assert_eq!(err.message(), "no such user");
/// # Ok::<(), httperr::Error>(())
/// ```
#[derive(Debug)]
pub struct HttpErrorBuilder {
    status: u16,
    message: Option<String>,
    properties: HashMap<String, Value>,
}

impl HttpErrorBuilder {
    pub(crate) fn new(status: u16) -> Self {
        Self {
            status,
            message: None,
            properties: HashMap::new(),
        }
    }

    /// Set the message. Without one, the registry's reason phrase is used.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach an extra property.
    ///
    /// A key named `"status"` is dropped at build time; the status can only
    /// be set through the validated code.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Merge a map of extra properties.
    pub fn properties(mut self, properties: HashMap<String, Value>) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Validate the status code and construct the error.
    #[track_caller]
    pub fn build(self) -> Result<HttpError, Error> {
        HttpError::build(self.status, self.message, self.properties)
    }
}
