//! The classified HTTP error value.

use crate::builders::HttpErrorBuilder;
use crate::{registry, Error};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::panic::Location;

/// A classified HTTP error.
///
/// Construction validates the status code against the registry and derives
/// the canonical name, default message, and exposure policy. `expose` is
/// `true` for 4xx codes (safe to show the client) and `false` for 5xx codes
/// (details must stay server-side).
///
/// Serializing an `HttpError` emits exactly `{status, name, message}`, which
/// is the client-safe body for exposed errors. The exposure flag, extra
/// properties, and construction site are never part of the serialized form.
///
/// # Example
///
/// ```rust
/// use httperr::HttpError;
///
/// let err = HttpError::new(404)?;
/// assert_eq!(err.name(), "NotFoundError");
/// assert_eq!(err.message(), "Not Found");
/// assert!(err.expose());
/// # Ok::<(), httperr::Error>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct HttpError {
    status: u16,
    name: String,
    message: String,
    #[serde(skip)]
    expose: bool,
    #[serde(skip)]
    properties: HashMap<String, Value>,
    #[serde(skip)]
    location: &'static Location<'static>,
}

impl HttpError {
    /// Create an error for `status` with the registry's default message.
    #[track_caller]
    pub fn new(status: u16) -> Result<Self, Error> {
        Self::build(status, None, HashMap::new())
    }

    /// Create an error for `status` with an explicit message.
    ///
    /// The message is used verbatim, even when empty.
    #[track_caller]
    pub fn with_message(status: u16, message: impl Into<String>) -> Result<Self, Error> {
        Self::build(status, Some(message.into()), HashMap::new())
    }

    /// Create an error for `status` with extra properties and the default
    /// message.
    #[track_caller]
    pub fn with_properties(
        status: u16,
        properties: HashMap<String, Value>,
    ) -> Result<Self, Error> {
        Self::build(status, None, properties)
    }

    /// Start a fluent builder for `status`.
    pub fn builder(status: u16) -> HttpErrorBuilder {
        HttpErrorBuilder::new(status)
    }

    /// Shared validation and derivation routine behind every constructor.
    ///
    /// The unknown-code check runs before the range check, so a code that is
    /// both unregistered and outside 4xx/5xx reports `UnknownStatus`.
    #[track_caller]
    pub(crate) fn build(
        status: u16,
        message: Option<String>,
        properties: HashMap<String, Value>,
    ) -> Result<Self, Error> {
        let (short_name, phrase) =
            registry::lookup(status).ok_or(Error::UnknownStatus(status))?;
        if !(400..600).contains(&status) {
            return Err(Error::NonErrorStatus(status));
        }

        let name = if short_name.ends_with("Error") {
            short_name.to_string()
        } else {
            format!("{}Error", short_name)
        };

        // The status key is reserved for the validated code itself.
        let properties = properties
            .into_iter()
            .filter(|(key, _)| key != "status")
            .collect();

        Ok(Self {
            status,
            name,
            message: message.unwrap_or_else(|| phrase.to_string()),
            expose: status < 500,
            properties,
            location: Location::caller(),
        })
    }

    // ============================================
    // ACCESSORS
    // ============================================

    /// The validated status code, always in `400..600`.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The canonical error name, always ending in `"Error"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the details are safe to reveal to the client.
    pub fn expose(&self) -> bool {
        self.expose
    }

    /// Extra properties attached at construction.
    pub fn properties(&self) -> &HashMap<String, Value> {
        &self.properties
    }

    /// Mutable access to the extra properties.
    ///
    /// The typed fields (`status`, `name`, `message`, `expose`) are fixed at
    /// construction; only the property bag is open for later edits.
    pub fn properties_mut(&mut self) -> &mut HashMap<String, Value> {
        &mut self.properties
    }

    /// Look up a single extra property.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Where the error was constructed.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// The status as a typed [`http::StatusCode`].
    pub fn status_code(&self) -> http::StatusCode {
        // Registered codes are always within StatusCode's accepted range.
        http::StatusCode::from_u16(self.status).unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Whether this is a 4xx client error.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Whether this is a 5xx server error.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.name, self.status, self.message)
    }
}

impl std::error::Error for HttpError {}

impl TryFrom<http::StatusCode> for HttpError {
    type Error = Error;

    fn try_from(status: http::StatusCode) -> Result<Self, Error> {
        Self::new(status.as_u16())
    }
}
