//! Static registry of HTTP status codes.
//!
//! Maps every standard status code (informational 1xx through server error
//! 5xx) to its canonical short name and reason phrase. The table is fixed at
//! compile time; lookups allocate nothing.

/// Look up `code` in the registry, returning `(short name, reason phrase)`.
pub(crate) fn lookup(code: u16) -> Option<(&'static str, &'static str)> {
    Some(match code {
        100 => ("Continue", "Continue"),
        101 => ("SwitchingProtocols", "Switching Protocols"),
        102 => ("Processing", "Processing"),
        103 => ("EarlyHints", "Early Hints"),
        200 => ("OK", "OK"),
        201 => ("Created", "Created"),
        202 => ("Accepted", "Accepted"),
        203 => ("NonAuthoritativeInfo", "Non-Authoritative Information"),
        204 => ("NoContent", "No Content"),
        205 => ("ResetContent", "Reset Content"),
        206 => ("PartialContent", "Partial Content"),
        207 => ("MultiStatus", "Multi-Status"),
        208 => ("AlreadyReported", "Already Reported"),
        226 => ("IMUsed", "IM Used"),
        300 => ("MultipleChoices", "Multiple Choices"),
        301 => ("MovedPermanently", "Moved Permanently"),
        302 => ("Found", "Found"),
        303 => ("SeeOther", "See Other"),
        304 => ("NotModified", "Not Modified"),
        305 => ("UseProxy", "Use Proxy"),
        307 => ("TemporaryRedirect", "Temporary Redirect"),
        308 => ("PermanentRedirect", "Permanent Redirect"),
        400 => ("BadRequest", "Bad Request"),
        401 => ("Unauthorized", "Unauthorized"),
        402 => ("PaymentRequired", "Payment Required"),
        403 => ("Forbidden", "Forbidden"),
        404 => ("NotFound", "Not Found"),
        405 => ("MethodNotAllowed", "Method Not Allowed"),
        406 => ("NotAcceptable", "Not Acceptable"),
        407 => ("ProxyAuthRequired", "Proxy Authentication Required"),
        408 => ("RequestTimeout", "Request Timeout"),
        409 => ("Conflict", "Conflict"),
        410 => ("Gone", "Gone"),
        411 => ("LengthRequired", "Length Required"),
        412 => ("PreconditionFailed", "Precondition Failed"),
        413 => ("RequestEntityTooLarge", "Request Entity Too Large"),
        414 => ("RequestURITooLong", "Request URI Too Long"),
        415 => ("UnsupportedMediaType", "Unsupported Media Type"),
        416 => ("RequestedRangeNotSatisfiable", "Requested Range Not Satisfiable"),
        417 => ("ExpectationFailed", "Expectation Failed"),
        418 => ("Teapot", "I'm a teapot"),
        421 => ("MisdirectedRequest", "Misdirected Request"),
        422 => ("UnprocessableEntity", "Unprocessable Entity"),
        423 => ("Locked", "Locked"),
        424 => ("FailedDependency", "Failed Dependency"),
        425 => ("TooEarly", "Too Early"),
        426 => ("UpgradeRequired", "Upgrade Required"),
        428 => ("PreconditionRequired", "Precondition Required"),
        429 => ("TooManyRequests", "Too Many Requests"),
        431 => ("RequestHeaderFieldsTooLarge", "Request Header Fields Too Large"),
        451 => ("UnavailableForLegalReasons", "Unavailable For Legal Reasons"),
        500 => ("InternalServerError", "Internal Server Error"),
        501 => ("NotImplemented", "Not Implemented"),
        502 => ("BadGateway", "Bad Gateway"),
        503 => ("ServiceUnavailable", "Service Unavailable"),
        504 => ("GatewayTimeout", "Gateway Timeout"),
        505 => ("HTTPVersionNotSupported", "HTTP Version Not Supported"),
        506 => ("VariantAlsoNegotiates", "Variant Also Negotiates"),
        507 => ("InsufficientStorage", "Insufficient Storage"),
        508 => ("LoopDetected", "Loop Detected"),
        510 => ("NotExtended", "Not Extended"),
        511 => ("NetworkAuthenticationRequired", "Network Authentication Required"),
        _ => return None,
    })
}

/// Whether `code` is a registered HTTP status code.
pub fn is_known(code: u16) -> bool {
    lookup(code).is_some()
}

/// The canonical short name for `code` (e.g. `"NotFound"` for 404).
pub fn short_name(code: u16) -> Option<&'static str> {
    lookup(code).map(|(name, _)| name)
}

/// The standard reason phrase for `code` (e.g. `"Not Found"` for 404).
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    lookup(code).map(|(_, phrase)| phrase)
}
