//! Grammar extracting the scheme and credentials from a raw header value.

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use once_cell::sync::Lazy;
use regex::Regex;

use super::scheme::{self, eq_scheme};

static AUTH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?isx)
        ^
        (?:(?:proxy-)?authorization:\s*)?  # optional header name
        (?:(?P<scheme>[\w-]+)\s+)?         # scheme, only when followed by more content
        (?P<credentials>.*)                # everything else
        $
    ",
    )
    .expect("Failed to compile regex: AUTH_REGEX")
});

/// Standard alphabet, accepting input with or without padding.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Unvalidated outcome of [`parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedHeader {
    /// Scheme token, exactly as written.
    pub scheme: Option<String>,

    /// Credentials segment, base64-decoded when [`decoded`](Self::decoded) is set.
    pub credentials: Option<String>,

    /// Whether `credentials` holds the decoded form of a `Basic` blob.
    pub decoded: bool,
}

impl ParsedHeader {
    /// Splits into `(scheme, credentials)`.
    pub fn into_parts(self) -> (Option<String>, Option<String>) {
        (self.scheme, self.credentials)
    }
}

/// Extracts scheme and credentials from `input`.
///
/// Accepts a bare credentials blob, `Authorization: <credentials>` and
/// `Authorization: <Scheme> <credentials>` (`Proxy-Authorization` too, any
/// case). A single token is always read as credentials, never as a scheme.
///
/// With `decode_basic` set, credentials of the `Basic` scheme are
/// base64-decoded. Undecodable blobs are left as they were, so parsing never
/// fails because a client sent garbage. Blobs decoding to bytes that are
/// not UTF-8 are left as they were too, so no credential byte is rewritten.
///
/// # Example
/// ```
/// # use actix_web_authrecord::parser::parse;
/// let parsed = parse("Proxy-Authorization: Bearer mF_9.B5f-4.1JqM", true);
///
/// assert_eq!(parsed.scheme.as_deref(), Some("Bearer"));
/// assert_eq!(parsed.credentials.as_deref(), Some("mF_9.B5f-4.1JqM"));
/// ```
pub fn parse(input: &str, decode_basic: bool) -> ParsedHeader {
    let caps = match AUTH_REGEX.captures(input.trim()) {
        Some(caps) => caps,
        None => return ParsedHeader::default(),
    };

    let capture = |name| {
        caps.name(name)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    };

    let scheme = capture("scheme");
    let mut credentials = capture("credentials");
    let mut decoded = false;

    let is_basic = scheme.as_deref().is_some_and(|s| eq_scheme(s, scheme::BASIC));

    if decode_basic && is_basic {
        if let Some(raw) = credentials.as_deref() {
            match LENIENT_BASE64.decode(raw).map(String::from_utf8) {
                Ok(Ok(text)) => {
                    credentials = Some(text);
                    decoded = true;
                }
                Ok(Err(err)) => log::debug!("Basic credentials are not valid UTF-8: {err}"),
                Err(err) => log::debug!("Basic credentials are not valid base64: {err}"),
            }
        }
    }

    ParsedHeader {
        scheme,
        credentials,
        decoded,
    }
}
