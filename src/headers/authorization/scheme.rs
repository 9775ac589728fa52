//! Canonical authentication scheme names.
//!
//! The parser keeps the scheme exactly as the client sent it, so compare
//! with [`eq_scheme`] (or [`AuthRecord::is_scheme`]) rather than `==`.
//!
//! [`AuthRecord::is_scheme`]: super::AuthRecord::is_scheme

/// `Basic` scheme, defined in [RFC 7617](https://tools.ietf.org/html/rfc7617).
pub const BASIC: &str = "Basic";

/// `Bearer` scheme, defined in [RFC 6750](https://tools.ietf.org/html/rfc6750).
pub const BEARER: &str = "Bearer";

/// `Digest` scheme, defined in [RFC 7616](https://tools.ietf.org/html/rfc7616).
pub const DIGEST: &str = "Digest";

/// `OAuth` scheme, defined in [RFC 5849](https://tools.ietf.org/html/rfc5849#section-3.5.1).
pub const OAUTH: &str = "OAuth";

/// Case-insensitive comparison of two scheme names.
#[inline]
pub fn eq_scheme(scheme: &str, name: &str) -> bool {
    scheme.eq_ignore_ascii_case(name)
}
