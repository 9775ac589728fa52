use subtle::ConstantTimeEq;

/// Compares two credential strings in constant time.
///
/// Returns `true` only when both are present, non-empty and byte-for-byte
/// equal. Running time does not depend on the position of the first
/// differing byte.
///
/// # Example
/// ```
/// # use actix_web_authrecord::validate_credentials;
/// assert!(validate_credentials(Some("abc123"), Some("abc123")));
/// assert!(!validate_credentials(Some("abc123"), Some("abc124")));
/// assert!(!validate_credentials(Some("abc123"), None));
/// assert!(!validate_credentials(Some(""), Some("")));
/// ```
pub fn validate_credentials(a: Option<&str>, b: Option<&str>) -> bool {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => (a.as_bytes(), b.as_bytes()),
        _ => return false,
    };

    if a.len() == b.len() {
        a.ct_eq(b).into()
    } else {
        // keep the cost of a full comparison on length mismatch
        let _ = a.ct_eq(a);
        false
    }
}
