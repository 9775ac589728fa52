//! Errors raised by credential records.

use actix_web::{http::StatusCode, ResponseError};
use derive_more::{Display, Error};

/// Errors raised while building or validating an [`AuthRecord`].
///
/// Malformed input never produces an error on its own: the parser always
/// yields something, and a missing credentials segment surfaces as
/// [`AuthError::EmptyCredentials`] once a record is built from it.
///
/// [`AuthRecord`]: crate::headers::authorization::AuthRecord
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Construction would result in a record without any credential token.
    ///
    /// Hosts usually answer this with an authentication challenge.
    #[display("Authorization credentials are empty")]
    EmptyCredentials,

    /// Validation was requested on a record that carries no credentials.
    #[display("Cannot validate a record without credentials")]
    ValidationPrecondition,
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::EmptyCredentials => StatusCode::UNAUTHORIZED,
            AuthError::ValidationPrecondition => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
