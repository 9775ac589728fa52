use std::fmt;

use actix_web::{
    error::ParseError,
    http::header::{
        Header, HeaderName, HeaderValue, InvalidHeaderValue, TryIntoHeaderValue, AUTHORIZATION,
        PROXY_AUTHORIZATION,
    },
    HttpMessage,
};

use crate::headers::authorization::AuthRecord;

macro_rules! typed_header {
    ($(#[$meta:meta])* $ty:ident, $name:expr) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        pub struct $ty(AuthRecord);

        impl $ty {
            /// Consumes the header and returns the inner [`AuthRecord`].
            pub fn into_record(self) -> AuthRecord {
                self.0
            }
        }

        impl From<AuthRecord> for $ty {
            fn from(record: AuthRecord) -> $ty {
                $ty(record)
            }
        }

        impl AsRef<AuthRecord> for $ty {
            fn as_ref(&self) -> &AuthRecord {
                &self.0
            }
        }

        impl Header for $ty {
            #[inline]
            fn name() -> HeaderName {
                $name
            }

            fn parse<M: HttpMessage>(msg: &M) -> Result<Self, ParseError> {
                let header = msg.headers().get($name).ok_or(ParseError::Header)?;

                parse_value(header).map($ty)
            }
        }

        impl TryIntoHeaderValue for $ty {
            type Error = InvalidHeaderValue;

            fn try_into_value(self) -> Result<HeaderValue, Self::Error> {
                self.0.try_into_value()
            }
        }

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(&self.0, f)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

typed_header! {
    /// `Authorization` header, defined in [RFC 7235](https://tools.ietf.org/html/rfc7235#section-4.2)
    ///
    /// The "Authorization" header field allows a user agent to authenticate
    /// itself with an origin server -- usually, but not necessarily, after
    /// receiving a 401 (Unauthorized) response.  Its value consists of
    /// credentials containing the authentication information of the user
    /// agent for the realm of the resource being requested.
    ///
    /// # Example
    ///
    /// ```
    /// # use actix_web::http::header::Header;
    /// # use actix_web::{HttpRequest, Result};
    /// # use actix_web_authrecord::headers::authorization::Authorization;
    /// fn handler(req: HttpRequest) -> Result<String> {
    ///     let auth = Authorization::parse(&req)?;
    ///
    ///     Ok(format!("Hello, {}!", auth.as_ref().identifier()))
    /// }
    /// ```
    Authorization,
    AUTHORIZATION
}

typed_header! {
    /// `Proxy-Authorization` header, defined in [RFC 7235](https://tools.ietf.org/html/rfc7235#section-4.4)
    ///
    /// Carries the credentials of a user agent towards a proxy that
    /// requires authentication.
    ProxyAuthorization,
    PROXY_AUTHORIZATION
}

fn parse_value(header: &HeaderValue) -> Result<AuthRecord, ParseError> {
    let value = header.to_str().map_err(|err| {
        log::debug!("Authorization header is not a visible ASCII string: {err}");
        ParseError::Header
    })?;

    AuthRecord::parse(value).map_err(|err| {
        log::debug!("Failed to parse authorization header: {err}");
        ParseError::Header
    })
}
