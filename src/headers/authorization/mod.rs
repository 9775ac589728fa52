//! `Authorization` header parsing, serialization and credential validation.

mod compare;
mod config;
mod header;
pub mod parser;
mod record;
pub mod scheme;

pub use self::{
    compare::validate_credentials,
    config::Config,
    header::{Authorization, ProxyAuthorization},
    parser::ParsedHeader,
    record::AuthRecord,
};
