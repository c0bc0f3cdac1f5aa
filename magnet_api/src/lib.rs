//! Client for the Magnet issues/pages API.
//!
//! [`Client`] never terminates the process: every failure comes back as an
//! [`Error`]. Exit-on-error behaviour lives in the library layer.

mod client;
mod errors;
mod query;
mod request;
pub mod types;
pub use self::client::{decode_envelope, Client, API_KEY_HEADER};
pub use self::errors::{map_error, ApiError, ApiErrorKind, Error, ErrorBody};
pub use self::query::{ListQuery, Query, SearchQuery, DEFAULT_LIST_LIMIT};
pub use self::request::{RawResponse, Request};
