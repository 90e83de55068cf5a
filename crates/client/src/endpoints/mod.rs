//! REST API endpoint implementations.
//!
//! Each function performs one HTTP exchange and decodes its response into a
//! value owned by the caller. Session state lives in [`crate::SessionClient`].

mod auth;
pub mod request;
pub mod search;
pub mod url_encoding;

pub use auth::login;
pub use search::{create_job, get_results};
pub use url_encoding::encode_path_segment;
