//! Domain logic shared by the server and the browser bundle: session
//! handling, the backend client, and the piercing/tattoo catalogs.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
#[cfg(feature = "ssr")]
pub mod guard;
pub mod http;
pub mod routes;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::ApiError;
pub use session::{Session, SessionStore};
