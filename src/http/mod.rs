//! HTTP layer — signed request execution and envelope handling.

pub mod client;
pub mod envelope;
pub mod query;

pub use client::PeoplecoreHttp;
pub use envelope::{ApiEnvelope, ListPage};
pub use query::ListParams;
