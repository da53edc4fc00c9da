//! HTTP transport: request description, transport trait and the reqwest client.

mod client;
mod request;

#[cfg(test)]
pub use client::MockTransport;
pub use client::{HttpClient, Transport, build_http_client};
pub use request::{ApiRequest, Query, resource_path};
