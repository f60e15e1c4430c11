pub mod client;
pub mod routes;
pub mod transport;

pub use client::ApiClient;
pub use routes::{EntityId, Resource};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
