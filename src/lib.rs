pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod render;
pub mod seo;
pub mod ui;
pub mod utils;
pub mod version;

pub use api::ApiClient;
pub use config::Config;
pub use error::{ApiError, FormError};
pub use version::VERSION;
