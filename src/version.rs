/// The current version of the application.
/// This should match the version in Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// `User-Agent` sent with every API request, e.g. `devref/0.3.0`.
pub fn user_agent() -> String {
    format!("{}/{}", APP_NAME, VERSION)
}
