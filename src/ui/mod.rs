pub mod form;
pub mod prompt;

pub use form::{FormApp, FormOutcome};
