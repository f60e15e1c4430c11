pub mod serde_helpers;
pub mod slug;
pub mod time;
