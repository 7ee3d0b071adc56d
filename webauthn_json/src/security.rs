pub mod challenge;
pub mod user_handle;
