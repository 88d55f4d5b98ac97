//! Request handler module
//!
//! Responsible for request routing dispatch and the weather lookup itself.

pub mod router;
pub mod weather;

// Re-export main entry point
pub use router::handle_request;
