//! HTTP protocol layer module
//!
//! Response builders and query-string helpers, decoupled from the weather lookup itself.

pub mod query;
pub mod response;

// Re-export commonly used types
pub use query::query_param;
pub use response::{
    build_404_response, build_405_response, build_error_response, build_health_response,
    json_response, strip_body,
};
