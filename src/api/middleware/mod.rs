//! API middleware components

pub mod logging;
pub mod metrics;
pub mod security;

pub use logging::{logging_middleware, REQUEST_ID_HEADER};
pub use self::metrics::metrics_middleware;
pub use security::security_headers_middleware;
