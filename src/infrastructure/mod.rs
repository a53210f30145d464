//! Infrastructure layer - in-memory storage, logging, and metrics

pub mod logging;
pub mod observability;
pub mod user;
