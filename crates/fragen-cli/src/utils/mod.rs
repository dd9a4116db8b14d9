//! Helpers shared by the request-oriented handlers.

pub mod request;
