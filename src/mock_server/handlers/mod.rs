//! HTTP request handlers for the mock server.

pub mod spaces;

pub use spaces::*;
