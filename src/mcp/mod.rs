//! MCP (Model Context Protocol) server and tool types.
//!
//! This module provides an MCP server implementation for the Kaiten API,
//! allowing AI assistants to read and manage spaces.
//!
//! # Example
//!
//! ```no_run
//! use kaitenapi::mcp::KaitenServer;
//!
//! # fn main() -> kaitenapi::Result<()> {
//! let server = KaitenServer::from_env()?;
//! // Server can now be used with rmcp transport
//! # Ok(())
//! # }
//! ```

mod params;
mod server;

pub use params::*;
pub use server::KaitenServer;
