//! Network Module
//!
//! HTTP transport over the log store.
//!
//! ## Architecture
//! - axum router on a multi-threaded tokio runtime
//! - Store calls run on the blocking pool (filesystem work)
//! - Every response uses the `LogResponse` envelope

mod server;
mod handlers;

pub use server::{router, Server};
