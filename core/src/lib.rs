//! Core components for the Amazon Incentives (AGCOD) client.
//!
//! This crate holds the pieces that do not depend on a particular runtime or
//! on the AGCOD wire format:
//!
//! - **Context**: a container for the HTTP transport and environment access
//!   used by the client.
//! - **SignRequest**: the seam between the client and the request signing
//!   routine.
//! - **Error**: the error type shared by every crate in the workspace.
//!
//! ## Example
//!
//! ```no_run
//! use agcod_core::{Context, HttpSend, Result};
//! use async_trait::async_trait;
//! use bytes::Bytes;
//!
//! // Plug in your own transport.
//! #[derive(Debug)]
//! struct MyHttpSend;
//!
//! #[async_trait]
//! impl HttpSend for MyHttpSend {
//!     async fn http_send(&self, _req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
//!         Ok(http::Response::new(Bytes::from_static(b"{}")))
//!     }
//! }
//!
//! let ctx = Context::new().with_http_send(MyHttpSend);
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::HttpSend;
pub use context::NoopEnv;
pub use context::NoopHttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod api;
pub use api::SignRequest;
pub use api::SigningCredential;

mod error;
pub use error::Error;
pub use error::ErrorKind;
pub use error::Result;
