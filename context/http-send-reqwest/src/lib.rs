// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! reqwest-based HTTP transport for agcod.
//!
//! This crate provides `ReqwestHttpSend`, which implements the `HttpSend`
//! trait from `agcod_core` on top of a `reqwest::Client`.
//!
//! ## Example
//!
//! ```no_run
//! use agcod_core::{Context, OsEnv};
//! use agcod_http_send_reqwest::ReqwestHttpSend;
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Timeouts live on the client, the agcod client never retries or times out by itself.
//! let client = reqwest::Client::builder()
//!     .timeout(Duration::from_secs(30))
//!     .build()?;
//!
//! let ctx = Context::new()
//!     .with_http_send(ReqwestHttpSend::new(client))
//!     .with_env(OsEnv);
//! # Ok(())
//! # }
//! ```

use agcod_core::{Error, HttpSend, Result};
use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use log::debug;
use reqwest::{Client, Request};

/// reqwest-based implementation of the `HttpSend` trait.
///
/// Every call performs exactly one attempt. Connection, timeout and body read
/// failures map to [`agcod_core::ErrorKind::Transport`]; the response status is
/// not inspected here.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::request_invalid("failed to convert http request").with_source(e))?;
        debug!("sending {} {}", req.method(), req.url());

        let resp = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport("failed to send http request").with_source(e))?;
        let resp: http::Response<_> = resp.into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport("failed to read http response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
