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

use agcod_core::Error;
use std::fmt;
use std::str::FromStr;

/// Endpoint is the closed catalog of AGCOD regional endpoints.
///
/// Names follow the AGCOD scratchpad. There is deliberately no way to build an
/// endpoint from an arbitrary host, so signed production credentials can only
/// ever be sent to one of these six hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `agcod-v2-gamma.amazon.com` in `us-east-1`.
    NorthAmericaSandbox,
    /// `agcod-v2-eu-gamma.amazon.com` in `eu-west-1`.
    EuropeSandbox,
    /// `agcod-v2-fe-gamma.amazon.com` in `us-west-2`.
    JapanSandbox,
    /// `agcod-v2.amazon.com` in `us-east-1`.
    NorthAmericaProduction,
    /// `agcod-v2-eu.amazon.com` in `eu-west-1`.
    EuropeProduction,
    /// `agcod-v2-fe.amazon.com` in `us-west-2`.
    JapanProduction,
}

impl Endpoint {
    /// All known endpoints, sandboxes first.
    pub const ALL: [Endpoint; 6] = [
        Endpoint::NorthAmericaSandbox,
        Endpoint::EuropeSandbox,
        Endpoint::JapanSandbox,
        Endpoint::NorthAmericaProduction,
        Endpoint::EuropeProduction,
        Endpoint::JapanProduction,
    ];

    /// Host of this endpoint.
    pub fn host(&self) -> &'static str {
        match self {
            Endpoint::NorthAmericaSandbox => "agcod-v2-gamma.amazon.com",
            Endpoint::EuropeSandbox => "agcod-v2-eu-gamma.amazon.com",
            Endpoint::JapanSandbox => "agcod-v2-fe-gamma.amazon.com",
            Endpoint::NorthAmericaProduction => "agcod-v2.amazon.com",
            Endpoint::EuropeProduction => "agcod-v2-eu.amazon.com",
            Endpoint::JapanProduction => "agcod-v2-fe.amazon.com",
        }
    }

    /// Signing region of this endpoint.
    pub fn region(&self) -> &'static str {
        match self {
            Endpoint::NorthAmericaSandbox | Endpoint::NorthAmericaProduction => "us-east-1",
            Endpoint::EuropeSandbox | Endpoint::EuropeProduction => "eu-west-1",
            Endpoint::JapanSandbox | Endpoint::JapanProduction => "us-west-2",
        }
    }

    /// Catalog name of this endpoint, e.g. `NorthAmericaSandbox`.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::NorthAmericaSandbox => "NorthAmericaSandbox",
            Endpoint::EuropeSandbox => "EuropeSandbox",
            Endpoint::JapanSandbox => "JapanSandbox",
            Endpoint::NorthAmericaProduction => "NorthAmericaProduction",
            Endpoint::EuropeProduction => "EuropeProduction",
            Endpoint::JapanProduction => "JapanProduction",
        }
    }

    /// Whether this endpoint is a sandbox (gamma) endpoint.
    pub fn is_sandbox(&self) -> bool {
        matches!(
            self,
            Endpoint::NorthAmericaSandbox | Endpoint::EuropeSandbox | Endpoint::JapanSandbox
        )
    }

    /// Full url of the given operation path on this endpoint.
    pub fn url(&self, path: &str) -> String {
        format!("https://{}{}", self.host(), path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    /// Parse an endpoint from its catalog name.
    ///
    /// Matching ignores case, `-` and `_`, so `NorthAmericaSandbox`,
    /// `north-america-sandbox` and `NORTH_AMERICA_SANDBOX` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        Endpoint::ALL
            .into_iter()
            .find(|ep| ep.name().to_lowercase() == normalized)
            .ok_or_else(|| Error::config_invalid(format!("unknown endpoint: {s}")))
    }
}
