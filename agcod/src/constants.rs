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

// Service name used in the credential scope of the signature.
pub const SERVICE_NAME: &str = "AGCODService";

// Prefix of the `x-amz-target` header, the operation name follows after `/`.
pub const TARGET_PREFIX: &str = "com.amazonaws.agcod.AGCODService";

// Headers used in AGCOD requests.
pub const X_AMZ_TARGET: &str = "x-amz-target";
pub const APPLICATION_JSON: &str = "application/json";

// Env values used to load the client config.
pub const AGCOD_PARTNER_ID: &str = "AGCOD_PARTNER_ID";
pub const AGCOD_ACCESS_KEY_ID: &str = "AGCOD_ACCESS_KEY_ID";
pub const AGCOD_SECRET_ACCESS_KEY: &str = "AGCOD_SECRET_ACCESS_KEY";
pub const AGCOD_ENDPOINT: &str = "AGCOD_ENDPOINT";

// Remote limit on `partnerId` + `creationRequestId`.
pub const MAX_CREATION_REQUEST_ID_LEN: usize = 40;
