use crate::constants::*;
use crate::{Credential, Endpoint};
use agcod_core::utils::Redact;
use agcod_core::{Context, Error, Result};
use std::fmt::{Debug, Formatter};

/// ClientConfig is everything an [`crate::IncentivesClient`] needs.
///
/// All fields are stored verbatim and never validated; the remote service is
/// the authority on whether they are acceptable.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Partner id assigned by Amazon, embedded in every request.
    pub partner_id: String,
    /// Access key id of the partner account.
    pub access_key_id: String,
    /// Secret access key of the partner account.
    pub secret_access_key: String,
    /// Endpoint to send requests to.
    pub endpoint: Endpoint,
}

impl ClientConfig {
    /// Create a new client config.
    pub fn new(
        partner_id: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        endpoint: Endpoint,
    ) -> Self {
        Self {
            partner_id: partner_id.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            endpoint,
        }
    }

    /// Signing credential of this config.
    pub fn credential(&self) -> Credential {
        Credential::new(&self.access_key_id, &self.secret_access_key)
    }
}

impl Debug for ClientConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("partner_id", &self.partner_id)
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Config is the partially known client config, typically filled from env.
#[derive(Clone, Default)]
pub struct Config {
    /// `partner_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AGCOD_PARTNER_ID`
    pub partner_id: Option<String>,
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AGCOD_ACCESS_KEY_ID`
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AGCOD_SECRET_ACCESS_KEY`
    pub secret_access_key: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AGCOD_ENDPOINT`, an endpoint name like `NorthAmericaSandbox`
    pub endpoint: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("partner_id", &self.partner_id)
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Config {
    /// Load config from env, keeping the fields that are already set.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let envs = ctx.env_vars();

        if self.partner_id.is_none() {
            self.partner_id = envs.get(AGCOD_PARTNER_ID).cloned();
        }
        if self.access_key_id.is_none() {
            self.access_key_id = envs.get(AGCOD_ACCESS_KEY_ID).cloned();
        }
        if self.secret_access_key.is_none() {
            self.secret_access_key = envs.get(AGCOD_SECRET_ACCESS_KEY).cloned();
        }
        if self.endpoint.is_none() {
            self.endpoint = envs.get(AGCOD_ENDPOINT).cloned();
        }

        self
    }

    /// Build the client config, failing if any field is missing.
    pub fn build(self) -> Result<ClientConfig> {
        fn required(v: Option<String>, name: &str) -> Result<String> {
            v.ok_or_else(|| Error::config_invalid(format!("{name} is required")))
        }

        let endpoint = required(self.endpoint, "endpoint")?.parse::<Endpoint>()?;
        Ok(ClientConfig {
            partner_id: required(self.partner_id, "partner_id")?,
            access_key_id: required(self.access_key_id, "access_key_id")?,
            secret_access_key: required(self.secret_access_key, "secret_access_key")?,
            endpoint,
        })
    }
}

impl TryFrom<Config> for ClientConfig {
    type Error = Error;

    fn try_from(config: Config) -> Result<Self> {
        config.build()
    }
}
