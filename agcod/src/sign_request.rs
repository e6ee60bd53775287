use crate::constants::SERVICE_NAME;
use crate::Credential;
use agcod_core::{Error, Result, SignRequest, SigningCredential};
use aws_credential_types::Credentials;
use aws_sigv4::http_request::{SignableBody, SignableRequest, SigningParams, SigningSettings};
use aws_sigv4::sign::v4;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::time::SystemTime;

/// RequestSigner signs AGCOD requests with AWS Signature Version 4.
///
/// The signature itself is computed by `aws-sigv4`; this type only feeds it the
/// region, the `AGCODService` service name, the credential and the request, then
/// applies the resulting `authorization` and `x-amz-date` headers.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    region: String,
    time: Option<DateTime<Utc>>,
}

impl RequestSigner {
    /// Create a signer for the AGCOD service in the given region.
    pub fn new(region: &str) -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            region: region.to_string(),
            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    /// Region this signer signs for.
    pub fn region(&self) -> &str {
        &self.region
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(&self, req: &mut http::Request<Bytes>, cred: &Self::Credential) -> Result<()> {
        if !cred.is_valid() {
            return Err(Error::credential_invalid(
                "access key id and secret access key must not be empty",
            ));
        }

        let identity = Credentials::new(
            &cred.access_key_id,
            &cred.secret_access_key,
            None,
            None,
            "agcod",
        )
        .into();
        let time = self.time.map(SystemTime::from).unwrap_or_else(SystemTime::now);

        let params: SigningParams<'_> = v4::SigningParams::builder()
            .identity(&identity)
            .region(&self.region)
            .name(&self.service)
            .time(time)
            .settings(SigningSettings::default())
            .build()
            .map_err(|e| Error::signing_failed("failed to build signing params").with_source(e))?
            .into();

        let mut headers = Vec::with_capacity(req.headers().len());
        for (k, v) in req.headers() {
            headers.push((k.as_str(), v.to_str()?));
        }
        let signable = SignableRequest::new(
            req.method().as_str(),
            req.uri().to_string(),
            headers.into_iter(),
            SignableBody::Bytes(req.body().as_ref()),
        )
        .map_err(|e| Error::signing_failed("request is not signable").with_source(e))?;

        let (instructions, _) = aws_sigv4::http_request::sign(signable, &params)
            .map_err(|e| Error::signing_failed("failed to sign request").with_source(e))?
            .into_parts();
        instructions.apply_to_request_http1x(req);

        Ok(())
    }
}
