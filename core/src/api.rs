use crate::Result;
use bytes::Bytes;
use std::fmt::Debug;

/// SigningCredential is the trait implemented by keys a signer accepts.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing.
    fn is_valid(&self) -> bool;
}

/// SignRequest is the trait used by the client to sign an outgoing request.
///
/// Signing is a pure function of the credential, the request and whatever the
/// implementation was configured with (region, service, clock). Implementations
/// add the authentication headers in place and must not touch the body.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this signer.
    type Credential: SigningCredential;

    /// Sign the request in place.
    ///
    /// The whole request is handed over because the signature covers the
    /// payload hash as well as the method, URI and headers.
    fn sign_request(&self, req: &mut http::Request<Bytes>, cred: &Self::Credential)
        -> Result<()>;
}
