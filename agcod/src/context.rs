use agcod_core::{Context, OsEnv};
use agcod_http_send_reqwest::ReqwestHttpSend;

/// Create a context with the reqwest transport and the OS environment.
///
/// Use [`Context::with_http_send`] on the result to swap the transport, for
/// example to pass a `reqwest::Client` with a timeout.
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}
