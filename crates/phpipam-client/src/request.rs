//! Single HTTP exchange with the phpIPAM API
//!
//! Builds the URL from the session config, attaches credentials (basic auth
//! before login, the `token` header after), sends the JSON body and hands the
//! raw response to the envelope decoder. No session checks happen here; that
//! is the dispatcher's job.

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::envelope;
use crate::error::PhpIpamError;
use crate::session::Session;

/// Path of the user controller, used for login and refresh
pub const AUTH_PATH: &str = "/user/";

/// Header carrying the session token
pub const TOKEN_HEADER: &str = "token";

/// Parameters for calls that take none; serializes as `{}`
#[allow(
    clippy::empty_structs_with_brackets,
    reason = "a unit struct would serialize as null"
)]
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Empty {}

/// Full URL for `path`: `<endpoint>/<app_id><path>`
///
/// # Errors
/// [`PhpIpamError::InvalidConfig`] when the endpoint is not an absolute
/// http(s) URL or no application ID is set.
pub fn build_url(config: &Config, path: &str) -> Result<String, PhpIpamError> {
    let endpoint = config.endpoint.trim_end_matches('/');
    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        return Err(PhpIpamError::InvalidConfig(format!(
            "endpoint must be an absolute http(s) URL, got {:?}",
            config.endpoint
        )));
    }
    if config.app_id.is_empty() {
        return Err(PhpIpamError::InvalidConfig(
            "application ID is not set".to_string(),
        ));
    }
    Ok(format!("{endpoint}/{}{path}", config.app_id))
}

/// Send one request and decode the envelope into `out`.
pub(crate) async fn send<I, O>(
    session: &Session,
    method: Method,
    path: &str,
    input: &I,
    out: &mut O,
) -> Result<(), PhpIpamError>
where
    I: Serialize + ?Sized,
    O: DeserializeOwned,
{
    let config = session.config();
    let url = build_url(config, path)?;
    let body = serde_json::to_vec(input)?;
    let client = session.transport()?;

    debug!("{} {}", method, url);

    let token = session.token();
    let request = client
        .request(method.clone(), &url)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/json")
        .body(body);
    let request = if token.is_empty() {
        request.basic_auth(&config.username, Some(&config.password))
    } else {
        request.header(TOKEN_HEADER, token.value)
    };

    let response = request.send().await?;
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        debug!("{} {} returned {}", method, path, status);
    }

    envelope::decode_into(status.as_u16(), &bytes, out)
}
