//! Login and token refresh against the user controller

use reqwest::Method;
use tracing::debug;

use crate::error::PhpIpamError;
use crate::request::{self, AUTH_PATH, Empty};
use crate::session::{Session, Token};

/// Log in with the configured credentials and store the issued token.
///
/// API errors are returned unchanged; the caller adds context.
pub(crate) async fn login(session: &Session) -> Result<(), PhpIpamError> {
    debug!("Logging into phpIPAM as {}", session.config().username);
    exchange(session, Method::POST).await
}

/// Refresh the current token and store the replacement.
pub(crate) async fn refresh(session: &Session) -> Result<(), PhpIpamError> {
    debug!("Refreshing phpIPAM session token");
    exchange(session, Method::PATCH).await
}

async fn exchange(session: &Session, method: Method) -> Result<(), PhpIpamError> {
    let mut token = Token::default();
    request::send(session, method, AUTH_PATH, &Empty {}, &mut token).await?;
    if token.is_empty() {
        return Err(PhpIpamError::Protocol(
            "authentication response carried no token".to_string(),
        ));
    }
    session.replace_token(token);
    Ok(())
}
