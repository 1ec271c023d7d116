//! phpIPAM API client
//!
//! [`PhpIpamClient`] is the request dispatcher every controller goes through.
//! Before each call it checks the session: no token means log in, an expired
//! token means refresh. Only then is the request itself sent, so a request is
//! never issued with a token already known to be invalid.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth;
use crate::error::PhpIpamError;
use crate::request;
use crate::session::{Session, SessionState};

/// Generic phpIPAM client shared by the resource controllers
#[derive(Debug, Clone)]
pub struct PhpIpamClient {
    session: Arc<Session>,
}

impl PhpIpamClient {
    /// Create a client on top of a shared session
    #[must_use]
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// The session this client uses
    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Log in or refresh as the session state requires.
    ///
    /// Two callers racing on an expired token may both refresh; each swap
    /// replaces the whole token, so neither sees a torn value.
    ///
    /// # Errors
    /// [`PhpIpamError::Login`] or [`PhpIpamError::Refresh`] wrapping the
    /// failure of the auth exchange.
    pub async fn ensure_session(&self) -> Result<(), PhpIpamError> {
        match self.session.state() {
            SessionState::Unauthenticated => auth::login(&self.session).await.map_err(|e| {
                warn!("phpIPAM login failed: {}", e);
                PhpIpamError::Login(Box::new(e))
            }),
            SessionState::Expired => auth::refresh(&self.session).await.map_err(|e| {
                warn!("phpIPAM token refresh failed: {}", e);
                PhpIpamError::Refresh(Box::new(e))
            }),
            SessionState::Valid => Ok(()),
        }
    }

    /// Send a request, writing the envelope's `data` into `out`.
    ///
    /// `path` is relative to the application (e.g. `/subnets/8/`). `out` is
    /// left untouched when the API answers success without data.
    ///
    /// # Errors
    /// Auth failures, transport errors, and the envelope decoder's errors
    /// are returned unchanged; nothing is retried.
    pub async fn send_request<I, O>(
        &self,
        method: Method,
        path: &str,
        input: &I,
        out: &mut O,
    ) -> Result<(), PhpIpamError>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned,
    {
        self.ensure_session().await?;
        debug!("Dispatching {} {}", method, path);
        request::send(&self.session, method, path, input, out).await
    }

    /// Send a request and return the decoded `data`, or `O::default()` when
    /// the API answers success without data.
    ///
    /// # Errors
    /// See [`PhpIpamClient::send_request`].
    pub async fn request<I, O>(
        &self,
        method: Method,
        path: &str,
        input: &I,
    ) -> Result<O, PhpIpamError>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned + Default,
    {
        let mut out = O::default();
        self.send_request(method, path, input, &mut out).await?;
        Ok(out)
    }
}
