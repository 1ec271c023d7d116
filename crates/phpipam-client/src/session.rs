//! Session management and token storage
//!
//! A [`Session`] owns the merged [`Config`], the current [`Token`] and the
//! shared HTTP client. It is meant to be wrapped in an `Arc` and handed to
//! every controller; the token and client sit behind locks so concurrent
//! callers always see a whole value, never a half-written one.

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::codec::nullable_string;
use crate::config::Config;
use crate::error::PhpIpamError;

/// Datetime layout used by the phpIPAM API (naive, server-local time).
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A phpIPAM session token
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Token {
    /// Opaque token string; empty when not logged in
    #[serde(rename = "token", default, deserialize_with = "nullable_string")]
    pub value: String,
    /// Expiry timestamp, if the API reported one
    #[serde(default, deserialize_with = "deserialize_expires")]
    pub expires: Option<NaiveDateTime>,
}

impl Token {
    /// Create a token from its parts
    #[must_use]
    pub fn new(value: impl Into<String>, expires: Option<NaiveDateTime>) -> Self {
        Self {
            value: value.into(),
            expires,
        }
    }

    /// True when there is no token value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// True when the token has an expiry at or before `now`
    #[must_use]
    pub fn is_expired_at(&self, now: NaiveDateTime) -> bool {
        self.expires.is_some_and(|expires| expires <= now)
    }
}

fn deserialize_expires<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(&raw, TIME_FORMAT)
        .map(Some)
        .map_err(|e| serde::de::Error::custom(format!("invalid token expiry {raw:?}: {e}")))
}

/// Readiness of a session for issuing requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No token yet; the next request logs in
    Unauthenticated,
    /// Token present and not expired
    Valid,
    /// Token present but expired; the next request refreshes it
    Expired,
}

/// A phpIPAM session shared by all controllers
#[derive(Debug)]
pub struct Session {
    config: Config,
    token: RwLock<Token>,
    http_client: RwLock<Option<Client>>,
}

impl Session {
    /// Create a session from environment defaults overlaid with `configs`.
    ///
    /// Later configs override earlier ones field by field; see
    /// [`Config::merge`]. Logging in is left to the first request.
    #[must_use]
    pub fn new<I>(configs: I) -> Self
    where
        I: IntoIterator<Item = Config>,
    {
        Self::with_defaults(Config::from_env(), configs)
    }

    /// Like [`Session::new`], starting from `defaults` instead of the environment
    #[must_use]
    pub fn with_defaults<I>(defaults: Config, configs: I) -> Self
    where
        I: IntoIterator<Item = Config>,
    {
        let mut config = defaults;
        for cfg in configs {
            config.merge(&cfg);
        }
        Self {
            config,
            token: RwLock::new(Token::default()),
            http_client: RwLock::new(None),
        }
    }

    /// Start the session with an existing token
    #[must_use]
    pub fn with_token(self, token: Token) -> Self {
        Self {
            token: RwLock::new(token),
            ..self
        }
    }

    /// The session's configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Snapshot of the current token
    #[must_use]
    pub fn token(&self) -> Token {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// True if a token exists and it has expired, compared against local time
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.state() == SessionState::Expired
    }

    /// Current readiness, compared against local time
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state_at(Local::now().naive_local())
    }

    /// Readiness at a given naive timestamp
    #[must_use]
    pub fn state_at(&self, now: NaiveDateTime) -> SessionState {
        let token = self.token.read().unwrap_or_else(PoisonError::into_inner);
        if token.is_empty() {
            SessionState::Unauthenticated
        } else if token.is_expired_at(now) {
            SessionState::Expired
        } else {
            SessionState::Valid
        }
    }

    /// Share a specific HTTP client (timeouts, proxies, certificates)
    pub fn set_http_client(&self, client: Client) {
        *self
            .http_client
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(client);
    }

    /// The HTTP client set on this session, if any
    #[must_use]
    pub fn http_client(&self) -> Option<Client> {
        self.http_client
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// HTTP client for the next exchange, building the default one on first use
    pub(crate) fn transport(&self) -> Result<Client, PhpIpamError> {
        if let Some(client) = self.http_client() {
            return Ok(client);
        }

        let mut slot = self
            .http_client
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }
        debug!("Building default HTTP client");
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        *slot = Some(client.clone());
        Ok(client)
    }

    /// Swap in a new token as a single unit
    pub(crate) fn replace_token(&self, token: Token) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phpipam_config() -> Config {
        Config::default()
            .with_app_id("0123456789abcdefgh")
            .with_username("nobody")
            .with_password("changeit")
    }

    fn at(raw: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(raw, TIME_FORMAT).unwrap()
    }

    fn full_session(expires: &str) -> Session {
        Session::with_defaults(
            Config::from_vars(Vec::<(String, String)>::new()),
            [phpipam_config()],
        )
        .with_token(Token::new("foobarbazboop", Some(at(expires))))
    }

    #[test]
    fn new_session_merges_over_defaults() {
        let sess = Session::with_defaults(
            Config::from_vars(Vec::<(String, String)>::new()),
            [phpipam_config()],
        );
        let expected = phpipam_config().with_endpoint("http://localhost/api");
        assert_eq!(sess.config(), &expected);
        assert_eq!(sess.token(), Token::default());
        assert_eq!(sess.state(), SessionState::Unauthenticated);
        assert!(!sess.is_expired());
    }

    #[test]
    fn overlapping_configs_apply_in_order() {
        let sess = Session::with_defaults(
            Config::default(),
            [
                Config::default().with_username("a"),
                Config::default().with_username("b").with_password("p"),
            ],
        );
        assert_eq!(
            sess.config(),
            &Config::default().with_username("b").with_password("p")
        );
    }

    #[test]
    fn token_in_the_future_is_not_expired() {
        let sess = full_session("2999-12-31 23:59:59");
        assert!(!sess.is_expired());
        assert_eq!(sess.state(), SessionState::Valid);
    }

    #[test]
    fn token_in_the_past_is_expired() {
        let sess = full_session("1999-12-31 23:59:59");
        assert!(sess.is_expired());
        assert_eq!(sess.state(), SessionState::Expired);
    }

    #[test]
    fn expiry_boundary_counts_as_expired() {
        let sess = full_session("2017-03-03 00:56:34");
        assert_eq!(sess.state_at(at("2017-03-03 00:56:33")), SessionState::Valid);
        assert_eq!(sess.state_at(at("2017-03-03 00:56:34")), SessionState::Expired);
    }

    #[test]
    fn token_without_expiry_stays_valid() {
        let sess = Session::with_defaults(Config::default(), Vec::new())
            .with_token(Token::new("abc", None));
        assert_eq!(sess.state(), SessionState::Valid);
    }

    #[test]
    fn token_decodes_from_login_payload() {
        let token: Token =
            serde_json::from_str(r#"{"token":"foobarbazboop","expires":"2017-03-03 00:56:34"}"#)
                .unwrap();
        assert_eq!(
            token,
            Token::new("foobarbazboop", Some(at("2017-03-03 00:56:34")))
        );

        let token: Token = serde_json::from_str(r#"{"token":"abc","expires":null}"#).unwrap();
        assert_eq!(token.expires, None);

        assert!(serde_json::from_str::<Token>(r#"{"token":"abc","expires":"tomorrow"}"#).is_err());
    }

    #[test]
    fn replace_token_swaps_whole_value() {
        let sess = full_session("1999-12-31 23:59:59");
        let fresh = Token::new("fresh", Some(at("2999-01-01 00:00:00")));
        sess.replace_token(fresh.clone());
        assert_eq!(sess.token(), fresh);
        assert_eq!(sess.state(), SessionState::Valid);
    }

    #[test]
    fn http_client_is_shared_once_set() {
        let sess = Session::with_defaults(Config::default(), Vec::new());
        assert!(sess.http_client().is_none());
        sess.set_http_client(Client::new());
        assert!(sess.http_client().is_some());
        assert!(sess.transport().is_ok());
    }
}
