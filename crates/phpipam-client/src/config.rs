//! Connection settings for the phpIPAM API
//!
//! Settings come from three layers, lowest priority first: built-in defaults,
//! `PHPIPAM_*` environment variables, and explicit [`Config`] values handed to
//! [`Session::new`](crate::Session::new). Later layers only override fields
//! they actually set.

use std::fmt;

/// The default phpIPAM API endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost/api";

/// Environment variable holding the application ID.
pub const ENV_APP_ID: &str = "PHPIPAM_APP_ID";
/// Environment variable holding the endpoint address.
pub const ENV_ENDPOINT: &str = "PHPIPAM_ENDPOINT_ADDR";
/// Environment variable holding the account password.
pub const ENV_PASSWORD: &str = "PHPIPAM_PASSWORD";
/// Environment variable holding the account user name.
pub const ENV_USERNAME: &str = "PHPIPAM_USER_NAME";

/// Configuration for connecting to the phpIPAM API
///
/// An empty field means "not set" and never overrides a lower layer.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Application ID, created in the phpIPAM console
    pub app_id: String,
    /// API base URL (e.g., "https://ipam.example.com/api")
    pub endpoint: String,
    /// Account user name
    pub username: String,
    /// Account password
    pub password: String,
}

impl Config {
    /// Defaults layered with the process environment.
    ///
    /// Only the `PHPIPAM_*` names are read; unset or non-UTF-8 values are
    /// treated as unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            [ENV_APP_ID, ENV_ENDPOINT, ENV_PASSWORD, ENV_USERNAME]
                .into_iter()
                .filter_map(|name| std::env::var(name).ok().map(|value| (name, value))),
        )
    }

    /// Defaults layered with the given `(name, value)` pairs.
    ///
    /// Unknown names are ignored; the endpoint falls back to
    /// [`DEFAULT_ENDPOINT`].
    #[must_use]
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut cfg = Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            ..Self::default()
        };
        for (name, value) in vars {
            let slot = match name.as_ref() {
                ENV_APP_ID => &mut cfg.app_id,
                ENV_ENDPOINT => &mut cfg.endpoint,
                ENV_PASSWORD => &mut cfg.password,
                ENV_USERNAME => &mut cfg.username,
                _ => continue,
            };
            *slot = value.into();
        }
        cfg
    }

    /// Overlay `other` onto `self`: every non-empty field of `other` wins.
    pub fn merge(&mut self, other: &Self) {
        let pairs = [
            (&mut self.app_id, &other.app_id),
            (&mut self.endpoint, &other.endpoint),
            (&mut self.username, &other.username),
            (&mut self.password, &other.password),
        ];
        for (mine, theirs) in pairs {
            if !theirs.is_empty() {
                mine.clone_from(theirs);
            }
        }
    }

    /// Set the application ID
    #[must_use]
    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }

    /// Set the endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the user name
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Set the password
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("Config")
            .field("app_id", &self.app_id)
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &password)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_environment() {
        let cfg = Config::from_vars(Vec::<(String, String)>::new());
        assert_eq!(cfg.endpoint, "http://localhost/api");
        assert!(cfg.app_id.is_empty());
        assert!(cfg.username.is_empty());
        assert!(cfg.password.is_empty());
    }

    #[test]
    fn environment_overrides_defaults() {
        let cfg = Config::from_vars([
            ("PHPIPAM_APP_ID", "foobar"),
            ("PHPIPAM_ENDPOINT_ADDR", "https://example.com/phpipam/api"),
            ("PHPIPAM_PASSWORD", "abcdefgh0123456789"),
            ("PHPIPAM_USER_NAME", "nobody"),
            ("HOME", "/root"),
        ]);
        assert_eq!(cfg.app_id, "foobar");
        assert_eq!(cfg.endpoint, "https://example.com/phpipam/api");
        assert_eq!(cfg.password, "abcdefgh0123456789");
        assert_eq!(cfg.username, "nobody");
    }

    #[test]
    fn merge_is_last_writer_wins_for_set_fields() {
        let mut cfg = Config::default();
        cfg.merge(&Config::default().with_username("a"));
        cfg.merge(&Config::default().with_username("b").with_password("p"));
        assert_eq!(cfg, Config::default().with_username("b").with_password("p"));
    }

    #[test]
    fn merge_keeps_fields_left_empty() {
        let mut cfg = Config::from_vars([("PHPIPAM_APP_ID", "env-app")]);
        cfg.merge(&Config::default().with_username("jdoe"));
        assert_eq!(cfg.app_id, "env-app");
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.username, "jdoe");
    }

    #[test]
    fn from_env_starts_from_defaults() {
        let cfg = Config::from_env();
        assert!(!cfg.endpoint.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn from_env_tolerates_non_utf8_variables() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        use std::process::Command;

        // Run the plain `from_env` test in a child that carries an unrelated
        // non-UTF-8 variable.
        let status = Command::new(std::env::current_exe().unwrap())
            .args(["config::tests::from_env_starts_from_defaults", "--exact", "--quiet"])
            .env("PHPIPAM_CLIENT_TEST_RAW", OsStr::from_bytes(b"\xff\xfe"))
            .status()
            .unwrap();
        assert!(status.success());
    }

    #[test]
    fn debug_redacts_password() {
        let cfg = Config::default().with_password("hunter2");
        let out = format!("{cfg:?}");
        assert!(!out.contains("hunter2"));
        assert!(out.contains("<redacted>"));
    }
}
