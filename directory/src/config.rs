//! Directory host configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_USER_AGENT: &str = "user-directory/0.1";

/// Settings for reaching the remote user collection.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DIRECTORY")]
pub struct DirectorySettings {
    /// Collection endpoint URL.
    pub endpoint: Option<String>,
    /// Request timeout in seconds.
    pub timeout_seconds: Option<u64>,
    /// User agent sent with collection requests.
    pub user_agent: Option<String>,
}

impl DirectorySettings {
    /// Return the configured endpoint, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured value is not an absolute URL.
    pub fn endpoint(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
    }

    /// Return the configured request timeout, falling back to the default.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
                .max(1),
        )
    }

    /// Return the configured user agent, falling back to the default.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for directory configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> DirectorySettings {
        DirectorySettings::load_from_iter([OsString::from("user-directory")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("DIRECTORY_ENDPOINT", None::<String>),
            ("DIRECTORY_TIMEOUT_SECONDS", None::<String>),
            ("DIRECTORY_USER_AGENT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.endpoint().expect("default endpoint parses").as_str(),
            DEFAULT_ENDPOINT
        );
        assert_eq!(settings.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECONDS));
        assert_eq!(settings.user_agent(), DEFAULT_USER_AGENT);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "DIRECTORY_ENDPOINT",
                Some("http://127.0.0.1:9000/people".to_owned()),
            ),
            ("DIRECTORY_TIMEOUT_SECONDS", Some("3".to_owned())),
            ("DIRECTORY_USER_AGENT", Some("directory-tests".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.endpoint().expect("override parses").as_str(),
            "http://127.0.0.1:9000/people"
        );
        assert_eq!(settings.timeout(), Duration::from_secs(3));
        assert_eq!(settings.user_agent(), "directory-tests");
    }

    #[test]
    fn zero_timeout_is_raised_to_one_second() {
        let settings = DirectorySettings {
            endpoint: None,
            timeout_seconds: Some(0),
            user_agent: None,
        };
        assert_eq!(settings.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn relative_endpoint_is_rejected() {
        let settings = DirectorySettings {
            endpoint: Some("/users".to_owned()),
            timeout_seconds: None,
            user_agent: None,
        };
        assert!(settings.endpoint().is_err());
    }
}
