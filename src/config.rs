use url::Url;

use crate::error::Error;

const USER_INFO_PATH: &str = "user/user-information";

/// Profile API configuration.
///
/// The API base is a constructor parameter; the endpoint is derived from it
/// unless overridden.
///
/// ```rust,ignore
/// use profile_shell::ClientConfig;
///
/// let config = ClientConfig::new("https://api.example.com".parse()?)?;
/// assert_eq!(config.user_info_url().as_str(), "https://api.example.com/user/user-information");
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ClientConfig {
    pub(crate) api_base: Url,
    pub(crate) user_info_url: Url,
}

impl ClientConfig {
    /// Create a configuration rooted at `api_base`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `api_base` cannot carry a path
    /// (e.g. `mailto:` URLs).
    pub fn new(api_base: Url) -> Result<Self, Error> {
        let user_info_url = endpoint(&api_base, USER_INFO_PATH)?;
        Ok(Self {
            api_base,
            user_info_url,
        })
    }

    /// Create configuration from environment variables.
    ///
    /// # Required env vars
    /// - `PROFILE_API_URL`: base URL of the profile API
    ///
    /// # Optional env vars
    /// - `PROFILE_USER_INFO_URL`: full URL of the user-information endpoint
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a required variable is missing or a URL is invalid.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a required variable is missing or a URL is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let base_str = lookup("PROFILE_API_URL")
            .ok_or_else(|| Error::Config("PROFILE_API_URL is required".into()))?;
        let base: Url = base_str
            .parse()
            .map_err(|e| Error::Config(format!("PROFILE_API_URL: {e}")))?;

        let mut config = Self::new(base)?;

        if let Some(url_str) = lookup("PROFILE_USER_INFO_URL") {
            let url: Url = url_str
                .parse()
                .map_err(|e| Error::Config(format!("PROFILE_USER_INFO_URL: {e}")))?;
            config = config.with_user_info_url(url);
        }

        Ok(config)
    }

    /// Override the user-information endpoint.
    #[must_use]
    pub fn with_user_info_url(mut self, url: Url) -> Self {
        self.user_info_url = url;
        self
    }

    #[must_use]
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// User-information endpoint URL.
    #[must_use]
    pub fn user_info_url(&self) -> &Url {
        &self.user_info_url
    }
}

/// Joins `path` under `base`, keeping any path prefix `base` already has.
fn endpoint(base: &Url, path: &str) -> Result<Url, Error> {
    if base.cannot_be_a_base() {
        return Err(Error::Config(format!("{base} cannot be used as an API base")));
    }
    let mut dir = base.clone();
    if !dir.path().ends_with('/') {
        let with_slash = format!("{}/", dir.path());
        dir.set_path(&with_slash);
    }
    dir.join(path)
        .map_err(|e| Error::Config(format!("{base}: {e}")))
}
