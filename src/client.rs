use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::config::ClientConfig;
use crate::error::Error;
use crate::types::{AccessToken, Email, UserInfo};

/// HTTP client for the profile API.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    config: ClientConfig,
    http: reqwest::Client,
}

#[derive(Serialize)]
struct UserInfoRequest<'a> {
    email: &'a str,
}

/// Unwraps the `{ "Data": ... }` envelope around every profile response.
///
/// Only a JSON object with a non-null `Data` member counts; arrays, scalars
/// and `"Data": null` are all [`Error::MissingData`].
fn data_field(body: JsonValue) -> Result<UserInfo, Error> {
    let JsonValue::Object(mut envelope) = body else {
        return Err(Error::MissingData);
    };
    match envelope.remove("Data") {
        Some(JsonValue::Null) | None => Err(Error::MissingData),
        Some(data) => Ok(UserInfo::from(data)),
    }
}

impl ProfileClient {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Use a custom HTTP client (for connection pool reuse or testing).
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the profile of `email`, authorised by `access_token`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on network failure or an undecodable body,
    /// [`Error::Api`] on a non-2xx status, and [`Error::MissingData`] when
    /// the body has no `Data` field.
    pub async fn get_user_info(
        &self,
        access_token: &AccessToken,
        email: &Email,
    ) -> Result<UserInfo, Error> {
        let response = self
            .http
            .post(self.config.user_info_url.clone())
            .bearer_auth(access_token.as_str())
            .json(&UserInfoRequest {
                email: email.as_str(),
            })
            .send()
            .await?;

        let response = Self::ensure_success(response, "user information request").await?;
        let body = response.json::<JsonValue>().await?;
        data_field(body)
    }

    /// Checks HTTP response status; returns the response on success or an error with details.
    async fn ensure_success(
        response: reqwest::Response,
        operation: &'static str,
    ) -> Result<reqwest::Response, Error> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let detail = response.text().await.unwrap_or_default();
        Err(Error::Api {
            operation,
            status,
            detail,
        })
    }
}
