use std::sync::Arc;

use crate::client::ProfileClient;
use crate::error::Error;
use crate::session::SessionStore;
use crate::types::{AccessToken, Email, UserInfo};

/// Loads the user profile and commits it into a [`SessionStore`].
///
/// Each call commits when its own response arrives. Concurrent calls are not
/// sequenced, so whichever resolves last decides the stored `user_info`.
#[derive(Debug, Clone)]
pub struct ProfileFetcher {
    client: Arc<ProfileClient>,
    session: SessionStore,
}

impl ProfileFetcher {
    #[must_use]
    pub fn new(client: ProfileClient, session: SessionStore) -> Self {
        Self {
            client: Arc::new(client),
            session,
        }
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Fetch the profile and store it; failures are logged and swallowed.
    ///
    /// Always completes. On failure the session is left exactly as it was,
    /// so the only observable outcome of an error is the log line.
    pub async fn fetch_user_info(
        &self,
        access_token: impl Into<AccessToken>,
        email: impl Into<Email>,
    ) {
        if let Err(e) = self.try_fetch_user_info(access_token, email).await {
            tracing::error!(error = %e, "Cannot get user information");
        }
    }

    /// Fetch the profile and store it, reporting failures to the caller.
    ///
    /// # Errors
    ///
    /// Returns whatever [`ProfileClient::get_user_info`] returns. The session
    /// is only written on success.
    pub async fn try_fetch_user_info(
        &self,
        access_token: impl Into<AccessToken>,
        email: impl Into<Email>,
    ) -> Result<UserInfo, Error> {
        let access_token = access_token.into();
        let email = email.into();

        let info = self.client.get_user_info(&access_token, &email).await?;
        self.session.set_user_info(info.clone());
        tracing::debug!(email = %email, "User information loaded");
        Ok(info)
    }
}
