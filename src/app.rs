use crate::client::ProfileClient;
use crate::config::ClientConfig;
use crate::fetcher::ProfileFetcher;
use crate::navigator::Navigator;
use crate::router::Router;
use crate::session::SessionStore;
use crate::types::{AccessToken, Email};

/// Application context: session, profile fetcher and navigation in one place.
///
/// Pass this (or the handles it exposes) to whatever needs shared state,
/// instead of reaching for a global.
#[derive(Debug)]
pub struct App {
    session: SessionStore,
    fetcher: ProfileFetcher,
    navigator: Navigator,
}

impl App {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(ProfileClient::new(config))
    }

    /// Build around an already-configured client.
    #[must_use]
    pub fn with_client(client: ProfileClient) -> Self {
        let session = SessionStore::new();
        Self {
            fetcher: ProfileFetcher::new(client, session.clone()),
            session,
            navigator: Navigator::new(Router::new()),
        }
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    #[must_use]
    pub fn fetcher(&self) -> &ProfileFetcher {
        &self.fetcher
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    /// What the login view does once it holds a token: store it, load the
    /// profile, then show the user-information view.
    ///
    /// Navigation is unconditional: a failed profile fetch is logged and the
    /// user-information view is shown anyway, with whatever `user_info` the
    /// session already held. Callers that want to stay on the login view on
    /// failure should call [`ProfileFetcher::try_fetch_user_info`] and drive
    /// the [`Navigator`] themselves.
    pub async fn complete_login(
        &mut self,
        access_token: impl Into<AccessToken>,
        email: impl Into<Email>,
    ) {
        let access_token = access_token.into();
        self.session.set_access_token(access_token.clone());
        self.fetcher.fetch_user_info(access_token, email).await;
        self.navigator.push("/user-information");
    }
}
