use std::sync::Arc;

use tokio::sync::watch;

use crate::types::{AccessToken, UserInfo};

/// Snapshot of the client session.
///
/// The two fields are independent: `user_info` may be present while the token
/// is stale or missing.
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Session {
    pub access_token: Option<AccessToken>,
    pub user_info: Option<UserInfo>,
}

/// Shared handle to the in-memory session.
///
/// Clones share the same state. Every write goes through this type and is
/// applied atomically; readers either take a snapshot or [`subscribe`] to changes.
/// Nothing is persisted: dropping the last handle forgets the session.
///
/// [`subscribe`]: SessionStore::subscribe
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<watch::Sender<Session>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(Session::default());
        Self {
            state: Arc::new(state),
        }
    }

    /// Replaces the stored access token.
    pub fn set_access_token(&self, token: impl Into<AccessToken>) {
        let token = token.into();
        self.state.send_modify(|session| session.access_token = Some(token));
        tracing::debug!("Access token updated");
    }

    /// Replaces the stored user info wholesale.
    pub fn set_user_info(&self, info: impl Into<UserInfo>) {
        let info = info.into();
        self.state.send_modify(|session| session.user_info = Some(info));
        tracing::debug!("User info updated");
    }

    #[must_use]
    pub fn access_token(&self) -> Option<AccessToken> {
        self.state.borrow().access_token.clone()
    }

    #[must_use]
    pub fn user_info(&self) -> Option<UserInfo> {
        self.state.borrow().user_info.clone()
    }

    /// Copy of the whole session at this instant.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Receiver notified after every committed write.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &*self.state.borrow())
            .finish()
    }
}
