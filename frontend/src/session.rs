//! Session lifecycle on top of [`ApiClient`] and its token store.
//!
//! Nothing here touches Leptos; `state::auth` feeds the results into signals.

use chrono::Utc;

use crate::{
    api::{token::decode_claims, ApiClient, ApiError, LoginRequest, RefreshOutcome, UserProfile},
    utils::storage::TokenStore,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl Session {
    pub fn resolved(user: Option<UserProfile>) -> Self {
        Self {
            user,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Clone)]
pub struct SessionManager {
    api: ApiClient,
}

impl SessionManager {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub async fn bootstrap(&self) -> Session {
        self.bootstrap_at(Utc::now().timestamp()).await
    }

    /// Restores the session from storage, judging expiry against `now`
    /// (unix seconds). Always returns with `loading == false`.
    pub async fn bootstrap_at(&self, now: i64) -> Session {
        Session::resolved(self.restore(now).await)
    }

    async fn restore(&self, now: i64) -> Option<UserProfile> {
        let tokens = self.api.token_store();
        let access = match tokens.access_token() {
            Ok(Some(token)) => token,
            Ok(None) => {
                log::debug!("No stored access token, starting logged out");
                return None;
            }
            Err(err) => {
                log::error!("Failed to read access token: {}", err);
                return None;
            }
        };

        match decode_claims(&access) {
            Ok(claims) if claims.is_expired_at(now) => {
                log::debug!("Access token expired at {}, refreshing", claims.expires_at());
                self.refresh().await
            }
            Ok(_) => self.fetch_profile().await,
            Err(err) => {
                log::warn!("Discarding undecodable access token: {}", err);
                if let Err(err) = tokens.clear_tokens() {
                    log::error!("Failed to clear tokens: {}", err);
                }
                None
            }
        }
    }

    /// Mints a new access token and, on success, loads the profile with it.
    pub async fn refresh(&self) -> Option<UserProfile> {
        match self.api.refresh_access_token().await {
            Ok(RefreshOutcome::Refreshed(_)) => self.fetch_profile().await,
            Ok(RefreshOutcome::MissingRefreshToken) => {
                log::debug!("No stored refresh token");
                None
            }
            Ok(RefreshOutcome::Rejected(status)) => {
                log::error!("Error refreshing token: status {}", status);
                None
            }
            Err(err) => {
                log::error!("Error refreshing token: {}", err);
                None
            }
        }
    }

    pub async fn fetch_profile(&self) -> Option<UserProfile> {
        match self.api.get_profile().await {
            Ok(profile) => Some(profile),
            Err(err) => {
                log::error!("Failed to fetch profile: {}", err);
                None
            }
        }
    }

    /// Stores the issued token pair, then loads the profile.
    ///
    /// Unlike the bootstrap flows, errors are returned so the login form can
    /// show them inline. If the profile cannot be loaded the stored pair is
    /// dropped again, so a reload does not resume a session the user never saw.
    pub async fn login(&self, request: &LoginRequest) -> Result<UserProfile, ApiError> {
        self.api.login(request).await?;
        match self.api.get_profile().await {
            Ok(profile) => Ok(profile),
            Err(err) => {
                log::error!("Failed to fetch profile after login: {}", err);
                self.logout();
                Err(err)
            }
        }
    }

    /// Local only: drops both tokens. The server is not contacted.
    pub fn logout(&self) {
        if let Err(err) = self.api.token_store().clear_tokens() {
            log::error!("Failed to clear tokens: {}", err);
        }
    }
}
