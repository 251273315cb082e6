use reqwest::{Method, StatusCode};

use super::{
    client::ApiClient,
    types::{
        ActionResponse, ApiError, ChangePasswordRequest, LoginRequest, RefreshOutcome,
        RefreshRequest, RefreshResponse, RegisterRequest, TokenPair, UserProfile,
    },
};
use crate::utils::storage::{TokenStore, REFRESH_TOKEN_KEY};

pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const TOKEN_REFRESH_PATH: &str = "/api/auth/token/refresh/";
pub const PROFILE_PATH: &str = "/api/profile/";
pub const REGISTER_PATH: &str = "/api/auth/register/";
pub const PASSWORD_CHANGE_PATH: &str = "/api/auth/password_change/";

impl ApiClient {
    /// Exchanges credentials for a token pair and persists both tokens.
    pub async fn login(&self, request: &LoginRequest) -> Result<TokenPair, ApiError> {
        let pair: TokenPair = self.send_json(Method::POST, LOGIN_PATH, request).await?;
        self.token_store().set_token_pair(&pair)?;
        Ok(pair)
    }

    /// Mints a new access token from the stored refresh token.
    ///
    /// Only a 200 counts as success; any other status is reported as
    /// [`RefreshOutcome::Rejected`]. Transport failures are returned as errors.
    pub async fn refresh_access_token(&self) -> Result<RefreshOutcome, ApiError> {
        let tokens = self.token_store();
        let Some(refresh) = tokens.refresh_token()? else {
            return Ok(RefreshOutcome::MissingRefreshToken);
        };

        let builder = self
            .request(Method::POST, TOKEN_REFRESH_PATH)
            .await
            .json(&RefreshRequest { refresh });
        let response = self.send(builder).await?;
        if response.status != StatusCode::OK {
            return Ok(RefreshOutcome::Rejected(response.status.as_u16()));
        }

        let refreshed: RefreshResponse = response.json()?;
        tokens.set_access_token(&refreshed.access)?;
        if let Some(rotated) = refreshed.refresh.as_deref() {
            tokens.set(REFRESH_TOKEN_KEY, rotated)?;
        }
        Ok(RefreshOutcome::Refreshed(refreshed.access))
    }

    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.get_json(PROFILE_PATH).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<ActionResponse, ApiError> {
        self.send_json(Method::POST, REGISTER_PATH, request).await
    }

    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<ActionResponse, ApiError> {
        self.send_json(Method::PUT, PASSWORD_CHANGE_PATH, request).await
    }
}
