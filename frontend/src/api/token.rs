//! Client-side reading of access token claims.
//!
//! The payload is decoded, never verified: the client does not hold the
//! signing key, and the backend re-validates every token it receives.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenDecodeError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not valid base64url")]
    Encoding,
    #[error("token payload is not a JSON claim set")]
    Payload,
    #[error("token has no `exp` claim")]
    MissingExpiry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenClaims {
    /// Expiry as a JWT NumericDate: seconds since the Unix epoch, possibly
    /// fractional.
    pub exp: f64,
    pub jti: Option<String>,
    pub user_id: Option<i64>,
    pub token_type: Option<String>,
}

impl TokenClaims {
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now as f64
    }

    /// Whole seconds of `exp`, for logging.
    pub fn expires_at(&self) -> i64 {
        self.exp.floor() as i64
    }
}

#[derive(Deserialize)]
struct RawClaims {
    exp: Option<f64>,
    jti: Option<String>,
    user_id: Option<i64>,
    token_type: Option<String>,
}

pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenDecodeError> {
    let mut parts = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenDecodeError::Malformed);
    };

    // Some encoders keep the `=` padding; URL_SAFE_NO_PAD rejects it.
    let decoded = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| TokenDecodeError::Encoding)?;
    let raw: RawClaims =
        serde_json::from_slice(&decoded).map_err(|_| TokenDecodeError::Payload)?;

    Ok(TokenClaims {
        exp: raw.exp.ok_or(TokenDecodeError::MissingExpiry)?,
        jti: raw.jti,
        user_id: raw.user_id,
        token_type: raw.token_type,
    })
}

#[cfg(test)]
pub(crate) fn encode_test_token(claims: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.signature", header, payload)
}
