use base64::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{ClubError, ClubResult};

/// Claims carried in the identity token payload.
///
/// The payload is decoded client-side for display logic only (e.g. hiding
/// the join action for clubs the viewer leads). The signature is NOT
/// verified here; authorization decisions belong to the backend.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TokenPayload {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Expiry (seconds since epoch), when the issuer includes one.
    pub exp: Option<u64>,
}

/// Decode the payload segment of a compact JWT (`header.payload.signature`).
pub fn decode_token(token: &str) -> ClubResult<TokenPayload> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_), Some(payload)) if !payload.is_empty() => payload,
        _ => {
            return Err(ClubError::TokenError(
                "token is not in compact JWT form".to_string(),
            ))
        }
    };

    let bytes = BASE64_URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| ClubError::TokenError(format!("payload is not valid base64url: {}", e)))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| ClubError::TokenError(format!("payload is not valid claims JSON: {}", e)))
}
