//! Google sign-in client.
//!
//! The authorization redirect itself is a plain link (see
//! [`topicboard_core::auth::authorization_url`]); this module makes the two
//! HTTP calls around it: fetching the profile for a fresh token and revoking
//! the token on sign-out.

use dioxus::logger::tracing::info;
use topicboard_core::auth::{revocation_form, UserInfo, REVOKE_ENDPOINT, USERINFO_ENDPOINT};
use topicboard_core::UserProfile;

use crate::error::AuthError;
use crate::http;

/// Resolves the profile of the user that owns `access_token`.
pub async fn fetch_profile(access_token: &str) -> Result<UserProfile, AuthError> {
    let response = http::client()
        .get(USERINFO_ENDPOINT)
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| AuthError::RequestFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(AuthError::Rejected(format!(
            "userinfo returned {}",
            response.status()
        )));
    }

    let info: UserInfo = response
        .json()
        .await
        .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;
    info!("Signed in as {}", info.sub);
    Ok(info.into_profile(access_token.to_string()))
}

/// Invalidates `access_token` at the provider.
///
/// The revoke endpoint sends no CORS headers, so in the browser the request
/// goes out as a no-cors form POST and its outcome cannot be observed.
#[cfg(target_arch = "wasm32")]
pub async fn revoke(access_token: &str) -> Result<(), AuthError> {
    crate::platform::send_form_no_cors(REVOKE_ENDPOINT, &revocation_form(access_token))
        .await
        .map_err(|e| AuthError::RequestFailed(e.to_string()))?;
    info!("Token revocation sent");
    Ok(())
}

/// Invalidates `access_token` at the provider.
#[cfg(not(target_arch = "wasm32"))]
pub async fn revoke(access_token: &str) -> Result<(), AuthError> {
    let response = http::client()
        .post(REVOKE_ENDPOINT)
        .header(
            reqwest::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(revocation_form(access_token))
        .send()
        .await
        .map_err(|e| AuthError::RequestFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(AuthError::Rejected(format!(
            "revoke returned {}",
            response.status()
        )));
    }
    info!("Access token revoked");
    Ok(())
}
