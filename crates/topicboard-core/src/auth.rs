//! OAuth 2 implicit-flow helpers for Google sign-in.
//!
//! Only the URL building and response parsing live here; the HTTP calls are
//! made by the app crate.

use serde::Deserialize;

use crate::error::AuthError;
use crate::types::{UserId, UserProfile};

pub const AUTHORIZATION_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const USERINFO_ENDPOINT: &str = "https://openidconnect.googleapis.com/v1/userinfo";
pub const REVOKE_ENDPOINT: &str = "https://oauth2.googleapis.com/revoke";

/// Profile for the user menu, plus access to the realtime database REST API.
pub const SCOPES: &str = "openid profile email \
    https://www.googleapis.com/auth/userinfo.email \
    https://www.googleapis.com/auth/firebase.database";

/// Builds the URL the "Sign in" button points to.
pub fn authorization_url(client_id: &str, redirect_uri: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("client_id", client_id)
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("response_type", "token")
        .append_pair("scope", SCOPES)
        .append_pair("prompt", "select_account")
        .finish();
    format!("{}?{}", AUTHORIZATION_ENDPOINT, query)
}

/// Form body of a token revocation request.
pub fn revocation_form(access_token: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("token", access_token)
        .finish()
}

/// Extracts the access token from the fragment the provider redirects back with.
///
/// Returns `Ok(None)` when the fragment isn't an OAuth response at all (e.g.
/// an ordinary route like `#/login`).
pub fn parse_redirect_fragment(fragment: &str) -> Result<Option<String>, AuthError> {
    let fragment = fragment.trim_start_matches('#');
    if fragment.starts_with('/') {
        return Ok(None);
    }

    let mut token = None;
    let mut error = None;
    for (key, value) in url::form_urlencoded::parse(fragment.as_bytes()) {
        match key.as_ref() {
            "access_token" => token = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            _ => {}
        }
    }

    match (token, error) {
        (_, Some(error)) => Err(AuthError::Rejected(error)),
        (Some(token), None) if !token.is_empty() => Ok(Some(token)),
        (Some(_), None) => Err(AuthError::MissingToken),
        (None, None) => Ok(None),
    }
}

/// OpenID Connect userinfo response.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub sub: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub picture: Option<String>,
}

impl UserInfo {
    pub fn into_profile(self, access_token: String) -> UserProfile {
        UserProfile {
            id: UserId::new(self.sub),
            name: self.name,
            email: self.email,
            image_url: self.picture,
            access_token: Some(access_token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_url() {
        let url = authorization_url("abc.apps", "http://localhost:8080/");
        let parsed = url::Url::parse(&url).unwrap();
        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert!(url.starts_with(AUTHORIZATION_ENDPOINT));
        assert!(pairs.contains(&("client_id".into(), "abc.apps".into())));
        assert!(pairs.contains(&("redirect_uri".into(), "http://localhost:8080/".into())));
        assert!(pairs.contains(&("response_type".into(), "token".into())));
        assert!(pairs.contains(&("scope".into(), SCOPES.into())));
    }

    #[test]
    fn test_scopes_grant_database_access() {
        let scopes: Vec<&str> = SCOPES.split_whitespace().collect();
        assert!(scopes.contains(&"https://www.googleapis.com/auth/firebase.database"));
        assert!(scopes.contains(&"https://www.googleapis.com/auth/userinfo.email"));
        assert!(scopes.contains(&"openid"));
    }

    #[test]
    fn test_revocation_form_encodes_token() {
        assert_eq!(revocation_form("ya29.a/b+c"), "token=ya29.a%2Fb%2Bc");
    }

    #[test]
    fn test_parse_token_fragment() {
        let token =
            parse_redirect_fragment("#access_token=ya29.abc&token_type=Bearer&expires_in=3599")
                .unwrap();
        assert_eq!(token.as_deref(), Some("ya29.abc"));
    }

    #[test]
    fn test_route_fragment_is_not_oauth() {
        assert_eq!(parse_redirect_fragment("#/report/u/t").unwrap(), None);
        assert_eq!(parse_redirect_fragment("").unwrap(), None);
    }

    #[test]
    fn test_provider_error() {
        assert_eq!(
            parse_redirect_fragment("error=access_denied").unwrap_err(),
            AuthError::Rejected("access_denied".to_string())
        );
        assert_eq!(
            parse_redirect_fragment("access_token=").unwrap_err(),
            AuthError::MissingToken
        );
    }

    #[test]
    fn test_userinfo_into_profile() {
        let info: UserInfo = serde_json::from_str(
            r#"{"sub":"1084","name":"Ada","email":"ada@example.com","email_verified":true}"#,
        )
        .unwrap();
        let profile = info.into_profile("tok".into());
        assert_eq!(profile.id.as_str(), "1084");
        assert!(profile.image_url.is_none());
        assert_eq!(profile.access_token.as_deref(), Some("tok"));
    }
}
