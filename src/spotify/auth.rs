use reqwest::Client;

use crate::{
    config::Settings,
    error::RelayError,
    types::{Token, TokenResponse},
};

/// Exchanges an authorization code for an access token.
///
/// Client credentials are sent in an HTTP Basic `Authorization` header.
/// `code_verifier` is forwarded when the authorization request carried a
/// PKCE challenge.
///
/// # Errors
///
/// - [`RelayError::TokenExchangeFailed`] on transport errors, non-2xx
///   responses (carrying the status text) or an undecodable body
/// - [`RelayError::NilToken`] when the body has no `access_token`
pub async fn exchange_code(
    client: &Client,
    settings: &Settings,
    code: &str,
    code_verifier: Option<&str>,
) -> Result<Token, RelayError> {
    let mut form = vec![
        ("grant_type", "authorization_code"),
        ("code", code),
        ("redirect_uri", settings.redirect_uri.as_str()),
    ];
    if let Some(verifier) = code_verifier {
        form.push(("code_verifier", verifier));
    }

    let res = client
        .post(settings.token_url.clone())
        .basic_auth(&settings.client_id, Some(&settings.client_secret))
        .form(&form)
        .send()
        .await
        .map_err(|e| RelayError::TokenExchangeFailed(e.to_string()))?;

    let status = res.status();
    if !status.is_success() {
        return Err(RelayError::TokenExchangeFailed(status.to_string()));
    }

    let mut body: TokenResponse = res
        .json()
        .await
        .map_err(|e| RelayError::TokenExchangeFailed(format!("malformed token response: {e}")))?;

    let Some(access_token) = body.access_token.take() else {
        return Err(RelayError::NilToken);
    };

    Ok(Token::from_response(access_token, body))
}
