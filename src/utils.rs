use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use reqwest::Url;
use sha2::{Digest, Sha256};

use crate::config::Settings;

pub const STATE_LENGTH: usize = 32;
pub const CODE_VERIFIER_LENGTH: usize = 128;

/// Generates an opaque anti-CSRF state token.
///
/// Drawn from the thread-local CSPRNG, which is seeded from the operating
/// system and panics if no entropy source is available.
pub fn generate_state() -> String {
    random_alphanumeric(STATE_LENGTH)
}

pub fn generate_code_verifier() -> String {
    random_alphanumeric(CODE_VERIFIER_LENGTH)
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Builds the provider authorization URL the user is redirected to.
///
/// `code_challenge` is only appended when PKCE is in use.
pub fn build_authorize_url(settings: &Settings, state: &str, code_challenge: Option<&str>) -> Url {
    let mut url = settings.auth_url.clone();
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("client_id", &settings.client_id)
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", &settings.redirect_uri)
            .append_pair("scope", &settings.scope())
            .append_pair("state", state);

        if let Some(challenge) = code_challenge {
            query
                .append_pair("code_challenge_method", "S256")
                .append_pair("code_challenge", challenge);
        }
    }
    url
}

/// Joins a path onto the Web API base URL, keeping the base's own path.
pub fn api_endpoint(api_url: &Url, path: &str) -> String {
    format!(
        "{base}/{path}",
        base = api_url.as_str().trim_end_matches('/'),
        path = path.trim_start_matches('/')
    )
}
