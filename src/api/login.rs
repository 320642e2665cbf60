use std::sync::Arc;

use axum::{
    Extension,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{info, server::AppState, utils};

pub async fn login(Extension(app): Extension<Arc<AppState>>) -> Response {
    let state = utils::generate_state();

    let (code_verifier, code_challenge) = if app.settings.use_pkce {
        let verifier = utils::generate_code_verifier();
        let challenge = utils::generate_code_challenge(&verifier);
        (Some(verifier), Some(challenge))
    } else {
        (None, None)
    };

    let auth_url = utils::build_authorize_url(&app.settings, &state, code_challenge.as_deref());

    // Record the state before the browser can possibly come back with it
    app.states.insert(state, code_verifier).await;
    info!("Redirecting to Spotify authorization");

    (StatusCode::FOUND, [(header::LOCATION, auth_url.to_string())]).into_response()
}
