use std::sync::Arc;

use axum::{Extension, Json, extract::Query};

use crate::{
    error::RelayError,
    server::AppState,
    spotify, success,
    types::{CallbackParams, TopTracksQuery, Track},
};

pub async fn callback(
    Query(params): Query<CallbackParams>,
    Extension(app): Extension<Arc<AppState>>,
) -> Result<Json<Vec<Track>>, RelayError> {
    let state = params.state.as_deref().unwrap_or_default();
    let Some(pending) = app.states.take(state).await else {
        return Err(RelayError::InvalidState);
    };

    if let Some(reason) = params.error {
        return Err(RelayError::AuthorizationDenied(reason));
    }
    let Some(code) = params.code.filter(|c| !c.is_empty()) else {
        return Err(RelayError::MissingCode);
    };

    let token = spotify::auth::exchange_code(
        &app.http,
        &app.settings,
        &code,
        pending.code_verifier.as_deref(),
    )
    .await?;

    if !token.is_valid() {
        return Err(RelayError::InvalidToken);
    }

    let query = TopTracksQuery {
        time_range: Some(app.settings.time_range),
        limit: Some(app.settings.top_tracks_limit),
    };
    let tracks = spotify::tracks::get_top_tracks(
        &app.http,
        &app.settings.api_url,
        &token.access_token,
        &query,
    )
    .await?;

    success!("Fetched {} top tracks", tracks.len());
    Ok(Json(tracks))
}
