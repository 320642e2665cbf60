use reqwest::{Client, Url};

use crate::{
    error::RelayError,
    types::{TopTracksQuery, TopTracksResponse, Track},
    utils,
};

/// Fetches the current user's top tracks.
///
/// Items keep the order Spotify returns them in. Each one is flattened to a
/// [`Track`] carrying only its first artist.
///
/// # Errors
///
/// - [`RelayError::UpstreamFetchFailed`] on transport errors or a non-2xx
///   status (carrying the status text)
/// - [`RelayError::DecodeFailed`] when the body is not a top tracks page
pub async fn get_top_tracks(
    client: &Client,
    api_url: &Url,
    token: &str,
    query: &TopTracksQuery,
) -> Result<Vec<Track>, RelayError> {
    let mut params: Vec<(&str, String)> = Vec::new();
    if let Some(time_range) = query.time_range {
        params.push(("time_range", time_range.to_string()));
    }
    if let Some(limit) = query.limit {
        params.push(("limit", limit.to_string()));
    }

    let res = client
        .get(utils::api_endpoint(api_url, "me/top/tracks"))
        .bearer_auth(token)
        .query(&params)
        .send()
        .await
        .map_err(|e| RelayError::UpstreamFetchFailed(e.to_string()))?;

    let status = res.status();
    if !status.is_success() {
        return Err(RelayError::UpstreamFetchFailed(status.to_string()));
    }

    let body = res
        .bytes()
        .await
        .map_err(|e| RelayError::UpstreamFetchFailed(e.to_string()))?;

    let page: TopTracksResponse =
        serde_json::from_slice(&body).map_err(|e| RelayError::DecodeFailed(e.to_string()))?;

    Ok(page.items.into_iter().map(Track::from).collect())
}
