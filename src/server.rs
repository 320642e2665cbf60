use axum::{Extension, Router, routing::get};
use reqwest::Client;
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::net::TcpListener;

use crate::{Res, api, config::Settings, info, management::StateStore};

/// State shared by every request handler.
pub struct AppState {
    pub settings: Settings,
    pub states: StateStore,
    pub http: Client,
}

impl AppState {
    pub fn new(settings: Settings) -> Res<Self> {
        let http = Client::builder().timeout(settings.http_timeout).build()?;
        let states = StateStore::new(settings.state_ttl, settings.state_capacity);

        Ok(Self {
            settings,
            states,
            http,
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .layer(Extension(state))
}

pub async fn bind(address: &str) -> Res<TcpListener> {
    let addr = SocketAddr::from_str(address)
        .map_err(|e| format!("Failed to parse server address '{address}': {e}"))?;
    Ok(TcpListener::bind(addr).await?)
}

pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Res<()> {
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

pub async fn start_api_server(state: Arc<AppState>) -> Res<()> {
    let listener = bind(&state.settings.server_address).await?;
    serve(listener, state).await
}
