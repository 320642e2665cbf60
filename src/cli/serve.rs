use std::sync::Arc;

use crate::{
    config::{self, Settings},
    error, info,
    server::{self, AppState},
    warning,
};

/// Loads configuration, binds the listener and serves until the process ends.
///
/// `address` overrides `SERVER_ADDRESS`. With `open` set, the local login
/// page is opened in the default browser once the listener is bound.
pub async fn serve(address: Option<String>, open: bool) {
    for path in config::load_env() {
        info!("Loaded environment from {}", path.display());
    }

    let mut settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Invalid configuration: {}", e),
    };
    if let Some(address) = address {
        settings.server_address = address;
    }

    let listener = match server::bind(&settings.server_address).await {
        Ok(listener) => listener,
        Err(e) => error!("Cannot bind {}: {}", settings.server_address, e),
    };

    let state = match AppState::new(settings) {
        Ok(state) => Arc::new(state),
        Err(e) => error!("Cannot initialize HTTP client: {}", e),
    };

    if open {
        match listener.local_addr() {
            Ok(addr) => {
                let login_url = format!("http://localhost:{}/login", addr.port());
                if webbrowser::open(&login_url).is_err() {
                    warning!(
                        "Failed to open browser. Please navigate to the following URL manually:\n{}",
                        login_url
                    )
                }
            }
            Err(e) => warning!("Cannot determine local address: {}", e),
        }
    }

    if let Err(e) = server::serve(listener, state).await {
        error!("Server stopped: {}", e);
    }
}
