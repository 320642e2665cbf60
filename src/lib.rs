//! Spotify Top Tracks Relay Library
//!
//! This library implements a small OAuth 2.0 authorization-code relay for the
//! Spotify Web API. A user is redirected to Spotify's authorization page, the
//! callback is verified against a pending-state registry, the authorization
//! code is exchanged for an access token and the user's top tracks are
//! returned as JSON.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints (`/login`, `/callback`, `/health`)
//! - `cli` - Command-line entry points
//! - `config` - Configuration loading from environment variables and `.env` files
//! - `error` - Error taxonomy of the relay and its HTTP mapping
//! - `management` - Pending OAuth state registry
//! - `server` - Shared application state and the HTTP server
//! - `spotify` - Spotify accounts and Web API client functions
//! - `types` - Data structures and type definitions
//! - `utils` - Random state, PKCE helpers and URL building
//!
//! # Example
//!
//! ```
//! use toptracks::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> toptracks::Res<()> {
//!     config::load_env();
//!     let settings = config::Settings::from_env()?;
//!     let state = server::AppState::new(settings)?;
//!     server::start_api_server(std::sync::Arc::new(state)).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used for application plumbing (startup, binding, serving) where the
/// concrete error type does not matter to the caller. Request handling uses
/// [`error::RelayError`] instead so every failure maps to an HTTP status.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Fetched {} top tracks", tracks.len());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for unrecoverable startup failures. Errors that happen while
/// serving a request are logged with [`warning!`] and turned into a response.
///
/// # Example
///
/// ```
/// error!("Invalid configuration: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Token exchange failed: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
