//! # API Module
//!
//! HTTP endpoints of the relay, built on [Axum](https://docs.rs/axum).
//!
//! ## Endpoints
//!
//! - [`login`] - `GET /login`. Issues a state token and answers `302 Found`
//!   with the Spotify authorization URL.
//! - [`callback`] - `GET /callback?code=&state=`. Redeems the state token,
//!   exchanges the code for an access token and returns the user's top
//!   tracks as a JSON array. Failures are answered with a JSON string and
//!   `400` (bad state, denied authorization, missing code) or `500`
//!   (token exchange or fetch failure).
//! - [`health`] - `GET /health`. Status and crate version.
//!
//! All handlers read the shared [`crate::server::AppState`] through an
//! `Extension` layer installed by [`crate::server::router`].

mod callback;
mod health;
mod login;

pub use callback::callback;
pub use health::health;
pub use login::login;
