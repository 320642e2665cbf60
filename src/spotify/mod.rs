//! # Spotify Integration Module
//!
//! Thin client functions for the two Spotify services the relay talks to:
//!
//! ```text
//! Callback handler
//!          ↓
//!     ├── auth    POST {accounts}/api/token   (authorization-code grant)
//!     └── tracks  GET  {api}/me/top/tracks    (bearer auth)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! Both functions take the shared [`reqwest::Client`] from the application
//! state, so the outbound timeout configured there applies to every call.
//! Neither retries; failures are mapped straight to
//! [`crate::error::RelayError`].

pub mod auth;
pub mod tracks;
