use std::{fmt, str::FromStr};

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

/// Seconds before the reported expiry at which a token is already treated
/// as expired, so it does not lapse while a request is in flight.
pub const TOKEN_EXPIRY_DELTA_SECS: u64 = 10;

/// A track as returned by the relay: a flattened projection of Spotify's
/// track object that keeps only the first artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artist: String,
}

impl Track {
    pub fn new(id: impl Into<String>, name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            artist: artist.into(),
        }
    }
}

impl From<TrackItem> for Track {
    fn from(item: TrackItem) -> Self {
        let artist = item
            .artists
            .into_iter()
            .next()
            .map(|artist| artist.name)
            .unwrap_or_default();

        Track {
            id: item.id,
            name: item.name,
            artist,
        }
    }
}

/// Page returned by `GET /me/top/tracks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

// Local files and unavailable tracks come back with null ids and names
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Raw body of the accounts service token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
    pub expires_in: Option<u64>,
}

/// An access token obtained through the authorization-code grant.
///
/// `expires_in == 0` means the provider did not report a lifetime, in which
/// case the token never counts as expired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub refresh_token: Option<String>,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    pub fn from_response(access_token: String, response: TokenResponse) -> Self {
        Token {
            access_token,
            token_type: response.token_type.unwrap_or_else(|| "Bearer".to_string()),
            refresh_token: response.refresh_token,
            scope: response.scope.unwrap_or_default(),
            expires_in: response.expires_in.unwrap_or_default(),
            obtained_at: Utc::now().timestamp() as u64,
        }
    }

    pub fn is_expired_at(&self, now: u64) -> bool {
        if self.expires_in == 0 {
            return false;
        }
        now.saturating_add(TOKEN_EXPIRY_DELTA_SECS) >= self.obtained_at.saturating_add(self.expires_in)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp() as u64)
    }

    /// A token is usable when it carries an access value and has not expired.
    pub fn is_valid(&self) -> bool {
        !self.access_token.is_empty() && !self.is_expired()
    }
}

/// Period over which Spotify computes a user's top items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    #[default]
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short_term" => Ok(TimeRange::ShortTerm),
            "medium_term" => Ok(TimeRange::MediumTerm),
            "long_term" => Ok(TimeRange::LongTerm),
            other => Err(format!(
                "unknown time range '{other}', expected short_term, medium_term or long_term"
            )),
        }
    }
}

/// Optional query parameters of the top tracks request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopTracksQuery {
    pub time_range: Option<TimeRange>,
    pub limit: Option<u8>,
}

/// Query string Spotify appends to the redirect URI.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}
