//! # tunewire
//!
//! A typed client for the tunewire music and podcast streaming backend.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tunewire::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = ApiClient::builder().base_url("http://localhost:8000").build()?;
//!
//!     // The session cookie from login is reused by every later call
//!     api.auth().login("ann@example.com", "secret").await?;
//!
//!     for playlist in api.playlists().list().await? {
//!         println!("{} ({} songs)", playlist.title, playlist.song_count);
//!     }
//!
//!     let hits = api.search().search_filtered("blue", "miles").await?;
//!     println!("{} matching results", hits.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Request pipeline
//!
//! Every call goes through [`ApiClient::request`], which:
//!
//! 1. fetches a fresh CSRF token (best-effort; failures only drop the header)
//! 2. sends `Content-Type: application/json` and `X-CSRFToken` by default,
//!    letting the caller override or drop either
//! 3. sends the session cookies
//! 4. fails non-OK responses with the backend's `message`, or
//!    `HTTP error! status: <code>`
//! 5. returns JSON for JSON responses and raw text otherwise
//!
//! ## Resource clients
//!
//! [`ApiClient::auth`], [`ApiClient::albums`], [`ApiClient::songs`],
//! [`ApiClient::playlists`], [`ApiClient::podcasts`], [`ApiClient::charts`],
//! [`ApiClient::royalties`], [`ApiClient::subscriptions`] and
//! [`ApiClient::search`].

pub mod api;
pub mod converters;
pub mod error;
pub mod models;
pub mod resources;

pub use api::{ApiClient, ApiResponse, ClientBuilder, FormBody, RequestOptions};
pub use error::{ApiError, Result};
pub use models::{
    Ack, Album, Chart, Episode, Label, OptionPair, Package, Playlist, Podcast, SearchResult, Song,
    Transaction, User,
};
