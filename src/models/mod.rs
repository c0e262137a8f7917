//! Data models for backend responses and form submissions.
//!
//! Every model decodes leniently: missing fields default, ids and counters
//! may arrive as numbers or strings.

pub mod album;
pub mod chart;
pub mod common;
pub mod playlist;
pub mod podcast;
pub mod search;
pub mod song;
pub mod subscription;
pub mod user;

// Re-exports for convenience
pub use album::{Album, AlbumFormOptions, NewAlbum, NewSong};
pub use chart::{Chart, ChartDetail, ChartEntry};
pub use common::{format_duration, Ack, CalendarDate, OptionPair};
pub use playlist::{Playlist, PlaylistDetail, PlaylistForm};
pub use podcast::{Episode, NewEpisode, NewPodcast, Podcast, PodcastDetail};
pub use search::SearchResult;
pub use song::{Song, SongDetail};
pub use subscription::{Package, Royalty, Transaction};
pub use user::{Label, RegisterLabel, RegisterUser, User};
