//! The request dispatcher.
//!
//! [`ApiClient`] owns the HTTP client and its cookie jar, fetches a CSRF
//! token before each request, merges headers and turns responses into
//! [`ApiResponse`] values or [`ApiError`]s.

use reqwest::header::CONTENT_TYPE;
use reqwest::{cookie::Jar, Client, Url};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

use super::csrf;
use super::request::{ApiResponse, FormBody, RequestBody, RequestOptions};
use crate::error::{ApiError, Result};
use crate::resources::{Albums, Auth, Charts, Podcasts, Playlists, Royalties, Search, Songs, Subscriptions};

/// Backend used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path of the CSRF token endpoint.
pub const DEFAULT_CSRF_PATH: &str = "/csrf-token/";

/// Environment variable naming the backend base URL.
pub const ENV_API_URL: &str = "TUNEWIRE_API_URL";

/// Environment variable overriding the CSRF token path.
pub const ENV_CSRF_PATH: &str = "TUNEWIRE_CSRF_PATH";

const DEFAULT_USER_AGENT: &str = concat!("tunewire/", env!("CARGO_PKG_VERSION"));

/// Authenticated client for the streaming backend.
///
/// Cheap to clone; clones share the connection pool and session cookies.
///
/// # Example
///
/// ```rust,no_run
/// use tunewire::ApiClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = ApiClient::builder().base_url("http://localhost:8000").build()?;
///     api.auth().login("me@example.com", "secret").await?;
///     for album in api.albums().list_albums().await? {
///         println!("{} ({} songs)", album.title, album.song_count);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    csrf_path: String,
    jar: Option<Arc<Jar>>,
}

impl ApiClient {
    /// Client for `base_url` with default settings.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Backend base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Seed the session cookie jar, e.g. with a saved `sessionid=...`.
    ///
    /// Has no effect when the client was built around a caller-supplied
    /// reqwest client.
    pub fn add_cookie(&self, cookie: &str) -> Result<()> {
        if let Some(jar) = &self.jar {
            let url = self
                .base_url
                .parse::<Url>()
                .map_err(|e| ApiError::Config(format!("Invalid base URL: {}", e)))?;
            jar.add_cookie_str(cookie, &url);
        }
        Ok(())
    }

    /// Fetch a fresh CSRF token; `None` if the backend would not give one.
    pub async fn csrf_token(&self) -> Option<String> {
        csrf::fetch_csrf_token(&self.client, &self.url(&self.csrf_path)).await
    }

    /// Send one request through the pipeline.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<ApiResponse> {
        let token = self.csrf_token().await;
        let headers = options.merged_headers(token.as_deref());
        let url = self.url(path);

        debug!("{} {} (csrf: {})", options.method, url, token.is_some());

        let mut builder = self
            .client
            .request(options.method.clone(), &url)
            .headers(headers);

        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }

        builder = match options.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.body(serde_json::to_vec(&value)?),
            RequestBody::Form(form) => builder.multipart(form.into_multipart()),
        };

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body: Value = serde_json::from_str(&text).unwrap_or_else(|_| json!({}));
            let err = ApiError::from_response(status.as_u16(), &body);
            error!("{} {} failed: {}", options.method, url, err);
            return Err(err);
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false);

        let text = response.text().await?;

        if is_json {
            Ok(ApiResponse::Json(serde_json::from_str(&text)?))
        } else {
            Ok(ApiResponse::Text(text))
        }
    }

    /// GET `path` and decode the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(path, RequestOptions::get()).await?.into_json()
    }

    /// POST a JSON body.
    pub(crate) async fn post_json(&self, path: &str, body: Value) -> Result<ApiResponse> {
        self.request(path, RequestOptions::post().json(body)).await
    }

    /// POST a multipart form.
    pub(crate) async fn post_form(&self, path: &str, form: FormBody) -> Result<ApiResponse> {
        self.request(path, RequestOptions::post().form(form)).await
    }

    /// POST with no body.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<ApiResponse> {
        self.request(path, RequestOptions::post()).await
    }

    /// Login, logout, registration and the current user.
    pub fn auth(&self) -> Auth<'_> {
        Auth::new(self)
    }

    /// Albums and the songs inside them.
    pub fn albums(&self) -> Albums<'_> {
        Albums::new(self)
    }

    /// Song playback, downloads and playlist shortcuts.
    pub fn songs(&self) -> Songs<'_> {
        Songs::new(self)
    }

    /// The user's playlists.
    pub fn playlists(&self) -> Playlists<'_> {
        Playlists::new(self)
    }

    /// Podcasts and episodes.
    pub fn podcasts(&self) -> Podcasts<'_> {
        Podcasts::new(self)
    }

    /// Top charts.
    pub fn charts(&self) -> Charts<'_> {
        Charts::new(self)
    }

    /// Royalty statements.
    pub fn royalties(&self) -> Royalties<'_> {
        Royalties::new(self)
    }

    /// Premium packages and payment history.
    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions::new(self)
    }

    /// Catalogue search.
    pub fn search(&self) -> Search<'_> {
        Search::new(self)
    }
}

/// Builder for configuring an [`ApiClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    base_url: String,
    csrf_path: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            csrf_path: DEFAULT_CSRF_PATH.to_string(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded from `TUNEWIRE_API_URL` / `TUNEWIRE_CSRF_PATH`.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Ok(url) = std::env::var(ENV_API_URL) {
            builder = builder.base_url(url);
        }
        if let Ok(path) = std::env::var(ENV_CSRF_PATH) {
            builder = builder.csrf_path(path);
        }
        builder
    }

    /// Use a custom HTTP client. It must carry its own cookie store for
    /// sessions to work.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the backend base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the CSRF token endpoint path.
    pub fn csrf_path(mut self, path: impl Into<String>) -> Self {
        self.csrf_path = path.into();
        self
    }

    /// Set a request timeout. No timeout is applied by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ApiClient> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        base_url
            .parse::<Url>()
            .map_err(|e| ApiError::Config(format!("Invalid base URL {:?}: {}", base_url, e)))?;

        let (client, jar) = match self.client {
            Some(client) => (client, None),
            None => {
                let jar = Arc::new(Jar::default());
                let mut builder = Client::builder()
                    .user_agent(&self.user_agent)
                    .cookie_provider(jar.clone());
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                (builder.build()?, Some(jar))
            }
        };

        Ok(ApiClient {
            client,
            base_url,
            csrf_path: self.csrf_path,
            jar,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = ClientBuilder::default();
        assert_eq!(builder.base_url, DEFAULT_BASE_URL);
        assert_eq!(builder.csrf_path, DEFAULT_CSRF_PATH);
        assert!(builder.timeout.is_none());
    }

    #[test]
    fn test_url_joining() {
        let api = ApiClient::new("http://backend.test/api/").unwrap();
        assert_eq!(api.base_url(), "http://backend.test/api");
        assert_eq!(api.url("/user-playlist/"), "http://backend.test/api/user-playlist/");
        assert_eq!(api.url("chart/"), "http://backend.test/api/chart/");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiClient::new("not a url").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_add_cookie() {
        let api = ApiClient::new("http://backend.test").unwrap();
        assert!(api.add_cookie("sessionid=abc").is_ok());
    }
}
