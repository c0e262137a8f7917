//! Request options, bodies and responses for the dispatcher.

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use tracing::warn;

use crate::error::Result;

/// Header carrying the anti-forgery token.
pub const CSRF_HEADER: HeaderName = HeaderName::from_static("x-csrftoken");

/// Everything a caller can say about one request.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method.
    pub method: Method,
    /// Headers that override the defaults.
    pub headers: HeaderMap,
    /// Default headers to drop entirely.
    pub remove_headers: Vec<HeaderName>,
    /// Query string pairs.
    pub query: Vec<(String, String)>,
    /// Request body.
    pub body: RequestBody,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    /// Options for a bodiless request with the given method.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            remove_headers: Vec::new(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    /// A GET request.
    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    /// A POST request with no body yet.
    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    /// Send `value` as a JSON body.
    pub fn json(mut self, value: Value) -> Self {
        self.body = RequestBody::Json(value);
        self
    }

    /// Send a multipart form body.
    ///
    /// The default `Content-Type` is dropped so the multipart encoder can set
    /// its own boundary.
    pub fn form(mut self, form: FormBody) -> Self {
        self.body = RequestBody::Form(form);
        self.without_header(CONTENT_TYPE)
    }

    /// Override (or add) a header.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Drop a default header.
    pub fn without_header(mut self, name: HeaderName) -> Self {
        if !self.remove_headers.contains(&name) {
            self.remove_headers.push(name);
        }
        self
    }

    /// Append a query string pair.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Headers to send: defaults, then caller overrides, then removals.
    pub fn merged_headers(&self, csrf_token: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = csrf_token {
            match HeaderValue::from_str(token) {
                Ok(value) => {
                    headers.insert(CSRF_HEADER, value);
                }
                Err(e) => warn!("Ignoring unusable CSRF token: {}", e),
            }
        }

        headers.extend(self.headers.clone());

        for name in &self.remove_headers {
            headers.remove(name);
        }

        headers
    }
}

/// Body of a request.
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// JSON document.
    Json(Value),
    /// `multipart/form-data` fields.
    Form(FormBody),
}

/// One multipart field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    /// Plain text field.
    Text(String),
    /// Uploaded file.
    File {
        /// File name reported to the backend.
        file_name: String,
        /// File contents.
        data: Bytes,
    },
}

/// Ordered multipart form fields. Repeated names are allowed and are how
/// multi-select inputs (artists, genres, ...) are submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormBody {
    fields: Vec<(String, FormValue)>,
}

impl FormBody {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), FormValue::Text(value.into())));
        self
    }

    /// Add a text field only when a value is present.
    pub fn text_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.text(name, v),
            None => self,
        }
    }

    /// Add one field per value under the same name.
    pub fn texts<I, S>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.fields.push((name.to_string(), FormValue::Text(value.into())));
        }
        self
    }

    /// Add an in-memory file.
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        self.fields.push((
            name.into(),
            FormValue::File {
                file_name: file_name.into(),
                data: data.into(),
            },
        ));
        self
    }

    /// Read a file from disk and add it.
    pub async fn file_from_path(self, name: impl Into<String>, path: &Path) -> Result<Self> {
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(self.file(name, file_name, data))
    }

    /// Fields in submission order.
    pub fn fields(&self) -> &[(String, FormValue)] {
        &self.fields
    }

    /// Text values submitted under `name`.
    pub fn values(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(n, _)| n == name)
            .filter_map(|(_, v)| match v {
                FormValue::Text(t) => Some(t.as_str()),
                FormValue::File { .. } => None,
            })
            .collect()
    }

    /// Convert into a reqwest multipart form.
    pub(crate) fn into_multipart(self) -> Form {
        self.fields
            .into_iter()
            .fold(Form::new(), |form, (name, value)| match value {
                FormValue::Text(text) => form.text(name, text),
                FormValue::File { file_name, data } => {
                    let len = data.len() as u64;
                    form.part(name, Part::stream_with_length(data, len).file_name(file_name))
                }
            })
    }
}

/// A successful response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Response declared a JSON content type.
    Json(Value),
    /// Anything else, unchanged.
    Text(String),
}

impl ApiResponse {
    /// Decode the body into `T`.
    ///
    /// Text bodies are tried as JSON too, since some endpoints forget the
    /// content type.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            ApiResponse::Json(value) => Ok(serde_json::from_value(value)?),
            ApiResponse::Text(text) => Ok(serde_json::from_str(&text)?),
        }
    }

    /// User-facing message carried by the response, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            ApiResponse::Json(value) => value
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string),
            ApiResponse::Text(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
            ApiResponse::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_headers_with_token() {
        let headers = RequestOptions::post().merged_headers(Some("tok123"));
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get("X-CSRFToken").unwrap(), "tok123");
    }

    #[test]
    fn test_no_csrf_header_without_token() {
        let headers = RequestOptions::post().merged_headers(None);
        assert!(headers.get(CSRF_HEADER).is_none());
        assert!(headers.get(CONTENT_TYPE).is_some());
    }

    #[test]
    fn test_caller_headers_override_defaults() {
        let headers = RequestOptions::post()
            .header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
            .header(CSRF_HEADER, HeaderValue::from_static("mine"))
            .merged_headers(Some("fetched"));
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(headers.get(CSRF_HEADER).unwrap(), "mine");
        assert_eq!(headers.get_all(CSRF_HEADER).iter().count(), 1);
    }

    #[test]
    fn test_form_drops_content_type() {
        let form = FormBody::new().text("title", "Blue");
        let headers = RequestOptions::post().form(form).merged_headers(Some("t"));
        assert!(headers.get(CONTENT_TYPE).is_none());
        assert_eq!(headers.get(CSRF_HEADER).unwrap(), "t");
    }

    #[test]
    fn test_form_repeated_fields_keep_order() {
        let form = FormBody::new()
            .text("title", "Blue")
            .texts("genre", ["jazz", "modal"])
            .text_opt("label", None::<String>)
            .file("cover", "cover.jpg", vec![1u8, 2, 3]);

        assert_eq!(form.values("genre"), vec!["jazz", "modal"]);
        assert!(form.values("label").is_empty());
        assert_eq!(form.fields().len(), 4);
        assert_eq!(form.values("cover"), Vec::<&str>::new());
    }

    #[test]
    fn test_response_message() {
        let json = ApiResponse::Json(json!({"message": "Album created"}));
        assert_eq!(json.message().as_deref(), Some("Album created"));
        assert_eq!(ApiResponse::Text("  ok \n".into()).message().as_deref(), Some("ok"));
        assert_eq!(ApiResponse::Text(String::new()).message(), None);
    }

    #[test]
    fn test_text_response_decodes_as_json() {
        let values: Vec<u32> = ApiResponse::Text("[1,2,3]".into()).into_json().unwrap();
        assert_eq!(values, vec![1, 2, 3]);
        assert!(ApiResponse::Text("nope".into()).into_json::<Vec<u32>>().is_err());
    }
}
