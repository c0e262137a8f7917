//! Request pipeline for the streaming backend.
//!
//! - [`ApiClient`]: dispatcher holding the cookie session
//! - [`RequestOptions`] / [`FormBody`]: what a single call sends
//! - [`ApiResponse`]: JSON or raw text from a successful call

pub mod client;
mod csrf;
pub mod request;

pub use client::{ApiClient, ClientBuilder};
pub use request::{ApiResponse, FormBody, FormValue, RequestBody, RequestOptions, CSRF_HEADER};
