//! Login, logout and registration.

use serde_json::{json, Value};
use tracing::info;

use crate::api::{ApiClient, ApiResponse};
use crate::converters::unwrap_key;
use crate::error::Result;
use crate::models::common::require;
use crate::models::{Ack, Label, RegisterLabel, RegisterUser, User};

/// Authentication calls. The session cookie set by a successful login is
/// kept in the client's cookie jar and sent with every later request.
#[derive(Debug, Clone, Copy)]
pub struct Auth<'a> {
    api: &'a ApiClient,
}

impl<'a> Auth<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Log in with email and password.
    ///
    /// Returns the user embedded in the login response, or asks the backend
    /// for it when the response carries none.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        require("email", email)?;
        require("password", password)?;

        let response = self
            .api
            .post_json("/login/", json!({ "email": email.trim(), "password": password }))
            .await?;

        let user = match user_from(&response) {
            Some(user) => user,
            None => self.current_user().await?,
        };

        info!("Logged in as {} ({})", user.email, user.account_kind());
        Ok(user)
    }

    /// End the session.
    pub async fn logout(&self) -> Result<Ack> {
        Ok(self.api.post_empty("/logout/").await?.into())
    }

    /// Register a person account.
    pub async fn register_user(&self, form: &RegisterUser) -> Result<Ack> {
        form.validate()?;
        let body = serde_json::to_value(form)?;
        Ok(self.api.post_json("/register/user/", body).await?.into())
    }

    /// Register a record label account.
    pub async fn register_label(&self, form: &RegisterLabel) -> Result<Ack> {
        form.validate()?;
        let body = serde_json::to_value(form)?;
        Ok(self.api.post_json("/register/label/", body).await?.into())
    }

    /// The user owning the current session.
    pub async fn current_user(&self) -> Result<User> {
        let body: Value = self.api.get_json("/user/").await?;
        Ok(serde_json::from_value(unwrap_key(body, "user"))?)
    }

    /// Profile of the label owning the current session.
    pub async fn current_label(&self) -> Result<Label> {
        let body: Value = self.api.get_json("/label/").await?;
        Ok(serde_json::from_value(unwrap_key(body, "label"))?)
    }
}

fn user_from(response: &ApiResponse) -> Option<User> {
    let ApiResponse::Json(body) = response else {
        return None;
    };
    let user: User = serde_json::from_value(unwrap_key(body.clone(), "user")).ok()?;
    (!user.email.is_empty()).then_some(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_wrapped_login_response() {
        let response = ApiResponse::Json(json!({
            "message": "Login successful",
            "user": {"email": "ann@example.com", "nama": "Ann"}
        }));
        assert_eq!(user_from(&response).unwrap().name, "Ann");
    }

    #[test]
    fn test_user_from_without_user() {
        assert!(user_from(&ApiResponse::Json(json!({"message": "ok"}))).is_none());
        assert!(user_from(&ApiResponse::Text("ok".into())).is_none());
    }
}
