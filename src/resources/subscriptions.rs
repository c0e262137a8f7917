//! Premium subscription packages and payment history.

use serde_json::json;
use tracing::info;

use super::fetch_list;
use crate::api::ApiClient;
use crate::error::Result;
use crate::models::common::require;
use crate::models::{Ack, Package, Transaction};

const BASE: &str = "/langganan";

#[derive(Debug, Clone, Copy)]
pub struct Subscriptions<'a> {
    api: &'a ApiClient,
}

impl<'a> Subscriptions<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Packages on offer.
    pub async fn packages(&self) -> Result<Vec<Package>> {
        fetch_list(self.api, &format!("{}/packages/", BASE), "packages").await
    }

    /// Buy a package with the given payment method.
    pub async fn purchase(&self, package_id: &str, payment_method: &str) -> Result<Ack> {
        require("package", package_id)?;
        require("payment method", payment_method)?;

        let path = format!("{}/purchase/", BASE);
        let body = json!({
            "package": package_id,
            "payment_method": payment_method,
        });
        let ack: Ack = self.api.post_json(&path, body).await?.into();

        info!("Purchased package {} via {}", package_id, payment_method);
        Ok(ack)
    }

    /// Past subscription payments.
    pub async fn transactions(&self) -> Result<Vec<Transaction>> {
        fetch_list(self.api, &format!("{}/transactions/", BASE), "transactions").await
    }
}
