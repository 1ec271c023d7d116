//! IP address controller

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;

use crate::client::PhpIpamClient;
use crate::codec::BoolIntString;
use crate::error::PhpIpamError;
use crate::models::Address;
use crate::request::Empty;
use crate::session::Session;

#[derive(Debug, Serialize)]
struct DeleteParams {
    remove_dns: BoolIntString,
}

/// Client for the `/addresses/` controller
#[derive(Debug, Clone)]
pub struct AddressController {
    client: PhpIpamClient,
}

impl AddressController {
    /// Create a controller on a shared session
    #[must_use]
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            client: PhpIpamClient::new(session),
        }
    }

    /// Create an address. Returns the API's status message.
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn create_address(&self, address: &Address) -> Result<String, PhpIpamError> {
        self.client.request(Method::POST, "/addresses/", address).await
    }

    /// Get an address by ID
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn get_address_by_id(&self, id: u64) -> Result<Address, PhpIpamError> {
        self.client
            .request(Method::GET, &format!("/addresses/{id}/"), &Empty {})
            .await
    }

    /// Search addresses by IP (bare or with mask, e.g. "10.10.1.10/24")
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn get_addresses_by_ip(&self, ip: &str) -> Result<Vec<Address>, PhpIpamError> {
        self.client
            .request(Method::GET, &format!("/addresses/search/{ip}/"), &Empty {})
            .await
    }

    /// Update an address; `address.id` selects the entry
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn update_address(&self, address: &Address) -> Result<String, PhpIpamError> {
        self.client.request(Method::PATCH, "/addresses/", address).await
    }

    /// Delete an address, optionally removing its DNS records too
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn delete_address(&self, id: u64, remove_dns: bool) -> Result<String, PhpIpamError> {
        let params = DeleteParams {
            remove_dns: remove_dns.into(),
        };
        self.client
            .request(Method::DELETE, &format!("/addresses/{id}/"), &params)
            .await
    }
}
