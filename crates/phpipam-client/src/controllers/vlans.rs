//! VLAN controller

use std::sync::Arc;

use reqwest::Method;

use crate::client::PhpIpamClient;
use crate::error::PhpIpamError;
use crate::models::Vlan;
use crate::request::Empty;
use crate::session::Session;

/// Client for the `/vlans/` controller
#[derive(Debug, Clone)]
pub struct VlanController {
    client: PhpIpamClient,
}

impl VlanController {
    /// Create a controller on a shared session
    #[must_use]
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            client: PhpIpamClient::new(session),
        }
    }

    /// Create a VLAN. Returns the API's status message.
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn create_vlan(&self, vlan: &Vlan) -> Result<String, PhpIpamError> {
        self.client.request(Method::POST, "/vlans/", vlan).await
    }

    /// Get a VLAN by its database ID (not its VLAN number)
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn get_vlan_by_id(&self, id: u64) -> Result<Vlan, PhpIpamError> {
        self.client
            .request(Method::GET, &format!("/vlans/{id}/"), &Empty {})
            .await
    }

    /// Get all VLANs carrying the given VLAN number
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn get_vlans_by_number(&self, number: u16) -> Result<Vec<Vlan>, PhpIpamError> {
        self.client
            .request(Method::GET, &format!("/vlans/search/{number}/"), &Empty {})
            .await
    }

    /// Update a VLAN; `vlan.id` selects the entry
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn update_vlan(&self, vlan: &Vlan) -> Result<String, PhpIpamError> {
        self.client.request(Method::PATCH, "/vlans/", vlan).await
    }

    /// Delete a VLAN by database ID
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn delete_vlan(&self, id: u64) -> Result<String, PhpIpamError> {
        self.client
            .request(Method::DELETE, &format!("/vlans/{id}/"), &Empty {})
            .await
    }
}
