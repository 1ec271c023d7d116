//! Subnet controller

use std::sync::Arc;

use reqwest::Method;

use crate::client::PhpIpamClient;
use crate::error::PhpIpamError;
use crate::models::{Address, Subnet};
use crate::request::Empty;
use crate::session::Session;

/// Client for the `/subnets/` controller
#[derive(Debug, Clone)]
pub struct SubnetController {
    client: PhpIpamClient,
}

impl SubnetController {
    /// Create a controller on a shared session
    #[must_use]
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            client: PhpIpamClient::new(session),
        }
    }

    /// Create a subnet. Returns the API's status message.
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn create_subnet(&self, subnet: &Subnet) -> Result<String, PhpIpamError> {
        self.client.request(Method::POST, "/subnets/", subnet).await
    }

    /// Get a subnet by ID
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn get_subnet_by_id(&self, id: u64) -> Result<Subnet, PhpIpamError> {
        self.client
            .request(Method::GET, &format!("/subnets/{id}/"), &Empty {})
            .await
    }

    /// Search subnets by CIDR (e.g., "10.10.3.0/24")
    ///
    /// The slash is part of the path; phpIPAM reads address and mask as two
    /// segments.
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn get_subnets_by_cidr(&self, cidr: &str) -> Result<Vec<Subnet>, PhpIpamError> {
        self.client
            .request(Method::GET, &format!("/subnets/cidr/{cidr}/"), &Empty {})
            .await
    }

    /// List the addresses allocated in a subnet
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn get_addresses_in_subnet(&self, id: u64) -> Result<Vec<Address>, PhpIpamError> {
        self.client
            .request(Method::GET, &format!("/subnets/{id}/addresses/"), &Empty {})
            .await
    }

    /// First unallocated address in a subnet
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn get_first_free_address(&self, id: u64) -> Result<String, PhpIpamError> {
        self.client
            .request(Method::GET, &format!("/subnets/{id}/first_free/"), &Empty {})
            .await
    }

    /// Update a subnet; `subnet.id` selects the entry
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn update_subnet(&self, subnet: &Subnet) -> Result<String, PhpIpamError> {
        self.client.request(Method::PATCH, "/subnets/", subnet).await
    }

    /// Delete a subnet by ID
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn delete_subnet(&self, id: u64) -> Result<String, PhpIpamError> {
        self.client
            .request(Method::DELETE, &format!("/subnets/{id}/"), &Empty {})
            .await
    }
}
