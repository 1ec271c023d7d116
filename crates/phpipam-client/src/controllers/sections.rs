//! Section controller

use std::sync::Arc;

use reqwest::Method;
use serde::de::IgnoredAny;

use crate::client::PhpIpamClient;
use crate::error::PhpIpamError;
use crate::models::{Section, Subnet};
use crate::request::Empty;
use crate::session::Session;

/// Client for the `/sections/` controller
#[derive(Debug, Clone)]
pub struct SectionController {
    client: PhpIpamClient,
}

impl SectionController {
    /// Create a controller on a shared session
    #[must_use]
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            client: PhpIpamClient::new(session),
        }
    }

    /// List all sections
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn list_sections(&self) -> Result<Vec<Section>, PhpIpamError> {
        self.client.request(Method::GET, "/sections/", &Empty {}).await
    }

    /// Create a section. Returns the API's status message.
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn create_section(&self, section: &Section) -> Result<String, PhpIpamError> {
        self.client.request(Method::POST, "/sections/", section).await
    }

    /// Get a section by ID
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn get_section_by_id(&self, id: u64) -> Result<Section, PhpIpamError> {
        self.client
            .request(Method::GET, &format!("/sections/{id}/"), &Empty {})
            .await
    }

    /// Get a section by name
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn get_section_by_name(&self, name: &str) -> Result<Section, PhpIpamError> {
        let path = format!("/sections/{}/", urlencoding::encode(name));
        self.client.request(Method::GET, &path, &Empty {}).await
    }

    /// List the subnets in a section
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn get_subnets_in_section(&self, id: u64) -> Result<Vec<Subnet>, PhpIpamError> {
        self.client
            .request(Method::GET, &format!("/sections/{id}/subnets/"), &Empty {})
            .await
    }

    /// Update a section; `section.id` selects the entry
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn update_section(&self, section: &Section) -> Result<(), PhpIpamError> {
        self.client
            .send_request(Method::PATCH, "/sections/", section, &mut IgnoredAny)
            .await
    }

    /// Delete a section by ID
    ///
    /// # Errors
    /// Any [`PhpIpamError`] from the dispatcher.
    pub async fn delete_section(&self, id: u64) -> Result<(), PhpIpamError> {
        let path = format!("/sections/{id}/");
        self.client
            .send_request(Method::DELETE, &path, &Empty {}, &mut IgnoredAny)
            .await
    }
}
