//! Persons sub-client — profile CRUD plus employment and family sections.

use crate::client::PeoplecoreClient;
use crate::domain::person::wire::{
    CreatePersonRequest, EmploymentResponse, FamilyMemberResponse, PersonResponse,
    UpdatePersonRequest,
};
use crate::error::SdkError;
use crate::http::{ListPage, ListParams};

/// Sub-client for person operations.
pub struct Persons<'a> {
    pub(crate) client: &'a PeoplecoreClient,
}

impl<'a> Persons<'a> {
    /// List persons with pagination, search, and filters.
    pub async fn list(&self, params: &ListParams) -> Result<ListPage<PersonResponse>, SdkError> {
        let envelope = self
            .client
            .http
            .get_list::<Vec<PersonResponse>>("/persons", params)
            .await?;
        Ok(envelope.into())
    }

    /// Fetch one person by id.
    pub async fn get(&self, id: &str) -> Result<PersonResponse, SdkError> {
        let envelope = self
            .client
            .http
            .get::<PersonResponse>(&format!("/persons/{}", id), &[])
            .await?;
        Ok(envelope.into_data()?)
    }

    /// Create a person profile.
    pub async fn create(&self, request: &CreatePersonRequest) -> Result<PersonResponse, SdkError> {
        let envelope = self
            .client
            .http
            .post::<PersonResponse, _>("/persons/profile", request)
            .await?;
        Ok(envelope.into_data()?)
    }

    /// Partially update a person profile.
    pub async fn update(
        &self,
        id: &str,
        request: &UpdatePersonRequest,
    ) -> Result<PersonResponse, SdkError> {
        let envelope = self
            .client
            .http
            .patch::<PersonResponse, _>(&format!("/persons/{}", id), request)
            .await?;
        Ok(envelope.into_data()?)
    }

    /// Delete a person record.
    pub async fn delete(&self, id: &str) -> Result<(), SdkError> {
        self.client
            .http
            .delete::<serde_json::Value>(&format!("/persons/{}", id))
            .await?;
        Ok(())
    }

    /// Employment history of a person.
    pub async fn employment(&self, id: &str) -> Result<Vec<EmploymentResponse>, SdkError> {
        let envelope = self
            .client
            .http
            .get::<Vec<EmploymentResponse>>(&format!("/persons/{}/employment", id), &[])
            .await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// Family members attached to a person.
    pub async fn family(&self, id: &str) -> Result<Vec<FamilyMemberResponse>, SdkError> {
        let envelope = self
            .client
            .http
            .get::<Vec<FamilyMemberResponse>>(&format!("/persons/{}/family", id), &[])
            .await?;
        Ok(envelope.data.unwrap_or_default())
    }
}
