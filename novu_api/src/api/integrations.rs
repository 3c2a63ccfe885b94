//! Provider integrations (email, SMS, chat, push).

use crate::client::Client;
use crate::endpoint::{BodyRule, Endpoint, RequestDescriptor};
use crate::errors::Error;
use crate::transport::HttpMethod;
use crate::types::{Integration, IntegrationRequest, Response};

pub const LIST: Endpoint<(), Response<Vec<Integration>>> =
    Endpoint::new("integrations", HttpMethod::Get, "/integrations", BodyRule::None);

pub const CREATE: Endpoint<IntegrationRequest, Response<Integration>> = Endpoint::new(
    "create_integration",
    HttpMethod::Post,
    "/integrations",
    BodyRule::Required,
);

pub const ACTIVE: Endpoint<(), Response<Vec<Integration>>> = Endpoint::new(
    "active_integrations",
    HttpMethod::Get,
    "/integrations/active",
    BodyRule::None,
);

pub const WEBHOOK_STATUS: Endpoint<(), Response<bool>> = Endpoint::new(
    "provider_webhook_status",
    HttpMethod::Get,
    "/integrations/webhook/provider/{providerId}/status",
    BodyRule::None,
);

pub const UPDATE: Endpoint<IntegrationRequest, Response<Integration>> = Endpoint::new(
    "update_integration",
    HttpMethod::Put,
    "/integrations/{integrationId}",
    BodyRule::Required,
);

pub const DELETE: Endpoint<(), Response<Vec<Integration>>> = Endpoint::new(
    "delete_integration",
    HttpMethod::Delete,
    "/integrations/{integrationId}",
    BodyRule::None,
);

pub const SET_PRIMARY: Endpoint<(), Response<Integration>> = Endpoint::new(
    "set_integration_as_primary",
    HttpMethod::Post,
    "/integrations/{integrationId}/set-primary",
    BodyRule::None,
);

impl Client {
    pub async fn integrations(&self) -> Result<Response<Vec<Integration>>, Error> {
        self.execute(&LIST, RequestDescriptor::new()).await
    }

    pub async fn create_integration(
        &self,
        request: &IntegrationRequest,
    ) -> Result<Response<Integration>, Error> {
        self.execute(&CREATE, RequestDescriptor::new().body(request))
            .await
    }

    pub async fn active_integrations(&self) -> Result<Response<Vec<Integration>>, Error> {
        self.execute(&ACTIVE, RequestDescriptor::new()).await
    }

    /// Whether the provider's delivery webhook is configured.
    pub async fn provider_webhook_status(&self, provider_id: &str) -> Result<Response<bool>, Error> {
        self.execute(
            &WEBHOOK_STATUS,
            RequestDescriptor::new().path("providerId", provider_id),
        )
        .await
    }

    pub async fn update_integration(
        &self,
        integration_id: &str,
        request: &IntegrationRequest,
    ) -> Result<Response<Integration>, Error> {
        self.execute(
            &UPDATE,
            RequestDescriptor::new()
                .path("integrationId", integration_id)
                .body(request),
        )
        .await
    }

    /// Deletes an integration and returns the ones that remain.
    pub async fn delete_integration(
        &self,
        integration_id: &str,
    ) -> Result<Response<Vec<Integration>>, Error> {
        self.execute(
            &DELETE,
            RequestDescriptor::new().path("integrationId", integration_id),
        )
        .await
    }

    pub async fn set_integration_as_primary(
        &self,
        integration_id: &str,
    ) -> Result<Response<Integration>, Error> {
        self.execute(
            &SET_PRIMARY,
            RequestDescriptor::new().path("integrationId", integration_id),
        )
        .await
    }
}
