//! Environments and their API keys.

use crate::client::Client;
use crate::endpoint::{BodyRule, Endpoint, RequestDescriptor};
use crate::errors::Error;
use crate::transport::HttpMethod;
use crate::types::{
    ApiKey, CreateEnvironmentRequest, Environment, Response, UpdateEnvironmentRequest, Widget,
};

pub const CURRENT: Endpoint<(), Response<Environment>> = Endpoint::new(
    "current_environment",
    HttpMethod::Get,
    "/environments/me",
    BodyRule::None,
);

pub const CREATE: Endpoint<CreateEnvironmentRequest, Response<Environment>> = Endpoint::new(
    "create_environment",
    HttpMethod::Post,
    "/environments",
    BodyRule::Required,
);

pub const LIST: Endpoint<(), Response<Vec<Environment>>> =
    Endpoint::new("environments", HttpMethod::Get, "/environments", BodyRule::None);

pub const UPDATE: Endpoint<UpdateEnvironmentRequest, Response<Environment>> = Endpoint::new(
    "update_environment",
    HttpMethod::Put,
    "/environments/{environmentId}",
    BodyRule::Required,
);

pub const API_KEYS: Endpoint<(), Response<Vec<ApiKey>>> = Endpoint::new(
    "api_keys",
    HttpMethod::Get,
    "/environments/api-keys",
    BodyRule::None,
);

pub const REGENERATE_API_KEYS: Endpoint<(), Response<Vec<ApiKey>>> = Endpoint::new(
    "regenerate_api_keys",
    HttpMethod::Post,
    "/environments/api-keys/regenerate",
    BodyRule::None,
);

pub const UPDATE_WIDGET_SETTINGS: Endpoint<Widget, Response<Environment>> = Endpoint::new(
    "update_widget_settings",
    HttpMethod::Put,
    "/environments/api-keys/widget/settings",
    BodyRule::Required,
);

impl Client {
    /// The environment the API key belongs to.
    pub async fn current_environment(&self) -> Result<Response<Environment>, Error> {
        self.execute(&CURRENT, RequestDescriptor::new()).await
    }

    pub async fn create_environment(
        &self,
        request: &CreateEnvironmentRequest,
    ) -> Result<Response<Environment>, Error> {
        self.execute(&CREATE, RequestDescriptor::new().body(request))
            .await
    }

    pub async fn environments(&self) -> Result<Response<Vec<Environment>>, Error> {
        self.execute(&LIST, RequestDescriptor::new()).await
    }

    pub async fn update_environment(
        &self,
        environment_id: &str,
        request: &UpdateEnvironmentRequest,
    ) -> Result<Response<Environment>, Error> {
        self.execute(
            &UPDATE,
            RequestDescriptor::new()
                .path("environmentId", environment_id)
                .body(request),
        )
        .await
    }

    pub async fn api_keys(&self) -> Result<Response<Vec<ApiKey>>, Error> {
        self.execute(&API_KEYS, RequestDescriptor::new()).await
    }

    /// Invalidates the current keys and returns their replacements.
    pub async fn regenerate_api_keys(&self) -> Result<Response<Vec<ApiKey>>, Error> {
        self.execute(&REGENERATE_API_KEYS, RequestDescriptor::new())
            .await
    }

    pub async fn update_widget_settings(
        &self,
        widget: &Widget,
    ) -> Result<Response<Environment>, Error> {
        self.execute(&UPDATE_WIDGET_SETTINGS, RequestDescriptor::new().body(widget))
            .await
    }
}
