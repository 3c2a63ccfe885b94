//! Email layouts.

use crate::client::Client;
use crate::endpoint::{BodyRule, Endpoint, RequestDescriptor};
use crate::errors::Error;
use crate::query::{LayoutQuery, Query};
use crate::transport::HttpMethod;
use crate::types::{
    Acknowledgement, CreateLayoutRequest, CreateLayoutResponse, Layout, PaginatedResponse,
    Response, UpdateLayoutRequest,
};

pub const CREATE: Endpoint<CreateLayoutRequest, Response<CreateLayoutResponse>> = Endpoint::new(
    "create_layout",
    HttpMethod::Post,
    "/layouts",
    BodyRule::Required,
);

pub const FILTER: Endpoint<(), PaginatedResponse<Layout>> =
    Endpoint::new("filter_layouts", HttpMethod::Get, "/layouts", BodyRule::None);

pub const GET: Endpoint<(), Response<Layout>> =
    Endpoint::new("layout", HttpMethod::Get, "/layouts/{layoutId}", BodyRule::None);

pub const DELETE: Endpoint<(), Acknowledgement> = Endpoint::new(
    "delete_layout",
    HttpMethod::Delete,
    "/layouts/{layoutId}",
    BodyRule::None,
);

pub const UPDATE: Endpoint<UpdateLayoutRequest, Response<Layout>> = Endpoint::new(
    "update_layout",
    HttpMethod::Patch,
    "/layouts/{layoutId}",
    BodyRule::Required,
);

pub const SET_DEFAULT: Endpoint<(), Acknowledgement> = Endpoint::new(
    "set_default_layout",
    HttpMethod::Post,
    "/layouts/{layoutId}/default",
    BodyRule::None,
);

impl Client {
    pub async fn create_layout(
        &self,
        request: &CreateLayoutRequest,
    ) -> Result<Response<CreateLayoutResponse>, Error> {
        self.execute(&CREATE, RequestDescriptor::new().body(request))
            .await
    }

    pub async fn filter_layouts(
        &self,
        query: &LayoutQuery,
    ) -> Result<PaginatedResponse<Layout>, Error> {
        self.execute(&FILTER, RequestDescriptor::new().query(query.to_params()))
            .await
    }

    pub async fn layout(&self, layout_id: &str) -> Result<Response<Layout>, Error> {
        self.execute(&GET, RequestDescriptor::new().path("layoutId", layout_id))
            .await
    }

    pub async fn delete_layout(&self, layout_id: &str) -> Result<Acknowledgement, Error> {
        self.execute(&DELETE, RequestDescriptor::new().path("layoutId", layout_id))
            .await
    }

    pub async fn update_layout(
        &self,
        layout_id: &str,
        request: &UpdateLayoutRequest,
    ) -> Result<Response<Layout>, Error> {
        self.execute(
            &UPDATE,
            RequestDescriptor::new().path("layoutId", layout_id).body(request),
        )
        .await
    }

    /// Makes the layout the environment default.
    pub async fn set_default_layout(&self, layout_id: &str) -> Result<Acknowledgement, Error> {
        self.execute(
            &SET_DEFAULT,
            RequestDescriptor::new().path("layoutId", layout_id),
        )
        .await
    }
}
