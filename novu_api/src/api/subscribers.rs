//! Subscribers: the recipients of notifications.

use crate::client::Client;
use crate::endpoint::{BodyRule, Endpoint, RequestDescriptor};
use crate::errors::Error;
use crate::query::{Query, SubscriberQuery};
use crate::transport::HttpMethod;
use crate::types::{
    BulkCreateSubscriberResponse, BulkSubscriberRequest, PaginatedResponse, Response, Subscriber,
    SubscriberDeleteResponse, SubscriberRequest, UpdateSubscriberCredentialsRequest,
    UpdateSubscriberOnlineStatusRequest, UpdateSubscriberRequest,
};

pub const LIST: Endpoint<(), PaginatedResponse<Subscriber>> =
    Endpoint::new("subscribers", HttpMethod::Get, "/subscribers", BodyRule::None);

pub const CREATE: Endpoint<SubscriberRequest, Response<Subscriber>> = Endpoint::new(
    "create_subscriber",
    HttpMethod::Post,
    "/subscribers",
    BodyRule::Required,
);

pub const BULK_CREATE: Endpoint<BulkSubscriberRequest, Response<BulkCreateSubscriberResponse>> =
    Endpoint::new(
        "bulk_create_subscribers",
        HttpMethod::Post,
        "/subscribers/bulk",
        BodyRule::Required,
    );

pub const GET: Endpoint<(), Response<Subscriber>> = Endpoint::new(
    "subscriber",
    HttpMethod::Get,
    "/subscribers/{subscriberId}",
    BodyRule::None,
);

pub const UPDATE: Endpoint<UpdateSubscriberRequest, Response<Subscriber>> = Endpoint::new(
    "update_subscriber",
    HttpMethod::Put,
    "/subscribers/{subscriberId}",
    BodyRule::Required,
);

pub const DELETE: Endpoint<(), Response<SubscriberDeleteResponse>> = Endpoint::new(
    "delete_subscriber",
    HttpMethod::Delete,
    "/subscribers/{subscriberId}",
    BodyRule::None,
);

pub const UPDATE_CREDENTIALS: Endpoint<UpdateSubscriberCredentialsRequest, Response<Subscriber>> =
    Endpoint::new(
        "update_subscriber_credentials",
        HttpMethod::Put,
        "/subscribers/{subscriberId}/credentials",
        BodyRule::Required,
    );

pub const UPDATE_ONLINE_STATUS: Endpoint<UpdateSubscriberOnlineStatusRequest, Response<Subscriber>> =
    Endpoint::new(
        "update_subscriber_online_status",
        HttpMethod::Patch,
        "/subscribers/{subscriberId}/online-status",
        BodyRule::Required,
    );

impl Client {
    pub async fn subscribers(
        &self,
        query: &SubscriberQuery,
    ) -> Result<PaginatedResponse<Subscriber>, Error> {
        self.execute(&LIST, RequestDescriptor::new().query(query.to_params()))
            .await
    }

    pub async fn create_subscriber(
        &self,
        request: &SubscriberRequest,
    ) -> Result<Response<Subscriber>, Error> {
        self.execute(&CREATE, RequestDescriptor::new().body(request))
            .await
    }

    /// Creates or updates many subscribers in one call.
    pub async fn bulk_create_subscribers(
        &self,
        request: &BulkSubscriberRequest,
    ) -> Result<Response<BulkCreateSubscriberResponse>, Error> {
        self.execute(&BULK_CREATE, RequestDescriptor::new().body(request))
            .await
    }

    pub async fn subscriber(&self, subscriber_id: &str) -> Result<Response<Subscriber>, Error> {
        self.execute(&GET, RequestDescriptor::new().path("subscriberId", subscriber_id))
            .await
    }

    pub async fn update_subscriber(
        &self,
        subscriber_id: &str,
        request: &UpdateSubscriberRequest,
    ) -> Result<Response<Subscriber>, Error> {
        self.execute(
            &UPDATE,
            RequestDescriptor::new()
                .path("subscriberId", subscriber_id)
                .body(request),
        )
        .await
    }

    pub async fn delete_subscriber(
        &self,
        subscriber_id: &str,
    ) -> Result<Response<SubscriberDeleteResponse>, Error> {
        self.execute(
            &DELETE,
            RequestDescriptor::new().path("subscriberId", subscriber_id),
        )
        .await
    }

    pub async fn update_subscriber_credentials(
        &self,
        subscriber_id: &str,
        request: &UpdateSubscriberCredentialsRequest,
    ) -> Result<Response<Subscriber>, Error> {
        self.execute(
            &UPDATE_CREDENTIALS,
            RequestDescriptor::new()
                .path("subscriberId", subscriber_id)
                .body(request),
        )
        .await
    }

    pub async fn update_subscriber_online_status(
        &self,
        subscriber_id: &str,
        request: &UpdateSubscriberOnlineStatusRequest,
    ) -> Result<Response<Subscriber>, Error> {
        self.execute(
            &UPDATE_ONLINE_STATUS,
            RequestDescriptor::new()
                .path("subscriberId", subscriber_id)
                .body(request),
        )
        .await
    }
}
