//! Topics and topic membership.

use crate::client::Client;
use crate::endpoint::{BodyRule, Endpoint, RequestDescriptor};
use crate::errors::Error;
use crate::query::{Query, TopicQuery};
use crate::transport::HttpMethod;
use crate::types::{
    Acknowledgement, AddSubscribersResponse, Bare, CheckTopicSubscriberResponse,
    CreateTopicRequest, CreateTopicResponse, PaginatedResponse, RenameTopicRequest, Response,
    SubscriberList, Topic,
};

pub const FILTER: Endpoint<(), PaginatedResponse<Topic>> =
    Endpoint::new("filter_topics", HttpMethod::Get, "/topics", BodyRule::None);

pub const CREATE: Endpoint<CreateTopicRequest, Response<CreateTopicResponse>> =
    Endpoint::new("create_topic", HttpMethod::Post, "/topics", BodyRule::Required);

pub const ADD_SUBSCRIBERS: Endpoint<SubscriberList, Response<AddSubscribersResponse>> =
    Endpoint::new(
        "add_subscribers",
        HttpMethod::Post,
        "/topics/{topicKey}/subscribers",
        BodyRule::Required,
    );

pub const REMOVE_SUBSCRIBERS: Endpoint<SubscriberList, Acknowledgement> = Endpoint::new(
    "remove_subscribers",
    HttpMethod::Post,
    "/topics/{topicKey}/subscribers/removal",
    BodyRule::Required,
);

/// Returns the membership record without a `data` wrapper.
pub const CHECK_SUBSCRIBER: Endpoint<(), Bare<CheckTopicSubscriberResponse>> = Endpoint::new(
    "check_topic_subscriber",
    HttpMethod::Get,
    "/topics/{topicKey}/subscribers/{externalSubscriberId}",
    BodyRule::None,
);

pub const GET: Endpoint<(), Response<Topic>> =
    Endpoint::new("topic", HttpMethod::Get, "/topics/{topicKey}", BodyRule::None);

pub const RENAME: Endpoint<RenameTopicRequest, Response<Topic>> = Endpoint::new(
    "rename_topic",
    HttpMethod::Patch,
    "/topics/{topicKey}",
    BodyRule::Required,
);

pub const DELETE: Endpoint<(), Acknowledgement> = Endpoint::new(
    "delete_topic",
    HttpMethod::Delete,
    "/topics/{topicKey}",
    BodyRule::None,
);

impl Client {
    /// Fetches a page of topics, optionally narrowed to one key.
    pub async fn filter_topics(&self, query: &TopicQuery) -> Result<PaginatedResponse<Topic>, Error> {
        self.execute(&FILTER, RequestDescriptor::new().query(query.to_params()))
            .await
    }

    pub async fn create_topic(
        &self,
        request: &CreateTopicRequest,
    ) -> Result<Response<CreateTopicResponse>, Error> {
        self.execute(&CREATE, RequestDescriptor::new().body(request))
            .await
    }

    pub async fn add_subscribers(
        &self,
        topic_key: &str,
        request: &SubscriberList,
    ) -> Result<Response<AddSubscribersResponse>, Error> {
        self.execute(
            &ADD_SUBSCRIBERS,
            RequestDescriptor::new().path("topicKey", topic_key).body(request),
        )
        .await
    }

    pub async fn remove_subscribers(
        &self,
        topic_key: &str,
        request: &SubscriberList,
    ) -> Result<Acknowledgement, Error> {
        self.execute(
            &REMOVE_SUBSCRIBERS,
            RequestDescriptor::new().path("topicKey", topic_key).body(request),
        )
        .await
    }

    /// Fails with a 404 [`Error::Server`] when the subscriber is not in the
    /// topic.
    pub async fn check_topic_subscriber(
        &self,
        topic_key: &str,
        external_subscriber_id: &str,
    ) -> Result<CheckTopicSubscriberResponse, Error> {
        self.execute(
            &CHECK_SUBSCRIBER,
            RequestDescriptor::new()
                .path("topicKey", topic_key)
                .path("externalSubscriberId", external_subscriber_id),
        )
        .await
        .map(Bare::into_inner)
    }

    pub async fn topic(&self, topic_key: &str) -> Result<Response<Topic>, Error> {
        self.execute(&GET, RequestDescriptor::new().path("topicKey", topic_key))
            .await
    }

    pub async fn rename_topic(
        &self,
        topic_key: &str,
        request: &RenameTopicRequest,
    ) -> Result<Response<Topic>, Error> {
        self.execute(
            &RENAME,
            RequestDescriptor::new().path("topicKey", topic_key).body(request),
        )
        .await
    }

    pub async fn delete_topic(&self, topic_key: &str) -> Result<Acknowledgement, Error> {
        self.execute(&DELETE, RequestDescriptor::new().path("topicKey", topic_key))
            .await
    }
}
