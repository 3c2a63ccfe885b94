//! Topic types: named groups of subscribers that can be notified together.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[serde(rename = "_id")]
    pub id: Option<String>,

    #[serde(rename = "_organizationId")]
    pub organization_id: Option<String>,

    #[serde(rename = "_environmentId")]
    pub environment_id: Option<String>,

    pub key: Option<String>,

    pub name: Option<String>,

    /// External subscriber IDs in the topic.
    pub subscribers: Option<Vec<String>>,
}

/// Body for `POST /topics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTopicRequest {
    pub key: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTopicResponse {
    #[serde(rename = "_id")]
    pub id: Option<String>,

    pub key: Option<String>,
}

/// Body for `PATCH /topics/{topicKey}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenameTopicRequest {
    pub name: String,
}

/// Body for adding subscribers to, or removing them from, a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriberList {
    pub subscribers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddSubscribersResponse {
    pub succeeded: Option<Vec<String>>,

    pub failed: Option<FailedSubscribers>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedSubscribers {
    pub not_found: Option<Vec<String>>,
}

/// Membership record returned by
/// `GET /topics/{topicKey}/subscribers/{externalSubscriberId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckTopicSubscriberResponse {
    #[serde(rename = "_organizationId")]
    pub organization_id: Option<String>,

    #[serde(rename = "_environmentId")]
    pub environment_id: Option<String>,

    #[serde(rename = "_subscriberId")]
    pub subscriber_id: Option<String>,

    #[serde(rename = "_topicId")]
    pub topic_id: Option<String>,

    pub topic_key: Option<String>,

    pub external_subscriber_id: Option<String>,
}
