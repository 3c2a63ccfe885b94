//! Subscriber types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Subscriber payload for creation and for inline recipients of an event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberRequest {
    /// Identifier of the subscriber in the caller's own system.
    pub subscriber_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Free-form custom attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl SubscriberRequest {
    pub fn new(subscriber_id: &str) -> Self {
        Self {
            subscriber_id: subscriber_id.to_string(),
            ..Default::default()
        }
    }
}

/// Body for `PUT /subscribers/{subscriberId}`. Unset fields are left
/// unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriberRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Body for `POST /subscribers/bulk`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkSubscriberRequest {
    pub subscribers: Vec<SubscriberRequest>,
}

/// A stored subscriber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    #[serde(rename = "_id")]
    pub id: Option<String>,

    pub subscriber_id: Option<String>,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    pub email: Option<String>,

    pub phone: Option<String>,

    pub avatar: Option<String>,

    pub locale: Option<String>,

    pub data: Option<Value>,

    #[serde(rename = "_organizationId")]
    pub organization_id: Option<String>,

    #[serde(rename = "_environmentId")]
    pub environment_id: Option<String>,

    pub deleted: Option<bool>,

    pub created_at: Option<DateTime<Utc>>,

    pub updated_at: Option<DateTime<Utc>>,

    pub channels: Option<Vec<Channel>>,

    /// Document revision.
    #[serde(rename = "__v")]
    pub version: Option<u64>,

    pub is_online: Option<bool>,

    pub last_online_at: Option<DateTime<Utc>>,
}

/// Provider-specific delivery settings attached to a subscriber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    #[serde(rename = "_integrationId")]
    pub integration_id: Option<String>,

    pub provider_id: Option<String>,

    pub credentials: Option<ChannelCredentials>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelCredentials {
    /// Chat webhook (Slack, Discord, MS Teams, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Push device tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_tokens: Option<Vec<String>>,
}

/// Body for `PUT /subscribers/{subscriberId}/credentials`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriberCredentialsRequest {
    pub provider_id: String,

    pub credentials: ChannelCredentials,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_identifier: Option<String>,
}

/// Body for `PATCH /subscribers/{subscriberId}/online-status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriberOnlineStatusRequest {
    pub is_online: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriberDeleteResponse {
    pub acknowledged: Option<bool>,

    pub status: Option<String>,
}

/// Outcome of `POST /subscribers/bulk`, split by what happened to each entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkCreateSubscriberResponse {
    #[serde(default)]
    pub created: Vec<SubscriberRef>,

    #[serde(default)]
    pub updated: Vec<SubscriberRef>,

    #[serde(default)]
    pub failed: Vec<FailedSubscriber>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberRef {
    pub subscriber_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedSubscriber {
    pub subscriber_id: Option<String>,

    pub message: Option<String>,
}
