//! Event trigger types.
//!
//! A trigger names a workflow and a set of recipients. Recipients come in
//! several shapes on the wire, all carried in the single `to` field; see
//! [`Recipients`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::Error;
use crate::types::SubscriberRequest;

/// Who an event is delivered to. Each variant has exactly one encoding.
///
/// The list variants must not be empty: `[]` would decode as
/// [`Recipients::SubscriberIds`] whatever variant produced it.
/// [`TriggerEventRequest::new`] and the trigger operations reject empty
/// lists with [`Error::Configuration`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipients {
    /// `"subscriber-id"`
    SubscriberId(String),
    /// `["id-1", "id-2"]`
    SubscriberIds(Vec<String>),
    /// `{"subscriberId": ..., "email": ...}`
    Subscriber(SubscriberRequest),
    /// `[{"subscriberId": ...}, ...]`
    Subscribers(Vec<SubscriberRequest>),
    /// `[{"type": "Topic", "topicKey": ...}, ...]`
    Topics(Vec<TopicRecipient>),
}

impl Recipients {
    /// `true` for a list variant with no entries.
    pub fn is_empty(&self) -> bool {
        match self {
            Recipients::SubscriberId(_) | Recipients::Subscriber(_) => false,
            Recipients::SubscriberIds(ids) => ids.is_empty(),
            Recipients::Subscribers(subscribers) => subscribers.is_empty(),
            Recipients::Topics(topics) => topics.is_empty(),
        }
    }
}

impl From<&str> for Recipients {
    fn from(subscriber_id: &str) -> Self {
        Recipients::SubscriberId(subscriber_id.to_string())
    }
}

impl From<String> for Recipients {
    fn from(subscriber_id: String) -> Self {
        Recipients::SubscriberId(subscriber_id)
    }
}

impl From<Vec<String>> for Recipients {
    fn from(subscriber_ids: Vec<String>) -> Self {
        Recipients::SubscriberIds(subscriber_ids)
    }
}

impl From<SubscriberRequest> for Recipients {
    fn from(subscriber: SubscriberRequest) -> Self {
        Recipients::Subscriber(subscriber)
    }
}

impl From<Vec<SubscriberRequest>> for Recipients {
    fn from(subscribers: Vec<SubscriberRequest>) -> Self {
        Recipients::Subscribers(subscribers)
    }
}

impl From<Vec<TopicRecipient>> for Recipients {
    fn from(topics: Vec<TopicRecipient>) -> Self {
        Recipients::Topics(topics)
    }
}

/// Kind tag written as `"type"` on topic recipients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecipientKind {
    #[default]
    Topic,
}

/// Every subscriber of a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicRecipient {
    #[serde(rename = "type")]
    pub kind: RecipientKind,

    pub topic_key: String,
}

impl TopicRecipient {
    pub fn new(topic_key: &str) -> Self {
        Self {
            kind: RecipientKind::Topic,
            topic_key: topic_key.to_string(),
        }
    }
}

/// The subscriber shown as the sender of a notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Actor {
    SubscriberId(String),
    Subscriber(SubscriberRequest),
}

/// Tenant context for a trigger: an identifier, or the tenant itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tenant {
    Identifier(String),
    Details(TenantDetails),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TenantDetails {
    pub identifier: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Body for `POST /events/trigger`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerEventRequest {
    /// Workflow trigger identifier.
    pub name: String,

    pub to: Recipients,

    /// Always sent, `{}` when empty.
    #[serde(default)]
    pub payload: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<Actor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<Tenant>,
}

impl TriggerEventRequest {
    /// Fails with [`Error::Configuration`] when `to` is an empty list.
    pub fn new(name: &str, to: impl Into<Recipients>) -> Result<Self, Error> {
        let request = Self {
            name: name.to_string(),
            to: to.into(),
            payload: Map::new(),
            overrides: None,
            transaction_id: None,
            actor: None,
            tenant: None,
        };
        request.validate()?;
        Ok(request)
    }

    /// Checks the recipients; the trigger operations call this before
    /// sending since the fields are public.
    pub fn validate(&self) -> Result<(), Error> {
        if self.to.is_empty() {
            return Err(Error::Configuration(format!(
                "trigger `{}` has an empty recipient list",
                self.name
            )));
        }
        Ok(())
    }

    pub fn with_payload(mut self, payload: Map<String, Value>) -> Self {
        self.payload = payload;
        self
    }

    pub fn with_overrides(mut self, overrides: Map<String, Value>) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn with_transaction_id(mut self, transaction_id: &str) -> Self {
        self.transaction_id = Some(transaction_id.to_string());
        self
    }

    pub fn with_actor(mut self, actor: Actor) -> Self {
        self.actor = Some(actor);
        self
    }

    pub fn with_tenant(mut self, tenant: Tenant) -> Self {
        self.tenant = Some(tenant);
        self
    }
}

/// Body for `POST /events/trigger/bulk`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkTriggerEventRequest {
    pub events: Vec<TriggerEventRequest>,
}

/// Body for `POST /events/trigger/broadcast`: every subscriber in the
/// environment receives the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastEventRequest {
    pub name: String,

    #[serde(default)]
    pub payload: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<Actor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<Tenant>,
}

impl BroadcastEventRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            payload: Map::new(),
            overrides: None,
            transaction_id: None,
            actor: None,
            tenant: None,
        }
    }

    pub fn with_payload(mut self, payload: Map<String, Value>) -> Self {
        self.payload = payload;
        self
    }

    pub fn with_transaction_id(mut self, transaction_id: &str) -> Self {
        self.transaction_id = Some(transaction_id.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerResponse {
    pub acknowledged: Option<bool>,

    pub status: Option<String>,

    pub transaction_id: Option<String>,

    pub error: Option<Vec<String>>,
}
