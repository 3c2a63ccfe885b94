//! Notification template (workflow) types.
//!
//! [`Step`] and its children appear in both requests and responses, so their
//! unset fields are omitted when encoding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A notification template with its steps and triggers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationTemplate {
    #[serde(rename = "_id")]
    pub id: Option<String>,

    pub name: Option<String>,

    pub description: Option<String>,

    pub active: Option<bool>,

    pub draft: Option<bool>,

    pub preference_settings: Option<PreferenceSettings>,

    /// Critical templates ignore subscriber preferences.
    pub critical: Option<bool>,

    pub tags: Option<Vec<String>>,

    pub steps: Option<Vec<Step>>,

    #[serde(rename = "_organizationId")]
    pub organization_id: Option<String>,

    #[serde(rename = "_creatorId")]
    pub creator_id: Option<String>,

    #[serde(rename = "_environmentId")]
    pub environment_id: Option<String>,

    pub triggers: Option<Vec<Trigger>>,

    #[serde(rename = "_notificationGroupId")]
    pub notification_group_id: Option<String>,

    pub deleted: Option<bool>,

    pub deleted_by: Option<String>,

    pub notification_group: Option<NotificationGroup>,

    pub created_at: Option<DateTime<Utc>>,

    pub updated_at: Option<DateTime<Utc>>,
}

/// Default channel preferences for subscribers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_app: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "_templateId", default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_stop_on_fail: Option<bool>,

    /// Message template for the step's channel; its shape is channel specific.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<StepFilter>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<StepMetadata>,

    #[serde(rename = "_parentId", default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_callback: Option<Value>,
}

/// Condition group deciding whether a step runs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_negated: Option<bool>,

    /// How children combine, e.g. `AND` / `OR`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub filter_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FilterCondition>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,

    /// What the field is read from, e.g. `subscriber` or `payload`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<String>,
}

/// Digest / delay settings of a step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_path: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub metadata_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backoff_unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backoff_amount: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_mode: Option<bool>,
}

/// How a template is triggered and which variables it reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    #[serde(rename = "type")]
    pub trigger_type: Option<String>,

    /// Event name passed to `trigger_event`.
    pub identifier: Option<String>,

    pub variables: Option<Vec<TriggerVariable>>,

    pub subscriber_variables: Option<Vec<TriggerVariable>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerVariable {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationGroup {
    #[serde(rename = "_id")]
    pub id: Option<String>,

    pub name: Option<String>,

    #[serde(rename = "_environmentId")]
    pub environment_id: Option<String>,

    #[serde(rename = "_organizationId")]
    pub organization_id: Option<String>,

    #[serde(rename = "_parentId")]
    pub parent_id: Option<String>,
}

/// Body for `POST /notification-templates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationTemplateRequest {
    pub name: String,

    pub notification_group_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference_settings: Option<PreferenceSettings>,
}

/// Body for `PUT /notification-templates/{templateId}`. Unset fields are
/// left unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotificationTemplateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_group_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference_settings: Option<PreferenceSettings>,
}

/// Body for `PUT /notification-templates/{templateId}/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNotificationTemplateStatusRequest {
    pub active: bool,
}
