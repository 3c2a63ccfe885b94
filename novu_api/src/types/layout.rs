//! Email layout types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A layout wrapping email template content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(rename = "_id")]
    pub id: Option<String>,

    #[serde(rename = "_organizationId")]
    pub organization_id: Option<String>,

    #[serde(rename = "_environmentId")]
    pub environment_id: Option<String>,

    #[serde(rename = "_creatorId")]
    pub creator_id: Option<String>,

    pub name: Option<String>,

    pub description: Option<String>,

    pub channel: Option<String>,

    /// HTML content; must contain a `{{{body}}}` placeholder.
    pub content: Option<String>,

    pub variables: Option<Vec<String>>,

    pub is_default: Option<bool>,

    pub is_deleted: Option<bool>,

    pub created_at: Option<DateTime<Utc>>,

    pub updated_at: Option<DateTime<Utc>>,

    #[serde(rename = "_parentId")]
    pub parent_id: Option<String>,
}

/// Body for `POST /layouts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLayoutRequest {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

/// Body for `PATCH /layouts/{layoutId}`. Unset fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLayoutRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLayoutResponse {
    #[serde(rename = "_id")]
    pub id: Option<String>,
}
