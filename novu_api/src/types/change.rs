//! Change-tracking types: pending edits that can be promoted between
//! environments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A recorded change returned by the `/changes` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    #[serde(rename = "_id")]
    pub id: Option<String>,

    #[serde(rename = "_creatorId")]
    pub creator_id: Option<String>,

    #[serde(rename = "_environmentId")]
    pub environment_id: Option<String>,

    #[serde(rename = "_organizationId")]
    pub organization_id: Option<String>,

    /// Identifier of the changed entity (template, layout, ...).
    #[serde(rename = "_entityId")]
    pub entity_id: Option<String>,

    pub enabled: Option<bool>,

    /// Kind of entity the change applies to.
    #[serde(rename = "type")]
    pub change_type: Option<String>,

    /// Server-defined diff payload.
    pub change: Option<Value>,

    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "_parentId")]
    pub parent_id: Option<String>,
}

/// Body for `POST /changes/bulk/apply`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangesRequest {
    pub change_ids: Vec<String>,
}
