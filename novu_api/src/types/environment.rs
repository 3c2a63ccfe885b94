//! Environment and API key types.

use serde::{Deserialize, Serialize};

/// An environment (e.g. Development, Production) of the organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    #[serde(rename = "_id")]
    pub id: Option<String>,

    pub name: Option<String>,

    #[serde(rename = "_organizationId")]
    pub organization_id: Option<String>,

    pub identifier: Option<String>,

    pub api_keys: Option<Vec<ApiKey>>,

    pub widget: Option<Widget>,

    pub dns: Option<Dns>,

    #[serde(rename = "_parentId")]
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub key: Option<String>,

    #[serde(rename = "_userId")]
    pub user_id: Option<String>,
}

/// In-app widget settings. Also the body of
/// `PUT /environments/api-keys/widget/settings`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_center_encryption: Option<bool>,
}

/// Inbound email parse settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dns {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inbound_parse_domain: Option<String>,
}

/// Body for `POST /environments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnvironmentRequest {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Body for `PUT /environments/{environmentId}`. Unset fields are left
/// unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnvironmentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns: Option<Dns>,
}
