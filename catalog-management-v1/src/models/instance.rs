use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A deployed instance of an offering version.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferingInstance {
    pub id: Option<String>,
    #[serde(rename = "_rev")]
    pub rev: Option<String>,
    pub url: Option<String>,
    /// platform CRN for this instance.
    pub crn: Option<String>,
    pub label: Option<String>,
    pub catalog_id: Option<String>,
    pub offering_id: Option<String>,
    pub kind_format: Option<String>,
    pub version: Option<String>,
    pub version_id: Option<String>,
    pub cluster_id: Option<String>,
    pub cluster_region: Option<String>,
    pub cluster_namespaces: Option<Vec<String>>,
    pub cluster_all_namespaces: Option<bool>,
    pub schematics_workspace_id: Option<String>,
    /// Type of install plan (also known as approval strategy) for operator subscriptions.
    pub install_plan: Option<String>,
    /// Channel to pin the operator subscription to.
    pub channel: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
    pub resource_group_id: Option<String>,
    pub location: Option<String>,
    pub disabled: Option<bool>,
    pub account: Option<String>,
    pub last_operation: Option<OfferingInstanceLastOperation>,
    pub kind_target: Option<String>,
    pub sha: Option<String>,
}

/// the last operation performed and status.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferingInstanceLastOperation {
    pub operation: Option<String>,
    pub state: Option<String>,
    pub message: Option<String>,
    pub transaction_id: Option<String>,
    pub updated: Option<DateTime<Utc>>,
    pub code: Option<String>,
}
