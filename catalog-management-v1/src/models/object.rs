use super::{PaginationTokenLink, PublishObject, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use std::collections::BTreeMap;

/// object information.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogObject {
    /// unique id.
    pub id: Option<String>,
    /// The programmatic name of this object.
    pub name: Option<String>,
    #[serde(rename = "_rev")]
    pub rev: Option<String>,
    pub crn: Option<String>,
    pub url: Option<String>,
    /// The parent for this specific object.
    pub parent_id: Option<String>,
    pub label_i18n: Option<BTreeMap<String, String>>,
    pub label: Option<String>,
    pub tags: Option<Vec<String>>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub short_description: Option<String>,
    pub short_description_i18n: Option<BTreeMap<String, String>>,
    /// Kind of object.
    pub kind: Option<String>,
    pub publish: Option<PublishObject>,
    pub state: Option<State>,
    pub catalog_id: Option<String>,
    pub catalog_name: Option<String>,
    /// Map of data values for this object.
    pub data: Option<BTreeMap<String, serde_json::Value>>,
}

/// Paginated object list (offset links).
#[serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectListResult {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub total_count: Option<i64>,
    pub resource_count: Option<i64>,
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub resources: Vec<CatalogObject>,
}

/// Paginated object search result (offset links).
#[serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectSearchResult {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub total_count: Option<i64>,
    pub resource_count: Option<i64>,
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub resources: Vec<CatalogObject>,
}

/// access.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Access {
    pub id: Option<String>,
    /// Account, enterprise or account group id, prefixed by `-acct-`, `-ent-` or `-entgrp-`.
    pub account: Option<String>,
    pub account_type: Option<i64>,
    pub catalog_id: Option<String>,
    pub target_id: Option<String>,
    pub target_account: Option<String>,
    pub target_kind: Option<String>,
    pub created: Option<DateTime<Utc>>,
    /// Approval state of the access entry.
    pub approval_state: Option<String>,
}

/// Paginated access list (token links).
#[serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessListResult {
    pub start: Option<String>,
    pub limit: Option<i64>,
    pub total_count: Option<i64>,
    pub resource_count: Option<i64>,
    pub first: Option<PaginationTokenLink>,
    pub last: Option<PaginationTokenLink>,
    pub prev: Option<PaginationTokenLink>,
    pub next: Option<PaginationTokenLink>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub resources: Vec<Access>,
}

/// Result of adding or removing several access entries at once.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessListBulkResponse {
    /// Failed accounts, keyed by account, with the reason as value.
    pub errors: Option<BTreeMap<String, String>>,
}
