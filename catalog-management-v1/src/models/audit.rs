use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// A link to a page of a token-paginated collection.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginationTokenLink {
    /// The href of the linked page.
    pub href: Option<String>,
    /// The start token used for this page.
    pub start: Option<String>,
}

/// A collection of audit records.
#[serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditLogs {
    /// The start token used for this response.
    pub start: Option<String>,
    /// The limit that was applied to this response. It may be smaller than in the request
    /// because that was too large.
    pub limit: Option<i64>,
    /// The total count of resources in the system that matches the request.
    pub total_count: Option<i64>,
    /// The number of resources returned in this response.
    pub resource_count: Option<i64>,
    pub first: Option<PaginationTokenLink>,
    pub last: Option<PaginationTokenLink>,
    pub prev: Option<PaginationTokenLink>,
    pub next: Option<PaginationTokenLink>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub audits: Vec<AuditLogDigest>,
}

/// Reduced view of an audit record.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditLogDigest {
    pub id: Option<String>,
    #[serde(rename = "_rev")]
    pub rev: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub change_type: Option<String>,
    pub target_type: Option<String>,
    pub target_id: Option<String>,
    pub who_email: Option<String>,
    pub who_delegate_email: Option<String>,
    pub message: Option<String>,
}

/// An audit record with the full change payload.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: Option<String>,
    #[serde(rename = "_rev")]
    pub rev: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub change_type: Option<String>,
    pub target_type: Option<String>,
    pub target_id: Option<String>,
    pub who_email: Option<String>,
    pub who_delegate_email: Option<String>,
    pub message: Option<String>,
    /// Transaction specific data, shaped by `change_type`.
    pub data: Option<serde_json::Value>,
}
