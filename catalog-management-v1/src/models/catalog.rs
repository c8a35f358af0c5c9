use super::Filters;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use std::collections::BTreeMap;

/// Catalog information.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Unique ID.
    pub id: Option<String>,
    /// Cloudant revision.
    #[serde(rename = "_rev")]
    pub rev: Option<String>,
    /// Display Name in the requested language.
    pub label: Option<String>,
    /// A map of translated strings, by language code.
    pub label_i18n: Option<BTreeMap<String, String>>,
    /// Description in the requested language.
    pub short_description: Option<String>,
    pub short_description_i18n: Option<BTreeMap<String, String>>,
    /// URL for an icon associated with this catalog.
    pub catalog_icon_url: Option<String>,
    /// URL for a banner image for this catalog.
    pub catalog_banner_url: Option<String>,
    pub tags: Option<Vec<String>>,
    /// The url for this specific catalog.
    pub url: Option<String>,
    /// CRN associated with the catalog.
    pub crn: Option<String>,
    /// URL path to offerings.
    pub offerings_url: Option<String>,
    pub features: Option<Vec<Feature>>,
    /// Denotes whether a catalog is disabled.
    pub disabled: Option<bool>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    /// Resource group id the catalog is owned by.
    pub resource_group_id: Option<String>,
    /// Account that owns catalog.
    pub owning_account: Option<String>,
    pub catalog_filters: Option<Filters>,
    pub syndication_settings: Option<SyndicationResource>,
    /// Kind of catalog. Supported kinds are offering and vpe.
    pub kind: Option<String>,
    /// Catalog specific metadata.
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
    pub target_account_contexts: Option<Vec<TargetAccountContext>>,
}

/// Paginated catalog search result.
#[serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSearchResult {
    pub total_count: Option<i64>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub resources: Vec<Catalog>,
}

/// Feature information.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: Option<String>,
    pub title_i18n: Option<BTreeMap<String, String>>,
    pub description: Option<String>,
    pub description_i18n: Option<BTreeMap<String, String>>,
}

/// Syndication settings of a catalog.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SyndicationResource {
    /// Remove related components.
    pub remove_related_components: Option<bool>,
    /// Syndication clusters.
    pub clusters: Option<Vec<SyndicationCluster>>,
    pub history: Option<SyndicationHistory>,
    pub authorization: Option<SyndicationAuthorization>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SyndicationCluster {
    pub region: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub resource_group_name: Option<String>,
    #[serde(rename = "type")]
    pub cluster_type: Option<String>,
    pub namespaces: Option<Vec<String>>,
    pub all_namespaces: Option<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SyndicationHistory {
    pub namespaces: Option<Vec<String>>,
    pub clusters: Option<Vec<SyndicationCluster>>,
    pub last_run: Option<DateTime<Utc>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SyndicationAuthorization {
    pub token: Option<String>,
    pub last_run: Option<DateTime<Utc>>,
}

/// Target account context for a catalog.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetAccountContext {
    /// API key of the target account.
    pub api_key: Option<String>,
    pub trusted_profile: Option<TrustedProfileInfo>,
    /// Unique identifier/name for this target account context.
    pub name: Option<String>,
    pub label: Option<String>,
    pub project_id: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrustedProfileInfo {
    pub trusted_profile_id: Option<String>,
    pub catalog_crn: Option<String>,
    pub catalog_name: Option<String>,
    pub target_service_id: Option<String>,
}
