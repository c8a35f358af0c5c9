use super::{Feature, Flavor, Resource, State, Version};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as, DefaultOnNull};
use std::collections::BTreeMap;

/// Offering information.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Offering {
    /// Unique ID.
    pub id: Option<String>,
    /// Cloudant revision.
    #[serde(rename = "_rev")]
    pub rev: Option<String>,
    /// The url for this specific offering.
    pub url: Option<String>,
    /// The crn for this specific offering.
    pub crn: Option<String>,
    /// Display Name in the requested language.
    pub label: Option<String>,
    pub label_i18n: Option<BTreeMap<String, String>>,
    /// The programmatic name of this offering.
    pub name: Option<String>,
    pub offering_icon_url: Option<String>,
    pub offering_docs_url: Option<String>,
    pub offering_support_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    pub rating: Option<Rating>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub short_description: Option<String>,
    pub short_description_i18n: Option<BTreeMap<String, String>>,
    pub long_description: Option<String>,
    pub long_description_i18n: Option<BTreeMap<String, String>>,
    pub features: Option<Vec<Feature>>,
    /// Array of kind.
    pub kinds: Option<Vec<Kind>>,
    /// Offering is managed by Partner Center.
    pub pc_managed: Option<bool>,
    /// Offering has been approved to publish to permitted to IBM or Public Catalog.
    pub publish_approved: Option<bool>,
    pub share_with_all: Option<bool>,
    pub share_with_ibm: Option<bool>,
    pub share_enabled: Option<bool>,
    pub permit_request_ibm_public_publish: Option<bool>,
    pub ibm_publish_approved: Option<bool>,
    pub public_publish_approved: Option<bool>,
    pub public_original_crn: Option<String>,
    pub publish_public_crn: Option<String>,
    pub portal_approval_record: Option<String>,
    pub portal_ui_url: Option<String>,
    /// The id of the catalog containing this offering.
    pub catalog_id: Option<String>,
    pub catalog_name: Option<String>,
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
    pub disclaimer: Option<String>,
    /// Determine if this offering should be displayed in the Consumption UI.
    pub hidden: Option<bool>,
    /// Deprecated - Provider of this offering.
    pub provider: Option<String>,
    pub provider_info: Option<ProviderInfo>,
    pub repo_info: Option<RepoInfo>,
    pub image_pull_keys: Option<Vec<ImagePullKey>>,
    pub support: Option<Support>,
    pub media: Option<Vec<MediaItem>>,
    pub deprecate_pending: Option<DeprecatePending>,
    /// The product kind.  Valid values are module, solution, or empty string.
    pub product_kind: Option<String>,
    pub badges: Option<Vec<Badge>>,
}

impl Offering {
    /// Returns the most recently created version across all kinds.
    ///
    /// Versions without a creation date are ignored. On equal dates the first one wins.
    pub fn latest_version(&self) -> Option<&Version> {
        self.kinds
            .iter()
            .flatten()
            .flat_map(|kind| kind.versions.iter().flatten())
            .filter_map(|version| version.created.map(|created| (created, version)))
            .fold(
                None::<(DateTime<Utc>, &Version)>,
                |latest, (created, version)| match latest {
                    Some((latest_created, _)) if created <= latest_created => latest,
                    _ => Some((created, version)),
                },
            )
            .map(|(_, version)| version)
    }
}

/// Paginated offering search result.
#[serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferingSearchResult {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub total_count: Option<i64>,
    pub resource_count: Option<i64>,
    /// Link response on first page.
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    /// Link response on next page.
    pub next: Option<String>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub resources: Vec<Offering>,
}

/// Offering kind.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Kind {
    pub id: Option<String>,
    /// content kind, e.g., helm, vm image.
    pub format_kind: Option<String>,
    pub install_kind: Option<String>,
    /// target cloud to install, e.g., iks, open_shift_iks.
    pub target_kind: Option<String>,
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
    pub tags: Option<Vec<String>>,
    pub additional_features: Option<Vec<Feature>>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub versions: Option<Vec<Version>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub one_star_count: Option<i64>,
    pub two_star_count: Option<i64>,
    pub three_star_count: Option<i64>,
    pub four_star_count: Option<i64>,
}

/// Repository info for offerings.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoInfo {
    pub token: Option<String>,
    #[serde(rename = "type")]
    pub repo_type: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Offering Support information.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Support {
    pub url: Option<String>,
    pub process: Option<String>,
    pub process_i18n: Option<BTreeMap<String, String>>,
    pub locations: Option<Vec<String>>,
    pub support_details: Option<Vec<SupportDetail>>,
    pub support_escalation: Option<SupportEscalation>,
    pub support_type: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportDetail {
    #[serde(rename = "type")]
    pub detail_type: Option<String>,
    pub contact: Option<String>,
    pub response_wait_time: Option<SupportWaitTime>,
    pub availability: Option<SupportAvailability>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportWaitTime {
    pub value: Option<i64>,
    #[serde(rename = "type")]
    pub unit: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportAvailability {
    pub times: Option<Vec<SupportTime>>,
    pub timezone: Option<String>,
    pub always_available: Option<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportTime {
    /// The day of the week, represented as an integer.
    pub day: Option<i64>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportEscalation {
    pub escalation_wait_time: Option<SupportWaitTime>,
    pub response_wait_time: Option<SupportWaitTime>,
    pub contact: Option<String>,
}

/// Offering Media information.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub url: Option<String>,
    /// CM API specific URL of the specified media item.
    pub api_url: Option<String>,
    pub url_proxy: Option<UrlProxy>,
    pub caption: Option<String>,
    pub caption_i18n: Option<BTreeMap<String, String>>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlProxy {
    pub url: Option<String>,
    pub sha: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: Option<String>,
    pub label: Option<String>,
    pub label_i18n: Option<BTreeMap<String, String>>,
    pub description: Option<String>,
    pub description_i18n: Option<BTreeMap<String, String>>,
    pub icon: Option<String>,
    pub authority: Option<String>,
    pub tag: Option<String>,
    pub learn_more_links: Option<LearnMoreLinks>,
    pub constraints: Option<Vec<Constraint>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LearnMoreLinks {
    pub first_party: Option<String>,
    pub third_party: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    #[serde(rename = "type")]
    pub constraint_type: Option<String>,
    pub rule: Option<serde_json::Value>,
}

/// Image pull keys for an offering.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagePullKey {
    pub name: Option<String>,
    pub value: Option<String>,
    pub description: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeprecatePending {
    pub deprecate_date: Option<DateTime<Utc>>,
    pub deprecate_state: Option<String>,
    pub description: Option<String>,
}

/// Publish information of an offering or object.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PublishObject {
    /// Is it permitted to request publishing to IBM or Public.
    pub permit_ibm_public_publish: Option<bool>,
    pub ibm_approved: Option<bool>,
    pub public_approved: Option<bool>,
    /// Denotes public availability of an Offering - if share_enabled is true.
    pub portal_approval_record: Option<String>,
    pub portal_url: Option<String>,
}

/// Share setting of an offering.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareSetting {
    /// Visible to IBM.
    pub ibm: Option<bool>,
    /// Visible to everyone.
    pub public: Option<bool>,
    /// Visible to the access list.
    pub enabled: Option<bool>,
}

/// Result of an approval change.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApprovalResult {
    pub allow_request: Option<bool>,
    pub ibm: Option<bool>,
    pub public: Option<bool>,
    /// Denotes whether approval has changed.
    pub changed: Option<bool>,
}

/// An available update for an installed offering version.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionUpdateDescriptor {
    pub version_locator: Option<String>,
    pub version: Option<String>,
    pub tags: Option<Vec<String>>,
    pub package_version: Option<String>,
    pub state: Option<State>,
    pub required_resources: Option<Vec<Resource>>,
    pub can_update: Option<bool>,
    /// If can_update is false, the map will contain messages explaining why.
    pub messages: Option<BTreeMap<String, String>>,
}

/// A reference to another offering version.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferingReference {
    pub catalog_id: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub kind: Option<String>,
    /// Version constraint, e.g. `>=1.0.0`.
    pub version: Option<String>,
    pub flavors: Option<Vec<String>>,
}

/// Body of the offering and offering version import calls.
#[serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportOfferingBody {
    pub tags: Option<Vec<String>>,
    pub target_kinds: Option<Vec<String>>,
    /// Byte array representing the content to be imported. Only supported for OVA images at
    /// this time.
    #[serde_as(as = "Option<Base64>")]
    pub content: Option<Vec<u8>>,
    pub name: Option<String>,
    pub label: Option<String>,
    pub install_kind: Option<String>,
    pub format_kind: Option<String>,
    pub product_kind: Option<String>,
    /// SHA256 fingerprint of the image file. Required for virtual server image imports.
    pub sha: Option<String>,
    /// Semantic version of the software being onboarded.
    pub version: Option<String>,
    pub flavor: Option<Flavor>,
    pub metadata: Option<ImportOfferingBodyMetadata>,
    pub working_directory: Option<String>,
    /// URL path to zip location. If not specified, must provide content in the body of this
    /// call.
    pub zipurl: Option<String>,
    /// The semver value for this new version, if not found in the zip url package content.
    pub target_version: Option<String>,
    /// Add all possible configuration values to this version when importing.
    pub include_config: Option<bool>,
    /// Indicates that the current terraform template is used to install a virtual server
    /// image.
    pub is_vsi: Option<bool>,
    /// The type of repository containing this version. Valid values are 'public_git' or
    /// 'enterprise_git'.
    pub repotype: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportOfferingBodyMetadata {
    pub operating_system: Option<ImportOfferingBodyMetadataOperatingSystem>,
    pub file: Option<ImportOfferingBodyMetadataFile>,
    /// Minimum size (in gigabytes) of a volume onto which this image may be provisioned.
    pub minimum_provisioned_size: Option<i64>,
    pub images: Option<Vec<ImportOfferingBodyMetadataImagesItem>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportOfferingBodyMetadataOperatingSystem {
    pub dedicated_host_only: Option<bool>,
    pub vendor: Option<String>,
    pub name: Option<String>,
    pub href: Option<String>,
    pub display_name: Option<String>,
    pub family: Option<String>,
    pub version: Option<String>,
    pub architecture: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportOfferingBodyMetadataFile {
    /// Size of the stored image file rounded up to the next gigabyte.
    pub size: Option<i64>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportOfferingBodyMetadataImagesItem {
    pub id: Option<String>,
    pub name: Option<String>,
    pub region: Option<String>,
}
