use super::{DeprecatePending, Feature, MediaItem, OfferingReference};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// Offering version information.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Version {
    /// Unique ID.
    pub id: Option<String>,
    #[serde(rename = "_rev")]
    pub rev: Option<String>,
    /// Version's CRN.
    pub crn: Option<String>,
    /// Version of content type.
    pub version: Option<String>,
    pub flavor: Option<Flavor>,
    /// hash of the content.
    pub sha: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub offering_id: Option<String>,
    pub catalog_id: Option<String>,
    pub kind_id: Option<String>,
    pub tags: Option<Vec<String>>,
    /// Content's repo URL.
    pub repo_url: Option<String>,
    /// Content's source URL (e.g git repo).
    pub source_url: Option<String>,
    /// File used to on-board this version.
    pub tgz_url: Option<String>,
    /// List of user solicited overrides.
    pub configuration: Option<Vec<Configuration>>,
    pub outputs: Option<Vec<Output>>,
    pub iam_permissions: Option<Vec<IamPermission>>,
    /// Open ended metadata information.
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
    pub validation: Option<Validation>,
    /// Resource requirments for installation.
    pub required_resources: Option<Vec<Resource>>,
    /// Denotes if single instance can be deployed to a given cluster.
    pub single_instance: Option<bool>,
    pub install: Option<Script>,
    /// Optional pre-install instructions.
    pub pre_install: Option<Vec<Script>>,
    pub entitlement: Option<VersionEntitlement>,
    pub licenses: Option<Vec<License>>,
    /// If set, denotes a url to a YAML file with list of container images used by this
    /// version.
    pub image_manifest_url: Option<String>,
    pub deprecated: Option<bool>,
    pub package_version: Option<String>,
    pub state: Option<State>,
    /// A dotted value of `catalogID`.`versionID`.
    pub version_locator: Option<String>,
    pub long_description: Option<String>,
    pub long_description_i18n: Option<BTreeMap<String, String>>,
    /// Deprecated.
    pub whitelisted_accounts: Option<Vec<String>>,
    pub image_pull_key_name: Option<String>,
    pub deprecate_pending: Option<DeprecatePending>,
    pub solution_info: Option<SolutionInfo>,
    pub is_consumable: Option<bool>,
}

/// Configuration description.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Configuration key.
    pub key: Option<String>,
    /// Value type (string, boolean, int).
    #[serde(rename = "type")]
    pub value_type: Option<String>,
    pub default_value: Option<serde_json::Value>,
    pub display_name: Option<String>,
    /// Constraint associated with value, e.g., for string type - regx:[a-z].
    pub value_constraint: Option<String>,
    pub description: Option<String>,
    pub required: Option<bool>,
    /// List of options of type.
    pub options: Option<Vec<serde_json::Value>>,
    /// Hide values.
    pub hidden: Option<bool>,
    pub custom_config: Option<RenderType>,
    pub type_metadata: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Output {
    pub key: Option<String>,
    pub description: Option<String>,
}

/// IAM Permission definition.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IamPermission {
    pub service_name: Option<String>,
    pub role_crns: Option<Vec<String>>,
    pub resources: Option<Vec<IamResource>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IamResource {
    pub name: Option<String>,
    pub description: Option<String>,
    pub role_crns: Option<Vec<String>>,
}

/// Validation response.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Validation {
    /// Date and time of last successful validation.
    pub validated: Option<DateTime<Utc>>,
    /// Date and time of last validation was requested.
    pub requested: Option<DateTime<Utc>>,
    /// Current validation state - <empty>, in_progress, valid, invalid, expired.
    pub state: Option<String>,
    pub last_operation: Option<String>,
    /// Validation target information (e.g. cluster_id, region, namespace, etc).
    pub target: Option<BTreeMap<String, serde_json::Value>>,
    pub message: Option<String>,
}

/// Resource requirements.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Type of requirement.
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    /// mem, disk, cores, and nodes can be parsed as an int.  targetVersion will be a semver
    /// range value.
    pub value: Option<serde_json::Value>,
}

/// Script information.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub instructions: Option<String>,
    pub instructions_i18n: Option<BTreeMap<String, String>>,
    pub script: Option<String>,
    pub script_permission: Option<String>,
    pub delete_script: Option<String>,
    pub scope: Option<String>,
}

/// Entitlement license info.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionEntitlement {
    pub provider_name: Option<String>,
    pub provider_id: Option<String>,
    pub product_id: Option<String>,
    pub part_numbers: Option<Vec<String>>,
    pub image_repo_name: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub license_type: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

/// Offering state.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// one of: new, validated, account-published, ibm-published, public-published.
    pub current: Option<String>,
    pub current_entered: Option<DateTime<Utc>>,
    pub pending: Option<String>,
    pub pending_requested: Option<DateTime<Utc>>,
    pub previous: Option<String>,
}

/// Version Flavor Information.  Only supported for Product kind Solution.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Flavor {
    pub name: Option<String>,
    pub label: Option<String>,
    pub label_i18n: Option<BTreeMap<String, String>>,
    /// Order that this flavor should appear when listed for a single version.
    pub index: Option<i64>,
}

/// Render type.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderType {
    #[serde(rename = "type")]
    pub render_type: Option<String>,
    pub grouping: Option<String>,
    pub original_grouping: Option<String>,
    pub grouping_index: Option<i64>,
    pub config_constraints: Option<BTreeMap<String, serde_json::Value>>,
    pub associations: Option<RenderTypeAssociations>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderTypeAssociations {
    pub parameters: Option<Vec<RenderTypeAssociationsParametersItem>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderTypeAssociationsParametersItem {
    pub name: Option<String>,
    /// Refresh options.
    #[serde(rename = "optionsRefresh")]
    pub options_refresh: Option<bool>,
}

/// Version Solution Information.  Only supported for Product kind Solution.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SolutionInfo {
    pub architecture_diagrams: Option<Vec<ArchitectureDiagram>>,
    pub features: Option<Vec<Feature>>,
    pub cost_estimate: Option<CostEstimate>,
    pub dependencies: Option<Vec<OfferingReference>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureDiagram {
    pub diagram: Option<MediaItem>,
    pub description: Option<String>,
    pub description_i18n: Option<BTreeMap<String, String>>,
}

/// Cost estimate definition. Amounts are decimal strings.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub version: Option<String>,
    pub currency: Option<String>,
    pub projects: Option<Vec<Project>>,
    pub summary: Option<CostSummary>,
    pub total_hourly_cost: Option<String>,
    pub total_monthly_cost: Option<String>,
    pub past_total_hourly_cost: Option<String>,
    pub past_total_monthly_cost: Option<String>,
    pub diff_total_hourly_cost: Option<String>,
    pub diff_total_monthly_cost: Option<String>,
    pub time_generated: Option<DateTime<Utc>>,
}

/// Cost estimate project definition.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: Option<String>,
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
    pub past_breakdown: Option<CostBreakdown>,
    pub breakdown: Option<CostBreakdown>,
    pub diff: Option<CostBreakdown>,
    pub summary: Option<CostSummary>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub total_hourly_cost: Option<String>,
    pub total_monthly_cost: Option<String>,
    pub resources: Option<Vec<CostResource>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CostResource {
    pub name: Option<String>,
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
    pub hourly_cost: Option<String>,
    pub monthly_cost: Option<String>,
    pub cost_components: Option<Vec<CostComponent>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CostComponent {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub hourly_quantity: Option<String>,
    pub monthly_quantity: Option<String>,
    pub price: Option<String>,
    pub hourly_cost: Option<String>,
    pub monthly_cost: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    pub total_detected_resources: Option<i64>,
    pub total_supported_resources: Option<i64>,
    pub total_unsupported_resources: Option<i64>,
    pub total_usage_based_resources: Option<i64>,
    pub total_no_price_resources: Option<i64>,
    pub unsupported_resource_counts: Option<BTreeMap<String, i64>>,
    pub no_price_resource_counts: Option<BTreeMap<String, i64>>,
}

/// Image Manifest.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageManifest {
    pub description: Option<String>,
    pub images: Option<Vec<Image>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Image.
    pub image: Option<String>,
}

/// Installation status.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallStatus {
    pub metadata: Option<InstallStatusMetadata>,
    pub release: Option<InstallStatusRelease>,
    pub content_mgmt: Option<InstallStatusContentMgmt>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallStatusMetadata {
    pub cluster_id: Option<String>,
    pub region: Option<String>,
    pub namespace: Option<String>,
    pub workspace_id: Option<String>,
    pub workspace_name: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallStatusRelease {
    pub deployments: Option<Vec<BTreeMap<String, serde_json::Value>>>,
    pub replicasets: Option<Vec<BTreeMap<String, serde_json::Value>>>,
    pub statefulsets: Option<Vec<BTreeMap<String, serde_json::Value>>>,
    pub pods: Option<Vec<BTreeMap<String, serde_json::Value>>>,
    pub errors: Option<Vec<BTreeMap<String, String>>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallStatusContentMgmt {
    pub pods: Option<Vec<BTreeMap<String, String>>>,
    pub errors: Option<Vec<BTreeMap<String, String>>>,
}

/// Deploy request body shared by the install, preinstall and validation calls.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeployRequestBody {
    /// Cluster ID.
    pub cluster_id: Option<String>,
    /// Cluster region.
    pub region: Option<String>,
    /// Kube namespace.
    pub namespace: Option<String>,
    /// Kube namespaces to deploy Operator(s) to.
    pub namespaces: Option<Vec<String>>,
    /// Denotes whether to install Operator(s) globally.
    pub all_namespaces: Option<bool>,
    /// Validation override values. Required for virtual server image for VPC.
    pub override_values: Option<BTreeMap<String, serde_json::Value>>,
    /// Entitlement API Key for this offering.
    pub entitlement_apikey: Option<String>,
    pub schematics: Option<DeployRequestBodySchematics>,
    /// Script.
    pub script: Option<String>,
    /// Script ID.
    pub script_id: Option<String>,
    /// A dotted value of `catalogID`.`versionID`.
    pub version_locator_id: Option<String>,
    pub vcenter_id: Option<String>,
    pub vcenter_location: Option<String>,
    pub vcenter_user: Option<String>,
    pub vcenter_password: Option<String>,
    pub vcenter_datastore: Option<String>,
}

/// Schematics workspace configuration.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeployRequestBodySchematics {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub resource_group_id: Option<String>,
}

/// Identifies an offering version as `<catalog id>.<version id>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VersionLocator {
    pub catalog_id: String,
    pub version_id: String,
}

impl VersionLocator {
    pub fn new(catalog_id: impl Into<String>, version_id: impl Into<String>) -> Self {
        Self {
            catalog_id: catalog_id.into(),
            version_id: version_id.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid version locator '{0}': expected '<catalog id>.<version id>'")]
pub struct ParseVersionLocatorError(String);

impl FromStr for VersionLocator {
    type Err = ParseVersionLocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((catalog_id, version_id)) if !catalog_id.is_empty() && !version_id.is_empty() => {
                Ok(Self::new(catalog_id, version_id))
            }
            _ => Err(ParseVersionLocatorError(s.to_string())),
        }
    }
}

impl fmt::Display for VersionLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.catalog_id, self.version_id)
    }
}
