use super::{
    header_map, validate_header, GetAuditParams, ListAuditsParams, IF_MATCH,
    JSON_PATCH_CONTENT_TYPE, X_APPROVER_TOKEN, X_AUTH_REFRESH_TOKEN, X_AUTH_TOKEN,
};
use crate::{
    models::{
        AccessListBulkResponse, AccessListResult, ApprovalResult, AuditLog, AuditLogs,
        ImportOfferingBody, JsonPatchOperation, Offering, OfferingSearchResult, ShareSetting,
        VersionUpdateDescriptor,
    },
    pagination::PaginatedEndpoint,
};
use cloud_api_framework::{
    encode_path_segment, require_non_empty,
    reqwest::{header::HeaderMap, Method},
    serialize_body, serialize_query, Endpoint, Error, RawBody, ResponseFormat,
};
use serde::Serialize;
use std::borrow::Cow;

fn offerings_path(catalog_identifier: &str) -> String {
    format!("/catalogs/{}/offerings", encode_path_segment(catalog_identifier))
}

fn offering_path(catalog_identifier: &str, offering_id: &str) -> String {
    format!(
        "{}/{}",
        offerings_path(catalog_identifier),
        encode_path_segment(offering_id)
    )
}

fn require_offering(catalog_identifier: &str, offering_id: &str) -> Result<(), Error> {
    require_non_empty("catalog_identifier", catalog_identifier)?;
    require_non_empty("offering_id", offering_id)
}

pub use list_offerings::{ListOfferings, ListOfferingsParams};
mod list_offerings {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct ListOfferings {
        pub catalog_identifier: String,
        pub params: ListOfferingsParams,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct ListOfferingsParams {
        /// true - Strip down the content of what is returned.
        pub digest: Option<bool>,
        pub limit: Option<i64>,
        pub offset: Option<i64>,
        /// Only return results that contain the specified string.
        pub name: Option<String>,
        /// The field on which the output is sorted. Sorts by default by **label** property.
        /// To sort in descending order, prefix the field name with `-`.
        pub sort: Option<String>,
        #[serde(rename = "includeHidden")]
        pub include_hidden: Option<bool>,
    }

    impl Endpoint for ListOfferings {
        type Response = OfferingSearchResult;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            offerings_path(&self.catalog_identifier)
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn validate(&self) -> Result<(), Error> {
            require_non_empty("catalog_identifier", &self.catalog_identifier)
        }
    }

    impl PaginatedEndpoint for ListOfferings {
        type Cursor = i64;

        fn cursor(&self) -> Option<&i64> {
            self.params.offset.as_ref()
        }

        fn set_cursor(&mut self, cursor: i64) {
            self.params.offset = Some(cursor);
        }
    }
}

pub use create_offering::CreateOffering;
mod create_offering {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct CreateOffering {
        pub catalog_identifier: String,
        pub body: Offering,
    }

    impl Endpoint for CreateOffering {
        type Response = Offering;

        fn method(&self) -> Method {
            Method::POST
        }

        fn path(&self) -> String {
            offerings_path(&self.catalog_identifier)
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }

        fn validate(&self) -> Result<(), Error> {
            require_non_empty("catalog_identifier", &self.catalog_identifier)
        }
    }
}

pub use import_offering::{ImportOffering, ImportOfferingParams};
mod import_offering {
    use super::*;

    /// Creates an offering from the content of a repository or an uploaded archive.
    #[derive(Clone, Debug, Default)]
    pub struct ImportOffering {
        pub catalog_identifier: String,
        pub params: ImportOfferingParams,
        /// Authentication token used to access the specified zip file.
        pub x_auth_token: Option<String>,
        pub body: ImportOfferingBody,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct ImportOfferingParams {
        /// Re-use the specified offeringID during import.
        #[serde(rename = "offeringID")]
        pub offering_id: Option<String>,
    }

    impl Endpoint for ImportOffering {
        type Response = Offering;

        fn method(&self) -> Method {
            Method::POST
        }

        fn path(&self) -> String {
            format!(
                "/catalogs/{}/import/offerings",
                encode_path_segment(&self.catalog_identifier)
            )
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn headers(&self) -> Option<HeaderMap> {
            header_map([(X_AUTH_TOKEN, self.x_auth_token.as_deref())])
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }

        fn validate(&self) -> Result<(), Error> {
            require_non_empty("catalog_identifier", &self.catalog_identifier)?;
            validate_header("x_auth_token", self.x_auth_token.as_deref())
        }
    }
}

pub use import_offering_version::ImportOfferingVersion;
mod import_offering_version {
    use super::*;

    /// Adds a new version to an existing offering.
    #[derive(Clone, Debug, Default)]
    pub struct ImportOfferingVersion {
        pub catalog_identifier: String,
        pub offering_id: String,
        pub x_auth_token: Option<String>,
        pub body: ImportOfferingBody,
    }

    impl Endpoint for ImportOfferingVersion {
        type Response = Offering;

        fn method(&self) -> Method {
            Method::POST
        }

        fn path(&self) -> String {
            format!(
                "{}/version",
                offering_path(&self.catalog_identifier, &self.offering_id)
            )
        }

        fn headers(&self) -> Option<HeaderMap> {
            header_map([(X_AUTH_TOKEN, self.x_auth_token.as_deref())])
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }

        fn validate(&self) -> Result<(), Error> {
            require_offering(&self.catalog_identifier, &self.offering_id)?;
            validate_header("x_auth_token", self.x_auth_token.as_deref())
        }
    }
}

pub use reload_offering::{ReloadOffering, ReloadOfferingParams};
mod reload_offering {
    use super::*;

    /// Reloads an existing version from its source.
    #[derive(Clone, Debug, Default)]
    pub struct ReloadOffering {
        pub catalog_identifier: String,
        pub offering_id: String,
        pub params: ReloadOfferingParams,
        pub x_auth_token: Option<String>,
        pub body: ImportOfferingBody,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct ReloadOfferingParams {
        /// The semver value for this new version.
        #[serde(rename = "targetVersion")]
        pub target_version: String,
        /// URL path to zip location.
        pub zipurl: Option<String>,
        /// The type of repository containing this version. Valid values are 'public_git' or
        /// 'enterprise_git'.
        #[serde(rename = "repoType")]
        pub repo_type: Option<String>,
    }

    impl Endpoint for ReloadOffering {
        type Response = Offering;

        fn method(&self) -> Method {
            Method::PUT
        }

        fn path(&self) -> String {
            format!(
                "{}/reload",
                offering_path(&self.catalog_identifier, &self.offering_id)
            )
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn headers(&self) -> Option<HeaderMap> {
            header_map([(X_AUTH_TOKEN, self.x_auth_token.as_deref())])
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }

        fn validate(&self) -> Result<(), Error> {
            require_offering(&self.catalog_identifier, &self.offering_id)?;
            require_non_empty("target_version", &self.params.target_version)?;
            validate_header("x_auth_token", self.x_auth_token.as_deref())
        }
    }
}

pub use get_offering::{GetOffering, GetOfferingParams};
mod get_offering {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct GetOffering {
        pub catalog_identifier: String,
        pub offering_id: String,
        pub params: GetOfferingParams,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct GetOfferingParams {
        /// Offering Parameter Type. Valid values are 'name' or 'id'. Default is 'id'.
        #[serde(rename = "type")]
        pub offering_type: Option<String>,
        /// Return the digest format of the specified offering. Default is false.
        pub digest: Option<bool>,
    }

    impl Endpoint for GetOffering {
        type Response = Offering;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            offering_path(&self.catalog_identifier, &self.offering_id)
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn validate(&self) -> Result<(), Error> {
            require_offering(&self.catalog_identifier, &self.offering_id)
        }
    }
}

pub use replace_offering::ReplaceOffering;
mod replace_offering {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct ReplaceOffering {
        pub catalog_identifier: String,
        pub offering_id: String,
        pub body: Offering,
    }

    impl Endpoint for ReplaceOffering {
        type Response = Offering;

        fn method(&self) -> Method {
            Method::PUT
        }

        fn path(&self) -> String {
            offering_path(&self.catalog_identifier, &self.offering_id)
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }

        fn validate(&self) -> Result<(), Error> {
            require_offering(&self.catalog_identifier, &self.offering_id)
        }
    }
}

pub use update_offering::UpdateOffering;
mod update_offering {
    use super::*;

    /// Applies a JSON patch to an offering.
    #[derive(Clone, Debug, Default)]
    pub struct UpdateOffering {
        pub catalog_identifier: String,
        pub offering_id: String,
        /// Offering etag, i.e. the quoted revision: `"<_rev>"`.
        pub if_match: String,
        pub operations: Vec<JsonPatchOperation>,
    }

    impl Endpoint for UpdateOffering {
        type Response = Offering;

        fn method(&self) -> Method {
            Method::PATCH
        }

        fn path(&self) -> String {
            offering_path(&self.catalog_identifier, &self.offering_id)
        }

        fn headers(&self) -> Option<HeaderMap> {
            header_map([(IF_MATCH, Some(self.if_match.as_str()))])
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.operations)
        }

        fn content_type(&self) -> Cow<'static, str> {
            Cow::Borrowed(JSON_PATCH_CONTENT_TYPE)
        }

        fn validate(&self) -> Result<(), Error> {
            require_offering(&self.catalog_identifier, &self.offering_id)?;
            require_non_empty("if_match", &self.if_match)?;
            validate_header("if_match", Some(self.if_match.as_str()))
        }
    }
}

pub use delete_offering::DeleteOffering;
mod delete_offering {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct DeleteOffering {
        pub catalog_identifier: String,
        pub offering_id: String,
    }

    impl Endpoint for DeleteOffering {
        type Response = ();

        fn method(&self) -> Method {
            Method::DELETE
        }

        fn path(&self) -> String {
            offering_path(&self.catalog_identifier, &self.offering_id)
        }

        fn validate(&self) -> Result<(), Error> {
            require_offering(&self.catalog_identifier, &self.offering_id)
        }
    }
}

pub use list_offering_audits::ListOfferingAudits;
mod list_offering_audits {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct ListOfferingAudits {
        pub catalog_identifier: String,
        pub offering_id: String,
        pub params: ListAuditsParams,
    }

    impl Endpoint for ListOfferingAudits {
        type Response = AuditLogs;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            format!(
                "{}/audits",
                offering_path(&self.catalog_identifier, &self.offering_id)
            )
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn validate(&self) -> Result<(), Error> {
            require_offering(&self.catalog_identifier, &self.offering_id)
        }
    }

    impl PaginatedEndpoint for ListOfferingAudits {
        type Cursor = String;

        fn cursor(&self) -> Option<&String> {
            self.params.start.as_ref()
        }

        fn set_cursor(&mut self, cursor: String) {
            self.params.start = Some(cursor);
        }
    }
}

pub use get_offering_audit::GetOfferingAudit;
mod get_offering_audit {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct GetOfferingAudit {
        pub catalog_identifier: String,
        pub offering_id: String,
        pub auditlog_identifier: String,
        pub params: GetAuditParams,
    }

    impl Endpoint for GetOfferingAudit {
        type Response = AuditLog;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            format!(
                "{}/audits/{}",
                offering_path(&self.catalog_identifier, &self.offering_id),
                encode_path_segment(&self.auditlog_identifier)
            )
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn validate(&self) -> Result<(), Error> {
            require_offering(&self.catalog_identifier, &self.offering_id)?;
            require_non_empty("auditlog_identifier", &self.auditlog_identifier)
        }
    }
}

pub use set_offering_publish::SetOfferingPublish;
mod set_offering_publish {
    use super::*;

    /// Approves or revokes publishing of an offering to a target.
    #[derive(Clone, Debug, Default)]
    pub struct SetOfferingPublish {
        pub catalog_identifier: String,
        pub offering_id: String,
        /// Type of approval: `pc_managed`, `allow_request`, `ibm`, `public`.
        pub approval_type: String,
        /// `true` or `false`.
        pub approved: String,
        pub portal_record: Option<String>,
        pub portal_url: Option<String>,
        /// IAM token of partner center.
        pub x_approver_token: Option<String>,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Serialize)]
    struct SetOfferingPublishParams<'a> {
        portal_record: Option<&'a str>,
        portal_url: Option<&'a str>,
    }

    impl Endpoint for SetOfferingPublish {
        type Response = ApprovalResult;

        fn method(&self) -> Method {
            Method::POST
        }

        fn path(&self) -> String {
            format!(
                "{}/publish/{}/{}",
                offering_path(&self.catalog_identifier, &self.offering_id),
                encode_path_segment(&self.approval_type),
                encode_path_segment(&self.approved)
            )
        }

        fn query(&self) -> Option<String> {
            serialize_query(&SetOfferingPublishParams {
                portal_record: self.portal_record.as_deref(),
                portal_url: self.portal_url.as_deref(),
            })
        }

        fn headers(&self) -> Option<HeaderMap> {
            header_map([(X_APPROVER_TOKEN, self.x_approver_token.as_deref())])
        }

        fn validate(&self) -> Result<(), Error> {
            require_offering(&self.catalog_identifier, &self.offering_id)?;
            require_non_empty("approval_type", &self.approval_type)?;
            require_non_empty("approved", &self.approved)?;
            validate_header("x_approver_token", self.x_approver_token.as_deref())
        }
    }
}

pub use deprecate_offering::{DeprecateOffering, DeprecateOfferingBody};
mod deprecate_offering {
    use super::*;

    /// Starts (`setting = "true"`) or cancels (`"false"`) the deprecation of an offering.
    #[derive(Clone, Debug, Default)]
    pub struct DeprecateOffering {
        pub catalog_identifier: String,
        pub offering_id: String,
        pub setting: String,
        pub body: DeprecateOfferingBody,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct DeprecateOfferingBody {
        /// Additional information that users can provide to be displayed in deprecation
        /// notification.
        pub description: Option<String>,
        /// Specifies the amount of days until product is not available in catalog.
        pub days_until_deprecate: Option<i64>,
    }

    impl Endpoint for DeprecateOffering {
        type Response = ();

        fn method(&self) -> Method {
            Method::POST
        }

        fn path(&self) -> String {
            format!(
                "{}/deprecate/{}",
                offering_path(&self.catalog_identifier, &self.offering_id),
                encode_path_segment(&self.setting)
            )
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }

        fn validate(&self) -> Result<(), Error> {
            require_offering(&self.catalog_identifier, &self.offering_id)?;
            require_non_empty("setting", &self.setting)
        }
    }
}

pub use share_offering::ShareOffering;
mod share_offering {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct ShareOffering {
        pub catalog_identifier: String,
        pub offering_id: String,
        pub body: ShareSetting,
    }

    impl Endpoint for ShareOffering {
        type Response = ShareSetting;

        fn method(&self) -> Method {
            Method::POST
        }

        fn path(&self) -> String {
            format!(
                "{}/share",
                offering_path(&self.catalog_identifier, &self.offering_id)
            )
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }

        fn validate(&self) -> Result<(), Error> {
            require_offering(&self.catalog_identifier, &self.offering_id)
        }
    }
}

pub use get_offering_access_list::{GetOfferingAccessList, GetOfferingAccessListParams};
mod get_offering_access_list {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct GetOfferingAccessList {
        pub catalog_identifier: String,
        pub offering_id: String,
        pub params: GetOfferingAccessListParams,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct GetOfferingAccessListParams {
        pub start: Option<String>,
        pub limit: Option<i64>,
    }

    impl Endpoint for GetOfferingAccessList {
        type Response = AccessListResult;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            format!(
                "{}/access",
                offering_path(&self.catalog_identifier, &self.offering_id)
            )
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn validate(&self) -> Result<(), Error> {
            require_offering(&self.catalog_identifier, &self.offering_id)
        }
    }

    impl PaginatedEndpoint for GetOfferingAccessList {
        type Cursor = String;

        fn cursor(&self) -> Option<&String> {
            self.params.start.as_ref()
        }

        fn set_cursor(&mut self, cursor: String) {
            self.params.start = Some(cursor);
        }
    }
}

pub use add_offering_access_list::AddOfferingAccessList;
mod add_offering_access_list {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct AddOfferingAccessList {
        pub catalog_identifier: String,
        pub offering_id: String,
        /// Accounts (`-acct-<id>`), enterprises (`-ent-<id>`) or account groups (`-entgrp-<id>`).
        pub accesses: Vec<String>,
    }

    impl Endpoint for AddOfferingAccessList {
        type Response = AccessListBulkResponse;

        fn method(&self) -> Method {
            Method::POST
        }

        fn path(&self) -> String {
            format!(
                "{}/access",
                offering_path(&self.catalog_identifier, &self.offering_id)
            )
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.accesses)
        }

        fn validate(&self) -> Result<(), Error> {
            require_offering(&self.catalog_identifier, &self.offering_id)
        }
    }
}

pub use delete_offering_access_list::DeleteOfferingAccessList;
mod delete_offering_access_list {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct DeleteOfferingAccessList {
        pub catalog_identifier: String,
        pub offering_id: String,
        pub accesses: Vec<String>,
    }

    impl Endpoint for DeleteOfferingAccessList {
        type Response = AccessListBulkResponse;

        fn method(&self) -> Method {
            Method::DELETE
        }

        fn path(&self) -> String {
            format!(
                "{}/access",
                offering_path(&self.catalog_identifier, &self.offering_id)
            )
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.accesses)
        }

        fn validate(&self) -> Result<(), Error> {
            require_offering(&self.catalog_identifier, &self.offering_id)
        }
    }
}

pub use get_offering_updates::{GetOfferingUpdates, GetOfferingUpdatesParams};
mod get_offering_updates {
    use super::*;

    /// Lists the versions an installed offering version can be updated to.
    #[derive(Clone, Debug, Default)]
    pub struct GetOfferingUpdates {
        pub catalog_identifier: String,
        pub offering_id: String,
        /// IAM Refresh token.
        pub x_auth_refresh_token: String,
        pub params: GetOfferingUpdatesParams,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct GetOfferingUpdatesParams {
        /// The kind of offering (e.g, helm, ova, terraform ...).
        pub kind: String,
        /// The target kind of the install (e.g. iks, roks, vcenter, power-iaas, terraform).
        pub target: Option<String>,
        /// optionaly provide an existing version to check updates for if one is not given,
        /// all version will be returned.
        pub version: Option<String>,
        pub cluster_id: Option<String>,
        pub region: Option<String>,
        pub resource_group_id: Option<String>,
        pub namespace: Option<String>,
        /// The sha value of the currently installed version.
        pub sha: Option<String>,
        /// Optionally provide the channel the installed version is on.
        pub channel: Option<String>,
        /// The comma separated namespaces an operator is installed to.
        pub namespaces: Option<String>,
        pub all_namespaces: Option<bool>,
    }

    impl Endpoint for GetOfferingUpdates {
        type Response = Vec<VersionUpdateDescriptor>;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            format!(
                "{}/updates",
                offering_path(&self.catalog_identifier, &self.offering_id)
            )
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn headers(&self) -> Option<HeaderMap> {
            header_map([(X_AUTH_REFRESH_TOKEN, Some(self.x_auth_refresh_token.as_str()))])
        }

        fn validate(&self) -> Result<(), Error> {
            require_offering(&self.catalog_identifier, &self.offering_id)?;
            require_non_empty("kind", &self.params.kind)?;
            require_non_empty("x_auth_refresh_token", &self.x_auth_refresh_token)?;
            validate_header("x_auth_refresh_token", Some(self.x_auth_refresh_token.as_str()))
        }
    }
}

pub use get_offering_source::{GetOfferingSource, GetOfferingSourceParams};
mod get_offering_source {
    use super::*;

    /// Downloads the source of an offering version as an archive.
    #[derive(Clone, Debug, Default)]
    pub struct GetOfferingSource {
        pub params: GetOfferingSourceParams,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct GetOfferingSourceParams {
        /// The version being requested.
        pub version: String,
        #[serde(rename = "catalogID")]
        pub catalog_id: Option<String>,
        /// The name of the offering, used instead of its id.
        pub name: Option<String>,
        /// The ID of the offering.
        pub id: Option<String>,
        /// The kind of offering (e.g. helm, ova, terraform...).
        pub kind: Option<String>,
        /// The channel value of the specified version.
        pub channel: Option<String>,
        /// The programmatic flavor name of the specified version.
        pub flavor: Option<String>,
        /// If false (the default), the root folder from the original onboarded tgz file is
        /// removed. If true, the root folder is returned.
        #[serde(rename = "asIs")]
        pub as_is: Option<bool>,
        /// The install type. Only accepts empty string, 'fullstack' or 'extension'.
        #[serde(rename = "installType")]
        pub install_type: Option<String>,
    }

    impl Endpoint for GetOfferingSource {
        type Response = RawBody;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            "/offering/source".to_string()
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn accept(&self) -> Cow<'static, str> {
            Cow::Borrowed("application/yaml")
        }

        fn response_format(&self) -> ResponseFormat {
            ResponseFormat::Binary
        }

        fn validate(&self) -> Result<(), Error> {
            require_non_empty("version", &self.params.version)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JsonPatchOperationOp;
    use pretty_assertions::assert_eq;
    use url::Url;

    fn base_url() -> Url {
        Url::parse(crate::DEFAULT_SERVICE_URL).unwrap()
    }

    #[test]
    fn offering_path_params_are_encoded() {
        let endpoint = GetOffering {
            catalog_identifier: "my catalog".to_string(),
            offering_id: "a/b".to_string(),
            params: GetOfferingParams {
                offering_type: Some("name".to_string()),
                digest: None,
            },
        };
        assert_eq!(
            endpoint.url(&base_url()).as_str(),
            "https://cm.globalcatalog.cloud.ibm.com/api/v1-beta/catalogs/my%20catalog/offerings/a%2Fb?type=name"
        );
    }

    #[test]
    fn update_offering_sends_json_patch() {
        let endpoint = UpdateOffering {
            catalog_identifier: "catalog".to_string(),
            offering_id: "offering".to_string(),
            if_match: "\"1-abc\"".to_string(),
            operations: vec![JsonPatchOperation::replace("/label", "new label")],
        };
        assert_eq!(endpoint.content_type(), JSON_PATCH_CONTENT_TYPE);
        assert_eq!(endpoint.headers().unwrap()[IF_MATCH], "\"1-abc\"");
        let body: serde_json::Value = serde_json::from_str(&endpoint.body().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!([{"op": "replace", "path": "/label", "value": "new label"}])
        );
        assert_eq!(endpoint.operations[0].op, JsonPatchOperationOp::Replace);
    }

    #[test]
    fn update_offering_requires_if_match() {
        let endpoint = UpdateOffering {
            catalog_identifier: "catalog".to_string(),
            offering_id: "offering".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            endpoint.validate(),
            Err(Error::InvalidArgument { arg, .. }) if arg == "if_match"
        ));
    }

    #[test]
    fn import_offering_query_and_token() {
        let endpoint = ImportOffering {
            catalog_identifier: "catalog".to_string(),
            params: ImportOfferingParams {
                offering_id: Some("offering-1".to_string()),
            },
            x_auth_token: Some("git-token".to_string()),
            body: ImportOfferingBody {
                zipurl: Some("https://github.com/org/repo/archive/v1.0.0.tar.gz".to_string()),
                ..Default::default()
            },
        };
        assert_eq!(endpoint.query().as_deref(), Some("offeringID=offering-1"));
        assert_eq!(endpoint.headers().unwrap()[X_AUTH_TOKEN], "git-token");
        assert!(endpoint.validate().is_ok());
    }

    #[test]
    fn reload_offering_query_and_token() {
        let endpoint = ReloadOffering {
            catalog_identifier: "catalog".to_string(),
            offering_id: "offering".to_string(),
            params: ReloadOfferingParams {
                target_version: "1.1.0".to_string(),
                repo_type: Some("public_git".to_string()),
                ..Default::default()
            },
            x_auth_token: Some("git-token".to_string()),
            ..Default::default()
        };
        assert!(endpoint.validate().is_ok());
        assert_eq!(endpoint.method(), Method::PUT);
        assert_eq!(endpoint.path(), "/catalogs/catalog/offerings/offering/reload");
        assert_eq!(
            endpoint.query().as_deref(),
            Some("targetVersion=1.1.0&repoType=public_git")
        );
        assert_eq!(endpoint.headers().unwrap()[X_AUTH_TOKEN], "git-token");
    }

    #[test]
    fn reload_offering_requires_target_version() {
        let endpoint = ReloadOffering {
            catalog_identifier: "catalog".to_string(),
            offering_id: "offering".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            endpoint.validate(),
            Err(Error::InvalidArgument { arg, .. }) if arg == "target_version"
        ));
    }

    #[test]
    fn set_offering_publish_path() {
        let endpoint = SetOfferingPublish {
            catalog_identifier: "catalog".to_string(),
            offering_id: "offering".to_string(),
            approval_type: "pc_managed".to_string(),
            approved: "true".to_string(),
            ..Default::default()
        };
        assert_eq!(
            endpoint.path(),
            "/catalogs/catalog/offerings/offering/publish/pc_managed/true"
        );
        assert!(endpoint.query().is_none());
        assert!(endpoint.headers().is_none());
    }
}
