use super::{header_map, validate_header, IF_MATCH, JSON_PATCH_CONTENT_TYPE, X_AUTH_REFRESH_TOKEN};
use crate::models::{
    DeployRequestBody, Flavor, ImageManifest, InstallStatus, JsonPatchOperation, Offering,
    Validation, Version,
};
use cloud_api_framework::{
    encode_path_segment, require_non_empty,
    reqwest::{header::HeaderMap, Method},
    serialize_body, serialize_query, Endpoint, Error, ResponseFormat,
};
use serde::Serialize;
use std::{borrow::Cow, collections::BTreeMap};

fn version_path(version_loc_id: &str) -> String {
    format!("/versions/{}", encode_path_segment(version_loc_id))
}

fn require_version(version_loc_id: &str) -> Result<(), Error> {
    require_non_empty("version_loc_id", version_loc_id)
}

fn require_refresh_token(x_auth_refresh_token: &str) -> Result<(), Error> {
    require_non_empty("x_auth_refresh_token", x_auth_refresh_token)?;
    validate_header("x_auth_refresh_token", Some(x_auth_refresh_token))
}

/// A POST without body on `/versions/{version_loc_id}/<action>`.
macro_rules! version_action {
    ($(#[$meta:meta])* $module:ident :: $name:ident => $action:literal) => {
        pub use $module::$name;
        mod $module {
            use super::*;

            $(#[$meta])*
            #[derive(Clone, Debug, Default)]
            pub struct $name {
                /// A dotted value of `catalogID`.`versionID`.
                pub version_loc_id: String,
            }

            impl Endpoint for $name {
                type Response = ();

                fn method(&self) -> Method {
                    Method::POST
                }

                fn path(&self) -> String {
                    format!("{}/{}", version_path(&self.version_loc_id), $action)
                }

                fn validate(&self) -> Result<(), Error> {
                    require_version(&self.version_loc_id)
                }
            }
        }
    };
}

pub use get_version::GetVersion;
mod get_version {
    use super::*;

    /// Returns the offering with only the requested version in it.
    #[derive(Clone, Debug, Default)]
    pub struct GetVersion {
        pub version_loc_id: String,
    }

    impl Endpoint for GetVersion {
        type Response = Offering;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            version_path(&self.version_loc_id)
        }

        fn validate(&self) -> Result<(), Error> {
            require_version(&self.version_loc_id)
        }
    }
}

pub use delete_version::DeleteVersion;
mod delete_version {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct DeleteVersion {
        pub version_loc_id: String,
    }

    impl Endpoint for DeleteVersion {
        type Response = ();

        fn method(&self) -> Method {
            Method::DELETE
        }

        fn path(&self) -> String {
            version_path(&self.version_loc_id)
        }

        fn validate(&self) -> Result<(), Error> {
            require_version(&self.version_loc_id)
        }
    }
}

pub use patch_update_version::PatchUpdateVersion;
mod patch_update_version {
    use super::*;

    /// Applies a JSON patch to a version. Paths are relative to the offering, e.g.
    /// `/kinds/0/versions/0/tags`.
    #[derive(Clone, Debug, Default)]
    pub struct PatchUpdateVersion {
        pub version_loc_id: String,
        /// Offering etag, i.e. the quoted revision: `"<_rev>"`.
        pub if_match: String,
        pub operations: Vec<JsonPatchOperation>,
    }

    impl Endpoint for PatchUpdateVersion {
        type Response = Offering;

        fn method(&self) -> Method {
            Method::PATCH
        }

        fn path(&self) -> String {
            version_path(&self.version_loc_id)
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
            require_version(&self.version_loc_id)?;
            require_non_empty("if_match", &self.if_match)?;
            validate_header("if_match", Some(self.if_match.as_str()))
        }
    }
}

pub use get_offering_working_copy::GetOfferingWorkingCopy;
mod get_offering_working_copy {
    use super::*;

    /// Creates (or returns) the draft copy of a published version.
    #[derive(Clone, Debug, Default)]
    pub struct GetOfferingWorkingCopy {
        pub version_loc_id: String,
    }

    impl Endpoint for GetOfferingWorkingCopy {
        type Response = Version;

        fn method(&self) -> Method {
            Method::POST
        }

        fn path(&self) -> String {
            format!("{}/workingcopy", version_path(&self.version_loc_id))
        }

        fn validate(&self) -> Result<(), Error> {
            require_version(&self.version_loc_id)
        }
    }
}

pub use copy_version::{CopyVersion, CopyVersionBody};
mod copy_version {
    use super::*;
    use serde_with::{base64::Base64, serde_as};

    /// Copies a version to a new target kind.
    #[derive(Clone, Debug, Default)]
    pub struct CopyVersion {
        pub version_loc_id: String,
        pub body: CopyVersionBody,
    }

    #[serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct CopyVersionBody {
        pub tags: Option<Vec<String>>,
        /// Byte array representing the content to be imported.
        #[serde_as(as = "Option<Base64>")]
        pub content: Option<Vec<u8>>,
        /// Target kinds. Current valid values are 'iks', 'roks', 'vcenter', 'power-iaas', and
        /// 'terraform'.
        pub target_kinds: Option<Vec<String>>,
        pub format_kind: Option<String>,
        pub flavor: Option<Flavor>,
        pub working_directory: Option<String>,
    }

    impl Endpoint for CopyVersion {
        type Response = ();

        fn method(&self) -> Method {
            Method::POST
        }

        fn path(&self) -> String {
            format!("{}/copy", version_path(&self.version_loc_id))
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }

        fn validate(&self) -> Result<(), Error> {
            require_version(&self.version_loc_id)
        }
    }
}

pub use get_offering_about::GetOfferingAbout;
mod get_offering_about {
    use super::*;

    /// The readme of a version, as markdown.
    #[derive(Clone, Debug, Default)]
    pub struct GetOfferingAbout {
        pub version_loc_id: String,
    }

    impl Endpoint for GetOfferingAbout {
        type Response = String;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            format!("{}/about", version_path(&self.version_loc_id))
        }

        fn accept(&self) -> Cow<'static, str> {
            Cow::Borrowed("text/markdown")
        }

        fn response_format(&self) -> ResponseFormat {
            ResponseFormat::Text
        }

        fn validate(&self) -> Result<(), Error> {
            require_version(&self.version_loc_id)
        }
    }
}

pub use get_offering_license::GetOfferingLicense;
mod get_offering_license {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct GetOfferingLicense {
        pub version_loc_id: String,
        /// The ID of the license, which maps to the file name in the 'licenses' directory of
        /// this version's tgz file.
        pub license_id: String,
    }

    impl Endpoint for GetOfferingLicense {
        type Response = String;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            format!(
                "{}/licenses/{}",
                version_path(&self.version_loc_id),
                encode_path_segment(&self.license_id)
            )
        }

        fn accept(&self) -> Cow<'static, str> {
            Cow::Borrowed("text/plain")
        }

        fn response_format(&self) -> ResponseFormat {
            ResponseFormat::Text
        }

        fn validate(&self) -> Result<(), Error> {
            require_version(&self.version_loc_id)?;
            require_non_empty("license_id", &self.license_id)
        }
    }
}

pub use get_offering_container_images::GetOfferingContainerImages;
mod get_offering_container_images {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct GetOfferingContainerImages {
        pub version_loc_id: String,
    }

    impl Endpoint for GetOfferingContainerImages {
        type Response = ImageManifest;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            format!("{}/containerImages", version_path(&self.version_loc_id))
        }

        fn validate(&self) -> Result<(), Error> {
            require_version(&self.version_loc_id)
        }
    }
}

version_action!(
    /// Deprecates a version immediately.
    deprecate_version::DeprecateVersion => "deprecate"
);

pub use set_deprecate_version::{SetDeprecateVersion, SetDeprecateVersionBody};
mod set_deprecate_version {
    use super::*;

    /// Starts (`setting = "true"`) or cancels (`"false"`) a scheduled deprecation.
    #[derive(Clone, Debug, Default)]
    pub struct SetDeprecateVersion {
        pub version_loc_id: String,
        pub setting: String,
        pub body: SetDeprecateVersionBody,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct SetDeprecateVersionBody {
        /// Additional information that users can provide to be displayed in deprecation
        /// notification.
        pub description: Option<String>,
        /// Specifies the amount of days until product is not available in catalog.
        pub days_until_deprecate: Option<i64>,
    }

    impl Endpoint for SetDeprecateVersion {
        type Response = ();

        fn method(&self) -> Method {
            Method::POST
        }

        fn path(&self) -> String {
            format!(
                "{}/deprecate/{}",
                version_path(&self.version_loc_id),
                encode_path_segment(&self.setting)
            )
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }

        fn validate(&self) -> Result<(), Error> {
            require_version(&self.version_loc_id)?;
            require_non_empty("setting", &self.setting)
        }
    }
}

version_action!(
    /// Publishes a version to the account.
    account_publish_version::AccountPublishVersion => "account-publish"
);

version_action!(
    /// Publishes a version to IBMers in the public catalog.
    ibm_publish_version::IbmPublishVersion => "ibm-publish"
);

version_action!(
    /// Publishes a version to all users in the public catalog.
    public_publish_version::PublicPublishVersion => "public-publish"
);

version_action!(
    /// Commits a working copy into its version.
    commit_version::CommitVersion => "commit"
);

version_action!(
    /// Makes a version consumable by the users of the catalog.
    consumable_version::ConsumableVersion => "consume-publish"
);

version_action!(
    /// Suspends a published version.
    suspend_version::SuspendVersion => "suspend"
);

pub use validate_install::ValidateInstall;
mod validate_install {
    use super::*;

    /// Starts a validation install of a version on the given target.
    #[derive(Clone, Debug, Default)]
    pub struct ValidateInstall {
        pub version_loc_id: String,
        pub x_auth_refresh_token: String,
        pub body: DeployRequestBody,
    }

    impl Endpoint for ValidateInstall {
        type Response = ();

        fn method(&self) -> Method {
            Method::POST
        }

        fn path(&self) -> String {
            format!("{}/validation/install", version_path(&self.version_loc_id))
        }

        fn headers(&self) -> Option<HeaderMap> {
            header_map([(X_AUTH_REFRESH_TOKEN, Some(self.x_auth_refresh_token.as_str()))])
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }

        fn validate(&self) -> Result<(), Error> {
            require_version(&self.version_loc_id)?;
            require_refresh_token(&self.x_auth_refresh_token)
        }
    }
}

pub use get_validation_status::GetValidationStatus;
mod get_validation_status {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct GetValidationStatus {
        pub version_loc_id: String,
        pub x_auth_refresh_token: String,
    }

    impl Endpoint for GetValidationStatus {
        type Response = Validation;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            format!("{}/validation/install", version_path(&self.version_loc_id))
        }

        fn headers(&self) -> Option<HeaderMap> {
            header_map([(X_AUTH_REFRESH_TOKEN, Some(self.x_auth_refresh_token.as_str()))])
        }

        fn validate(&self) -> Result<(), Error> {
            require_version(&self.version_loc_id)?;
            require_refresh_token(&self.x_auth_refresh_token)
        }
    }
}

pub use get_override_values::GetOverrideValues;
mod get_override_values {
    use super::*;

    /// The override values used by the last successful validation.
    #[derive(Clone, Debug, Default)]
    pub struct GetOverrideValues {
        pub version_loc_id: String,
    }

    impl Endpoint for GetOverrideValues {
        type Response = BTreeMap<String, serde_json::Value>;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            format!(
                "{}/validation/overridevalues",
                version_path(&self.version_loc_id)
            )
        }

        fn validate(&self) -> Result<(), Error> {
            require_version(&self.version_loc_id)
        }
    }
}

pub use install_version::InstallVersion;
mod install_version {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct InstallVersion {
        pub version_loc_id: String,
        pub x_auth_refresh_token: String,
        pub body: DeployRequestBody,
    }

    impl Endpoint for InstallVersion {
        type Response = ();

        fn method(&self) -> Method {
            Method::POST
        }

        fn path(&self) -> String {
            format!("{}/install", version_path(&self.version_loc_id))
        }

        fn headers(&self) -> Option<HeaderMap> {
            header_map([(X_AUTH_REFRESH_TOKEN, Some(self.x_auth_refresh_token.as_str()))])
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }

        fn validate(&self) -> Result<(), Error> {
            require_version(&self.version_loc_id)?;
            require_refresh_token(&self.x_auth_refresh_token)
        }
    }
}

pub use preinstall_version::PreinstallVersion;
mod preinstall_version {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct PreinstallVersion {
        pub version_loc_id: String,
        pub x_auth_refresh_token: String,
        pub body: DeployRequestBody,
    }

    impl Endpoint for PreinstallVersion {
        type Response = ();

        fn method(&self) -> Method {
            Method::POST
        }

        fn path(&self) -> String {
            format!("{}/preinstall", version_path(&self.version_loc_id))
        }

        fn headers(&self) -> Option<HeaderMap> {
            header_map([(X_AUTH_REFRESH_TOKEN, Some(self.x_auth_refresh_token.as_str()))])
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }

        fn validate(&self) -> Result<(), Error> {
            require_version(&self.version_loc_id)?;
            require_refresh_token(&self.x_auth_refresh_token)
        }
    }
}

pub use get_preinstall::{GetPreinstall, GetPreinstallParams};
mod get_preinstall {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct GetPreinstall {
        pub version_loc_id: String,
        pub x_auth_refresh_token: String,
        pub params: GetPreinstallParams,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct GetPreinstallParams {
        /// ID of the cluster.
        pub cluster_id: Option<String>,
        /// Cluster region.
        pub region: Option<String>,
        /// Required if the version's pre-install scope is `namespace`.
        pub namespace: Option<String>,
    }

    impl Endpoint for GetPreinstall {
        type Response = InstallStatus;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            format!("{}/preinstall", version_path(&self.version_loc_id))
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn headers(&self) -> Option<HeaderMap> {
            header_map([(X_AUTH_REFRESH_TOKEN, Some(self.x_auth_refresh_token.as_str()))])
        }

        fn validate(&self) -> Result<(), Error> {
            require_version(&self.version_loc_id)?;
            require_refresh_token(&self.x_auth_refresh_token)
        }
    }
}
