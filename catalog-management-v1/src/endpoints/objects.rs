use super::{GetAuditParams, ListAuditsParams};
use crate::{
    models::{
        Access, AccessListBulkResponse, AccessListResult, AuditLog, AuditLogs, CatalogObject,
        ObjectListResult, ObjectSearchResult,
    },
    pagination::PaginatedEndpoint,
};
use cloud_api_framework::{
    encode_path_segment, require_non_empty, reqwest::Method, serialize_body, serialize_query,
    Endpoint, Error,
};
use serde::Serialize;

fn objects_path(catalog_identifier: &str) -> String {
    format!("/catalogs/{}/objects", encode_path_segment(catalog_identifier))
}

fn object_path(catalog_identifier: &str, object_identifier: &str) -> String {
    format!(
        "{}/{}",
        objects_path(catalog_identifier),
        encode_path_segment(object_identifier)
    )
}

fn require_object(catalog_identifier: &str, object_identifier: &str) -> Result<(), Error> {
    require_non_empty("catalog_identifier", catalog_identifier)?;
    require_non_empty("object_identifier", object_identifier)
}

pub use list_objects::{ListObjects, ListObjectsParams};
mod list_objects {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct ListObjects {
        pub catalog_identifier: String,
        pub params: ListObjectsParams,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct ListObjectsParams {
        pub limit: Option<i64>,
        pub offset: Option<i64>,
        /// Only return results that contain the specified string.
        pub name: Option<String>,
        /// The field on which the output is sorted. Sorts by default by **label** property.
        pub sort: Option<String>,
    }

    impl Endpoint for ListObjects {
        type Response = ObjectListResult;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            objects_path(&self.catalog_identifier)
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn validate(&self) -> Result<(), Error> {
            require_non_empty("catalog_identifier", &self.catalog_identifier)
        }
    }

    impl PaginatedEndpoint for ListObjects {
        type Cursor = i64;

        fn cursor(&self) -> Option<&i64> {
            self.params.offset.as_ref()
        }

        fn set_cursor(&mut self, cursor: i64) {
            self.params.offset = Some(cursor);
        }
    }
}

pub use create_object::CreateObject;
mod create_object {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct CreateObject {
        pub catalog_identifier: String,
        pub body: CatalogObject,
    }

    impl Endpoint for CreateObject {
        type Response = CatalogObject;

        fn method(&self) -> Method {
            Method::POST
        }

        fn path(&self) -> String {
            objects_path(&self.catalog_identifier)
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }

        fn validate(&self) -> Result<(), Error> {
            require_non_empty("catalog_identifier", &self.catalog_identifier)
        }
    }
}

pub use get_object::GetObject;
mod get_object {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct GetObject {
        pub catalog_identifier: String,
        pub object_identifier: String,
    }

    impl Endpoint for GetObject {
        type Response = CatalogObject;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            object_path(&self.catalog_identifier, &self.object_identifier)
        }

        fn validate(&self) -> Result<(), Error> {
            require_object(&self.catalog_identifier, &self.object_identifier)
        }
    }
}

pub use replace_object::ReplaceObject;
mod replace_object {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct ReplaceObject {
        pub catalog_identifier: String,
        pub object_identifier: String,
        pub body: CatalogObject,
    }

    impl Endpoint for ReplaceObject {
        type Response = CatalogObject;

        fn method(&self) -> Method {
            Method::PUT
        }

        fn path(&self) -> String {
            object_path(&self.catalog_identifier, &self.object_identifier)
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }

        fn validate(&self) -> Result<(), Error> {
            require_object(&self.catalog_identifier, &self.object_identifier)
        }
    }
}

pub use delete_object::DeleteObject;
mod delete_object {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct DeleteObject {
        pub catalog_identifier: String,
        pub object_identifier: String,
    }

    impl Endpoint for DeleteObject {
        type Response = ();

        fn method(&self) -> Method {
            Method::DELETE
        }

        fn path(&self) -> String {
            object_path(&self.catalog_identifier, &self.object_identifier)
        }

        fn validate(&self) -> Result<(), Error> {
            require_object(&self.catalog_identifier, &self.object_identifier)
        }
    }
}

pub use list_object_audits::ListObjectAudits;
mod list_object_audits {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct ListObjectAudits {
        pub catalog_identifier: String,
        pub object_identifier: String,
        pub params: ListAuditsParams,
    }

    impl Endpoint for ListObjectAudits {
        type Response = AuditLogs;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            format!(
                "{}/audits",
                object_path(&self.catalog_identifier, &self.object_identifier)
            )
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn validate(&self) -> Result<(), Error> {
            require_object(&self.catalog_identifier, &self.object_identifier)
        }
    }

    impl PaginatedEndpoint for ListObjectAudits {
        type Cursor = String;

        fn cursor(&self) -> Option<&String> {
            self.params.start.as_ref()
        }

        fn set_cursor(&mut self, cursor: String) {
            self.params.start = Some(cursor);
        }
    }
}

pub use get_object_audit::GetObjectAudit;
mod get_object_audit {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct GetObjectAudit {
        pub catalog_identifier: String,
        pub object_identifier: String,
        pub auditlog_identifier: String,
        pub params: GetAuditParams,
    }

    impl Endpoint for GetObjectAudit {
        type Response = AuditLog;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            format!(
                "{}/audits/{}",
                object_path(&self.catalog_identifier, &self.object_identifier),
                encode_path_segment(&self.auditlog_identifier)
            )
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn validate(&self) -> Result<(), Error> {
            require_object(&self.catalog_identifier, &self.object_identifier)?;
            require_non_empty("auditlog_identifier", &self.auditlog_identifier)
        }
    }
}

pub use search_objects::{SearchObjects, SearchObjectsParams};
mod search_objects {
    use super::*;

    /// Searches objects across all catalogs of the account.
    #[derive(Clone, Debug, Default)]
    pub struct SearchObjects {
        pub params: SearchObjectsParams,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct SearchObjectsParams {
        /// Lucene query string.
        pub query: String,
        /// The kind of the object. It will default to "vpe".
        pub kind: Option<String>,
        pub limit: Option<i64>,
        pub offset: Option<i64>,
        /// When true, hide private objects that correspond to public or IBM published objects.
        pub collapse: Option<bool>,
        /// Display a digests of search results, has default value of true.
        pub digest: Option<bool>,
    }

    impl Endpoint for SearchObjects {
        type Response = ObjectSearchResult;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            "/objects".to_string()
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn validate(&self) -> Result<(), Error> {
            require_non_empty("query", &self.params.query)
        }
    }

    impl PaginatedEndpoint for SearchObjects {
        type Cursor = i64;

        fn cursor(&self) -> Option<&i64> {
            self.params.offset.as_ref()
        }

        fn set_cursor(&mut self, cursor: i64) {
            self.params.offset = Some(cursor);
        }
    }
}

pub use get_object_access_list::{GetObjectAccessList, GetObjectAccessListParams};
mod get_object_access_list {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct GetObjectAccessList {
        pub catalog_identifier: String,
        pub object_identifier: String,
        pub params: GetObjectAccessListParams,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct GetObjectAccessListParams {
        pub start: Option<String>,
        pub limit: Option<i64>,
    }

    impl Endpoint for GetObjectAccessList {
        type Response = AccessListResult;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            format!(
                "{}/access",
                object_path(&self.catalog_identifier, &self.object_identifier)
            )
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn validate(&self) -> Result<(), Error> {
            require_object(&self.catalog_identifier, &self.object_identifier)
        }
    }

    impl PaginatedEndpoint for GetObjectAccessList {
        type Cursor = String;

        fn cursor(&self) -> Option<&String> {
            self.params.start.as_ref()
        }

        fn set_cursor(&mut self, cursor: String) {
            self.params.start = Some(cursor);
        }
    }
}

pub use add_object_access_list::AddObjectAccessList;
mod add_object_access_list {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct AddObjectAccessList {
        pub catalog_identifier: String,
        pub object_identifier: String,
        /// Accounts (`-acct-<id>`), enterprises (`-ent-<id>`) or account groups (`-entgrp-<id>`).
        pub accesses: Vec<String>,
    }

    impl Endpoint for AddObjectAccessList {
        type Response = AccessListBulkResponse;

        fn method(&self) -> Method {
            Method::POST
        }

        fn path(&self) -> String {
            format!(
                "{}/access",
                object_path(&self.catalog_identifier, &self.object_identifier)
            )
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.accesses)
        }

        fn validate(&self) -> Result<(), Error> {
            require_object(&self.catalog_identifier, &self.object_identifier)
        }
    }
}

pub use delete_object_access_list::DeleteObjectAccessList;
mod delete_object_access_list {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct DeleteObjectAccessList {
        pub catalog_identifier: String,
        pub object_identifier: String,
        pub accesses: Vec<String>,
    }

    impl Endpoint for DeleteObjectAccessList {
        type Response = AccessListBulkResponse;

        fn method(&self) -> Method {
            Method::DELETE
        }

        fn path(&self) -> String {
            format!(
                "{}/access",
                object_path(&self.catalog_identifier, &self.object_identifier)
            )
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.accesses)
        }

        fn validate(&self) -> Result<(), Error> {
            require_object(&self.catalog_identifier, &self.object_identifier)
        }
    }
}

fn object_access_path(
    catalog_identifier: &str,
    object_identifier: &str,
    access_identifier: &str,
) -> String {
    format!(
        "{}/access/{}",
        object_path(catalog_identifier, object_identifier),
        encode_path_segment(access_identifier)
    )
}

fn require_object_access(
    catalog_identifier: &str,
    object_identifier: &str,
    access_identifier: &str,
) -> Result<(), Error> {
    require_object(catalog_identifier, object_identifier)?;
    require_non_empty("access_identifier", access_identifier)
}

pub use get_object_access::GetObjectAccess;
mod get_object_access {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct GetObjectAccess {
        pub catalog_identifier: String,
        pub object_identifier: String,
        /// Identifier of the access: an account, enterprise or account group.
        pub access_identifier: String,
    }

    impl Endpoint for GetObjectAccess {
        type Response = Access;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            object_access_path(
                &self.catalog_identifier,
                &self.object_identifier,
                &self.access_identifier,
            )
        }

        fn validate(&self) -> Result<(), Error> {
            require_object_access(
                &self.catalog_identifier,
                &self.object_identifier,
                &self.access_identifier,
            )
        }
    }
}

pub use create_object_access::CreateObjectAccess;
mod create_object_access {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct CreateObjectAccess {
        pub catalog_identifier: String,
        pub object_identifier: String,
        pub access_identifier: String,
    }

    impl Endpoint for CreateObjectAccess {
        type Response = ();

        fn method(&self) -> Method {
            Method::POST
        }

        fn path(&self) -> String {
            object_access_path(
                &self.catalog_identifier,
                &self.object_identifier,
                &self.access_identifier,
            )
        }

        fn validate(&self) -> Result<(), Error> {
            require_object_access(
                &self.catalog_identifier,
                &self.object_identifier,
                &self.access_identifier,
            )
        }
    }
}

pub use delete_object_access::DeleteObjectAccess;
mod delete_object_access {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct DeleteObjectAccess {
        pub catalog_identifier: String,
        pub object_identifier: String,
        pub access_identifier: String,
    }

    impl Endpoint for DeleteObjectAccess {
        type Response = ();

        fn method(&self) -> Method {
            Method::DELETE
        }

        fn path(&self) -> String {
            object_access_path(
                &self.catalog_identifier,
                &self.object_identifier,
                &self.access_identifier,
            )
        }

        fn validate(&self) -> Result<(), Error> {
            require_object_access(
                &self.catalog_identifier,
                &self.object_identifier,
                &self.access_identifier,
            )
        }
    }
}
