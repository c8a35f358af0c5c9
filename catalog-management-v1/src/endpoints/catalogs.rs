use super::{GetAuditParams, ListAuditsParams};
use crate::{
    models::{AuditLog, AuditLogs, Catalog, CatalogSearchResult, OfferingSearchResult},
    pagination::PaginatedEndpoint,
};
use cloud_api_framework::{
    encode_path_segment, require_non_empty, reqwest::Method, serialize_body, serialize_query,
    Endpoint, Error,
};
use serde::Serialize;

fn catalog_path(catalog_identifier: &str) -> String {
    format!("/catalogs/{}", encode_path_segment(catalog_identifier))
}

pub use list_catalogs::ListCatalogs;
mod list_catalogs {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct ListCatalogs {}

    impl Endpoint for ListCatalogs {
        type Response = CatalogSearchResult;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            "/catalogs".to_string()
        }
    }
}

pub use create_catalog::CreateCatalog;
mod create_catalog {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct CreateCatalog {
        pub body: Catalog,
    }

    impl Endpoint for CreateCatalog {
        type Response = Catalog;

        fn method(&self) -> Method {
            Method::POST
        }

        fn path(&self) -> String {
            "/catalogs".to_string()
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }
    }
}

pub use get_catalog::GetCatalog;
mod get_catalog {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct GetCatalog {
        pub catalog_identifier: String,
    }

    impl Endpoint for GetCatalog {
        type Response = Catalog;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            catalog_path(&self.catalog_identifier)
        }

        fn validate(&self) -> Result<(), Error> {
            require_non_empty("catalog_identifier", &self.catalog_identifier)
        }
    }
}

pub use replace_catalog::ReplaceCatalog;
mod replace_catalog {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct ReplaceCatalog {
        pub catalog_identifier: String,
        pub body: Catalog,
    }

    impl Endpoint for ReplaceCatalog {
        type Response = Catalog;

        fn method(&self) -> Method {
            Method::PUT
        }

        fn path(&self) -> String {
            catalog_path(&self.catalog_identifier)
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }

        fn validate(&self) -> Result<(), Error> {
            require_non_empty("catalog_identifier", &self.catalog_identifier)
        }
    }
}

pub use delete_catalog::DeleteCatalog;
mod delete_catalog {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct DeleteCatalog {
        pub catalog_identifier: String,
    }

    impl Endpoint for DeleteCatalog {
        type Response = ();

        fn method(&self) -> Method {
            Method::DELETE
        }

        fn path(&self) -> String {
            catalog_path(&self.catalog_identifier)
        }

        fn validate(&self) -> Result<(), Error> {
            require_non_empty("catalog_identifier", &self.catalog_identifier)
        }
    }
}

pub use list_catalog_audits::ListCatalogAudits;
mod list_catalog_audits {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct ListCatalogAudits {
        pub catalog_identifier: String,
        pub params: ListAuditsParams,
    }

    impl Endpoint for ListCatalogAudits {
        type Response = AuditLogs;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            format!("{}/audits", catalog_path(&self.catalog_identifier))
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn validate(&self) -> Result<(), Error> {
            require_non_empty("catalog_identifier", &self.catalog_identifier)
        }
    }

    impl PaginatedEndpoint for ListCatalogAudits {
        type Cursor = String;

        fn cursor(&self) -> Option<&String> {
            self.params.start.as_ref()
        }

        fn set_cursor(&mut self, cursor: String) {
            self.params.start = Some(cursor);
        }
    }
}

pub use get_catalog_audit::GetCatalogAudit;
mod get_catalog_audit {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct GetCatalogAudit {
        pub catalog_identifier: String,
        pub auditlog_identifier: String,
        pub params: GetAuditParams,
    }

    impl Endpoint for GetCatalogAudit {
        type Response = AuditLog;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            format!(
                "{}/audits/{}",
                catalog_path(&self.catalog_identifier),
                encode_path_segment(&self.auditlog_identifier)
            )
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn validate(&self) -> Result<(), Error> {
            require_non_empty("catalog_identifier", &self.catalog_identifier)?;
            require_non_empty("auditlog_identifier", &self.auditlog_identifier)
        }
    }
}

pub use get_consumption_offerings::{GetConsumptionOfferings, GetConsumptionOfferingsParams};
mod get_consumption_offerings {
    use super::*;

    /// Offerings of the public catalog and the catalogs visible to the account.
    #[derive(Clone, Debug, Default)]
    pub struct GetConsumptionOfferings {
        pub params: GetConsumptionOfferingsParams,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct GetConsumptionOfferingsParams {
        /// true - Strip down the content of what is returned.
        pub digest: Option<bool>,
        /// catalog id. Narrow search down to just a particular catalog.
        pub catalog: Option<String>,
        /// What should be selected. Default is 'all' which will return both public and private
        /// offerings. 'public' returns only the public offerings and 'private' returns only the
        /// private offerings.
        pub select: Option<String>,
        /// true - include offerings which have been marked as hidden.
        #[serde(rename = "includeHidden")]
        pub include_hidden: Option<bool>,
        pub limit: Option<i64>,
        pub offset: Option<i64>,
    }

    impl Endpoint for GetConsumptionOfferings {
        type Response = OfferingSearchResult;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            "/offerings".to_string()
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }
    }

    impl PaginatedEndpoint for GetConsumptionOfferings {
        type Cursor = i64;

        fn cursor(&self) -> Option<&i64> {
            self.params.offset.as_ref()
        }

        fn set_cursor(&mut self, cursor: i64) {
            self.params.offset = Some(cursor);
        }
    }
}
