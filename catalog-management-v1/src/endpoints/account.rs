use super::{GetAuditParams, ListAuditsParams};
use crate::{
    models::{Account, AccumulatedFilters, AuditLog, AuditLogs},
    pagination::PaginatedEndpoint,
};
use cloud_api_framework::{
    encode_path_segment, require_non_empty, reqwest::Method, serialize_body, serialize_query,
    Endpoint, Error,
};
use serde::Serialize;

pub use get_catalog_account::GetCatalogAccount;
mod get_catalog_account {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct GetCatalogAccount {}

    impl Endpoint for GetCatalogAccount {
        type Response = Account;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            "/catalogaccount".to_string()
        }
    }
}

pub use update_catalog_account::UpdateCatalogAccount;
mod update_catalog_account {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct UpdateCatalogAccount {
        pub body: Account,
    }

    impl Endpoint for UpdateCatalogAccount {
        type Response = Account;

        fn method(&self) -> Method {
            Method::PUT
        }

        fn path(&self) -> String {
            "/catalogaccount".to_string()
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }
    }
}

pub use list_catalog_account_audits::ListCatalogAccountAudits;
mod list_catalog_account_audits {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct ListCatalogAccountAudits {
        pub params: ListAuditsParams,
    }

    impl Endpoint for ListCatalogAccountAudits {
        type Response = AuditLogs;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            "/catalogaccount/audits".to_string()
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }
    }

    impl PaginatedEndpoint for ListCatalogAccountAudits {
        type Cursor = String;

        fn cursor(&self) -> Option<&String> {
            self.params.start.as_ref()
        }

        fn set_cursor(&mut self, cursor: String) {
            self.params.start = Some(cursor);
        }
    }
}

pub use get_catalog_account_audit::GetCatalogAccountAudit;
mod get_catalog_account_audit {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct GetCatalogAccountAudit {
        pub auditlog_identifier: String,
        pub params: GetAuditParams,
    }

    impl Endpoint for GetCatalogAccountAudit {
        type Response = AuditLog;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            format!(
                "/catalogaccount/audits/{}",
                encode_path_segment(&self.auditlog_identifier)
            )
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn validate(&self) -> Result<(), Error> {
            require_non_empty("auditlog_identifier", &self.auditlog_identifier)
        }
    }
}

pub use get_catalog_account_filters::{GetCatalogAccountFilters, GetCatalogAccountFiltersParams};
mod get_catalog_account_filters {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct GetCatalogAccountFilters {
        pub params: GetCatalogAccountFiltersParams,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, Serialize)]
    pub struct GetCatalogAccountFiltersParams {
        /// Catalog id. Narrow down filters to the account and just the one catalog.
        pub catalog: Option<String>,
    }

    impl Endpoint for GetCatalogAccountFilters {
        type Response = AccumulatedFilters;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            "/catalogaccount/filters".to_string()
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }
    }
}
