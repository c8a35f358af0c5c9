use super::{
    header_map, validate_header, GetAuditParams, ListAuditsParams, X_AUTH_REFRESH_TOKEN,
};
use crate::{
    models::{AuditLog, AuditLogs, OfferingInstance},
    pagination::PaginatedEndpoint,
};
use cloud_api_framework::{
    encode_path_segment, require_non_empty,
    reqwest::{header::HeaderMap, Method},
    serialize_body, serialize_query, Endpoint, Error,
};

const INSTANCES_PATH: &str = "/instances/offerings";

fn instance_path(instance_identifier: &str) -> String {
    format!("{INSTANCES_PATH}/{}", encode_path_segment(instance_identifier))
}

fn require_instance(instance_identifier: &str) -> Result<(), Error> {
    require_non_empty("instance_identifier", instance_identifier)
}

fn require_refresh_token(x_auth_refresh_token: &str) -> Result<(), Error> {
    require_non_empty("x_auth_refresh_token", x_auth_refresh_token)?;
    validate_header("x_auth_refresh_token", Some(x_auth_refresh_token))
}

pub use create_offering_instance::CreateOfferingInstance;
mod create_offering_instance {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct CreateOfferingInstance {
        pub x_auth_refresh_token: String,
        pub body: OfferingInstance,
    }

    impl Endpoint for CreateOfferingInstance {
        type Response = OfferingInstance;

        fn method(&self) -> Method {
            Method::POST
        }

        fn path(&self) -> String {
            INSTANCES_PATH.to_string()
        }

        fn headers(&self) -> Option<HeaderMap> {
            header_map([(X_AUTH_REFRESH_TOKEN, Some(self.x_auth_refresh_token.as_str()))])
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }

        fn validate(&self) -> Result<(), Error> {
            require_refresh_token(&self.x_auth_refresh_token)
        }
    }
}

pub use get_offering_instance::GetOfferingInstance;
mod get_offering_instance {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct GetOfferingInstance {
        pub instance_identifier: String,
    }

    impl Endpoint for GetOfferingInstance {
        type Response = OfferingInstance;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            instance_path(&self.instance_identifier)
        }

        fn validate(&self) -> Result<(), Error> {
            require_instance(&self.instance_identifier)
        }
    }
}

pub use put_offering_instance::PutOfferingInstance;
mod put_offering_instance {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct PutOfferingInstance {
        pub instance_identifier: String,
        pub x_auth_refresh_token: String,
        pub body: OfferingInstance,
    }

    impl Endpoint for PutOfferingInstance {
        type Response = OfferingInstance;

        fn method(&self) -> Method {
            Method::PUT
        }

        fn path(&self) -> String {
            instance_path(&self.instance_identifier)
        }

        fn headers(&self) -> Option<HeaderMap> {
            header_map([(X_AUTH_REFRESH_TOKEN, Some(self.x_auth_refresh_token.as_str()))])
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }

        fn validate(&self) -> Result<(), Error> {
            require_instance(&self.instance_identifier)?;
            require_refresh_token(&self.x_auth_refresh_token)
        }
    }
}

pub use delete_offering_instance::DeleteOfferingInstance;
mod delete_offering_instance {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct DeleteOfferingInstance {
        pub instance_identifier: String,
        pub x_auth_refresh_token: String,
    }

    impl Endpoint for DeleteOfferingInstance {
        type Response = ();

        fn method(&self) -> Method {
            Method::DELETE
        }

        fn path(&self) -> String {
            instance_path(&self.instance_identifier)
        }

        fn headers(&self) -> Option<HeaderMap> {
            header_map([(X_AUTH_REFRESH_TOKEN, Some(self.x_auth_refresh_token.as_str()))])
        }

        fn validate(&self) -> Result<(), Error> {
            require_instance(&self.instance_identifier)?;
            require_refresh_token(&self.x_auth_refresh_token)
        }
    }
}

pub use list_offering_instance_audits::ListOfferingInstanceAudits;
mod list_offering_instance_audits {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct ListOfferingInstanceAudits {
        pub instance_identifier: String,
        pub params: ListAuditsParams,
    }

    impl Endpoint for ListOfferingInstanceAudits {
        type Response = AuditLogs;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            format!("{}/audits", instance_path(&self.instance_identifier))
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn validate(&self) -> Result<(), Error> {
            require_instance(&self.instance_identifier)
        }
    }

    impl PaginatedEndpoint for ListOfferingInstanceAudits {
        type Cursor = String;

        fn cursor(&self) -> Option<&String> {
            self.params.start.as_ref()
        }

        fn set_cursor(&mut self, cursor: String) {
            self.params.start = Some(cursor);
        }
    }
}

pub use get_offering_instance_audit::GetOfferingInstanceAudit;
mod get_offering_instance_audit {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct GetOfferingInstanceAudit {
        pub instance_identifier: String,
        pub auditlog_identifier: String,
        pub params: GetAuditParams,
    }

    impl Endpoint for GetOfferingInstanceAudit {
        type Response = AuditLog;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            format!(
                "{}/audits/{}",
                instance_path(&self.instance_identifier),
                encode_path_segment(&self.auditlog_identifier)
            )
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.params)
        }

        fn validate(&self) -> Result<(), Error> {
            require_instance(&self.instance_identifier)?;
            require_non_empty("auditlog_identifier", &self.auditlog_identifier)
        }
    }
}
